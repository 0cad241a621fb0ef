use checklist_core::db::migrations::latest_version;
use checklist_core::db::open_db_in_memory;
use checklist_core::model::color::FLAT_PALETTE;
use checklist_core::{
    CategoryRepository, ChecklistStore, EntityKind, ItemOrder, RepoError,
    SqliteCategoryRepository, StoreError, ValidationError,
};
use rusqlite::Connection;
use uuid::Uuid;

#[test]
fn create_category_persists_and_lists_exactly_once() {
    let conn = open_db_in_memory().unwrap();
    let store = ChecklistStore::try_from_connection(&conn).unwrap();

    let work = store.create_category("Work", "#1D9BF6").unwrap();
    assert_eq!(work.name, "Work");
    assert_eq!(work.color_tag, "#1D9BF6");

    let listed = store.list_categories().unwrap();
    let matches = listed.iter().filter(|c| c.id == work.id).count();
    assert_eq!(matches, 1);
    assert_eq!(store.get_category(work.id).unwrap(), Some(work));
}

#[test]
fn category_names_are_not_required_to_be_unique() {
    let conn = open_db_in_memory().unwrap();
    let store = ChecklistStore::try_from_connection(&conn).unwrap();

    let first = store.create_category("Home", "#E74C3C").unwrap();
    let second = store.create_category("Home", "#2ECC71").unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(store.list_categories().unwrap().len(), 2);
}

#[test]
fn list_categories_follows_creation_order() {
    let conn = open_db_in_memory().unwrap();
    let store = ChecklistStore::try_from_connection(&conn).unwrap();

    let names = ["Work", "Home", "Errands"];
    for name in names {
        store.create_category(name, "#3498DB").unwrap();
    }

    let listed: Vec<String> = store
        .list_categories()
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(listed, names);
}

#[test]
fn create_category_trims_and_rejects_blank_names() {
    let conn = open_db_in_memory().unwrap();
    let store = ChecklistStore::try_from_connection(&conn).unwrap();

    let trimmed = store.create_category("  Groceries  ", "#FFCC00").unwrap();
    assert_eq!(trimmed.name, "Groceries");

    let err = store.create_category("   ", "#FFCC00").unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::BlankName)
    ));
    assert_eq!(store.list_categories().unwrap().len(), 1);
}

#[test]
fn random_color_category_uses_palette() {
    let conn = open_db_in_memory().unwrap();
    let store = ChecklistStore::try_from_connection(&conn).unwrap();

    let category = store.create_category_with_random_color("Travel").unwrap();
    assert!(FLAT_PALETTE.contains(&category.color_tag.as_str()));
}

#[test]
fn color_tag_is_stored_verbatim() {
    let conn = open_db_in_memory().unwrap();
    let store = ChecklistStore::try_from_connection(&conn).unwrap();

    let category = store.create_category("Odd", "  not-a-color ").unwrap();
    let loaded = store.get_category(category.id).unwrap().unwrap();
    assert_eq!(loaded.color_tag, "  not-a-color ");
}

#[test]
fn rename_category_keeps_identity_and_items() {
    let conn = open_db_in_memory().unwrap();
    let store = ChecklistStore::try_from_connection(&conn).unwrap();
    let category = store.create_category("Wrok", "#9B59B6").unwrap();
    let item = store.create_item(category.id, "Standup").unwrap();

    let renamed = store.rename_category(category.id, " Work ").unwrap();
    assert_eq!(renamed.id, category.id);
    assert_eq!(renamed.name, "Work");
    assert_eq!(renamed.created_at, category.created_at);
    assert_eq!(renamed.color_tag, category.color_tag);

    let items = store
        .list_items(category.id, ItemOrder::default())
        .unwrap();
    assert_eq!(items, vec![item]);
}

#[test]
fn rename_unknown_category_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let store = ChecklistStore::try_from_connection(&conn).unwrap();

    let missing = Uuid::new_v4();
    let err = store.rename_category(missing, "Anything").unwrap_err();
    assert!(matches!(
        err,
        StoreError::NotFound { entity: EntityKind::Category, id } if id == missing
    ));
}

#[test]
fn delete_category_cascades_to_owned_items_only() {
    let conn = open_db_in_memory().unwrap();
    let store = ChecklistStore::try_from_connection(&conn).unwrap();

    let work = store.create_category("Work", "#1D9BF6").unwrap();
    let home = store.create_category("Home", "#E67E22").unwrap();
    let work_items = [
        store.create_item(work.id, "Email").unwrap(),
        store.create_item(work.id, "Call Bob").unwrap(),
    ];
    let home_item = store.create_item(home.id, "Laundry").unwrap();

    store.delete_category(work.id).unwrap();

    let remaining: Vec<_> = store
        .list_categories()
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(remaining, vec![home.id]);
    for item in &work_items {
        assert_eq!(store.get_item(item.id).unwrap(), None);
    }
    assert_eq!(store.get_item(home_item.id).unwrap(), Some(home_item));
    assert_eq!(item_row_count(&conn), 1);

    let err = store
        .list_items(work.id, ItemOrder::default())
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound { entity: EntityKind::Category, .. }));
}

#[test]
fn delete_category_cascades_without_foreign_key_enforcement() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch("PRAGMA foreign_keys = OFF;").unwrap();
    let store = ChecklistStore::try_from_connection(&conn).unwrap();

    let category = store.create_category("Work", "#1D9BF6").unwrap();
    store.create_item(category.id, "Email").unwrap();

    store.delete_category(category.id).unwrap();
    assert_eq!(item_row_count(&conn), 0);
}

#[test]
fn delete_unknown_category_returns_not_found_and_changes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let store = ChecklistStore::try_from_connection(&conn).unwrap();
    let kept = store.create_category("Keep", "#1D9BF6").unwrap();

    let missing = Uuid::new_v4();
    let err = store.delete_category(missing).unwrap_err();
    assert!(matches!(
        err,
        StoreError::NotFound { entity: EntityKind::Category, id } if id == missing
    ));
    assert_eq!(store.list_categories().unwrap(), vec![kept]);
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteCategoryRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert_eq!(expected_version, latest_version()),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE categories (
            uuid TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteCategoryRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "categories",
            column: "color_tag"
        })
    ));
}

#[test]
fn store_surfaces_schema_problems_as_persistence_errors() {
    let conn = Connection::open_in_memory().unwrap();

    let result = ChecklistStore::try_from_connection(&conn);
    assert!(matches!(
        result,
        Err(StoreError::Persistence(RepoError::UninitializedConnection { .. }))
    ));
}

#[test]
fn repository_create_returns_stored_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::try_new(&conn).unwrap();

    let created = repo.create_category("Raw", "#34495E").unwrap();
    assert!(created.created_at > 0);
    assert_eq!(repo.get_category(created.id).unwrap(), Some(created));
}

fn item_row_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM items;", [], |row| row.get(0))
        .unwrap()
}

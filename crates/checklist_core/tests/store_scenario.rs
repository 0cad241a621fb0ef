use checklist_core::db::{open_db, open_db_in_memory};
use checklist_core::{ChecklistStore, ItemOrder, DEFAULT_COLOR_TAG};

#[test]
fn work_category_walkthrough() {
    let conn = open_db_in_memory().unwrap();
    let store = ChecklistStore::try_from_connection(&conn).unwrap();

    let work = store.create_category("Work", DEFAULT_COLOR_TAG).unwrap();
    assert_eq!(work.color_tag, "#1D9BF6");

    let email = store.create_item(work.id, "Email").unwrap();
    let call = store.create_item(work.id, "Call Bob").unwrap();
    let apply = store.create_item(work.id, "Apply").unwrap();

    let listed: Vec<_> = store
        .list_items(work.id, ItemOrder::default())
        .unwrap()
        .into_iter()
        .map(|item| item.id)
        .collect();
    assert_eq!(listed, vec![apply.id, call.id, email.id]);

    let filtered: Vec<_> = store
        .filter_items(work.id, "l")
        .unwrap()
        .into_iter()
        .map(|item| item.id)
        .collect();
    assert_eq!(filtered, vec![email.id, call.id, apply.id]);

    let toggled = store.toggle_checked(apply.id).unwrap();
    assert!(toggled.checked);
    assert!(store.get_item(apply.id).unwrap().unwrap().checked);
    assert!(!store.get_item(email.id).unwrap().unwrap().checked);
}

#[test]
fn file_backed_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("checklist.db");

    let (category_id, item_id) = {
        let conn = open_db(&path).unwrap();
        let store = ChecklistStore::try_from_connection(&conn).unwrap();
        let category = store.create_category("Errands", "#E74C3C").unwrap();
        let item = store.create_item(category.id, "Post office").unwrap();
        store.toggle_checked(item.id).unwrap();
        (category.id, item.id)
    };

    let conn = open_db(&path).unwrap();
    let store = ChecklistStore::try_from_connection(&conn).unwrap();
    let category = store.get_category(category_id).unwrap().unwrap();
    assert_eq!(category.name, "Errands");
    assert_eq!(category.color_tag, "#E74C3C");

    let items = store.list_items(category_id, ItemOrder::default()).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, item_id);
    assert_eq!(items[0].title, "Post office");
    assert!(items[0].checked);
}

use checklist_core::db::open_db_in_memory;
use checklist_core::{ChecklistStore, Item, ItemOrder};
use serde_json::json;

#[test]
fn item_serializes_with_snake_case_fields() {
    let conn = open_db_in_memory().unwrap();
    let store = ChecklistStore::try_from_connection(&conn).unwrap();
    let category = store.create_category("Work", "#1D9BF6").unwrap();
    let item = store.create_item(category.id, "Email").unwrap();

    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value["id"], json!(item.id.to_string()));
    assert_eq!(value["category_id"], json!(category.id.to_string()));
    assert_eq!(value["title"], "Email");
    assert_eq!(value["checked"], false);
    assert_eq!(value["created_at"], json!(item.created_at));

    let decoded: Item = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, item);
}

#[test]
fn category_serializes_color_tag() {
    let conn = open_db_in_memory().unwrap();
    let store = ChecklistStore::try_from_connection(&conn).unwrap();
    let category = store.create_category("Work", "#1D9BF6").unwrap();

    let value = serde_json::to_value(&category).unwrap();
    assert_eq!(value["name"], "Work");
    assert_eq!(value["color_tag"], "#1D9BF6");
}

#[test]
fn item_order_uses_snake_case_names() {
    assert_eq!(
        serde_json::to_value(ItemOrder::TitleAscending).unwrap(),
        "title_ascending"
    );
    let parsed: ItemOrder = serde_json::from_str("\"created_descending\"").unwrap();
    assert_eq!(parsed, ItemOrder::CreatedDescending);
    assert_eq!(ItemOrder::default(), ItemOrder::TitleAscending);
}

//! Item repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist items under their owning category.
//! - Provide ordered per-category listings.
//!
//! # Invariants
//! - An item row cannot exist without its category row.
//! - `created_at` and `category_uuid` are written once, on insert.
//! - Ties in any ordering fall back to insertion order (`rowid`).

use crate::model::category::CategoryId;
use crate::model::item::{Item, ItemId, ItemOrder};
use crate::repo::{
    category_exists, ensure_connection_ready, parse_uuid, EntityKind, RepoError, RepoResult,
};
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};
use uuid::Uuid;

const ITEM_SELECT_SQL: &str = "SELECT
    uuid,
    category_uuid,
    title,
    created_at,
    checked
FROM items";

const ITEM_COLUMNS: &[&str] = &[
    "uuid",
    "category_uuid",
    "title",
    "checked",
    "created_at",
    "updated_at",
];

/// Repository interface for item persistence.
pub trait ItemRepository {
    /// Inserts one unchecked item under an existing category.
    fn create_item(&self, category_id: CategoryId, title: &str) -> RepoResult<Item>;
    /// Loads one item by id.
    fn get_item(&self, id: ItemId) -> RepoResult<Option<Item>>;
    /// Lists all items of one category in the requested order.
    fn list_items(&self, category_id: CategoryId, order: ItemOrder) -> RepoResult<Vec<Item>>;
    /// Counts items of one category.
    fn count_items(&self, category_id: CategoryId) -> RepoResult<usize>;
    /// Replaces the item title.
    fn rename_item(&self, id: ItemId, title: &str) -> RepoResult<()>;
    /// Flips the checked flag in place.
    fn toggle_checked(&self, id: ItemId) -> RepoResult<()>;
    /// Deletes one item.
    fn delete_item(&self, id: ItemId) -> RepoResult<()>;
}

/// SQLite-backed item repository.
pub struct SqliteItemRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteItemRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "items", ITEM_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl ItemRepository for SqliteItemRepository<'_> {
    fn create_item(&self, category_id: CategoryId, title: &str) -> RepoResult<Item> {
        let id = Uuid::new_v4();
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        if !category_exists(&tx, category_id)? {
            return Err(category_not_found(category_id));
        }

        tx.execute(
            "INSERT INTO items (uuid, category_uuid, title, checked) VALUES (?1, ?2, ?3, 0);",
            params![id.to_string(), category_id.to_string(), title],
        )?;
        let item = load_required_item(&tx, id)?;

        tx.commit()?;
        Ok(item)
    }

    fn get_item(&self, id: ItemId) -> RepoResult<Option<Item>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ITEM_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_item_row(row)?));
        }
        Ok(None)
    }

    fn list_items(&self, category_id: CategoryId, order: ItemOrder) -> RepoResult<Vec<Item>> {
        if !category_exists(self.conn, category_id)? {
            return Err(category_not_found(category_id));
        }

        let mut stmt = self.conn.prepare(&format!(
            "{ITEM_SELECT_SQL} WHERE category_uuid = ?1 ORDER BY {};",
            order_by_clause(order)
        ))?;
        let mut rows = stmt.query([category_id.to_string()])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }
        Ok(items)
    }

    fn count_items(&self, category_id: CategoryId) -> RepoResult<usize> {
        if !category_exists(self.conn, category_id)? {
            return Err(category_not_found(category_id));
        }

        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM items WHERE category_uuid = ?1;",
            [category_id.to_string()],
            |row| row.get(0),
        )?;
        usize::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("invalid item count `{count}`")))
    }

    fn rename_item(&self, id: ItemId, title: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE items
             SET title = ?2,
                 updated_at = (CAST((julianday('now') - 2440587.5) * 86400000 AS INTEGER))
             WHERE uuid = ?1;",
            params![id.to_string(), title],
        )?;
        if changed == 0 {
            return Err(item_not_found(id));
        }
        Ok(())
    }

    fn toggle_checked(&self, id: ItemId) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE items
             SET checked = 1 - checked,
                 updated_at = (CAST((julianday('now') - 2440587.5) * 86400000 AS INTEGER))
             WHERE uuid = ?1;",
            [id.to_string()],
        )?;
        if changed == 0 {
            return Err(item_not_found(id));
        }
        Ok(())
    }

    fn delete_item(&self, id: ItemId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM items WHERE uuid = ?1;", [id.to_string()])?;
        if changed == 0 {
            return Err(item_not_found(id));
        }
        Ok(())
    }
}

fn order_by_clause(order: ItemOrder) -> &'static str {
    match order {
        ItemOrder::TitleAscending => "title ASC, rowid ASC",
        ItemOrder::TitleDescending => "title DESC, rowid ASC",
        ItemOrder::CreatedAscending => "created_at ASC, rowid ASC",
        ItemOrder::CreatedDescending => "created_at DESC, rowid DESC",
    }
}

fn load_required_item(conn: &Connection, id: ItemId) -> RepoResult<Item> {
    let mut stmt = conn.prepare(&format!("{ITEM_SELECT_SQL} WHERE uuid = ?1;"))?;
    let mut rows = stmt.query([id.to_string()])?;
    if let Some(row) = rows.next()? {
        return parse_item_row(row);
    }
    Err(item_not_found(id))
}

fn parse_item_row(row: &Row<'_>) -> RepoResult<Item> {
    let id_text: String = row.get("uuid")?;
    let category_text: String = row.get("category_uuid")?;

    let checked = match row.get::<_, i64>("checked")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid checked value `{other}` in items.checked"
            )));
        }
    };

    Ok(Item {
        id: parse_uuid(&id_text, "items.uuid")?,
        category_id: parse_uuid(&category_text, "items.category_uuid")?,
        title: row.get("title")?,
        created_at: row.get("created_at")?,
        checked,
    })
}

fn category_not_found(id: CategoryId) -> RepoError {
    RepoError::NotFound {
        entity: EntityKind::Category,
        id,
    }
}

fn item_not_found(id: ItemId) -> RepoError {
    RepoError::NotFound {
        entity: EntityKind::Item,
        id,
    }
}

//! Category repository contracts and SQLite implementation.
//!
//! # Invariants
//! - Listing is deterministic: `created_at ASC`, then insertion order.
//! - Deleting a category removes its items in the same transaction, even on
//!   connections opened without `foreign_keys=ON`.

use crate::model::category::{Category, CategoryId};
use crate::repo::{
    category_exists, ensure_connection_ready, parse_uuid, EntityKind, RepoError, RepoResult,
};
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};
use uuid::Uuid;

const CATEGORY_SELECT_SQL: &str = "SELECT
    uuid,
    name,
    color_tag,
    created_at
FROM categories";

const CATEGORY_COLUMNS: &[&str] = &["uuid", "name", "color_tag", "created_at", "updated_at"];

/// Repository interface for category persistence.
pub trait CategoryRepository {
    /// Inserts one category with a fresh id and returns the stored row.
    fn create_category(&self, name: &str, color_tag: &str) -> RepoResult<Category>;
    /// Loads one category by id.
    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>>;
    /// Lists every category.
    fn list_categories(&self) -> RepoResult<Vec<Category>>;
    /// Replaces the category name.
    fn rename_category(&self, id: CategoryId, name: &str) -> RepoResult<()>;
    /// Deletes one category together with all items it owns.
    fn delete_category(&self, id: CategoryId) -> RepoResult<()>;
}

/// SQLite-backed category repository.
pub struct SqliteCategoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCategoryRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "categories", CATEGORY_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl CategoryRepository for SqliteCategoryRepository<'_> {
    fn create_category(&self, name: &str, color_tag: &str) -> RepoResult<Category> {
        let id = Uuid::new_v4();
        self.conn.execute(
            "INSERT INTO categories (uuid, name, color_tag) VALUES (?1, ?2, ?3);",
            params![id.to_string(), name, color_tag],
        )?;
        self.get_category(id)?.ok_or(RepoError::NotFound {
            entity: EntityKind::Category,
            id,
        })
    }

    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CATEGORY_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_category_row(row)?));
        }
        Ok(None)
    }

    fn list_categories(&self) -> RepoResult<Vec<Category>> {
        let mut stmt = self.conn.prepare(&format!(
            "{CATEGORY_SELECT_SQL} ORDER BY created_at ASC, rowid ASC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut categories = Vec::new();
        while let Some(row) = rows.next()? {
            categories.push(parse_category_row(row)?);
        }
        Ok(categories)
    }

    fn rename_category(&self, id: CategoryId, name: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE categories
             SET name = ?2,
                 updated_at = (CAST((julianday('now') - 2440587.5) * 86400000 AS INTEGER))
             WHERE uuid = ?1;",
            params![id.to_string(), name],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: EntityKind::Category,
                id,
            });
        }
        Ok(())
    }

    fn delete_category(&self, id: CategoryId) -> RepoResult<()> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        if !category_exists(&tx, id)? {
            return Err(RepoError::NotFound {
                entity: EntityKind::Category,
                id,
            });
        }

        tx.execute(
            "DELETE FROM items WHERE category_uuid = ?1;",
            [id.to_string()],
        )?;
        tx.execute("DELETE FROM categories WHERE uuid = ?1;", [id.to_string()])?;

        tx.commit()?;
        Ok(())
    }
}

fn parse_category_row(row: &Row<'_>) -> RepoResult<Category> {
    let id_text: String = row.get("uuid")?;
    Ok(Category {
        id: parse_uuid(&id_text, "categories.uuid")?,
        name: row.get("name")?,
        color_tag: row.get("color_tag")?,
        created_at: row.get("created_at")?,
    })
}

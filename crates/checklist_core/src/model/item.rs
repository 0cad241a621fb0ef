//! Item entity and listing order.

use crate::model::category::CategoryId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable item identifier.
pub type ItemId = Uuid;

/// One to-do entry inside a category.
///
/// # Invariants
/// - `category_id` never changes after creation.
/// - `created_at` never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Owning category. Lookup-only back-reference.
    pub category_id: CategoryId,
    pub title: String,
    /// Epoch milliseconds.
    pub created_at: i64,
    pub checked: bool,
}

/// Sort key for listing items of one category.
///
/// Title ordering is case-sensitive and compares raw UTF-8 bytes, so
/// `"Zebra"` sorts before `"apple"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemOrder {
    #[default]
    TitleAscending,
    TitleDescending,
    CreatedAscending,
    CreatedDescending,
}

impl ItemOrder {
    /// Maps the boolean title-sort switch used by list screens.
    pub fn by_title(ascending: bool) -> Self {
        if ascending {
            Self::TitleAscending
        } else {
            Self::TitleDescending
        }
    }

    /// Maps the boolean creation-time switch used by search results.
    pub fn by_created_at(ascending: bool) -> Self {
        if ascending {
            Self::CreatedAscending
        } else {
            Self::CreatedDescending
        }
    }
}

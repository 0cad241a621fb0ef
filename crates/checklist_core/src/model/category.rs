//! Category entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable category identifier.
pub type CategoryId = Uuid;

/// Top-level grouping that owns zero or more items.
///
/// Owned items are loaded per category through
/// [`ItemRepository`](crate::repo::item_repo::ItemRepository).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// User-facing label. Not required to be unique.
    pub name: String,
    /// Presentation-only token, typically `#RRGGBB`. Opaque to the store.
    pub color_tag: String,
    /// Epoch milliseconds.
    pub created_at: i64,
}

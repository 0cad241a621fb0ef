//! Core storage for a two-level checklist: categories owning to-do items.
//! This crate is the single source of truth for checklist invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use config::{ConfigError, DatabaseLocation, StoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::category::{Category, CategoryId};
pub use model::color::{random_color_tag, DEFAULT_COLOR_TAG};
pub use model::item::{Item, ItemId, ItemOrder};
pub use model::ValidationError;
pub use repo::category_repo::{CategoryRepository, SqliteCategoryRepository};
pub use repo::item_repo::{ItemRepository, SqliteItemRepository};
pub use repo::{EntityKind, RepoError, RepoResult};
pub use search::{fold_for_match, TitleFilter};
pub use service::store::{ChecklistStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

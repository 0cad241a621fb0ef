//! Checklist store facade.
//!
//! # Responsibility
//! - Provide category/item CRUD, sorting and title search for callers.
//! - Translate repository failures into caller-facing error kinds.
//!
//! # Invariants
//! - Every mutation either fully applies or fails with an error; failures
//!   are returned, never swallowed.
//! - Names and titles are trimmed and non-blank before persistence.
//! - Filtered listings are ordered by creation time; an empty filter
//!   returns the title-ordered listing instead.

use crate::model::category::{Category, CategoryId};
use crate::model::color::random_color_tag;
use crate::model::item::{Item, ItemId, ItemOrder};
use crate::model::{normalize_name, normalize_title, ValidationError};
use crate::repo::category_repo::{CategoryRepository, SqliteCategoryRepository};
use crate::repo::item_repo::{ItemRepository, SqliteItemRepository};
use crate::repo::{EntityKind, RepoError};
use crate::search::TitleFilter;
use log::{debug, error, info, warn};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by [`ChecklistStore`] operations.
#[derive(Debug)]
pub enum StoreError {
    /// Referenced category or item does not exist.
    NotFound { entity: EntityKind, id: Uuid },
    /// User input was rejected before touching storage.
    Validation(ValidationError),
    /// Underlying storage read/write failed.
    Persistence(RepoError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Persistence(err) => write!(f, "checklist storage failed: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound { .. } => None,
            Self::Validation(err) => Some(err),
            Self::Persistence(err) => Some(err),
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { entity, id } => Self::NotFound { entity, id },
            other => Self::Persistence(other),
        }
    }
}

impl StoreError {
    fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Validation(_) => "validation",
            Self::Persistence(_) => "persistence",
        }
    }
}

/// Category/item store used by the presentation layer.
pub struct ChecklistStore<C: CategoryRepository, I: ItemRepository> {
    categories: C,
    items: I,
}

impl<'conn> ChecklistStore<SqliteCategoryRepository<'conn>, SqliteItemRepository<'conn>> {
    /// Builds a SQLite-backed store over one migrated connection.
    pub fn try_from_connection(conn: &'conn Connection) -> StoreResult<Self> {
        let categories = SqliteCategoryRepository::try_new(conn)?;
        let items = SqliteItemRepository::try_new(conn)?;
        Ok(Self::new(categories, items))
    }
}

impl<C: CategoryRepository, I: ItemRepository> ChecklistStore<C, I> {
    /// Creates a store from repository implementations.
    pub fn new(categories: C, items: I) -> Self {
        Self { categories, items }
    }

    /// Creates one category with a caller-chosen color tag.
    pub fn create_category(&self, name: &str, color_tag: &str) -> StoreResult<Category> {
        let result = normalize_name(name)
            .map_err(StoreError::from)
            .and_then(|name| {
                self.categories
                    .create_category(name.as_str(), color_tag)
                    .map_err(StoreError::from)
            });
        match &result {
            Ok(category) => info!(
                "event=category_create module=store status=ok category_id={}",
                category.id
            ),
            Err(err) => log_failure("category_create", err),
        }
        result
    }

    /// Creates one category colored from the flat palette.
    pub fn create_category_with_random_color(&self, name: &str) -> StoreResult<Category> {
        self.create_category(name, random_color_tag().as_str())
    }

    /// Loads one category by id.
    pub fn get_category(&self, id: CategoryId) -> StoreResult<Option<Category>> {
        let category = self.categories.get_category(id)?;
        debug!(
            "event=category_get module=store status=ok category_id={} found={}",
            id,
            category.is_some()
        );
        Ok(category)
    }

    /// Lists all categories. Callers must not rely on the order.
    pub fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let categories = self.categories.list_categories()?;
        debug!(
            "event=category_list module=store status=ok count={}",
            categories.len()
        );
        Ok(categories)
    }

    /// Renames one category and returns the stored row.
    pub fn rename_category(&self, id: CategoryId, name: &str) -> StoreResult<Category> {
        let result = self.rename_category_inner(id, name);
        match &result {
            Ok(_) => info!("event=category_rename module=store status=ok category_id={id}"),
            Err(err) => log_failure("category_rename", err),
        }
        result
    }

    /// Deletes one category and every item it owns.
    pub fn delete_category(&self, id: CategoryId) -> StoreResult<()> {
        let result = self.categories.delete_category(id).map_err(StoreError::from);
        match &result {
            Ok(()) => info!("event=category_delete module=store status=ok category_id={id}"),
            Err(err) => log_failure("category_delete", err),
        }
        result
    }

    /// Creates one unchecked item under `category_id`.
    pub fn create_item(&self, category_id: CategoryId, title: &str) -> StoreResult<Item> {
        let result = normalize_title(title)
            .map_err(StoreError::from)
            .and_then(|title| {
                self.items
                    .create_item(category_id, title.as_str())
                    .map_err(StoreError::from)
            });
        match &result {
            Ok(item) => info!(
                "event=item_create module=store status=ok category_id={} item_id={}",
                category_id, item.id
            ),
            Err(err) => log_failure("item_create", err),
        }
        result
    }

    /// Loads one item by id.
    pub fn get_item(&self, id: ItemId) -> StoreResult<Option<Item>> {
        let item = self.items.get_item(id)?;
        debug!(
            "event=item_get module=store status=ok item_id={} found={}",
            id,
            item.is_some()
        );
        Ok(item)
    }

    /// Lists the items of one category in the requested order.
    pub fn list_items(&self, category_id: CategoryId, order: ItemOrder) -> StoreResult<Vec<Item>> {
        let items = self.items.list_items(category_id, order)?;
        debug!(
            "event=item_list module=store status=ok category_id={} count={}",
            category_id,
            items.len()
        );
        Ok(items)
    }

    /// Counts the items of one category.
    pub fn count_items(&self, category_id: CategoryId) -> StoreResult<usize> {
        let count = self.items.count_items(category_id)?;
        debug!("event=item_count module=store status=ok category_id={category_id} count={count}");
        Ok(count)
    }

    /// Returns items whose title contains `needle`, ignoring case and
    /// diacritics, oldest first.
    ///
    /// An empty `needle` returns the default title-ordered listing.
    pub fn filter_items(&self, category_id: CategoryId, needle: &str) -> StoreResult<Vec<Item>> {
        self.filter_items_by_created_at(category_id, needle, true)
    }

    /// Same as [`filter_items`](Self::filter_items) with an explicit
    /// creation-time direction for the matches.
    pub fn filter_items_by_created_at(
        &self,
        category_id: CategoryId,
        needle: &str,
        ascending: bool,
    ) -> StoreResult<Vec<Item>> {
        let Some(filter) = TitleFilter::new(needle) else {
            return self.list_items(category_id, ItemOrder::default());
        };

        let candidates = self
            .items
            .list_items(category_id, ItemOrder::by_created_at(ascending))?;
        let candidate_count = candidates.len();
        let matched = filter.apply(candidates);
        debug!(
            "event=item_filter module=store status=ok category_id={} candidates={} matched={}",
            category_id,
            candidate_count,
            matched.len()
        );
        Ok(matched)
    }

    /// Flips the checked flag of one item and returns the stored row.
    pub fn toggle_checked(&self, id: ItemId) -> StoreResult<Item> {
        let result = self.toggle_checked_inner(id);
        match &result {
            Ok(item) => info!(
                "event=item_toggle module=store status=ok item_id={} checked={}",
                id, item.checked
            ),
            Err(err) => log_failure("item_toggle", err),
        }
        result
    }

    /// Replaces the title of one item and returns the stored row.
    pub fn rename_item(&self, id: ItemId, title: &str) -> StoreResult<Item> {
        let result = self.rename_item_inner(id, title);
        match &result {
            Ok(_) => info!("event=item_rename module=store status=ok item_id={id}"),
            Err(err) => log_failure("item_rename", err),
        }
        result
    }

    /// Deletes one item.
    pub fn delete_item(&self, id: ItemId) -> StoreResult<()> {
        let result = self.items.delete_item(id).map_err(StoreError::from);
        match &result {
            Ok(()) => info!("event=item_delete module=store status=ok item_id={id}"),
            Err(err) => log_failure("item_delete", err),
        }
        result
    }

    fn rename_category_inner(&self, id: CategoryId, name: &str) -> StoreResult<Category> {
        let name = normalize_name(name)?;
        self.categories.rename_category(id, name.as_str())?;
        self.categories
            .get_category(id)?
            .ok_or(StoreError::NotFound {
                entity: EntityKind::Category,
                id,
            })
    }

    fn toggle_checked_inner(&self, id: ItemId) -> StoreResult<Item> {
        self.items.toggle_checked(id)?;
        self.require_item(id)
    }

    fn rename_item_inner(&self, id: ItemId, title: &str) -> StoreResult<Item> {
        let title = normalize_title(title)?;
        self.items.rename_item(id, title.as_str())?;
        self.require_item(id)
    }

    fn require_item(&self, id: ItemId) -> StoreResult<Item> {
        self.items.get_item(id)?.ok_or(StoreError::NotFound {
            entity: EntityKind::Item,
            id,
        })
    }
}

fn log_failure(event: &str, err: &StoreError) {
    match err {
        StoreError::Persistence(_) => error!(
            "event={} module=store status=error error_code={} error={}",
            event,
            err.code(),
            err
        ),
        _ => warn!(
            "event={} module=store status=error error_code={} error={}",
            event,
            err.code(),
            err
        ),
    }
}

//! Checklist domain model.
//!
//! # Responsibility
//! - Define the two entity kinds the store persists: categories and items.
//! - Normalize and validate user-supplied labels before they reach storage.
//!
//! # Invariants
//! - Every entity is identified by a random, never-reused UUID.
//! - Stored names and titles are trimmed and never blank.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod category;
pub mod color;
pub mod item;

/// Rejected user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Category name is blank after trim.
    BlankName,
    /// Item title is blank after trim.
    BlankTitle,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "category name must not be blank"),
            Self::BlankTitle => write!(f, "item title must not be blank"),
        }
    }
}

impl Error for ValidationError {}

/// Trims a category name and rejects blank values.
pub fn normalize_name(value: &str) -> Result<String, ValidationError> {
    normalize_label(value).ok_or(ValidationError::BlankName)
}

/// Trims an item title and rejects blank values.
pub fn normalize_title(value: &str) -> Result<String, ValidationError> {
    normalize_label(value).ok_or(ValidationError::BlankTitle)
}

fn normalize_label(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_name, normalize_title, ValidationError};

    #[test]
    fn normalize_trims_surrounding_whitespace() {
        assert_eq!(normalize_name("  Work \n").unwrap(), "Work");
        assert_eq!(normalize_title("\tCall Bob ").unwrap(), "Call Bob");
    }

    #[test]
    fn normalize_keeps_inner_whitespace() {
        assert_eq!(normalize_title("Buy  milk").unwrap(), "Buy  milk");
    }

    #[test]
    fn normalize_rejects_blank_values_with_kind_specific_error() {
        assert_eq!(normalize_name("   "), Err(ValidationError::BlankName));
        assert_eq!(normalize_title(""), Err(ValidationError::BlankTitle));
    }
}

//! Title search over item listings.
//!
//! # Responsibility
//! - Fold text for case- and diacritic-insensitive comparisons.
//! - Filter already-ordered item listings without reordering them.
//!
//! # Invariants
//! - Folding is applied identically to the needle and every title.

pub mod fold;

pub use fold::{fold_for_match, TitleFilter};

//! Case and diacritic folding for substring matching.
//!
//! SQLite's `LIKE` only folds ASCII case, so matching happens in Rust on
//! rows the repository has already ordered.

use crate::model::item::Item;
use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::UnicodeNormalization;

/// Folds text so that `"Café"`, `"CAFE"` and `"cafe"` compare equal.
///
/// Lowercases, decomposes canonically (NFD), drops marks with a non-zero
/// combining class, then recomposes (NFC). Spacing vowel signs and Hangul
/// syllables survive intact; compatibility forms such as `ﬁ` are not
/// expanded.
pub fn fold_for_match(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| canonical_combining_class(*c) == 0)
        .nfc()
        .collect()
}

/// Pre-folded "contains" filter on item titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleFilter {
    folded_needle: String,
}

impl TitleFilter {
    /// Builds a filter, or `None` when the needle is empty (no filtering).
    pub fn new(needle: &str) -> Option<Self> {
        if needle.is_empty() {
            return None;
        }
        Some(Self {
            folded_needle: fold_for_match(needle),
        })
    }

    /// Returns whether `title` contains the needle after folding both.
    ///
    /// A needle made only of diacritics folds to nothing and matches no title.
    pub fn matches(&self, title: &str) -> bool {
        if self.folded_needle.is_empty() {
            return false;
        }
        fold_for_match(title).contains(self.folded_needle.as_str())
    }

    /// Keeps matching items, preserving the input order.
    pub fn apply(&self, items: Vec<Item>) -> Vec<Item> {
        items
            .into_iter()
            .filter(|item| self.matches(&item.title))
            .collect()
    }
}

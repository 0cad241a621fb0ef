//! Color tags handed to new categories.
//!
//! The store never interprets a tag; these helpers only pick defaults for
//! callers that do not choose a color themselves.

use rand::seq::SliceRandom;
use rand::Rng;

/// Tag used when no category is selected.
pub const DEFAULT_COLOR_TAG: &str = "#1D9BF6";

/// Flat palette used for randomly colored categories.
pub const FLAT_PALETTE: &[&str] = &[
    "#E74C3C", "#E67E22", "#FFCC00", "#F0DEB4", "#34495E", "#9B59B6", "#3A6F81", "#3498DB",
    "#2ECC71", "#1ABC9C", "#95A5A6", "#345F41", "#745EC5", "#5E4534", "#5E345E", "#EF717A",
    "#A5C63B", "#F47CC3", "#79302A", "#A38671", "#B8C9F1", "#5065A0",
];

/// Picks a palette color using the thread-local RNG.
pub fn random_color_tag() -> String {
    random_color_tag_with(&mut rand::thread_rng())
}

/// Picks a palette color using the provided RNG.
pub fn random_color_tag_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    FLAT_PALETTE
        .choose(rng)
        .copied()
        .unwrap_or(DEFAULT_COLOR_TAG)
        .to_string()
}

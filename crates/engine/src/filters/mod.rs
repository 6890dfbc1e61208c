//! Filter implementations for the listing pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline. Each filter deactivates
//! itself when its query field is empty/default, so the full pipeline can
//! run unconditionally for every query.

pub mod search_term;
pub mod location;
pub mod category;

// Re-export for convenience
pub use search_term::SearchTermFilter;
pub use location::LocationFilter;
pub use category::CategoryFilter;

/// Case-insensitive substring match.
///
/// `needle_lower` must already be lowercased; the haystack is lowercased
/// per call. Matching is Unicode case folding via `to_lowercase`, the
/// same behavior for every field the filters touch.
pub(crate) fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

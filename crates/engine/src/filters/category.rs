//! Filter for the category selection.

use crate::query::{CategorySelection, Query};
use crate::traits::ListingFilter;
use anyhow::Result;
use catalog::Listing;

/// Retains listings whose category exactly matches the selection.
///
/// The `all` sentinel is a pass-through; the category set is closed, so
/// the match is exhaustive equality on the enum, never string comparison.
pub struct CategoryFilter;

impl ListingFilter for CategoryFilter {
    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn apply(&self, listings: Vec<Listing>, query: &Query) -> Result<Vec<Listing>> {
        let wanted = match query.category {
            CategorySelection::All => return Ok(listings),
            CategorySelection::Only(category) => category,
        };

        let filtered: Vec<Listing> = listings
            .into_iter()
            .filter(|listing| listing.category == wanted)
            .collect();
        Ok(filtered)
    }
}

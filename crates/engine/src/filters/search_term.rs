//! Filter for the free-text search term.
//!
//! This is typically the first filter in the pipeline: it narrows the
//! collection by whatever the user typed into the search box.

use crate::filters::contains_ci;
use crate::query::Query;
use crate::traits::ListingFilter;
use anyhow::Result;
use catalog::Listing;

/// Retains listings whose `name`, `location`, or `short_description`
/// contains the search term, case-insensitively.
///
/// ## Algorithm
/// The term is lowercased once; a listing is kept if ANY of the three
/// searchable fields matches (logical OR). An empty term keeps everything.
pub struct SearchTermFilter;

impl ListingFilter for SearchTermFilter {
    fn name(&self) -> &str {
        "SearchTermFilter"
    }

    fn apply(&self, listings: Vec<Listing>, query: &Query) -> Result<Vec<Listing>> {
        if query.search_term.is_empty() {
            return Ok(listings);
        }

        let term = query.search_term.to_lowercase();
        let filtered: Vec<Listing> = listings
            .into_iter()
            .filter(|listing| {
                contains_ci(&listing.name, &term)
                    || contains_ci(&listing.location, &term)
                    || contains_ci(&listing.short_description, &term)
            })
            .collect();
        Ok(filtered)
    }
}

//! Filter for the dedicated location field.
//!
//! Independent of the search term's own location check: when both are set,
//! a listing must satisfy both (the pipeline ANDs its filters).

use crate::filters::contains_ci;
use crate::query::Query;
use crate::traits::ListingFilter;
use anyhow::Result;
use catalog::Listing;

/// Retains listings whose `location` contains the query's location
/// string, case-insensitively. An empty filter keeps everything.
pub struct LocationFilter;

impl ListingFilter for LocationFilter {
    fn name(&self) -> &str {
        "LocationFilter"
    }

    fn apply(&self, listings: Vec<Listing>, query: &Query) -> Result<Vec<Listing>> {
        if query.location.is_empty() {
            return Ok(listings);
        }

        let needle = query.location.to_lowercase();
        let filtered: Vec<Listing> = listings
            .into_iter()
            .filter(|listing| contains_ci(&listing.location, &needle))
            .collect();
        Ok(filtered)
    }
}

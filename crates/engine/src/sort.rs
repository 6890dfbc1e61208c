//! Sort stage: a total order over the filtered listings.
//!
//! All comparators run through `Vec::sort_by`, which is stable: listings
//! with equal keys keep the relative order the filter stage handed over.
//! Stability is the tie-break contract; there is no secondary key.

use crate::query::SortKey;
use catalog::Listing;
use std::cmp::Ordering;

/// Order listings by the given sort key.
///
/// Takes ownership and returns the reordered vector; the caller's
/// original collection is never touched.
pub fn sort_listings(mut listings: Vec<Listing>, key: SortKey) -> Vec<Listing> {
    match key {
        SortKey::PriceLow => listings.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceHigh => listings.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Name => listings.sort_by(|a, b| cmp_ci(&a.name, &b.name)),
        SortKey::Location => listings.sort_by(|a, b| cmp_ci(&a.location, &b.location)),
        SortKey::Newest => listings.sort_by(|a, b| b.id.cmp(&a.id)),
    }
    listings
}

/// Case-insensitive lexicographic comparison.
///
/// Stands in for the locale-aware collation of the reference behavior;
/// equal-after-folding strings compare equal so the stable sort keeps
/// their original order.
fn cmp_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

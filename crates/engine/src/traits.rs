//! Core traits for the filtering pipeline.
//!
//! This module defines the ListingFilter trait that allows composable
//! filters to be applied to the listing collection.

use crate::query::Query;
use anyhow::Result;
use catalog::Listing;

/// Core trait for filtering listings.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the Vec<Listing> and return a filtered Vec
/// - Filters must preserve the relative order of their input (stable
///   filtering); the sort stage's tie-break contract depends on it
/// - A filter whose query field is empty/default is a pass-through
pub trait ListingFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of listings.
    ///
    /// # Arguments
    /// * `listings` - The listings to filter (takes ownership)
    /// * `query` - The current query state
    ///
    /// # Returns
    /// * `Ok(Vec<Listing>)` - The retained listings, original order intact
    fn apply(&self, listings: Vec<Listing>, query: &Query) -> Result<Vec<Listing>>;
}

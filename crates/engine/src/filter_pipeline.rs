//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern. Filters compose
//! with AND semantics: a listing survives only if every filter retains it.

use crate::query::Query;
use crate::traits::ListingFilter;
use anyhow::Result;
use catalog::Listing;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(SearchTermFilter)
///     .add_filter(LocationFilter)
///     .add_filter(CategoryFilter);
///
/// let filtered = pipeline.apply(listings, &query)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn ListingFilter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl ListingFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the listings.
    ///
    /// Each filter preserves input order, so the pipeline as a whole is a
    /// stable, order-preserving reduction of the original collection.
    ///
    /// # Arguments
    /// * `listings` - The listings to filter
    /// * `query` - The current query state
    ///
    /// # Returns
    /// * `Ok(Vec<Listing>)` - The listings retained by every filter
    pub fn apply(&self, listings: Vec<Listing>, query: &Query) -> Result<Vec<Listing>> {
        let mut current = listings;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, query)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

//! # Query Engine
//!
//! This module coordinates the full query pipeline:
//! 1. Filter the collection by the active query predicates
//! 2. Sort the survivors by the query's sort key
//! 3. Interleave advertisement slots into the display sequence
//!
//! Every invocation recomputes the pipeline from the original collection;
//! there is no caching of intermediate stages. The stages are pure and the
//! input is cloned up front, so repeated and concurrent queries are
//! side-effect-free.

use std::time::Instant;

use anyhow::Result;
use tracing::info;

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{CategoryFilter, LocationFilter, SearchTermFilter};
use crate::interleave::{DisplayItem, interleave};
use crate::query::Query;
use crate::sort::sort_listings;
use catalog::Listing;

/// The single entry point the view layer calls.
///
/// Holds the standing filter pipeline; each filter gates itself on its
/// query field, so the same pipeline serves every query.
pub struct QueryEngine {
    pipeline: FilterPipeline,
}

impl QueryEngine {
    /// Create an engine with the standard three-filter pipeline.
    pub fn new() -> Self {
        let pipeline = FilterPipeline::new()
            .add_filter(SearchTermFilter)
            .add_filter(LocationFilter)
            .add_filter(CategoryFilter);
        Self { pipeline }
    }

    /// Run a query against the full collection.
    ///
    /// The input slice is never mutated; every stage produces a fresh
    /// sequence.
    ///
    /// # Arguments
    /// * `listings` - The full listing collection, in catalog order
    /// * `query` - The current query state
    ///
    /// # Returns
    /// The ordered, ad-interleaved display sequence
    pub fn run(&self, listings: &[Listing], query: &Query) -> Result<Vec<DisplayItem>> {
        let start = Instant::now();

        let filtered = self.pipeline.apply(listings.to_vec(), query)?;
        let sorted = sort_listings(filtered, query.sort);
        let items = interleave(sorted);

        info!(
            "Query matched {} of {} listings (sort: {}, {} ad slots) in {:?}",
            items.iter().filter(|i| !i.is_advertisement()).count(),
            listings.len(),
            query.sort,
            items.iter().filter(|i| i.is_advertisement()).count(),
            start.elapsed()
        );
        Ok(items)
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SortKey;
    use crate::test_support::listing;
    use catalog::Category;

    #[test]
    fn test_run_leaves_input_untouched() {
        let listings = vec![
            listing(1, "Zeta", 300, "Austin, TX", Category::Tech, "z"),
            listing(2, "Alpha", 100, "Portland, OR", Category::Tech, "a"),
        ];
        let snapshot = listings.clone();

        let engine = QueryEngine::new();
        let query = Query {
            sort: SortKey::Name,
            ..Query::new()
        };
        engine.run(&listings, &query).unwrap();

        assert_eq!(listings, snapshot);
    }

    #[test]
    fn test_run_composes_all_three_stages() {
        let listings = vec![
            listing(1, "Z Diner", 500_000, "Austin, TX", Category::Restaurant, "Diner"),
            listing(2, "A Diner", 200_000, "Austin, TX", Category::Restaurant, "Diner"),
            listing(3, "M Forge", 800_000, "Austin, TX", Category::Manufacturing, "Forge"),
        ];
        let engine = QueryEngine::new();
        let query = Query {
            sort: SortKey::PriceLow,
            ..Query::new()
        };
        let items = engine.run(&listings, &query).unwrap();

        let ids: Vec<u32> = items
            .iter()
            .filter_map(|item| match item {
                DisplayItem::Listing(l) => Some(l.id),
                DisplayItem::Advertisement { .. } => None,
            })
            .collect();
        assert_eq!(ids, vec![2, 1, 3]);
        assert_eq!(items.len(), 3); // no ads below the interval
    }
}

//! Listing query engine: filter, sort, and ad interleaving.
//!
//! This crate provides:
//! - ListingFilter trait and implementations for query predicates
//! - FilterPipeline for composing filters with AND semantics
//! - A stable sort stage over the five sort keys
//! - The presentation interleaver that injects advertisement slots
//! - QueryEngine, the single entry point for the view layer
//!
//! ## Architecture
//! The engine processes the collection in three stages:
//! 1. Filters reduce the collection to listings matching the query
//! 2. The sort stage orders the survivors by the active sort key
//! 3. The interleaver emits the display sequence with ad placeholders
//!
//! Control flow is synchronous and re-entrant: any change to the query
//! recomputes the whole pipeline from the original collection.
//!
//! ## Example Usage
//! ```ignore
//! use engine::{Query, QueryEngine, SortKey};
//!
//! let engine = QueryEngine::new();
//! let query = Query {
//!     search_term: "cafe".to_string(),
//!     sort: SortKey::PriceLow,
//!     ..Query::new()
//! };
//!
//! let items = engine.run(catalog.listings(), &query)?;
//! ```

pub mod traits;
pub mod query;
pub mod filters;
pub mod filter_pipeline;
pub mod sort;
pub mod interleave;
pub mod engine;

// Re-export main types
pub use traits::ListingFilter;
pub use query::{CategorySelection, Query, SortKey};
pub use filter_pipeline::FilterPipeline;
pub use sort::sort_listings;
pub use interleave::{AD_INTERVAL, DisplayItem, ad_slots, interleave};
pub use engine::QueryEngine;

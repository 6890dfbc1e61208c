//! # Catalog Crate
//!
//! This crate owns the business-for-sale listing data model and the loader
//! that builds a [`Catalog`] from a JSON file.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Listing, Category, Catalog)
//! - **loader**: Parse catalog JSON files into a Catalog
//! - **error**: Error types for loading and validation
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//!
//! let catalog = Catalog::load_from_file("data/listings.json")?;
//!
//! let listing = catalog.get(1).unwrap();
//! println!("{} asking {}", listing.name, listing.price);
//! ```
//!
//! The catalog is read-only once loaded: the engine receives the full
//! collection on every query and never mutates it.

// Public modules
pub mod error;
pub mod types;
pub mod loader;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{
    // Type aliases
    ListingId,
    // Core types
    Listing,
    Catalog,
    Revenue,
    // Enums
    Category,
    RevenuePeriod,
    ListingStatus,
};

//! Core domain types for the business-for-sale catalog.
//!
//! This module defines the fundamental data structures used throughout the
//! system: the `Listing` record, the closed `Category` set, and the
//! `Catalog` container that owns the full collection.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a listing.
///
/// Ids are assigned monotonically at data-creation time, so a higher id
/// means a more recently listed business. The sort stage relies on this
/// for "newest first" ordering.
pub type ListingId = u32;

// =============================================================================
// Category
// =============================================================================

/// The closed set of business categories.
///
/// Adding a category is a compile-time-checked change: every `match` over
/// this enum (filter predicates, display labels) must be updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tech,
    Restaurant,
    Retail,
    Manufacturing,
    Services,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 5] = [
        Category::Tech,
        Category::Restaurant,
        Category::Retail,
        Category::Manufacturing,
        Category::Services,
    ];

    /// The lowercase token used in data files and query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tech => "tech",
            Category::Restaurant => "restaurant",
            Category::Retail => "retail",
            Category::Manufacturing => "manufacturing",
            Category::Services => "services",
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Tech => "Technology",
            Category::Restaurant => "Restaurant",
            Category::Retail => "Retail",
            Category::Manufacturing => "Manufacturing",
            Category::Services => "Services",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tech" => Ok(Category::Tech),
            "restaurant" => Ok(Category::Restaurant),
            "retail" => Ok(Category::Retail),
            "manufacturing" => Ok(Category::Manufacturing),
            "services" => Ok(Category::Services),
            _ => Err(CatalogError::InvalidValue {
                field: "category".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Listing
// =============================================================================

/// Reporting period for a listing's revenue figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevenuePeriod {
    Month,
    Year,
}

/// Revenue reported by the seller. Display-only; the engine never
/// filters or sorts on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revenue {
    pub amount: u64,
    pub period: RevenuePeriod,
}

/// Sale status of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Available,
    Sold,
    Pending,
}

/// An immutable record representing one business offered for sale.
///
/// JSON field names follow the upstream data files (camelCase), e.g.
/// `shortDescription`, `imageUrl`, `isNegotiable`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    pub name: String,
    /// Asking price in whole currency units. Non-negative by construction.
    pub price: u64,
    /// Free-text place description (city/region), pre-resolved by an
    /// external geocoding service. Never coordinates.
    pub location: String,
    pub category: Category,
    /// Short blurb shown on cards; participates in free-text search.
    pub short_description: String,
    /// Full description; display-only.
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<Revenue>,
    /// Year the business was established.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub established: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_negotiable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ListingStatus>,
}

// =============================================================================
// Catalog - The Owning Container
// =============================================================================

/// Owns the full listing collection and secondary indices.
///
/// Insertion order is authoritative: `listings()` returns the collection
/// in the order it was loaded, which is the order the engine's stable
/// filter and sort stages preserve for ties.
#[derive(Debug, Default)]
pub struct Catalog {
    listings: Vec<Listing>,
    /// Position of each listing in `listings`, keyed by id
    by_id: HashMap<ListingId, usize>,
    /// Listing ids grouped by category, in insertion order
    category_index: HashMap<Category, Vec<ListingId>>,
}

impl Catalog {
    /// Creates a new, empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a listing and update the indices.
    ///
    /// Returns `CatalogError::DuplicateId` if a listing with the same id
    /// is already present, and `ValidationError` for an empty name.
    pub fn insert_listing(&mut self, listing: Listing) -> crate::error::Result<()> {
        if listing.name.trim().is_empty() {
            return Err(CatalogError::ValidationError(format!(
                "listing {} has an empty name",
                listing.id
            )));
        }
        if self.by_id.contains_key(&listing.id) {
            return Err(CatalogError::DuplicateId { id: listing.id });
        }
        self.by_id.insert(listing.id, self.listings.len());
        self.category_index
            .entry(listing.category)
            .or_default()
            .push(listing.id);
        self.listings.push(listing);
        Ok(())
    }

    /// Get a listing by id.
    pub fn get(&self, id: ListingId) -> Option<&Listing> {
        self.by_id.get(&id).map(|&pos| &self.listings[pos])
    }

    /// The full collection, in insertion order.
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Number of listings in a category.
    pub fn category_count(&self, category: Category) -> usize {
        self.category_index
            .get(&category)
            .map(|ids| ids.len())
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

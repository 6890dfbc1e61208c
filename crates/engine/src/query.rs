//! Query model for the listing engine.
//!
//! A [`Query`] is an ephemeral value object reconstructed per user
//! interaction. It is never persisted; every change to it recomputes the
//! full pipeline from the original collection.

use catalog::{CatalogError, Category};
use std::fmt;
use std::str::FromStr;

/// Sort keys accepted by the sort stage.
///
/// `parse` never fails: an unknown or unspecified key falls back to
/// [`SortKey::Newest`], the default ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Ascending by price
    PriceLow,
    /// Descending by price
    PriceHigh,
    /// Ascending by name, case-insensitive
    Name,
    /// Ascending by location, case-insensitive
    Location,
    /// Descending by id (higher id = more recently listed)
    #[default]
    Newest,
}

impl SortKey {
    /// Parse a sort-key token, falling back to `Newest` for anything
    /// unrecognized.
    pub fn parse(s: &str) -> SortKey {
        match s {
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "name" => SortKey::Name,
            "location" => SortKey::Location,
            _ => SortKey::Newest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Name => "name",
            SortKey::Location => "location",
            SortKey::Newest => "newest",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selection: either the `all` sentinel or one concrete category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Only(Category),
}

impl FromStr for CategorySelection {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(CategorySelection::All)
        } else {
            s.parse::<Category>().map(CategorySelection::Only)
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorySelection::All => f.write_str("all"),
            CategorySelection::Only(category) => f.write_str(category.as_str()),
        }
    }
}

/// The current query state: free-text term, location filter, category
/// selection, and sort key.
///
/// Empty strings and `CategorySelection::All` deactivate the corresponding
/// filter predicate; the defaults match an untouched search form.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub search_term: String,
    pub location: String,
    pub category: CategorySelection,
    pub sort: SortKey,
}

impl Query {
    /// A query with no active predicates and the default sort.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_tokens_round_trip() {
        for key in [
            SortKey::PriceLow,
            SortKey::PriceHigh,
            SortKey::Name,
            SortKey::Location,
            SortKey::Newest,
        ] {
            assert_eq!(SortKey::parse(key.as_str()), key);
        }
    }

    #[test]
    fn test_unknown_sort_key_falls_back_to_newest() {
        assert_eq!(SortKey::parse("relevance"), SortKey::Newest);
        assert_eq!(SortKey::parse(""), SortKey::Newest);
    }

    #[test]
    fn test_category_selection_parsing() {
        assert_eq!("all".parse::<CategorySelection>().unwrap(), CategorySelection::All);
        assert_eq!(
            "tech".parse::<CategorySelection>().unwrap(),
            CategorySelection::Only(Category::Tech)
        );
        assert!("bakery".parse::<CategorySelection>().is_err());
    }

    #[test]
    fn test_default_query_is_inactive() {
        let query = Query::new();
        assert!(query.search_term.is_empty());
        assert!(query.location.is_empty());
        assert_eq!(query.category, CategorySelection::All);
        assert_eq!(query.sort, SortKey::Newest);
    }
}

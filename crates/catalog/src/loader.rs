//! Loader for listing catalog files.
//!
//! A catalog file is a JSON array of listing objects using the camelCase
//! field names defined on [`Listing`](crate::types::Listing). The loader
//! deserializes the array, validates each record, and builds the indices
//! in file order.

use crate::error::{CatalogError, Result};
use crate::types::{Catalog, Listing};
use std::fs;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load a catalog from a JSON file.
    ///
    /// # Arguments
    /// * `path` - Path to a file containing a JSON array of listings
    ///
    /// # Returns
    /// * `Ok(Catalog)` - All listings loaded, indexed in file order
    /// * `Err` - The file is missing, unreadable, malformed, or contains
    ///   an invalid record (empty name, duplicate id)
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Catalog> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CatalogError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = fs::read_to_string(path)?;
        let listings: Vec<Listing> = serde_json::from_str(&content)?;

        let mut catalog = Catalog::new();
        for listing in listings {
            catalog.insert_listing(listing)?;
        }

        info!(
            "Loaded {} listings from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("catalog-test-{}-{}.json", std::process::id(), name));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_valid_catalog() {
        let path = write_temp(
            "valid",
            r#"[
                {
                    "id": 1,
                    "name": "Cafe Rio",
                    "price": 250000,
                    "location": "Austin, TX",
                    "category": "restaurant",
                    "shortDescription": "Neighborhood cafe",
                    "description": "A well-loved neighborhood cafe.",
                    "established": 2012,
                    "isNegotiable": true
                }
            ]"#,
        );
        let catalog = Catalog::load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(catalog.len(), 1);
        let listing = catalog.get(1).unwrap();
        assert_eq!(listing.name, "Cafe Rio");
        assert_eq!(listing.category, Category::Restaurant);
        assert_eq!(listing.established, Some(2012));
        assert_eq!(listing.is_negotiable, Some(true));
    }

    #[test]
    fn test_missing_file() {
        let err = Catalog::load_from_file("/nonexistent/listings.json");
        assert!(matches!(err, Err(CatalogError::FileNotFound { .. })));
    }

    #[test]
    fn test_malformed_json() {
        let path = write_temp("malformed", "[{not json");
        let err = Catalog::load_from_file(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(err, Err(CatalogError::JsonError(_))));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let path = write_temp(
            "unknown-category",
            r#"[
                {
                    "id": 1,
                    "name": "Mystery Biz",
                    "price": 1,
                    "location": "Nowhere",
                    "category": "bakery",
                    "shortDescription": "s",
                    "description": "d"
                }
            ]"#,
        );
        let err = Catalog::load_from_file(&path);
        fs::remove_file(&path).ok();
        // serde rejects a value outside the closed category set
        assert!(matches!(err, Err(CatalogError::JsonError(_))));
    }
}

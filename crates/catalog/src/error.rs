//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading and validating a listing catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open catalog file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the catalog file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Catalog file is not valid JSON or does not match the listing schema
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Two listings in the same catalog share an id
    #[error("Duplicate listing id: {id}")]
    DuplicateId { id: u32 },

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;

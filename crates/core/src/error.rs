//! Error types for catalog loading.
//!
//! Searching never fails; only turning a catalog file into records can.

use crate::types::ParseCategoryError;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while building a [`crate::QueryCatalog`].
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Record '{id}' has an invalid category: {source}")]
    InvalidCategory {
        id: String,
        source: ParseCategoryError,
    },

    #[error("Record '{id}' has an invalid created_at '{value}' (expected YYYY-MM-DD or an RFC 3339 timestamp)")]
    InvalidDate { id: String, value: String },

    #[error("Duplicate record id '{0}'")]
    DuplicateId(String),
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

//! Error types for the catalog slice.

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The remote fetch behind a refresh failed.
    #[error("Catalog fetch failed: {0}")]
    Fetch(String),

    /// An error occurred while communicating with the slice actor.
    #[error("Slice communication error: {0}")]
    SliceCommunication(String),
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::SliceCommunication(msg)
    }
}

//! Error types for the filter slice.

use thiserror::Error;

/// Errors that can occur during filter operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FilterError {
    /// The requested page size is not one of the offered choices.
    #[error("Invalid page size: {0}")]
    InvalidPerPage(usize),

    /// An error occurred while communicating with the slice actor.
    #[error("Slice communication error: {0}")]
    SliceCommunication(String),
}

impl From<String> for FilterError {
    fn from(msg: String) -> Self {
        FilterError::SliceCommunication(msg)
    }
}

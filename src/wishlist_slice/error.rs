//! Error types for the wishlist slice.

use thiserror::Error;

/// Errors that can occur during wishlist operations.
///
/// Wishlist transitions themselves are infallible; the only failure mode is
/// the actor channel.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WishlistError {
    /// An error occurred while communicating with the slice actor.
    #[error("Slice communication error: {0}")]
    SliceCommunication(String),
}

impl From<String> for WishlistError {
    fn from(msg: String) -> Self {
        WishlistError::SliceCommunication(msg)
    }
}

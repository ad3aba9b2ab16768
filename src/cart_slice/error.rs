//! Error types for the cart slice.

use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The provided quantity is invalid (zero).
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// The coupon code is not in the coupon table.
    #[error("Unknown coupon code: {0}")]
    UnknownCoupon(String),

    /// An error occurred while communicating with the slice actor.
    #[error("Slice communication error: {0}")]
    SliceCommunication(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::SliceCommunication(msg)
    }
}

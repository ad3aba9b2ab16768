//! Mutation operations for the wishlist slice.

use crate::model::{Product, ProductId};

/// Mutation operations accepted by the wishlist slice.
///
/// Membership is a set keyed by product id: `Add` is idempotent and `Toggle`
/// flips presence, so no caller can produce duplicate entries.
#[derive(Debug, Clone)]
pub enum WishlistAction {
    /// Adds if absent; present ids are left alone.
    Add { product: Product },
    /// Present => remove, absent => add.
    Toggle { product: Product },
    /// Removes by id. No error if the id is absent.
    Remove { id: ProductId },
    Clear,
}

/// Results from wishlist actions - variants match 1:1 with [`WishlistAction`].
#[derive(Debug, Clone, PartialEq)]
pub enum WishlistActionResult {
    /// Result from Add - whether the entry was newly inserted.
    Added { newly_added: bool },
    /// Result from Toggle - whether the product is in the wishlist now.
    Toggled { in_wishlist: bool },
    Removed,
    Cleared,
}

//! # Wishlist Client
//!
//! Provides a high-level API for interacting with the wishlist slice.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::clients::handle::{downcast_slice_error, SliceHandle};
use crate::framework::{FrameworkError, SliceClient};
use crate::model::{Product, ProductId};
use crate::wishlist_slice::{WishlistAction, WishlistActionResult, WishlistError, WishlistState};

/// Client for interacting with the wishlist slice actor.
#[derive(Clone)]
pub struct WishlistClient {
    inner: SliceClient<WishlistState>,
}

impl WishlistClient {
    pub fn new(inner: SliceClient<WishlistState>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl SliceHandle<WishlistState> for WishlistClient {
    type Error = WishlistError;

    fn inner(&self) -> &SliceClient<WishlistState> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        downcast_slice_error(e, WishlistError::SliceCommunication)
    }
}

impl WishlistClient {
    /// Flips the product's membership. Returns whether it is present now.
    #[instrument(skip(self, product))]
    pub async fn toggle(&self, product: Product) -> Result<bool, WishlistError> {
        debug!(product_id = %product.id, "Toggling wishlist membership");
        match self.apply(WishlistAction::Toggle { product }).await? {
            WishlistActionResult::Toggled { in_wishlist } => Ok(in_wishlist),
            _ => unreachable!("Toggle action must return Toggled result"),
        }
    }

    /// Adds the product if absent. Returns whether it was newly inserted.
    #[instrument(skip(self, product))]
    pub async fn add(&self, product: Product) -> Result<bool, WishlistError> {
        debug!(product_id = %product.id, "Adding to wishlist");
        match self.apply(WishlistAction::Add { product }).await? {
            WishlistActionResult::Added { newly_added } => Ok(newly_added),
            _ => unreachable!("Add action must return Added result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: ProductId) -> Result<(), WishlistError> {
        debug!("Removing from wishlist");
        match self.apply(WishlistAction::Remove { id }).await? {
            WishlistActionResult::Removed => Ok(()),
            _ => unreachable!("Remove action must return Removed result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<(), WishlistError> {
        debug!("Clearing wishlist");
        match self.apply(WishlistAction::Clear).await? {
            WishlistActionResult::Cleared => Ok(()),
            _ => unreachable!("Clear action must return Cleared result"),
        }
    }

    /// Whether the product is currently wishlisted.
    #[instrument(skip(self))]
    pub async fn contains(&self, id: ProductId) -> Result<bool, WishlistError> {
        Ok(self.snapshot().await?.contains(id))
    }
}

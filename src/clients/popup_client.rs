//! # Popup Client
//!
//! Provides a high-level API for the drawer visibility flags.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::clients::handle::{downcast_slice_error, SliceHandle};
use crate::framework::{FrameworkError, SliceClient};
use crate::popup_slice::{PopupAction, PopupError, PopupState};

/// Client for interacting with the popup slice actor.
#[derive(Clone)]
pub struct PopupClient {
    inner: SliceClient<PopupState>,
}

impl PopupClient {
    pub fn new(inner: SliceClient<PopupState>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl SliceHandle<PopupState> for PopupClient {
    type Error = PopupError;

    fn inner(&self) -> &SliceClient<PopupState> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        downcast_slice_error(e, PopupError::SliceCommunication)
    }
}

impl PopupClient {
    #[instrument(skip(self))]
    pub async fn set_cart_open(&self, open: bool) -> Result<PopupState, PopupError> {
        debug!("Setting cart drawer visibility");
        self.apply(PopupAction::SetCartOpen(open)).await
    }

    #[instrument(skip(self))]
    pub async fn set_wishlist_open(&self, open: bool) -> Result<PopupState, PopupError> {
        debug!("Setting wishlist drawer visibility");
        self.apply(PopupAction::SetWishlistOpen(open)).await
    }

    #[instrument(skip(self))]
    pub async fn toggle_cart(&self) -> Result<PopupState, PopupError> {
        debug!("Toggling cart drawer");
        self.apply(PopupAction::ToggleCart).await
    }

    #[instrument(skip(self))]
    pub async fn toggle_wishlist(&self) -> Result<PopupState, PopupError> {
        debug!("Toggling wishlist drawer");
        self.apply(PopupAction::ToggleWishlist).await
    }

    #[instrument(skip(self))]
    pub async fn close_all(&self) -> Result<PopupState, PopupError> {
        debug!("Closing all drawers");
        self.apply(PopupAction::CloseAll).await
    }
}

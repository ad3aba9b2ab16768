//! Popup slice: visibility flags for the cart and wishlist drawers.
//!
//! The two flags are independent. Nothing in this layer stops both drawers
//! being open at once; if the UI keeps them mutually exclusive, that is a
//! presentation convention, not a state invariant.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clients::PopupClient;
use crate::framework::{SliceActor, SliceState};

/// The popup slice: one visibility flag per drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PopupState {
    pub cart_open: bool,
    pub wishlist_open: bool,
}

/// Mutation operations accepted by the popup slice.
///
/// The action result is the updated [`PopupState`] snapshot.
#[derive(Debug, Clone)]
pub enum PopupAction {
    SetCartOpen(bool),
    SetWishlistOpen(bool),
    ToggleCart,
    ToggleWishlist,
    CloseAll,
}

/// Errors that can occur during popup operations.
///
/// Popup transitions are infallible; the only failure mode is the actor
/// channel.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PopupError {
    /// An error occurred while communicating with the slice actor.
    #[error("Slice communication error: {0}")]
    SliceCommunication(String),
}

impl From<String> for PopupError {
    fn from(msg: String) -> Self {
        PopupError::SliceCommunication(msg)
    }
}

#[async_trait]
impl SliceState for PopupState {
    type Action = PopupAction;
    type ActionResult = PopupState;
    type Context = ();
    type Error = PopupError;

    async fn apply(&mut self, action: PopupAction, _ctx: &()) -> Result<PopupState, PopupError> {
        match action {
            PopupAction::SetCartOpen(open) => self.cart_open = open,
            PopupAction::SetWishlistOpen(open) => self.wishlist_open = open,
            PopupAction::ToggleCart => self.cart_open = !self.cart_open,
            PopupAction::ToggleWishlist => self.wishlist_open = !self.wishlist_open,
            PopupAction::CloseAll => *self = PopupState::default(),
        }
        Ok(*self)
    }
}

/// Creates a new popup slice actor and its client.
pub fn new() -> (SliceActor<PopupState>, PopupClient) {
    let (actor, generic_client) = SliceActor::new(32, PopupState::default());
    let client = PopupClient::new(generic_client);

    (actor, client)
}

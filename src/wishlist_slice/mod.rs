//! Wishlist slice: a set of saved products keyed by product id.

mod actions;
pub mod error;
pub mod state;

pub use actions::*;
pub use error::*;
pub use state::WishlistState;

use crate::clients::WishlistClient;
use crate::framework::SliceActor;

/// Creates a new wishlist slice actor and its client.
pub fn new(initial: WishlistState) -> (SliceActor<WishlistState>, WishlistClient) {
    let (actor, generic_client) = SliceActor::new(32, initial);
    let client = WishlistClient::new(generic_client);

    (actor, client)
}

//! Cart-specific slice logic: line merging, quantities, coupons, shipping.

mod actions;
pub mod error;
pub mod state;

pub use actions::*;
pub use error::*;

use crate::clients::CartClient;
use crate::framework::SliceActor;
use crate::model::CartState;

/// Creates a new cart slice actor and its client.
pub fn new(initial: CartState) -> (SliceActor<CartState>, CartClient) {
    let (actor, generic_client) = SliceActor::new(32, initial);
    let client = CartClient::new(generic_client);

    (actor, client)
}

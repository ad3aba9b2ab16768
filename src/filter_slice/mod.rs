//! Filter slice: the criteria the listing derivation reads.
//!
//! Every criterion change resets the page to 1 so a narrowed result set can
//! never strand the user on a page that no longer exists.

mod actions;
pub mod error;
pub mod state;

pub use actions::*;
pub use error::*;

use crate::clients::FilterClient;
use crate::framework::SliceActor;
use crate::model::FilterState;

/// Creates a new filter slice actor and its client.
pub fn new(initial: FilterState) -> (SliceActor<FilterState>, FilterClient) {
    let (actor, generic_client) = SliceActor::new(32, initial);
    let client = FilterClient::new(generic_client);

    (actor, client)
}

//! Catalog slice: the in-memory mirror of the remote product catalog.
//!
//! Holds the product list, the normalized category set and the fetch status.
//! A failed load preserves whatever was loaded before and records the failure
//! for the UI to surface alongside a retry affordance.

mod actions;
pub mod error;
pub mod state;

pub use actions::*;
pub use error::*;
pub use state::{CatalogState, FetchStatus};

use crate::clients::CatalogClient;
use crate::framework::SliceActor;

/// Creates a new catalog slice actor and its client.
pub fn new(initial: CatalogState) -> (SliceActor<CatalogState>, CatalogClient) {
    let (actor, generic_client) = SliceActor::new(32, initial);
    let client = CatalogClient::new(generic_client);

    (actor, client)
}

//! Recently-viewed slice: a short most-recent-first trail of products.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clients::RecentClient;
use crate::framework::{SliceActor, SliceState};
use crate::model::{Product, ProductId};

/// How many products the trail keeps before the oldest falls off.
pub const MAX_RECENT: usize = 8;

/// The recently-viewed slice. Deduplicated by product id, newest first,
/// capped at [`MAX_RECENT`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecentState {
    pub products: Vec<Product>,
}

impl RecentState {
    /// Rebuilds the trail from the persisted array.
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.products.iter().any(|p| p.id == id)
    }
}

/// Mutation operations accepted by the recently-viewed slice.
#[derive(Debug, Clone)]
pub enum RecentAction {
    /// Moves the product to the front of the trail, inserting if absent.
    Record { product: Product },
    Clear,
}

/// Results from recently-viewed actions - variants match 1:1 with
/// [`RecentAction`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecentActionResult {
    /// Result from Record - the trail length afterwards.
    Recorded { len: usize },
    Cleared,
}

/// Errors that can occur during recently-viewed operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecentError {
    /// An error occurred while communicating with the slice actor.
    #[error("Slice communication error: {0}")]
    SliceCommunication(String),
}

impl From<String> for RecentError {
    fn from(msg: String) -> Self {
        RecentError::SliceCommunication(msg)
    }
}

#[async_trait]
impl SliceState for RecentState {
    type Action = RecentAction;
    type ActionResult = RecentActionResult;
    type Context = ();
    type Error = RecentError;

    async fn apply(
        &mut self,
        action: RecentAction,
        _ctx: &(),
    ) -> Result<RecentActionResult, RecentError> {
        match action {
            RecentAction::Record { product } => {
                self.products.retain(|p| p.id != product.id);
                self.products.insert(0, product);
                self.products.truncate(MAX_RECENT);
                Ok(RecentActionResult::Recorded {
                    len: self.products.len(),
                })
            }
            RecentAction::Clear => {
                self.products.clear();
                Ok(RecentActionResult::Cleared)
            }
        }
    }
}

/// Creates a new recently-viewed slice actor and its client.
pub fn new(initial: RecentState) -> (SliceActor<RecentState>, RecentClient) {
    let (actor, generic_client) = SliceActor::new(32, initial);
    let client = RecentClient::new(generic_client);

    (actor, client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    async fn record(state: &mut RecentState, id: u64) {
        let product = Product::new(id, format!("p{id}"), 10.0, Category::Misc);
        SliceState::apply(state, RecentAction::Record { product }, &())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_newest_first_and_deduplicated() {
        let mut recent = RecentState::default();
        record(&mut recent, 1).await;
        record(&mut recent, 2).await;
        record(&mut recent, 1).await;

        let ids: Vec<u64> = recent.products.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_trail_is_capped() {
        let mut recent = RecentState::default();
        for id in 0..(MAX_RECENT as u64 + 3) {
            record(&mut recent, id).await;
        }

        assert_eq!(recent.products.len(), MAX_RECENT);
        // The oldest entries fell off the back.
        assert!(!recent.contains(ProductId(0)));
        assert_eq!(recent.products[0].id, ProductId(MAX_RECENT as u64 + 2));
    }
}

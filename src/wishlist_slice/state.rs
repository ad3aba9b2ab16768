//! SliceState implementation for the wishlist.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::actions::{WishlistAction, WishlistActionResult};
use super::error::WishlistError;
use crate::framework::SliceState;
use crate::model::{Product, ProductId};

/// The wishlist slice. At most one entry per product id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WishlistState {
    pub entries: Vec<Product>,
}

impl WishlistState {
    /// Rebuilds wishlist state from the persisted entry array.
    pub fn from_entries(entries: Vec<Product>) -> Self {
        Self { entries }
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.entries.iter().any(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl SliceState for WishlistState {
    type Action = WishlistAction;
    type ActionResult = WishlistActionResult;
    type Context = ();
    type Error = WishlistError;

    async fn apply(
        &mut self,
        action: WishlistAction,
        _ctx: &(),
    ) -> Result<WishlistActionResult, WishlistError> {
        match action {
            WishlistAction::Add { product } => {
                if self.contains(product.id) {
                    Ok(WishlistActionResult::Added { newly_added: false })
                } else {
                    self.entries.push(product);
                    Ok(WishlistActionResult::Added { newly_added: true })
                }
            }
            WishlistAction::Toggle { product } => {
                if self.contains(product.id) {
                    self.entries.retain(|p| p.id != product.id);
                    Ok(WishlistActionResult::Toggled { in_wishlist: false })
                } else {
                    self.entries.push(product);
                    Ok(WishlistActionResult::Toggled { in_wishlist: true })
                }
            }
            WishlistAction::Remove { id } => {
                self.entries.retain(|p| p.id != id);
                Ok(WishlistActionResult::Removed)
            }
            WishlistAction::Clear => {
                self.entries.clear();
                Ok(WishlistActionResult::Cleared)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    async fn apply(
        state: &mut WishlistState,
        action: WishlistAction,
    ) -> WishlistActionResult {
        SliceState::apply(state, action, &()).await.unwrap()
    }

    fn product(id: u64) -> Product {
        Product::new(id, format!("p{id}"), 10.0, Category::Misc)
    }

    #[tokio::test]
    async fn test_toggle_round_trip() {
        let mut wishlist = WishlistState::default();

        let result = apply(&mut wishlist, WishlistAction::Toggle { product: product(7) }).await;
        assert!(matches!(result, WishlistActionResult::Toggled { in_wishlist: true }));
        assert!(wishlist.contains(ProductId(7)));

        let result = apply(&mut wishlist, WishlistAction::Toggle { product: product(7) }).await;
        assert!(matches!(result, WishlistActionResult::Toggled { in_wishlist: false }));
        assert!(!wishlist.contains(ProductId(7)));
    }

    #[tokio::test]
    async fn test_add_is_idempotent() {
        let mut wishlist = WishlistState::default();

        let result = apply(&mut wishlist, WishlistAction::Add { product: product(1) }).await;
        assert!(matches!(result, WishlistActionResult::Added { newly_added: true }));

        let result = apply(&mut wishlist, WishlistAction::Add { product: product(1) }).await;
        assert!(matches!(result, WishlistActionResult::Added { newly_added: false }));

        assert_eq!(wishlist.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let mut wishlist = WishlistState::default();
        apply(&mut wishlist, WishlistAction::Add { product: product(1) }).await;
        apply(&mut wishlist, WishlistAction::Add { product: product(2) }).await;

        apply(&mut wishlist, WishlistAction::Remove { id: ProductId(1) }).await;
        assert!(!wishlist.contains(ProductId(1)));
        // Removing an absent id stays a no-op.
        apply(&mut wishlist, WishlistAction::Remove { id: ProductId(1) }).await;

        apply(&mut wishlist, WishlistAction::Clear).await;
        assert!(wishlist.is_empty());
    }
}

//! # Cart Client
//!
//! Provides a high-level API for interacting with the cart slice.
//! It wraps a `SliceClient<CartState>` and exposes domain-specific methods.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::cart_slice::{CartAction, CartActionResult, CartError};
use crate::clients::handle::{downcast_slice_error, SliceHandle};
use crate::framework::{FrameworkError, SliceClient};
use crate::model::{CartLine, CartState, PriceBreakdown, Product, ProductId, ShippingMethod};

/// Client for interacting with the cart slice actor.
#[derive(Clone)]
pub struct CartClient {
    inner: SliceClient<CartState>,
}

impl CartClient {
    pub fn new(inner: SliceClient<CartState>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl SliceHandle<CartState> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &SliceClient<CartState> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        downcast_slice_error(e, CartError::SliceCommunication)
    }
}

impl CartClient {
    /// Adds a product to the cart, merging quantities by product id.
    ///
    /// Returns the resulting quantity of the product's line.
    #[instrument(skip(self, product))]
    pub async fn add(&self, product: Product, quantity: u32) -> Result<u32, CartError> {
        debug!(product_id = %product.id, quantity, "Adding to cart");
        match self.apply(CartAction::Add { product, quantity }).await? {
            CartActionResult::Added { quantity } => Ok(quantity),
            _ => unreachable!("Add action must return Added result"),
        }
    }

    /// Sets a line's quantity verbatim. Quantities below 1 are rejected.
    #[instrument(skip(self))]
    pub async fn set_quantity(&self, id: ProductId, quantity: u32) -> Result<(), CartError> {
        debug!("Setting quantity");
        match self.apply(CartAction::SetQuantity { id, quantity }).await? {
            CartActionResult::QuantitySet => Ok(()),
            _ => unreachable!("SetQuantity action must return QuantitySet result"),
        }
    }

    /// Removes a line. A second remove of the same id is a no-op.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: ProductId) -> Result<(), CartError> {
        debug!("Removing from cart");
        match self.apply(CartAction::Remove { id }).await? {
            CartActionResult::Removed => Ok(()),
            _ => unreachable!("Remove action must return Removed result"),
        }
    }

    /// Empties the cart and deletes its persisted blob.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<(), CartError> {
        debug!("Clearing cart");
        match self.apply(CartAction::Clear).await? {
            CartActionResult::Cleared => Ok(()),
            _ => unreachable!("Clear action must return Cleared result"),
        }
    }

    /// Wholesale replaces the cart contents.
    #[instrument(skip(self, lines))]
    pub async fn replace(&self, lines: Vec<CartLine>) -> Result<(), CartError> {
        debug!(count = lines.len(), "Replacing cart contents");
        match self.apply(CartAction::Replace { lines }).await? {
            CartActionResult::Replaced => Ok(()),
            _ => unreachable!("Replace action must return Replaced result"),
        }
    }

    /// Applies a coupon code and returns the discount rate now in effect.
    #[instrument(skip(self))]
    pub async fn apply_coupon(&self, code: impl Into<String> + std::fmt::Debug) -> Result<f64, CartError> {
        debug!("Applying coupon");
        match self.apply(CartAction::ApplyCoupon { code: code.into() }).await? {
            CartActionResult::CouponApplied { rate } => Ok(rate),
            _ => unreachable!("ApplyCoupon action must return CouponApplied result"),
        }
    }

    /// Selects the shipping method used by the pricing derivation.
    #[instrument(skip(self))]
    pub async fn set_shipping(&self, method: ShippingMethod) -> Result<(), CartError> {
        debug!("Setting shipping method");
        match self.apply(CartAction::SetShipping { method }).await? {
            CartActionResult::ShippingSet => Ok(()),
            _ => unreachable!("SetShipping action must return ShippingSet result"),
        }
    }

    /// Derives the current price breakdown from a fresh snapshot.
    #[instrument(skip(self))]
    pub async fn breakdown(&self) -> Result<PriceBreakdown, CartError> {
        Ok(self.snapshot().await?.breakdown())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_apply};
    use crate::model::Category;

    #[tokio::test]
    async fn test_add_unwraps_resulting_quantity() {
        let (client, mut receiver) = create_mock_client::<CartState>(10);
        let cart_client = CartClient::new(client);

        let add_task = tokio::spawn(async move {
            let product = Product::new(1, "cable", 9.99, Category::Electronics);
            cart_client.add(product, 2).await
        });

        let (action, responder) = expect_apply(&mut receiver)
            .await
            .expect("Expected Apply request");
        match action {
            CartAction::Add { quantity, .. } => assert_eq!(quantity, 2),
            other => panic!("Expected Add action, got {other:?}"),
        }
        responder
            .send(Ok(CartActionResult::Added { quantity: 5 }))
            .unwrap();

        assert_eq!(add_task.await.unwrap().unwrap(), 5);
    }

    #[tokio::test]
    async fn test_slice_rejection_surfaces_typed_error() {
        let (client, mut receiver) = create_mock_client::<CartState>(10);
        let cart_client = CartClient::new(client);

        let coupon_task =
            tokio::spawn(async move { cart_client.apply_coupon("BOGUS").await });

        let (_action, responder) = expect_apply(&mut receiver)
            .await
            .expect("Expected Apply request");
        responder
            .send(Err(FrameworkError::SliceError(Box::new(
                CartError::UnknownCoupon("BOGUS".into()),
            ))))
            .unwrap();

        let result = coupon_task.await.unwrap();
        assert_eq!(result, Err(CartError::UnknownCoupon("BOGUS".into())));
    }

    #[tokio::test]
    async fn test_closed_actor_maps_to_communication_error() {
        let (client, receiver) = create_mock_client::<CartState>(10);
        drop(receiver);
        let cart_client = CartClient::new(client);

        let result = cart_client.clear().await;
        assert!(matches!(result, Err(CartError::SliceCommunication(_))));
    }
}

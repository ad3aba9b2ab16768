//! SliceState implementation for the cart.
//!
//! This module contains the transition logic that lets [`CartState`] be
//! managed by the generic [`crate::framework::SliceActor`].

use async_trait::async_trait;

use super::actions::{CartAction, CartActionResult};
use super::error::CartError;
use crate::framework::SliceState;
use crate::model::{CartLine, CartState, Coupon};

#[async_trait]
impl SliceState for CartState {
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = ();
    type Error = CartError;

    async fn apply(
        &mut self,
        action: CartAction,
        _ctx: &(),
    ) -> Result<CartActionResult, CartError> {
        match action {
            CartAction::Add { product, quantity } => {
                if quantity == 0 {
                    return Err(CartError::InvalidQuantity(0));
                }
                match self.lines.iter_mut().find(|l| l.product.id == product.id) {
                    Some(line) => {
                        line.quantity += quantity;
                        Ok(CartActionResult::Added {
                            quantity: line.quantity,
                        })
                    }
                    None => {
                        self.lines.push(CartLine::new(product, quantity));
                        Ok(CartActionResult::Added { quantity })
                    }
                }
            }
            CartAction::SetQuantity { id, quantity } => {
                if quantity < 1 {
                    return Err(CartError::InvalidQuantity(quantity));
                }
                if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == id) {
                    line.quantity = quantity;
                }
                Ok(CartActionResult::QuantitySet)
            }
            CartAction::Remove { id } => {
                self.lines.retain(|l| l.product.id != id);
                Ok(CartActionResult::Removed)
            }
            CartAction::Clear => {
                self.lines.clear();
                self.coupon = None;
                Ok(CartActionResult::Cleared)
            }
            CartAction::Replace { lines } => {
                self.lines = lines;
                Ok(CartActionResult::Replaced)
            }
            CartAction::ApplyCoupon { code } => {
                if code.trim().is_empty() {
                    self.coupon = None;
                    return Ok(CartActionResult::CouponApplied { rate: 0.0 });
                }
                match Coupon::lookup(&code) {
                    Some(coupon) => {
                        let rate = coupon.rate;
                        self.coupon = Some(coupon);
                        Ok(CartActionResult::CouponApplied { rate })
                    }
                    None => Err(CartError::UnknownCoupon(code)),
                }
            }
            CartAction::SetShipping { method } => {
                self.shipping = method;
                Ok(CartActionResult::ShippingSet)
            }
        }
    }
}

//! Mutation operations for the cart slice.
//!
//! These are handled by the [`SliceState::apply`](crate::framework::SliceState::apply)
//! implementation in [`super::state`].

use crate::model::{CartLine, Product, ProductId, ShippingMethod};

/// Mutation operations accepted by the cart slice.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds a product, merging into an existing line by product id.
    ///
    /// No stock-limit check happens here; that is a caller responsibility at
    /// the UI boundary.
    Add { product: Product, quantity: u32 },
    /// Sets a line's quantity verbatim.
    ///
    /// Quantities below 1 are rejected; callers wanting a line gone use
    /// `Remove`. An absent id is a no-op.
    SetQuantity { id: ProductId, quantity: u32 },
    /// Deletes a line. No error if the id is absent.
    Remove { id: ProductId },
    /// Empties the cart and drops the persisted blob entirely.
    Clear,
    /// Wholesale replacement, used by the checkout-completion flow.
    Replace { lines: Vec<CartLine> },
    /// Applies a coupon code. An empty code clears the current coupon.
    ApplyCoupon { code: String },
    SetShipping { method: ShippingMethod },
}

/// Results from cart actions - variants match 1:1 with [`CartAction`].
#[derive(Debug, Clone, PartialEq)]
pub enum CartActionResult {
    /// Result from Add - the merged line's resulting quantity.
    Added { quantity: u32 },
    QuantitySet,
    Removed,
    Cleared,
    Replaced,
    /// Result from ApplyCoupon - the discount rate now in effect.
    CouponApplied { rate: f64 },
    ShippingSet,
}

use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::model::cart::{CartLine, PriceBreakdown, ShippingMethod};
use crate::model::checkout::CheckoutForm;

/// Type-safe identifier for orders, generated locally at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// A placed order: the cart contents and pricing frozen at the moment of
/// checkout, plus the customer details that passed validation.
///
/// Serialized as the navigation payload for the confirmation view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub lines: Vec<CartLine>,
    pub pricing: PriceBreakdown,
    pub shipping: ShippingMethod,
    pub customer: CheckoutForm,
}

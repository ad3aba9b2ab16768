use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::model::product::{Product, ProductId};

/// One product entry in the cart paired with a quantity.
///
/// Invariant: `quantity >= 1`, and at most one line per product id exists in a
/// cart. Both are enforced by the cart slice's mutation boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// Shipping options offered at checkout, each with a fixed fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    #[default]
    Standard,
    Express,
}

impl ShippingMethod {
    pub fn fee(&self) -> f64 {
        match self {
            ShippingMethod::Standard => 50.0,
            ShippingMethod::Express => 100.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "standard",
            ShippingMethod::Express => "express",
        }
    }
}

impl Display for ShippingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recognized coupon codes and the discount fraction each applies to the
/// subtotal. Codes are matched case-insensitively.
pub const COUPONS: &[(&str, f64)] = &[("SAVE10", 0.10), ("WELCOME15", 0.15)];

/// A coupon accepted into the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub code: String,
    pub rate: f64,
}

impl Coupon {
    /// Looks a code up in the coupon table.
    pub fn lookup(code: &str) -> Option<Coupon> {
        let normalized = code.trim().to_ascii_uppercase();
        COUPONS
            .iter()
            .find(|(known, _)| *known == normalized)
            .map(|(known, rate)| Coupon {
                code: (*known).to_string(),
                rate: *rate,
            })
    }
}

/// The cart slice: lines plus the session's coupon and shipping choice.
///
/// Only `lines` is mirrored to persistent storage; coupon and shipping are
/// session state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartState {
    pub lines: Vec<CartLine>,
    pub coupon: Option<Coupon>,
    pub shipping: ShippingMethod,
}

/// Pricing derived from a cart snapshot. Never stored; recomputed per read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub subtotal: f64,
    pub discount: f64,
    pub shipping: f64,
    pub total: f64,
}

impl CartState {
    /// Rebuilds cart state from the persisted line array.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self {
            lines,
            coupon: None,
            shipping: ShippingMethod::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total item count across all lines.
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn line_for(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == id)
    }

    /// Derives the full price breakdown:
    /// subtotal, minus the coupon discount, plus the shipping fee.
    ///
    /// An empty cart prices to zero; the shipping fee only applies once there
    /// is something to ship.
    pub fn breakdown(&self) -> PriceBreakdown {
        if self.lines.is_empty() {
            return PriceBreakdown {
                subtotal: 0.0,
                discount: 0.0,
                shipping: 0.0,
                total: 0.0,
            };
        }
        let subtotal = round_cents(self.lines.iter().map(CartLine::line_total).sum());
        let rate = self.coupon.as_ref().map_or(0.0, |c| c.rate);
        let discount = round_cents(subtotal * rate);
        let shipping = self.shipping.fee();
        PriceBreakdown {
            subtotal,
            discount,
            shipping,
            total: round_cents(subtotal - discount + shipping),
        }
    }
}

/// Rounds to two decimal places for display and totals.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats an amount with two decimals, e.g. `72.5` as `"72.50"`.
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn line(id: u64, price: f64, quantity: u32) -> CartLine {
        CartLine::new(Product::new(id, format!("p{id}"), price, Category::Misc), quantity)
    }

    #[test]
    fn test_breakdown_with_coupon_and_shipping() {
        let cart = CartState {
            lines: vec![line(1, 10.0, 2), line(2, 5.0, 1)],
            coupon: Coupon::lookup("save10"),
            shipping: ShippingMethod::Standard,
        };
        let pricing = cart.breakdown();
        assert_eq!(pricing.subtotal, 25.0);
        assert_eq!(pricing.discount, 2.5);
        assert_eq!(pricing.shipping, 50.0);
        assert_eq!(pricing.total, 72.5);
        assert_eq!(format_amount(pricing.total), "72.50");
    }

    #[test]
    fn test_empty_cart_prices_to_zero() {
        let pricing = CartState::default().breakdown();
        assert_eq!(pricing.total, 0.0);
        assert_eq!(pricing.shipping, 0.0);
    }

    #[test]
    fn test_coupon_lookup_is_case_insensitive() {
        assert_eq!(Coupon::lookup("  welcome15 ").unwrap().rate, 0.15);
        assert!(Coupon::lookup("BOGUS").is_none());
    }

    #[test]
    fn test_express_costs_more_than_standard() {
        assert!(ShippingMethod::Express.fee() > ShippingMethod::Standard.fee());
    }
}

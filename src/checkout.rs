//! Simulated checkout flow.
//!
//! Checkout never talks to a payment provider. Placing an order validates the
//! form, freezes the cart contents and pricing into an [`Order`], empties the
//! cart by wholesale replacement, and navigates to the confirmation view with
//! the order as the navigation payload.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::cart_slice::CartError;
use crate::clients::{CartClient, SliceHandle};
use crate::model::{CheckoutForm, FieldError, Order, OrderId};
use crate::routes::{Navigator, Route};

/// Errors that can occur while placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// There is nothing to order.
    #[error("Cart is empty")]
    EmptyCart,

    /// One or more form fields failed validation. Fully recoverable by
    /// re-input; the messages are addressed per field.
    #[error("Checkout form validation failed ({} field(s))", .0.len())]
    Invalid(Vec<FieldError>),

    /// The cart slice could not be read or emptied.
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Drives the checkout flow against the cart slice and the navigation seam.
pub struct CheckoutService {
    cart: CartClient,
    navigator: Arc<dyn Navigator>,
    order_seq: AtomicU32,
}

impl CheckoutService {
    pub fn new(cart: CartClient, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            cart,
            navigator,
            order_seq: AtomicU32::new(1),
        }
    }

    /// Places an order from the current cart contents.
    ///
    /// On success the cart has been emptied and the shell has been navigated
    /// to the confirmation view carrying the order payload.
    #[instrument(skip(self, form))]
    pub async fn place_order(&self, form: CheckoutForm) -> Result<Order, CheckoutError> {
        debug!("place_order called");
        let cart = self.cart.snapshot().await?;
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        form.validate().map_err(CheckoutError::Invalid)?;

        let id = OrderId(self.order_seq.fetch_add(1, Ordering::SeqCst));
        let order = Order {
            id,
            pricing: cart.breakdown(),
            lines: cart.lines,
            shipping: cart.shipping,
            customer: form,
        };

        // Wholesale replace rather than clear: the persisted mirror keeps an
        // (empty) cart blob, matching an order-placement reset.
        self.cart.replace(Vec::new()).await?;

        let payload = serde_json::to_value(&order).ok();
        self.navigator.navigate(Route::OrderConfirmation, payload);
        info!(order_id = %order.id, total = order.pricing.total, "Order placed");

        Ok(order)
    }
}

/// Resolves the order the confirmation view should display.
///
/// Landing on the confirmation view without an order payload (e.g. a direct
/// link or a reload) redirects to the home view instead of erroring.
pub fn confirmation_order(
    navigator: &dyn Navigator,
    payload: Option<serde_json::Value>,
) -> Option<Order> {
    match payload.and_then(|value| serde_json::from_value(value).ok()) {
        Some(order) => Some(order),
        None => {
            debug!("No order payload, redirecting home");
            navigator.navigate(Route::Home, None);
            None
        }
    }
}

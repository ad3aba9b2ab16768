use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use shopfront::cart_slice::CartActionResult;
use shopfront::checkout::{confirmation_order, CheckoutError, CheckoutService};
use shopfront::clients::CartClient;
use shopfront::framework::mock::MockSliceClient;
use shopfront::model::{
    CartLine, CartState, Category, CheckoutForm, Coupon, Product, ShippingMethod,
};
use shopfront::routes::{Navigator, Route};

/// Navigator that records every navigation for later assertions.
#[derive(Default)]
struct RecordingNavigator {
    visits: Mutex<Vec<(Route, Option<serde_json::Value>)>>,
}

impl RecordingNavigator {
    fn visits(&self) -> Vec<(Route, Option<serde_json::Value>)> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route, payload: Option<serde_json::Value>) {
        self.visits.lock().unwrap().push((route, payload));
    }

    fn current_query(&self) -> HashMap<String, String> {
        HashMap::new()
    }
}

fn valid_form() -> CheckoutForm {
    CheckoutForm {
        first_name: "Alice".into(),
        last_name: "Smith".into(),
        email: "alice@example.com".into(),
        address: "1 Main St".into(),
        city: "Springfield".into(),
        postal_code: "12345".into(),
        phone: String::new(),
    }
}

fn filled_cart() -> CartState {
    CartState {
        lines: vec![
            CartLine::new(Product::new(1, "cable", 10.0, Category::Electronics), 2),
            CartLine::new(Product::new(2, "mouse", 5.0, Category::Electronics), 1),
        ],
        coupon: Coupon::lookup("SAVE10"),
        shipping: ShippingMethod::Standard,
    }
}

/// Checkout flow against a mocked cart slice: the order freezes the snapshot
/// pricing, the cart is emptied by wholesale replace, and the shell is
/// navigated to the confirmation view with the order payload.
#[tokio::test]
async fn test_place_order_happy_path() {
    let mut cart_mock = MockSliceClient::<CartState>::new();
    cart_mock.expect_snapshot().return_ok(filled_cart());
    cart_mock.expect_apply().return_ok(CartActionResult::Replaced);

    let navigator = Arc::new(RecordingNavigator::default());
    let checkout = CheckoutService::new(CartClient::new(cart_mock.client()), navigator.clone());

    let order = checkout.place_order(valid_form()).await.unwrap();

    assert_eq!(order.pricing.subtotal, 25.0);
    assert_eq!(order.pricing.discount, 2.5);
    assert_eq!(order.pricing.total, 72.5);
    assert_eq!(order.lines.len(), 2);

    let visits = navigator.visits();
    assert_eq!(visits.len(), 1);
    assert_eq!(visits[0].0, Route::OrderConfirmation);
    let payload = visits[0].1.clone().expect("confirmation needs a payload");
    let carried: shopfront::model::Order = serde_json::from_value(payload).unwrap();
    assert_eq!(carried, order);

    cart_mock.verify();
}

#[tokio::test]
async fn test_empty_cart_is_refused() {
    let mut cart_mock = MockSliceClient::<CartState>::new();
    cart_mock.expect_snapshot().return_ok(CartState::default());

    let navigator = Arc::new(RecordingNavigator::default());
    let checkout = CheckoutService::new(CartClient::new(cart_mock.client()), navigator.clone());

    let result = checkout.place_order(valid_form()).await;
    assert!(matches!(result, Err(CheckoutError::EmptyCart)));
    assert!(navigator.visits().is_empty());

    cart_mock.verify();
}

/// Validation failures block submission with field-specific messages and
/// leave the cart untouched (no Replace is ever sent).
#[tokio::test]
async fn test_invalid_form_blocks_submission() {
    let mut cart_mock = MockSliceClient::<CartState>::new();
    cart_mock.expect_snapshot().return_ok(filled_cart());

    let navigator = Arc::new(RecordingNavigator::default());
    let checkout = CheckoutService::new(CartClient::new(cart_mock.client()), navigator.clone());

    let mut form = valid_form();
    form.email = "not-an-email".into();
    form.city = " ".into();

    let result = checkout.place_order(form).await;
    match result {
        Err(CheckoutError::Invalid(errors)) => {
            let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
            assert!(fields.contains(&"email"));
            assert!(fields.contains(&"city"));
        }
        other => panic!("Expected validation failure, got {other:?}"),
    }
    assert!(navigator.visits().is_empty());

    cart_mock.verify();
}

/// Landing on the confirmation view without an order payload redirects home.
#[test]
fn test_confirmation_without_payload_redirects_home() {
    let navigator = RecordingNavigator::default();

    assert!(confirmation_order(&navigator, None).is_none());
    assert!(confirmation_order(&navigator, Some(serde_json::json!({"junk": true}))).is_none());

    let visits = navigator.visits();
    assert_eq!(visits.len(), 2);
    assert!(visits.iter().all(|(route, _)| *route == Route::Home));
}

/// With a valid payload the confirmation view shows the order and stays put.
#[test]
fn test_confirmation_with_payload_shows_order() {
    let navigator = RecordingNavigator::default();
    let cart = filled_cart();
    let order = shopfront::model::Order {
        id: shopfront::model::OrderId(1),
        pricing: cart.breakdown(),
        lines: cart.lines,
        shipping: cart.shipping,
        customer: valid_form(),
    };

    let payload = serde_json::to_value(&order).unwrap();
    let shown = confirmation_order(&navigator, Some(payload)).unwrap();
    assert_eq!(shown, order);
    assert!(navigator.visits().is_empty());
}

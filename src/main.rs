//! Demo walk-through of the storefront state engine.
//!
//! Seeds a small catalog, browses it through the filter pipeline, fills the
//! cart, applies a coupon and places a simulated order. Run with
//! `RUST_LOG=info cargo run` to watch the slices commit each step.

use std::collections::HashMap;
use std::sync::Arc;

use shopfront::clients::SliceHandle;
use shopfront::checkout::CheckoutService;
use shopfront::lifecycle::{setup_tracing, StorefrontSystem};
use shopfront::model::{
    format_amount, Category, CheckoutForm, Product, ShippingMethod, SortKey,
};
use shopfront::routes::{Navigator, Route};
use tracing::{error, info, Instrument};

/// Navigator that just logs where the shell would go.
struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, route: Route, payload: Option<serde_json::Value>) {
        info!(path = %route.path(), with_payload = payload.is_some(), "Navigate");
    }

    fn current_query(&self) -> HashMap<String, String> {
        HashMap::new()
    }
}

fn demo_product(id: u64, title: &str, price: f64, category: Category, rating: f32) -> Product {
    let mut product = Product::new(id, title, price, category);
    product.rating = rating;
    product
}

fn demo_catalog() -> Vec<Product> {
    vec![
        demo_product(1, "Wireless Mouse", 25.0, Category::Electronics, 4.3),
        demo_product(2, "Mechanical Keyboard", 89.5, Category::Electronics, 4.7),
        demo_product(3, "USB-C Cable", 9.99, Category::Electronics, 4.1),
        demo_product(4, "Silver Pendant", 129.0, Category::Jewelry, 4.8),
        demo_product(5, "Denim Jacket", 64.0, Category::MensClothing, 3.9),
        demo_product(6, "Summer Dress", 49.0, Category::WomensClothing, 4.4),
        demo_product(7, "Monitor Stand", 39.0, Category::Electronics, 3.5),
    ]
}

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting storefront demo");

    let system = StorefrontSystem::new().map_err(|e| e.to_string())?;

    // Seed the catalog the way a remote refresh would.
    let count = system
        .catalog
        .complete_load(demo_catalog())
        .await
        .map_err(|e| e.to_string())?;
    info!(count, "Catalog loaded");

    // Browse electronics, cheapest first.
    let span = tracing::info_span!("browsing");
    let page = async {
        system
            .filters
            .set_category(Some(Category::Electronics))
            .await
            .map_err(|e| e.to_string())?;
        system
            .filters
            .set_sort(SortKey::PriceAsc)
            .await
            .map_err(|e| e.to_string())?;
        system.browse().await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    info!(
        items = page.items.len(),
        total = page.total_items,
        "Derived listing page"
    );

    // Fill the cart: the cable twice (merged into one line) plus the mouse.
    let span = tracing::info_span!("shopping");
    async {
        let cable = page.items[0].clone();
        let mouse = page.items[1].clone();

        system
            .recently_viewed
            .record(cable.clone())
            .await
            .map_err(|e| e.to_string())?;

        system.cart.add(cable.clone(), 1).await.map_err(|e| e.to_string())?;
        system.cart.add(cable, 1).await.map_err(|e| e.to_string())?;
        system.cart.add(mouse, 1).await.map_err(|e| e.to_string())?;

        let rate = system
            .cart
            .apply_coupon("SAVE10")
            .await
            .map_err(|e| e.to_string())?;
        info!(rate, "Coupon accepted");

        system
            .cart
            .set_shipping(ShippingMethod::Standard)
            .await
            .map_err(|e| e.to_string())?;

        let pricing = system.cart.breakdown().await.map_err(|e| e.to_string())?;
        info!(
            subtotal = %format_amount(pricing.subtotal),
            discount = %format_amount(pricing.discount),
            shipping = %format_amount(pricing.shipping),
            total = %format_amount(pricing.total),
            "Cart priced"
        );
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    // Wishlist the pendant.
    let pendant = demo_product(4, "Silver Pendant", 129.0, Category::Jewelry, 4.8);
    let in_wishlist = system
        .wishlist
        .toggle(pendant)
        .await
        .map_err(|e| e.to_string())?;
    info!(in_wishlist, "Wishlist toggled");

    // Place a simulated order; this empties the cart and "navigates" to the
    // confirmation view.
    let checkout = CheckoutService::new(system.cart.clone(), Arc::new(ConsoleNavigator));
    let form = CheckoutForm {
        first_name: "Alice".into(),
        last_name: "Smith".into(),
        email: "alice@example.com".into(),
        address: "1 Main St".into(),
        city: "Springfield".into(),
        postal_code: "12345".into(),
        phone: String::new(),
    };

    let span = tracing::info_span!("checkout");
    let order_result = async {
        info!("Placing order");
        checkout.place_order(form).await
    }
    .instrument(span)
    .await;

    match order_result {
        Ok(order) => info!(
            order_id = %order.id,
            total = %format_amount(order.pricing.total),
            "Order confirmed"
        ),
        Err(e) => error!(error = %e, "Order failed"),
    }

    let cart_after = system.cart.snapshot().await.map_err(|e| e.to_string())?;
    info!(lines = cart_after.lines.len(), "Cart after checkout");

    // The checkout service holds a cart client; drop it so the cart actor's
    // channel can close during shutdown.
    drop(checkout);

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Demo completed");
    Ok(())
}

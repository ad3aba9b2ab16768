use shopfront::clients::SliceHandle;
use shopfront::lifecycle::StorefrontSystem;
use shopfront::model::{Category, Product, ProductId, ShippingMethod};
use shopfront::storage::{KEY_CART, KEY_WISHLIST};

fn product(id: u64, title: &str, price: f64, category: Category) -> Product {
    Product::new(id, title, price, category)
}

fn system_in(dir: &tempfile::TempDir) -> StorefrontSystem {
    StorefrontSystem::with_data_dir(Some(dir.path().to_path_buf()))
        .expect("Failed to start storefront system")
}

/// Full end-to-end test of the cart flow, persistence mirror included.
#[tokio::test]
async fn test_full_cart_flow() {
    let dir = tempfile::tempdir().unwrap();
    let system = system_in(&dir);
    let store = system.store();

    let cable = product(1, "cable", 10.0, Category::Electronics);
    let mouse = product(2, "mouse", 5.0, Category::Electronics);

    // Repeated adds of the same product merge into one line.
    system.cart.add(cable.clone(), 1).await.unwrap();
    let merged_quantity = system.cart.add(cable.clone(), 1).await.unwrap();
    assert_eq!(merged_quantity, 2);
    system.cart.add(mouse, 1).await.unwrap();

    let cart = system.cart.snapshot().await.unwrap();
    assert_eq!(cart.lines.len(), 2);
    assert_eq!(cart.total_items(), 3);

    // Worked pricing example: subtotal 25.00, 10% coupon, standard shipping.
    system.cart.apply_coupon("SAVE10").await.unwrap();
    system.cart.set_shipping(ShippingMethod::Standard).await.unwrap();
    let pricing = system.cart.breakdown().await.unwrap();
    assert_eq!(pricing.subtotal, 25.0);
    assert_eq!(pricing.discount, 2.5);
    assert_eq!(pricing.shipping, 50.0);
    assert_eq!(pricing.total, 72.5);

    // Every mutation mirrored the line array.
    assert!(store.contains(KEY_CART));

    // Remove is idempotent: the second call is a no-op, not an error.
    system.cart.remove(ProductId(2)).await.unwrap();
    system.cart.remove(ProductId(2)).await.unwrap();
    let cart = system.cart.snapshot().await.unwrap();
    assert_eq!(cart.lines.len(), 1);

    // Clear empties the cart and deletes the persisted blob entirely.
    system.cart.clear().await.unwrap();
    let cart = system.cart.snapshot().await.unwrap();
    assert!(cart.is_empty());
    assert!(!store.contains(KEY_CART));

    system.shutdown().await.expect("Failed to shutdown system");
}

/// A restarted system reloads the mirrored blobs from the same directory.
#[tokio::test]
async fn test_cart_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let system = system_in(&dir);
    system
        .cart
        .add(product(7, "pendant", 129.0, Category::Jewelry), 2)
        .await
        .unwrap();
    system
        .wishlist
        .add(product(8, "dress", 49.0, Category::WomensClothing))
        .await
        .unwrap();
    system.shutdown().await.unwrap();

    let system = system_in(&dir);
    let cart = system.cart.snapshot().await.unwrap();
    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.lines[0].product.id, ProductId(7));
    assert_eq!(cart.lines[0].quantity, 2);
    assert!(system.wishlist.contains(ProductId(8)).await.unwrap());
    system.shutdown().await.unwrap();
}

/// Corrupt blobs load as empty defaults instead of failing startup.
#[tokio::test]
async fn test_corrupt_blob_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cart.json"), "]{ definitely not json").unwrap();

    let system = system_in(&dir);
    let cart = system.cart.snapshot().await.unwrap();
    assert!(cart.is_empty());
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_wishlist_toggle_round_trip_and_mirror() {
    let dir = tempfile::tempdir().unwrap();
    let system = system_in(&dir);
    let store = system.store();
    let pendant = product(7, "pendant", 129.0, Category::Jewelry);

    let in_wishlist = system.wishlist.toggle(pendant.clone()).await.unwrap();
    assert!(in_wishlist);
    assert!(system.wishlist.contains(ProductId(7)).await.unwrap());

    let in_wishlist = system.wishlist.toggle(pendant).await.unwrap();
    assert!(!in_wishlist);
    assert!(!system.wishlist.contains(ProductId(7)).await.unwrap());

    // The mirror wrote the (now empty) array rather than deleting the blob.
    assert!(store.contains(KEY_WISHLIST));

    system.shutdown().await.unwrap();
}

/// Filtering, sorting and paginating through the whole system.
#[tokio::test]
async fn test_browse_derives_pages_from_catalog_and_filters() {
    let dir = tempfile::tempdir().unwrap();
    let system = system_in(&dir);

    let catalog: Vec<Product> = (1..=23)
        .map(|id| product(id, &format!("gadget {id}"), id as f64, Category::Electronics))
        .collect();
    system.catalog.complete_load(catalog).await.unwrap();

    // 23 items at 12 per page: page 2 holds the last 11.
    system.filters.set_per_page(12).await.unwrap();
    system.filters.set_page(2).await.unwrap();
    let page = system.browse().await.unwrap();
    assert_eq!(page.total_items, 23);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.items.len(), 11);
    assert_eq!(page.items[0].id, ProductId(13));

    // Changing a criterion resets to page 1.
    let filters = system.filters.set_price_range(5.0, 20.0).await.unwrap();
    assert_eq!(filters.page, 1);
    let page = system.browse().await.unwrap();
    assert_eq!(page.total_items, 16);
    assert_eq!(page.page, 1);

    // The derived page is always a subset of the catalog.
    let catalog_state = system.catalog.snapshot().await.unwrap();
    for item in &page.items {
        assert!(catalog_state.products.contains(item));
    }

    system.shutdown().await.unwrap();
}

/// Concurrent adds against one cart actor serialize without losing updates.
#[tokio::test]
async fn test_concurrent_adds_merge_completely() {
    let dir = tempfile::tempdir().unwrap();
    let system = system_in(&dir);

    let mut handles = vec![];
    for _ in 0..10 {
        let cart = system.cart.clone();
        handles.push(tokio::spawn(async move {
            cart.add(product(1, "cable", 10.0, Category::Electronics), 2).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let cart = system.cart.snapshot().await.unwrap();
    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.lines[0].quantity, 20);

    system.shutdown().await.unwrap();
}

/// A rejected action must not disturb committed state or the mirror.
#[tokio::test]
async fn test_rejected_action_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let system = system_in(&dir);

    system
        .cart
        .add(product(1, "cable", 10.0, Category::Electronics), 3)
        .await
        .unwrap();

    let err = system.cart.set_quantity(ProductId(1), 0).await;
    assert!(err.is_err());

    let cart = system.cart.snapshot().await.unwrap();
    assert_eq!(cart.lines[0].quantity, 3);

    system.shutdown().await.unwrap();
}

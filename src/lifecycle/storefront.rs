use std::path::PathBuf;
use std::sync::Arc;

use tracing::{error, info};

use crate::catalog_slice::{self, CatalogError, CatalogState};
use crate::cart_slice;
use crate::clients::{
    CartClient, CatalogClient, FilterClient, PopupClient, RecentClient, SliceHandle,
    WishlistClient,
};
use crate::filter_slice;
use crate::model::{CartState, FilterState};
use crate::pipeline::{self, PageView};
use crate::popup_slice;
use crate::recent_slice::{self, RecentState};
use crate::storage::{
    CartMirror, JsonStore, RecentMirror, StorageError, WishlistMirror, KEY_CART,
    KEY_RECENTLY_VIEWED, KEY_WISHLIST,
};
use crate::wishlist_slice::{self, WishlistState};

/// The main runtime orchestrator for the storefront state engine.
///
/// `StorefrontSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all slice actors
/// - **Initial Load**: Reading the persisted blobs exactly once at startup
/// - **Mirror Wiring**: Attaching the write-through persistence hooks to the
///   slices that mirror to disk
///
/// # Architecture
///
/// Six slice actors run independently: cart, wishlist, catalog, filters,
/// popups and recently viewed. Cart, wishlist and recently viewed carry a
/// persistence mirror; the rest are session state. None of the actors know
/// about each other; anything cross-slice (like deriving the current listing
/// page) happens here, over snapshots.
///
/// # Example
///
/// ```ignore
/// let system = StorefrontSystem::new()?;
///
/// system.catalog.refresh(&fetcher).await?;
/// system.cart.add(product, 1).await?;
/// let page = system.browse().await?;
///
/// system.shutdown().await?;
/// ```
pub struct StorefrontSystem {
    /// Client for the cart slice
    pub cart: CartClient,

    /// Client for the wishlist slice
    pub wishlist: WishlistClient,

    /// Client for the catalog slice
    pub catalog: CatalogClient,

    /// Client for the filter slice
    pub filters: FilterClient,

    /// Client for the popup slice
    pub popups: PopupClient,

    /// Client for the recently-viewed slice
    pub recently_viewed: RecentClient,

    store: Arc<JsonStore>,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Creates a system persisting to the platform-default data directory.
    pub fn new() -> Result<Self, StorageError> {
        Self::with_data_dir(None)
    }

    /// Creates and initializes a system with all slice actors running.
    ///
    /// This method:
    /// 1. Opens the blob store and reads the persisted cart, wishlist and
    ///    recently-viewed blobs (missing or corrupt blobs become empty
    ///    defaults)
    /// 2. Creates each slice actor seeded with its initial state
    /// 3. Attaches the persistence mirrors as commit hooks
    /// 4. Spawns each actor in its own Tokio task
    pub fn with_data_dir(dir: Option<PathBuf>) -> Result<Self, StorageError> {
        let store = Arc::new(JsonStore::open(dir)?);

        // Persisted blobs are read exactly once; afterwards the slices own
        // the data and the store is a write-through mirror.
        let cart_initial = CartState::from_lines(store.load_or_default(KEY_CART));
        let wishlist_initial = WishlistState::from_entries(store.load_or_default(KEY_WISHLIST));
        let recent_initial =
            RecentState::from_products(store.load_or_default(KEY_RECENTLY_VIEWED));

        let (cart_actor, cart) = cart_slice::new(cart_initial);
        let cart_actor = cart_actor.with_hook(CartMirror::new(store.clone()));

        let (wishlist_actor, wishlist) = wishlist_slice::new(wishlist_initial);
        let wishlist_actor = wishlist_actor.with_hook(WishlistMirror::new(store.clone()));

        let (recent_actor, recently_viewed) = recent_slice::new(recent_initial);
        let recent_actor = recent_actor.with_hook(RecentMirror::new(store.clone()));

        let (catalog_actor, catalog) = catalog_slice::new(CatalogState::default());
        let (filter_actor, filters) = filter_slice::new(FilterState::default());
        let (popup_actor, popups) = popup_slice::new();

        let handles = vec![
            tokio::spawn(cart_actor.run(())),
            tokio::spawn(wishlist_actor.run(())),
            tokio::spawn(recent_actor.run(())),
            tokio::spawn(catalog_actor.run(())),
            tokio::spawn(filter_actor.run(())),
            tokio::spawn(popup_actor.run(())),
        ];

        info!("Storefront system started");

        Ok(Self {
            cart,
            wishlist,
            catalog,
            filters,
            popups,
            recently_viewed,
            store,
            handles,
        })
    }

    /// The blob store backing the persistence mirrors.
    pub fn store(&self) -> Arc<JsonStore> {
        self.store.clone()
    }

    /// Derives the listing page from the current catalog and filter slices.
    pub async fn browse(&self) -> Result<PageView, CatalogError> {
        let catalog = self.catalog.snapshot().await?;
        let filters = self
            .filters
            .snapshot()
            .await
            .map_err(|e| CatalogError::SliceCommunication(e.to_string()))?;
        Ok(pipeline::derive_page(&catalog.products, &filters))
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes their channels; each actor drains its
    /// mailbox and exits its event loop. Returns an error if any actor task
    /// panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");

        drop(self.cart);
        drop(self.wishlist);
        drop(self.catalog);
        drop(self.filters);
        drop(self.popups);
        drop(self.recently_viewed);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Slice actor task failed: {:?}", e);
                return Err(format!("Slice actor task failed: {:?}", e));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}

//! # Catalog Client
//!
//! Provides a high-level API for interacting with the catalog slice,
//! including the refresh flow that drives the remote fetcher.

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use crate::catalog_slice::{CatalogAction, CatalogActionResult, CatalogError, CatalogState};
use crate::clients::handle::{downcast_slice_error, SliceHandle};
use crate::framework::{FrameworkError, SliceClient};
use crate::model::{Category, Product, ProductId};
use crate::remote::CatalogFetcher;

/// Client for interacting with the catalog slice actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: SliceClient<CatalogState>,
}

impl CatalogClient {
    pub fn new(inner: SliceClient<CatalogState>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl SliceHandle<CatalogState> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &SliceClient<CatalogState> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        downcast_slice_error(e, CatalogError::SliceCommunication)
    }
}

impl CatalogClient {
    /// Replaces the product list directly, e.g. with seeded demo data.
    #[instrument(skip(self, products))]
    pub async fn complete_load(&self, products: Vec<Product>) -> Result<usize, CatalogError> {
        debug!(count = products.len(), "Loading products into catalog");
        match self.apply(CatalogAction::LoadSucceeded { products }).await? {
            CatalogActionResult::Loaded { count } => Ok(count),
            _ => unreachable!("LoadSucceeded action must return Loaded result"),
        }
    }

    /// Fetches the whole collection and commits the outcome.
    ///
    /// On a fetch failure the slice keeps its previous products and records
    /// the failure; recovery is an explicit retry, i.e. calling this again.
    #[instrument(skip(self, fetcher))]
    pub async fn refresh(&self, fetcher: &CatalogFetcher) -> Result<usize, CatalogError> {
        self.apply(CatalogAction::LoadStarted).await?;
        match fetcher.products().await {
            Ok(products) => self.complete_load(products).await,
            Err(e) => {
                warn!(error = %e, "Catalog fetch failed");
                self.apply(CatalogAction::LoadFailed { reason: e.to_string() }).await?;
                Err(CatalogError::Fetch(e.to_string()))
            }
        }
    }

    /// Fetches one category's products and commits the outcome.
    #[instrument(skip(self, fetcher))]
    pub async fn refresh_category(
        &self,
        fetcher: &CatalogFetcher,
        category: Category,
    ) -> Result<usize, CatalogError> {
        self.apply(CatalogAction::LoadStarted).await?;
        match fetcher.products_in_category(category).await {
            Ok(products) => self.complete_load(products).await,
            Err(e) => {
                warn!(error = %e, "Category fetch failed");
                self.apply(CatalogAction::LoadFailed { reason: e.to_string() }).await?;
                Err(CatalogError::Fetch(e.to_string()))
            }
        }
    }

    /// Fetches the category list and commits it.
    #[instrument(skip(self, fetcher))]
    pub async fn refresh_categories(&self, fetcher: &CatalogFetcher) -> Result<usize, CatalogError> {
        match fetcher.categories().await {
            Ok(categories) => {
                match self.apply(CatalogAction::CategoriesLoaded { categories }).await? {
                    CatalogActionResult::CategoriesSet { count } => Ok(count),
                    _ => unreachable!("CategoriesLoaded action must return CategoriesSet result"),
                }
            }
            Err(e) => {
                warn!(error = %e, "Category list fetch failed");
                Err(CatalogError::Fetch(e.to_string()))
            }
        }
    }

    /// Fetches one product's detail record and merges it into the list.
    #[instrument(skip(self, fetcher))]
    pub async fn load_product(
        &self,
        fetcher: &CatalogFetcher,
        id: ProductId,
    ) -> Result<Product, CatalogError> {
        match fetcher.product(id).await {
            Ok(product) => {
                self.apply(CatalogAction::Upsert { product: product.clone() }).await?;
                Ok(product)
            }
            Err(e) => {
                warn!(%id, error = %e, "Product fetch failed");
                Err(CatalogError::Fetch(e.to_string()))
            }
        }
    }
}

//! SliceState implementation for the catalog.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::actions::{CatalogAction, CatalogActionResult};
use super::error::CatalogError;
use crate::framework::SliceState;
use crate::model::{Category, Product};

/// Where the catalog currently stands with respect to the remote API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    /// A load failed; the message is what the UI surfaces next to the retry
    /// button. Previously loaded products remain available.
    Failed(String),
}

/// The catalog slice: products, categories and fetch status.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub status: FetchStatus,
}

impl CatalogState {
    pub fn product(&self, id: crate::model::ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

#[async_trait]
impl SliceState for CatalogState {
    type Action = CatalogAction;
    type ActionResult = CatalogActionResult;
    type Context = ();
    type Error = CatalogError;

    async fn apply(
        &mut self,
        action: CatalogAction,
        _ctx: &(),
    ) -> Result<CatalogActionResult, CatalogError> {
        match action {
            CatalogAction::LoadStarted => {
                self.status = FetchStatus::Loading;
                Ok(CatalogActionResult::Loading)
            }
            CatalogAction::LoadSucceeded { products } => {
                self.products = products;
                self.status = FetchStatus::Ready;
                Ok(CatalogActionResult::Loaded {
                    count: self.products.len(),
                })
            }
            CatalogAction::LoadFailed { reason } => {
                // Products from the last successful load stay visible.
                self.status = FetchStatus::Failed(reason);
                Ok(CatalogActionResult::Failed)
            }
            CatalogAction::CategoriesLoaded { categories } => {
                self.categories = categories;
                Ok(CatalogActionResult::CategoriesSet {
                    count: self.categories.len(),
                })
            }
            CatalogAction::Upsert { product } => {
                match self.products.iter_mut().find(|p| p.id == product.id) {
                    Some(existing) => *existing = product,
                    None => self.products.push(product),
                }
                Ok(CatalogActionResult::Upserted)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, ProductId};

    async fn apply(state: &mut CatalogState, action: CatalogAction) -> CatalogActionResult {
        SliceState::apply(state, action, &()).await.unwrap()
    }

    fn product(id: u64, title: &str) -> Product {
        Product::new(id, title, 10.0, Category::Electronics)
    }

    #[tokio::test]
    async fn test_failed_load_preserves_previous_products() {
        let mut catalog = CatalogState::default();
        apply(
            &mut catalog,
            CatalogAction::LoadSucceeded { products: vec![product(1, "a"), product(2, "b")] },
        )
        .await;

        apply(&mut catalog, CatalogAction::LoadStarted).await;
        apply(&mut catalog, CatalogAction::LoadFailed { reason: "timeout".into() }).await;

        assert_eq!(catalog.products.len(), 2);
        assert_eq!(catalog.status, FetchStatus::Failed("timeout".into()));
    }

    #[tokio::test]
    async fn test_upsert_replaces_by_id() {
        let mut catalog = CatalogState::default();
        apply(
            &mut catalog,
            CatalogAction::LoadSucceeded { products: vec![product(1, "old")] },
        )
        .await;

        apply(&mut catalog, CatalogAction::Upsert { product: product(1, "new") }).await;
        apply(&mut catalog, CatalogAction::Upsert { product: product(9, "extra") }).await;

        assert_eq!(catalog.products.len(), 2);
        assert_eq!(catalog.product(ProductId(1)).unwrap().title, "new");
    }
}

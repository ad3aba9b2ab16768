//! Mutation operations for the catalog slice.

use crate::model::{Category, Product};

/// Mutation operations accepted by the catalog slice.
#[derive(Debug, Clone)]
pub enum CatalogAction {
    /// Marks a load as in flight.
    LoadStarted,
    /// Replaces the product list with a freshly fetched one.
    LoadSucceeded { products: Vec<Product> },
    /// Records a failed load. The previous product list is preserved.
    LoadFailed { reason: String },
    /// Replaces the category list.
    CategoriesLoaded { categories: Vec<Category> },
    /// Merges a single product (e.g. from a detail fetch) into the list.
    Upsert { product: Product },
}

/// Results from catalog actions - variants match 1:1 with [`CatalogAction`].
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogActionResult {
    Loading,
    /// Result from LoadSucceeded - how many products are now held.
    Loaded { count: usize },
    Failed,
    CategoriesSet { count: usize },
    Upserted,
}

//! Remote catalog fetcher.
//!
//! Issues read-only GET requests against a third-party catalog API and
//! normalizes its heterogeneous record shapes into the canonical
//! [`Product`]. Different endpoints disagree on envelopes (`[...]` vs
//! `{"products": [...]}`), field names (`image` vs `images`, `title` vs
//! `name`) and rating shapes (a bare number vs `{"rate": ..., "count": ...}`);
//! all of that is absorbed here so nothing downstream ever sees a raw record.
//!
//! There is no retry, no caching and no request deduplication: concurrent
//! identical fetches each resolve independently, and recovering from a
//! failure is an explicit new call.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use tokio::sync::oneshot;
use tracing::{debug, instrument};

use crate::model::{original_price_for, Category, Product, ProductId};

/// Catalog API used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error("Fetch aborted")]
    Aborted,
}

// ---------------------------------------------------------------------------
// CatalogFetcherBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CatalogFetcher`].
pub struct CatalogFetcherBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for CatalogFetcherBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl CatalogFetcherBuilder {
    /// Points the fetcher at a different catalog API.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the per-request HTTP timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the fetcher and its HTTP client.
    pub fn build(self) -> Result<CatalogFetcher, FetchError> {
        let http = reqwest::Client::builder().timeout(self.timeout).build()?;
        Ok(CatalogFetcher {
            http,
            base_url: self.base_url.trim_end_matches('/').to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// CatalogFetcher
// ---------------------------------------------------------------------------

/// Read-only client for the remote product catalog.
pub struct CatalogFetcher {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogFetcher {
    pub fn builder() -> CatalogFetcherBuilder {
        CatalogFetcherBuilder::default()
    }

    /// Fetcher against [`DEFAULT_BASE_URL`] with default settings.
    pub fn new() -> Result<Self, FetchError> {
        Self::builder().build()
    }

    async fn get_json(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<serde_json::Value, FetchError> {
        let url = format!("{}/{path}", self.base_url);
        debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Fetches the whole product collection.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, FetchError> {
        let value = self.get_json("products", &[]).await?;
        decode_products(value)
    }

    /// Fetches the products of a single category.
    #[instrument(skip(self))]
    pub async fn products_in_category(
        &self,
        category: Category,
    ) -> Result<Vec<Product>, FetchError> {
        let value = self
            .get_json("products", &[("category", category.as_str().to_string())])
            .await?;
        decode_products(value)
    }

    /// Fetches one product by id.
    #[instrument(skip(self))]
    pub async fn product(&self, id: ProductId) -> Result<Product, FetchError> {
        let value = self.get_json(&format!("products/{id}"), &[]).await?;
        let raw: RawProduct = serde_json::from_value(value)?;
        Ok(raw.normalize())
    }

    /// Fetches one product by id, bailing out early if `abort` fires.
    ///
    /// The detail view threads an abort signal through its fetch so leaving
    /// the view cannot write into state that no longer wants the result.
    pub async fn product_with_abort(
        &self,
        id: ProductId,
        mut abort: oneshot::Receiver<()>,
    ) -> Result<Product, FetchError> {
        tokio::select! {
            biased;
            _ = &mut abort => Err(FetchError::Aborted),
            result = self.product(id) => result,
        }
    }

    /// Fetches the category list, normalized and deduplicated in input order.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<Category>, FetchError> {
        let value = self.get_json("products/categories", &[]).await?;
        decode_categories(value)
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

fn decode_products(value: serde_json::Value) -> Result<Vec<Product>, FetchError> {
    let records = match value {
        serde_json::Value::Array(records) => records,
        serde_json::Value::Object(mut envelope) => match envelope.remove("products") {
            Some(serde_json::Value::Array(records)) => records,
            _ => {
                return Err(FetchError::UnexpectedShape(
                    "object without a products array".into(),
                ))
            }
        },
        other => {
            return Err(FetchError::UnexpectedShape(format!(
                "expected array or envelope, got {other}"
            )))
        }
    };

    records
        .into_iter()
        .map(|record| {
            let raw: RawProduct = serde_json::from_value(record)?;
            Ok(raw.normalize())
        })
        .collect()
}

fn decode_categories(value: serde_json::Value) -> Result<Vec<Category>, FetchError> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCategory {
        Name(String),
        Named { name: String },
    }

    let raw: Vec<RawCategory> = serde_json::from_value(value)?;
    let mut categories = Vec::new();
    for entry in raw {
        let name = match entry {
            RawCategory::Name(name) => name,
            RawCategory::Named { name } => name,
        };
        let category = Category::from_raw(&name);
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    Ok(categories)
}

/// A product record as some catalog endpoint shaped it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProduct {
    id: u64,
    #[serde(default, alias = "name")]
    title: String,
    #[serde(default)]
    description: String,
    price: f64,
    #[serde(default)]
    category: String,
    #[serde(default)]
    brand: Option<String>,
    #[serde(default, alias = "image")]
    images: RawImages,
    #[serde(default)]
    rating: Option<RawRating>,
    #[serde(default, alias = "stock")]
    stock_quantity: Option<u32>,
    #[serde(default)]
    discount_percentage: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawImages {
    One(String),
    Many(Vec<String>),
}

impl Default for RawImages {
    fn default() -> Self {
        RawImages::Many(Vec::new())
    }
}

impl RawImages {
    fn into_vec(self) -> Vec<String> {
        match self {
            RawImages::One(url) => vec![url],
            RawImages::Many(urls) => urls,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRating {
    Score(f64),
    Detailed {
        rate: f64,
        #[serde(default)]
        #[allow(dead_code)]
        count: u64,
    },
}

impl RawProduct {
    /// Converts a raw record into the canonical [`Product`].
    ///
    /// Display fields the endpoint omitted (rating, stock, discount) are
    /// simulated from an RNG seeded by the product id. Seeding freezes them:
    /// re-fetching the same product always yields the same simulated values,
    /// and tests can assert against them.
    fn normalize(self) -> Product {
        let mut rng = StdRng::seed_from_u64(self.id);

        let rating = match self.rating {
            Some(RawRating::Score(score)) => score,
            Some(RawRating::Detailed { rate, .. }) => rate,
            None => rng.gen_range(2.5..=5.0),
        }
        .clamp(0.0, 5.0) as f32;

        let stock_quantity = self
            .stock_quantity
            .unwrap_or_else(|| rng.gen_range(0..=50));

        let discount_percentage = self
            .discount_percentage
            .unwrap_or_else(|| f64::from(rng.gen_range(0u32..=6)) * 5.0)
            .clamp(0.0, 90.0);

        let price = self.price.max(0.0);

        Product {
            id: ProductId(self.id),
            title: self.title,
            description: self.description,
            price,
            original_price: original_price_for(price, discount_percentage),
            discount_percentage,
            category: Category::from_raw(&self.category),
            brand: self.brand,
            images: self.images.into_vec(),
            rating,
            in_stock: stock_quantity > 0,
            stock_quantity: Some(stock_quantity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalizes_detailed_rating_and_single_image() {
        let value = json!([{
            "id": 1,
            "title": "Gold Ring",
            "price": 168.0,
            "description": "A ring",
            "category": "jewelery",
            "image": "https://example.com/ring.jpg",
            "rating": { "rate": 4.6, "count": 400 }
        }]);

        let products = decode_products(value).unwrap();
        assert_eq!(products.len(), 1);
        let p = &products[0];
        assert_eq!(p.id, ProductId(1));
        assert_eq!(p.category, Category::Jewelry);
        assert_eq!(p.images, vec!["https://example.com/ring.jpg".to_string()]);
        assert_eq!(p.rating, 4.6);
    }

    #[test]
    fn test_normalizes_enveloped_records_with_numeric_rating() {
        let value = json!({
            "products": [{
                "id": 5,
                "name": "Phone",
                "price": 549.0,
                "category": "electronics",
                "brand": "Acme",
                "images": ["a.jpg", "b.jpg"],
                "rating": 4.44,
                "stock": 94,
                "discountPercentage": 12.96
            }],
            "total": 1
        });

        let products = decode_products(value).unwrap();
        let p = &products[0];
        assert_eq!(p.title, "Phone");
        assert_eq!(p.brand.as_deref(), Some("Acme"));
        assert_eq!(p.images.len(), 2);
        assert_eq!(p.stock_quantity, Some(94));
        assert!(p.in_stock);
        assert_eq!(p.discount_percentage, 12.96);
        assert!(p.original_price > p.price);
    }

    #[test]
    fn test_simulated_fields_are_frozen_per_id() {
        let record = json!({ "id": 9, "title": "Hat", "price": 12.0, "category": "misc" });

        let first: RawProduct = serde_json::from_value(record.clone()).unwrap();
        let second: RawProduct = serde_json::from_value(record).unwrap();
        let (first, second) = (first.normalize(), second.normalize());

        assert_eq!(first.rating, second.rating);
        assert_eq!(first.stock_quantity, second.stock_quantity);
        assert_eq!(first.discount_percentage, second.discount_percentage);
        assert!((0.0..=5.0).contains(&first.rating));
    }

    #[test]
    fn test_unexpected_shape_is_an_error() {
        assert!(decode_products(json!({"data": []})).is_err());
        assert!(decode_products(json!(42)).is_err());
    }

    #[test]
    fn test_decode_categories_both_shapes() {
        let plain = json!(["electronics", "jewelery", "electronics"]);
        assert_eq!(
            decode_categories(plain).unwrap(),
            vec![Category::Electronics, Category::Jewelry]
        );

        let named = json!([{ "name": "men's clothing" }, { "name": "lawn" }]);
        assert_eq!(
            decode_categories(named).unwrap(),
            vec![Category::MensClothing, Category::Misc]
        );
    }

    #[tokio::test]
    async fn test_abort_signal_wins() {
        // Unroutable address keeps the request pending long enough for the
        // abort to arrive first.
        let fetcher = CatalogFetcher::builder()
            .base_url("http://10.255.255.1")
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap();

        let (abort_tx, abort_rx) = oneshot::channel();
        abort_tx.send(()).unwrap();

        let result = fetcher.product_with_abort(ProductId(1), abort_rx).await;
        assert!(matches!(result, Err(FetchError::Aborted)));
    }
}

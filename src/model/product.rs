use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for products.
///
/// Ids are assigned by the upstream catalog, never generated locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalog category, normalized from the free-form strings the upstream API
/// returns. Anything unrecognized lands in `Misc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Electronics,
    Jewelry,
    MensClothing,
    WomensClothing,
    Misc,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Jewelry => "jewelry",
            Category::MensClothing => "men's clothing",
            Category::WomensClothing => "women's clothing",
            Category::Misc => "misc",
        }
    }

    /// Normalizes an upstream category string, tolerating the spelling and
    /// punctuation variants seen across catalog endpoints.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "electronics" => Category::Electronics,
            "jewelry" | "jewellery" | "jewelery" => Category::Jewelry,
            "men's clothing" | "mens clothing" | "mens-clothing" => Category::MensClothing,
            "women's clothing" | "womens clothing" | "womens-clothing" => {
                Category::WomensClothing
            }
            _ => Category::Misc,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A catalog product.
///
/// Created by normalizing a remote catalog record (see [`crate::remote`]) and
/// immutable afterwards. Display-only fields the upstream API omits (rating,
/// stock, discount) are frozen at ingestion time so repeated reads never
/// disagree with each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: f64,
    /// Pre-discount price; always >= `price`.
    pub original_price: f64,
    pub discount_percentage: f64,
    pub category: Category,
    pub brand: Option<String>,
    pub images: Vec<String>,
    /// Clamped to the 0..=5 range at ingestion.
    pub rating: f32,
    pub in_stock: bool,
    pub stock_quantity: Option<u32>,
}

impl Product {
    /// Creates a minimal in-stock product. Mostly useful for seeding demo
    /// catalogs and tests; real products come from [`crate::remote`].
    pub fn new(id: u64, title: impl Into<String>, price: f64, category: Category) -> Self {
        Self {
            id: ProductId(id),
            title: title.into(),
            description: String::new(),
            price,
            original_price: price,
            discount_percentage: 0.0,
            category,
            brand: None,
            images: Vec::new(),
            rating: 0.0,
            in_stock: true,
            stock_quantity: None,
        }
    }
}

/// Back-computes the pre-discount price from a sale price and a discount
/// percentage. A discount of 100% or more is treated as no discount.
pub fn original_price_for(price: f64, discount_percentage: f64) -> f64 {
    if !(0.0..100.0).contains(&discount_percentage) || discount_percentage == 0.0 {
        return price;
    }
    let original = price * 100.0 / (100.0 - discount_percentage);
    (original * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_normalization() {
        assert_eq!(Category::from_raw("electronics"), Category::Electronics);
        assert_eq!(Category::from_raw("Jewelery"), Category::Jewelry);
        assert_eq!(Category::from_raw("MEN'S CLOTHING"), Category::MensClothing);
        assert_eq!(Category::from_raw("womens-clothing"), Category::WomensClothing);
        assert_eq!(Category::from_raw("garden tools"), Category::Misc);
    }

    #[test]
    fn test_original_price_back_computation() {
        assert_eq!(original_price_for(80.0, 20.0), 100.0);
        assert_eq!(original_price_for(50.0, 0.0), 50.0);
        // Degenerate discounts fall back to the sale price.
        assert_eq!(original_price_for(50.0, 100.0), 50.0);
        assert_eq!(original_price_for(50.0, -5.0), 50.0);
    }

    #[test]
    fn test_original_price_never_below_price() {
        for discount in [0.0, 5.0, 15.0, 35.0, 75.0] {
            assert!(original_price_for(19.99, discount) >= 19.99);
        }
    }
}

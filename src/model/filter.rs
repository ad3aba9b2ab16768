use serde::{Deserialize, Serialize};

use crate::model::product::Category;

/// Bounds of the price-range slider. Filter ranges are clamped into this
/// window before they are stored.
pub const PRICE_MIN: f64 = 0.0;
pub const PRICE_MAX: f64 = 1000.0;

/// Page sizes the listing view offers.
pub const PER_PAGE_CHOICES: &[usize] = &[8, 12, 16, 24];
pub const DEFAULT_PER_PAGE: usize = 12;

/// Sort order applied after filtering and before pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Input order, i.e. whatever the catalog returned.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    Rating,
}

/// The filter slice: every criterion the listing derivation reads.
///
/// Invariant: `page >= 1`, `price_range.0 <= price_range.1` with both ends in
/// `[PRICE_MIN, PRICE_MAX]`, `per_page` drawn from [`PER_PAGE_CHOICES`].
/// Changing any criterion resets `page` to 1; only an explicit page change
/// leaves it alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text query, matched case-insensitively against title,
    /// description and category. Empty means no text filtering.
    pub query: String,
    /// `None` means all categories.
    pub category: Option<Category>,
    pub price_range: (f64, f64),
    /// Stock-status checkboxes. Both set (or both clear) means no stock
    /// filtering at all.
    pub in_stock: bool,
    pub out_of_stock: bool,
    /// Selected brands, OR semantics. Empty means no brand filtering.
    pub brands: Vec<String>,
    /// Minimum rating, 0 to 5. Zero passes everything.
    pub min_rating: u8,
    pub sort_by: SortKey,
    pub page: usize,
    pub per_page: usize,
    /// When set, pagination is bypassed and the whole filtered set is shown.
    pub show_all: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: None,
            price_range: (PRICE_MIN, PRICE_MAX),
            in_stock: false,
            out_of_stock: false,
            brands: Vec::new(),
            min_rating: 0,
            sort_by: SortKey::default(),
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            show_all: false,
        }
    }
}

impl FilterState {
    /// Clamps a requested price range into the slider window, swapping the
    /// ends if they arrive inverted.
    pub fn normalize_range(min: f64, max: f64) -> (f64, f64) {
        let lo = min.clamp(PRICE_MIN, PRICE_MAX);
        let hi = max.clamp(PRICE_MIN, PRICE_MAX);
        if lo <= hi {
            (lo, hi)
        } else {
            (hi, lo)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = FilterState::default();
        assert_eq!(state.page, 1);
        assert_eq!(state.per_page, DEFAULT_PER_PAGE);
        assert_eq!(state.price_range, (PRICE_MIN, PRICE_MAX));
        assert!(!state.show_all);
    }

    #[test]
    fn test_normalize_range_clamps_and_swaps() {
        assert_eq!(FilterState::normalize_range(-10.0, 2000.0), (0.0, 1000.0));
        assert_eq!(FilterState::normalize_range(300.0, 100.0), (100.0, 300.0));
        assert_eq!(FilterState::normalize_range(50.0, 50.0), (50.0, 50.0));
    }
}

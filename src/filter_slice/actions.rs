//! Mutation operations for the filter slice.

use crate::model::{Category, SortKey};

/// Mutation operations accepted by the filter slice.
///
/// Every variant except `SetPage` resets the page to 1 when applied.
/// The action result is the updated [`crate::model::FilterState`] snapshot.
#[derive(Debug, Clone)]
pub enum FilterAction {
    SetQuery(String),
    /// `None` selects all categories.
    SetCategory(Option<Category>),
    /// Clamped into the slider window; inverted ends are swapped.
    SetPriceRange { min: f64, max: f64 },
    SetStockFilter { in_stock: bool, out_of_stock: bool },
    /// Adds the brand to the selection if absent, removes it if present.
    ToggleBrand(String),
    /// Clamped to 5.
    SetMinRating(u8),
    SetSort(SortKey),
    /// Clamped to a minimum of 1. Does not touch any other criterion.
    SetPage(usize),
    /// Must be one of [`crate::model::PER_PAGE_CHOICES`].
    SetPerPage(usize),
    SetShowAll(bool),
    /// Back to defaults.
    Reset,
}

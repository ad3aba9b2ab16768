//! SliceState implementation for the filter criteria.

use async_trait::async_trait;

use super::actions::FilterAction;
use super::error::FilterError;
use crate::framework::SliceState;
use crate::model::{FilterState, PER_PAGE_CHOICES};

#[async_trait]
impl SliceState for FilterState {
    type Action = FilterAction;
    /// The updated criteria, returned whole so the caller can re-derive the
    /// listing without a second round trip.
    type ActionResult = FilterState;
    type Context = ();
    type Error = FilterError;

    async fn apply(
        &mut self,
        action: FilterAction,
        _ctx: &(),
    ) -> Result<FilterState, FilterError> {
        match action {
            FilterAction::SetQuery(query) => {
                self.query = query;
                self.page = 1;
            }
            FilterAction::SetCategory(category) => {
                self.category = category;
                self.page = 1;
            }
            FilterAction::SetPriceRange { min, max } => {
                self.price_range = FilterState::normalize_range(min, max);
                self.page = 1;
            }
            FilterAction::SetStockFilter { in_stock, out_of_stock } => {
                self.in_stock = in_stock;
                self.out_of_stock = out_of_stock;
                self.page = 1;
            }
            FilterAction::ToggleBrand(brand) => {
                if let Some(pos) = self
                    .brands
                    .iter()
                    .position(|b| b.eq_ignore_ascii_case(&brand))
                {
                    self.brands.remove(pos);
                } else {
                    self.brands.push(brand);
                }
                self.page = 1;
            }
            FilterAction::SetMinRating(rating) => {
                self.min_rating = rating.min(5);
                self.page = 1;
            }
            FilterAction::SetSort(key) => {
                self.sort_by = key;
                self.page = 1;
            }
            FilterAction::SetPage(page) => {
                self.page = page.max(1);
            }
            FilterAction::SetPerPage(per_page) => {
                if !PER_PAGE_CHOICES.contains(&per_page) {
                    return Err(FilterError::InvalidPerPage(per_page));
                }
                self.per_page = per_page;
                self.page = 1;
            }
            FilterAction::SetShowAll(show_all) => {
                self.show_all = show_all;
                self.page = 1;
            }
            FilterAction::Reset => {
                *self = FilterState::default();
            }
        }
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, SortKey};

    async fn apply(state: &mut FilterState, action: FilterAction) -> Result<FilterState, FilterError> {
        SliceState::apply(state, action, &()).await
    }

    #[tokio::test]
    async fn test_every_criterion_change_resets_page() {
        let criteria: Vec<FilterAction> = vec![
            FilterAction::SetQuery("shirt".into()),
            FilterAction::SetCategory(Some(Category::Electronics)),
            FilterAction::SetPriceRange { min: 10.0, max: 90.0 },
            FilterAction::SetStockFilter { in_stock: true, out_of_stock: false },
            FilterAction::ToggleBrand("Acme".into()),
            FilterAction::SetMinRating(3),
            FilterAction::SetSort(SortKey::PriceAsc),
            FilterAction::SetPerPage(24),
            FilterAction::SetShowAll(true),
        ];

        for action in criteria {
            let mut state = FilterState::default();
            state.page = 4;
            let updated = apply(&mut state, action.clone()).await.unwrap();
            assert_eq!(updated.page, 1, "page not reset by {action:?}");
        }
    }

    #[tokio::test]
    async fn test_set_page_leaves_criteria_alone() {
        let mut state = FilterState::default();
        apply(&mut state, FilterAction::SetQuery("shoes".into())).await.unwrap();

        let updated = apply(&mut state, FilterAction::SetPage(3)).await.unwrap();
        assert_eq!(updated.page, 3);
        assert_eq!(updated.query, "shoes");

        // Page floor is 1.
        let updated = apply(&mut state, FilterAction::SetPage(0)).await.unwrap();
        assert_eq!(updated.page, 1);
    }

    #[tokio::test]
    async fn test_invalid_per_page_is_rejected() {
        let mut state = FilterState::default();
        let err = apply(&mut state, FilterAction::SetPerPage(13)).await;
        assert_eq!(err, Err(FilterError::InvalidPerPage(13)));
        assert_eq!(state.per_page, crate::model::DEFAULT_PER_PAGE);
    }

    #[tokio::test]
    async fn test_brand_toggle_is_case_insensitive() {
        let mut state = FilterState::default();
        apply(&mut state, FilterAction::ToggleBrand("Acme".into())).await.unwrap();
        assert_eq!(state.brands, vec!["Acme".to_string()]);

        apply(&mut state, FilterAction::ToggleBrand("ACME".into())).await.unwrap();
        assert!(state.brands.is_empty());
    }

    #[tokio::test]
    async fn test_reset_restores_defaults() {
        let mut state = FilterState::default();
        apply(&mut state, FilterAction::SetQuery("x".into())).await.unwrap();
        apply(&mut state, FilterAction::SetMinRating(9)).await.unwrap();
        assert_eq!(state.min_rating, 5);

        apply(&mut state, FilterAction::Reset).await.unwrap();
        assert_eq!(state, FilterState::default());
    }
}

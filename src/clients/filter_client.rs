//! # Filter Client
//!
//! Provides a high-level API for interacting with the filter slice. Every
//! setter returns the updated [`FilterState`] so the caller can immediately
//! re-derive the listing.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::clients::handle::{downcast_slice_error, SliceHandle};
use crate::filter_slice::{FilterAction, FilterError};
use crate::framework::{FrameworkError, SliceClient};
use crate::model::{Category, FilterState, SortKey};

/// Client for interacting with the filter slice actor.
#[derive(Clone)]
pub struct FilterClient {
    inner: SliceClient<FilterState>,
}

impl FilterClient {
    pub fn new(inner: SliceClient<FilterState>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl SliceHandle<FilterState> for FilterClient {
    type Error = FilterError;

    fn inner(&self) -> &SliceClient<FilterState> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        downcast_slice_error(e, FilterError::SliceCommunication)
    }
}

impl FilterClient {
    #[instrument(skip(self))]
    pub async fn set_query(&self, query: impl Into<String> + std::fmt::Debug) -> Result<FilterState, FilterError> {
        debug!("Setting query");
        self.apply(FilterAction::SetQuery(query.into())).await
    }

    #[instrument(skip(self))]
    pub async fn set_category(&self, category: Option<Category>) -> Result<FilterState, FilterError> {
        debug!("Setting category");
        self.apply(FilterAction::SetCategory(category)).await
    }

    #[instrument(skip(self))]
    pub async fn set_price_range(&self, min: f64, max: f64) -> Result<FilterState, FilterError> {
        debug!("Setting price range");
        self.apply(FilterAction::SetPriceRange { min, max }).await
    }

    #[instrument(skip(self))]
    pub async fn set_stock_filter(
        &self,
        in_stock: bool,
        out_of_stock: bool,
    ) -> Result<FilterState, FilterError> {
        debug!("Setting stock filter");
        self.apply(FilterAction::SetStockFilter { in_stock, out_of_stock }).await
    }

    #[instrument(skip(self))]
    pub async fn toggle_brand(&self, brand: impl Into<String> + std::fmt::Debug) -> Result<FilterState, FilterError> {
        debug!("Toggling brand");
        self.apply(FilterAction::ToggleBrand(brand.into())).await
    }

    #[instrument(skip(self))]
    pub async fn set_min_rating(&self, rating: u8) -> Result<FilterState, FilterError> {
        debug!("Setting minimum rating");
        self.apply(FilterAction::SetMinRating(rating)).await
    }

    #[instrument(skip(self))]
    pub async fn set_sort(&self, key: SortKey) -> Result<FilterState, FilterError> {
        debug!("Setting sort key");
        self.apply(FilterAction::SetSort(key)).await
    }

    #[instrument(skip(self))]
    pub async fn set_page(&self, page: usize) -> Result<FilterState, FilterError> {
        debug!("Setting page");
        self.apply(FilterAction::SetPage(page)).await
    }

    #[instrument(skip(self))]
    pub async fn set_per_page(&self, per_page: usize) -> Result<FilterState, FilterError> {
        debug!("Setting page size");
        self.apply(FilterAction::SetPerPage(per_page)).await
    }

    #[instrument(skip(self))]
    pub async fn set_show_all(&self, show_all: bool) -> Result<FilterState, FilterError> {
        debug!("Setting show-all");
        self.apply(FilterAction::SetShowAll(show_all)).await
    }

    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<FilterState, FilterError> {
        debug!("Resetting filters");
        self.apply(FilterAction::Reset).await
    }
}

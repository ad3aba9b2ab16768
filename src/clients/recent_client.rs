//! # Recently-Viewed Client
//!
//! Provides a high-level API for the recently-viewed trail.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::clients::handle::{downcast_slice_error, SliceHandle};
use crate::framework::{FrameworkError, SliceClient};
use crate::model::Product;
use crate::recent_slice::{RecentAction, RecentActionResult, RecentError, RecentState};

/// Client for interacting with the recently-viewed slice actor.
#[derive(Clone)]
pub struct RecentClient {
    inner: SliceClient<RecentState>,
}

impl RecentClient {
    pub fn new(inner: SliceClient<RecentState>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl SliceHandle<RecentState> for RecentClient {
    type Error = RecentError;

    fn inner(&self) -> &SliceClient<RecentState> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        downcast_slice_error(e, RecentError::SliceCommunication)
    }
}

impl RecentClient {
    /// Records a product view. Returns the trail length afterwards.
    #[instrument(skip(self, product))]
    pub async fn record(&self, product: Product) -> Result<usize, RecentError> {
        debug!(product_id = %product.id, "Recording product view");
        match self.apply(RecentAction::Record { product }).await? {
            RecentActionResult::Recorded { len } => Ok(len),
            _ => unreachable!("Record action must return Recorded result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<(), RecentError> {
        debug!("Clearing recently viewed");
        match self.apply(RecentAction::Clear).await? {
            RecentActionResult::Cleared => Ok(()),
            _ => unreachable!("Clear action must return Cleared result"),
        }
    }
}

use crate::framework::{FrameworkError, SliceClient, SliceState};
use async_trait::async_trait;

/// Trait for slice-specific clients to inherit the standard operations.
///
/// This trait reduces boilerplate by providing default implementations of
/// `snapshot` and `apply` with the framework errors already mapped into the
/// slice's own error type.
#[async_trait]
pub trait SliceHandle<S: SliceState>: Send + Sync {
    /// The slice-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic SliceClient.
    fn inner(&self) -> &SliceClient<S>;

    /// Map framework errors to the specific slice error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Read the current slice state as an owned snapshot.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<S, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Apply one action and return its result.
    #[tracing::instrument(skip(self, action))]
    async fn apply(&self, action: S::Action) -> Result<S::ActionResult, Self::Error> {
        tracing::debug!(?action, "Sending request");
        self.inner().apply(action).await.map_err(Self::map_error)
    }
}

/// Recovers a typed slice error from [`FrameworkError::SliceError`], falling
/// back to `communication` for plumbing failures.
///
/// Used by client `map_error` implementations so a rejection like an unknown
/// coupon reaches the caller as its own variant instead of a stringly error.
pub fn downcast_slice_error<E>(e: FrameworkError, communication: impl Fn(String) -> E) -> E
where
    E: std::error::Error + Send + Sync + 'static,
{
    match e {
        FrameworkError::SliceError(inner) => match inner.downcast::<E>() {
            Ok(err) => *err,
            Err(other) => communication(other.to_string()),
        },
        other => communication(other.to_string()),
    }
}

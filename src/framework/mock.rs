//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`MockSliceClient`] for a fluent expectation API, or
//! [`create_mock_client`] to drive the raw request channel by hand.

use crate::framework::{FrameworkError, SliceClient, SliceRequest, SliceState};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
enum Expectation<S: SliceState> {
    Snapshot {
        response: Result<S, FrameworkError>,
    },
    Apply {
        response: Result<S::ActionResult, FrameworkError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockSliceClient::<CartState>::new();
/// mock.expect_snapshot().return_ok(cart_state);
/// mock.expect_apply().return_ok(CartActionResult::Replaced);
///
/// let client = CartClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockSliceClient<S: SliceState> {
    client: SliceClient<S>,
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: SliceState> MockSliceClient<S> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<SliceRequest<S>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Background task matches each incoming request against the next
        // queued expectation.
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        SliceRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        SliceRequest::Apply { action: _, respond_to },
                        Some(Expectation::Apply { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: SliceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> SliceClient<S> {
        self.client.clone()
    }

    /// Expects a `snapshot` operation.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<S> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `apply` operation.
    pub fn expect_apply(&mut self) -> ApplyExpectationBuilder<S> {
        ApplyExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<S: SliceState> Default for MockSliceClient<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `snapshot` expectations.
pub struct SnapshotExpectationBuilder<S: SliceState> {
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
}

impl<S: SliceState> SnapshotExpectationBuilder<S> {
    /// Sets the expectation to return a successful snapshot.
    pub fn return_ok(self, state: S) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Snapshot { response: Ok(state) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Snapshot {
                response: Err(error),
            });
    }
}

/// Builder for `apply` expectations.
pub struct ApplyExpectationBuilder<S: SliceState> {
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
}

impl<S: SliceState> ApplyExpectationBuilder<S> {
    /// Sets the expectation to return a successful action result.
    pub fn return_ok(self, result: S::ActionResult) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Apply {
                response: Ok(result),
            });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Apply {
                response: Err(error),
            });
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// In unit tests we don't want to spin up a full [`crate::framework::SliceActor`]
/// if we are just testing the *client* logic. This client sends messages to a
/// channel the test controls, so the test can inspect each request and reply
/// with whatever response it wants to simulate.
///
/// **Note**: Consider using [`MockSliceClient`] for a more fluent API.
pub fn create_mock_client<S: SliceState>(
    buffer_size: usize,
) -> (SliceClient<S>, mpsc::Receiver<SliceRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (SliceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Snapshot request.
pub async fn expect_snapshot<S: SliceState>(
    receiver: &mut mpsc::Receiver<SliceRequest<S>>,
) -> Option<tokio::sync::oneshot::Sender<Result<S, FrameworkError>>> {
    match receiver.recv().await {
        Some(SliceRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Apply request.
pub async fn expect_apply<S: SliceState>(
    receiver: &mut mpsc::Receiver<SliceRequest<S>>,
) -> Option<(
    S::Action,
    tokio::sync::oneshot::Sender<Result<S::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(SliceRequest::Apply { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

//! # Core Slice Framework
//!
//! This module defines the generic building blocks for the slice-actor system.
//!
//! ## Key Types
//!
//! - [`SliceState`]: The trait that all state slices must implement.
//! - [`SliceActor`]: The generic actor that owns one slice value.
//! - [`SliceClient`]: The generic client for communicating with actors.
//! - [`CommitHook`]: Subscriber invoked after a mutation commits.
//! - [`FrameworkError`]: Common errors (e.g. ActorClosed).

use std::fmt::Debug;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (State contract + Actions)
// =============================================================================

/// Trait that any state slice must implement to be managed by a [`SliceActor`].
///
/// # Architecture Note
/// By defining a contract (`SliceState`) that all our slice types (CartState,
/// WishlistState, FilterState, ...) must satisfy, we write the actor loop
/// *once* and reuse it everywhere.
///
/// We use associated types to enforce type safety: a cart actor only accepts
/// cart actions, and the compiler rejects everything else.
///
/// # Async & Context
/// This trait is `#[async_trait]` so a transition may await other actors. The
/// `Context` type is injected into every `apply` call, allowing late binding of
/// dependencies (passed to `run()` instead of `new()`). Slices with no
/// dependencies use `()`.
#[async_trait]
pub trait SliceState: Clone + Send + Sync + 'static {
    /// Enum of mutation operations accepted by this slice.
    ///
    /// `Clone` is required so the committed action can also be handed to
    /// [`CommitHook`] subscribers.
    type Action: Clone + Send + Sync + Debug;

    /// The result type returned by a successful action.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this slice.
    ///
    /// # Design Note: Error Granularity
    /// One error enum per slice rather than one per action. The enum is the
    /// union of everything the slice can reject, which costs a little
    /// precision per action and saves a lot of boilerplate.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Apply a single action to the slice.
    ///
    /// The actor calls this on a scratch copy of the state. On `Ok` the copy
    /// is committed and hooks fire; on `Err` the copy is discarded, so a
    /// failed action never leaves partial edits behind.
    async fn apply(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}

/// Subscriber invoked after an action commits.
///
/// Hooks observe the committed action and the new state; they cannot veto or
/// alter the transition. Persistence mirrors are the canonical implementation:
/// the transition stays pure and the mirror runs strictly after commit.
pub trait CommitHook<S: SliceState>: Send + Sync {
    /// Called with the action that committed and the state it produced.
    fn after_commit(&self, action: &S::Action, state: &S);
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the slice framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Slice error: {0}")]
    SliceError(Box<dyn std::error::Error + Send + Sync>),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The protocol is deliberately small: a slice is read as a whole snapshot or
/// mutated through its action enum. There is no partial read and no in-place
/// edit, which is what keeps observers race-free on a single event queue.
#[derive(Debug)]
pub enum SliceRequest<S: SliceState> {
    /// Read the current state as an owned snapshot.
    Snapshot { respond_to: Response<S> },
    /// Apply one action and return its result.
    Apply {
        action: S::Action,
        respond_to: Response<S::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR
// =============================================================================

/// The generic actor that owns a single state slice.
///
/// # Architecture Note
/// This struct is the "server" half of the actor. It owns the state and the
/// receiver end of the channel.
///
/// **Concurrency Model**:
/// Every slice actor processes its own mailbox *sequentially* in a loop, so
/// the state needs no `Mutex` or `RwLock`: mutations apply in the order their
/// triggering events were enqueued, and a snapshot always observes the latest
/// committed state.
pub struct SliceActor<S: SliceState> {
    receiver: mpsc::Receiver<SliceRequest<S>>,
    state: S,
    hooks: Vec<Box<dyn CommitHook<S>>>,
}

impl<S: SliceState> SliceActor<S> {
    /// Creates an actor owning `initial` and the client connected to it.
    pub fn new(buffer_size: usize, initial: S) -> (Self, SliceClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            state: initial,
            hooks: Vec::new(),
        };
        let client = SliceClient::new(sender);
        (actor, client)
    }

    /// Registers a post-commit subscriber. Hooks fire in registration order.
    pub fn with_hook(mut self, hook: impl CommitHook<S> + 'static) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every `apply` call. This allows
    /// slices to access external dependencies that were created *after* the
    /// actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: S::Context) {
        // Extract just the type name (e.g. "CartState" instead of
        // "shopfront::model::cart::CartState")
        let slice_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(slice_type, "Slice actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SliceRequest::Snapshot { respond_to } => {
                    debug!(slice_type, "Snapshot");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
                SliceRequest::Apply { action, respond_to } => {
                    debug!(slice_type, ?action, "Apply");
                    let mut next = self.state.clone();
                    match next.apply(action.clone(), &context).await {
                        Ok(result) => {
                            self.state = next;
                            for hook in &self.hooks {
                                hook.after_commit(&action, &self.state);
                            }
                            info!(slice_type, "Committed");
                            let _ = respond_to.send(Ok(result));
                        }
                        Err(e) => {
                            // `next` is dropped here; the committed state is untouched.
                            warn!(slice_type, error = %e, "Action rejected");
                            let _ = respond_to.send(Err(FrameworkError::SliceError(Box::new(e))));
                        }
                    }
                }
            }
        }

        info!(slice_type, "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a [`SliceActor`].
#[derive(Clone)]
pub struct SliceClient<S: SliceState> {
    sender: mpsc::Sender<SliceRequest<S>>,
}

impl<S: SliceState> SliceClient<S> {
    pub fn new(sender: mpsc::Sender<SliceRequest<S>>) -> Self {
        Self { sender }
    }

    /// Reads the current state as an owned snapshot.
    pub async fn snapshot(&self) -> Result<S, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SliceRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Applies one action and returns its result.
    pub async fn apply(&self, action: S::Action) -> Result<S::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SliceRequest::Apply { action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    // --- Slice Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Tally {
        count: i64,
    }

    #[derive(Debug, Clone)]
    enum TallyAction {
        Add(i64),
        AddThenFail(i64),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("tally rejected")]
    struct TallyError;

    #[async_trait]
    impl SliceState for Tally {
        type Action = TallyAction;
        type ActionResult = i64;
        type Context = ();
        type Error = TallyError;

        async fn apply(
            &mut self,
            action: TallyAction,
            _ctx: &(),
        ) -> Result<i64, TallyError> {
            match action {
                TallyAction::Add(n) => {
                    self.count += n;
                    Ok(self.count)
                }
                TallyAction::AddThenFail(n) => {
                    // Mutates the scratch copy before failing, so the test can
                    // prove the commit is all-or-nothing.
                    self.count += n;
                    Err(TallyError)
                }
            }
        }
    }

    struct RecordingHook {
        seen: Arc<Mutex<Vec<i64>>>,
    }

    impl CommitHook<Tally> for RecordingHook {
        fn after_commit(&self, _action: &TallyAction, state: &Tally) {
            self.seen.lock().unwrap().push(state.count);
        }
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_apply_and_snapshot() {
        let (actor, client) = SliceActor::new(10, Tally { count: 0 });
        tokio::spawn(actor.run(()));

        assert_eq!(client.apply(TallyAction::Add(5)).await.unwrap(), 5);
        assert_eq!(client.apply(TallyAction::Add(2)).await.unwrap(), 7);

        let state = client.snapshot().await.unwrap();
        assert_eq!(state, Tally { count: 7 });
    }

    #[tokio::test]
    async fn test_failed_action_leaves_state_unchanged() {
        let (actor, client) = SliceActor::new(10, Tally { count: 0 });
        tokio::spawn(actor.run(()));

        client.apply(TallyAction::Add(3)).await.unwrap();
        let err = client.apply(TallyAction::AddThenFail(100)).await;
        assert!(matches!(err, Err(FrameworkError::SliceError(_))));

        // The scratch copy that reached 103 was discarded.
        let state = client.snapshot().await.unwrap();
        assert_eq!(state.count, 3);
    }

    #[tokio::test]
    async fn test_commit_hook_fires_only_on_success() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let (actor, client) = SliceActor::new(10, Tally { count: 0 });
        let actor = actor.with_hook(RecordingHook { seen: seen.clone() });
        tokio::spawn(actor.run(()));

        client.apply(TallyAction::Add(1)).await.unwrap();
        let _ = client.apply(TallyAction::AddThenFail(9)).await;
        client.apply(TallyAction::Add(1)).await.unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }
}

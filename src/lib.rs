//! # Shopfront
//!
//! > **A storefront state engine built on resource-oriented slice actors.**
//!
//! This crate implements the state model behind a product storefront: a shopping
//! cart, a wishlist, a browsable catalog, filter/sort/pagination state, popup
//! visibility flags and a recently-viewed trail. Each of those is a **slice**:
//! an independently-owned partition of application state with its own typed
//! mutation operations, managed by a dedicated actor so mutations apply
//! strictly in the order their triggering events were enqueued.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Slices + Actor Model
//!
//! - **Slices**: Each state partition (Cart, Wishlist, Filters, ...) owns its
//!   data exclusively and exposes a closed set of actions.
//! - **Actor Model**: Each slice runs in its own task and processes actions
//!   sequentially from a mailbox. No locks, no torn state.
//!
//! Mutations are applied to a scratch copy of the slice and committed only on
//! success, so every failed action leaves the slice exactly as it was and every
//! observer sees whole snapshots.
//!
//! ### Persistence as a subscriber, not a side effect
//!
//! State transitions are pure with respect to storage. Slices that mirror to
//! disk (cart, wishlist, recently viewed) do so through a [`framework::CommitHook`]
//! invoked after a mutation commits. The transition logic is testable without
//! any storage backend, and the mirror can never corrupt a transition.
//!
//! ### Derivation, not duplication
//!
//! The product list shown to a user is never stored. [`pipeline`] derives it on
//! demand from the catalog slice plus the filter slice: filter, then stable
//! sort, then paginate. The derived page is always a subset of the catalog and
//! identical criteria always produce identical output.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`SliceActor`](framework::SliceActor) event loop, the
//! [`SliceState`](framework::SliceState) contract, typed clients and the mock
//! client used in tests.
//!
//! ### 2. The Slices ([`cart_slice`], [`wishlist_slice`], [`catalog_slice`],
//! [`filter_slice`], [`popup_slice`], [`recent_slice`])
//! Concrete slice implementations: the action enums, their transition logic and
//! per-slice error types.
//!
//! ### 3. The Interface ([`clients`])
//! Domain-specific wrappers (e.g. [`CartClient`](clients::CartClient)) that
//! hide raw message passing behind typed methods.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`StorefrontSystem`](lifecycle::StorefrontSystem) loads persisted blobs,
//! spawns every slice actor with its mirror hooks, and shuts the whole thing
//! down gracefully.
//!
//! ### 5. The Edges ([`remote`], [`storage`], [`routes`], [`checkout`])
//! The catalog fetcher (HTTP + normalization), the JSON blob store, the route
//! table with its [`Navigator`](routes::Navigator) seam, and the simulated
//! checkout flow.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo walk-through with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the test suite
//! cargo test
//! ```

pub mod cart_slice;
pub mod catalog_slice;
pub mod checkout;
pub mod clients;
pub mod filter_slice;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod pipeline;
pub mod popup_slice;
pub mod recent_slice;
pub mod remote;
pub mod routes;
pub mod storage;
pub mod wishlist_slice;

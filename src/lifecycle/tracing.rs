//! # Observability & Tracing
//!
//! Structured logging for the whole engine, configured once at startup.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown and commit/reject per action
//! - **Client Operations**: every typed client method opens a span via
//!   `#[instrument]` and logs its request at debug level
//! - **Edges**: fetch URLs, normalization failures, mirror write failures
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full action payloads
//! RUST_LOG=debug cargo run
//!
//! # Filter to one module
//! RUST_LOG=shopfront::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a cart interaction looks like:
//!
//! ```text
//! INFO Committed slice_type="CartState"
//! INFO Committed slice_type="CartState"
//! WARN Action rejected slice_type="CartState" error=Unknown coupon code: BOGUS
//! ```
//!
//! and `RUST_LOG=debug` additionally shows each `Apply` with the full action
//! payload recorded through its `Debug` representation.

/// Initializes the global tracing subscriber.
///
/// Call once, from the binary entry point. The format is compact and hides
/// module targets; the actor loop logs a `slice_type` field instead.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

//! Orchestration layer: spins up every slice actor and wires the mirrors.

pub mod storefront;
pub mod tracing;

pub use self::storefront::StorefrontSystem;
pub use self::tracing::setup_tracing;

//! Generic slice-actor framework.
//!
//! This module provides the core building blocks for creating type-safe actor
//! systems that each own a single slice of application state.
//!
//! # Main Components
//!
//! - [`SliceState`] - Trait that slice types implement to be managed by an actor
//! - [`SliceActor`] - Generic actor that owns a slice and applies actions to it
//! - [`SliceClient`] - Type-safe handle for talking to a running actor
//! - [`CommitHook`] - Post-commit subscriber (persistence mirrors live here)
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

pub use self::core::*;

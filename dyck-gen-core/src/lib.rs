//! Random Dyck word generation library.
//!
//! This crate provides a seeded generator of balanced bracket sequences:
//! - Bracket alphabets with one or many kinds of pairs
//! - Validated, immutable generation settings
//! - A biased random walk producing words lazily, one at a time
//!
//! Only the high-level API is exposed publicly. The per-word walk state
//! is kept internal.

/// Error type returned by configuration and generation.
pub mod error;

/// Bracket alphabets, generation settings and the generator itself.
///
/// This module exposes the high-level generator interface while keeping
/// the per-word state private.
pub mod model;

pub use error::{DyckError, Result};
pub use model::alphabet::BracketAlphabet;
pub use model::config::GenerationConfig;
pub use model::generator::{Generator, Words, generate};

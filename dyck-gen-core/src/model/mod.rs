//! Top-level module for Dyck word generation.
//!
//! This module contains:
//! - Opening/closing symbol pairs (`BracketAlphabet`)
//! - Validated run settings (`GenerationConfig`)
//! - Internal per-word walk state (`GenerationState`)
//! - The random walk itself (`Generator`)

/// Ordered set of matching opening/closing symbols.
///
/// Validates pairs on construction and recognises balanced words.
pub mod alphabet;

/// Immutable run settings.
///
/// Checks word count, open probability and length bound before any
/// generation begins.
pub mod config;

/// Lazy, seeded generator of Dyck words.
pub mod generator;

/// Stack and accumulator of the word currently being generated.
/// This module is not exposed publicly.
mod state;

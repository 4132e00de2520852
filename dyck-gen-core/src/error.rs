//! Error type shared by every part of the generator.

use thiserror::Error;

/// Failures raised by the Dyck word generator.
///
/// Configuration problems are reported when a `BracketAlphabet` or a
/// `GenerationConfig` is built, never in the middle of a run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DyckError {
	/// A configuration value violates its constraint.
	#[error("Invalid configuration: {0}")]
	InvalidConfiguration(String),

	/// A word grew past the configured maximum number of symbols.
	#[error("Resource exhausted: word exceeded {limit} symbols")]
	ResourceExhaustion { limit: usize },
}

impl DyckError {
	pub(crate) fn invalid(message: impl Into<String>) -> Self {
		DyckError::InvalidConfiguration(message.into())
	}
}

pub type Result<T> = std::result::Result<T, DyckError>;

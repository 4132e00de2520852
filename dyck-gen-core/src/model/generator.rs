use std::iter::FusedIterator;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace, warn};

use super::config::GenerationConfig;
use super::state::GenerationState;
use crate::error::{DyckError, Result};

/// Random walk generator of Dyck words.
///
/// # Responsibilities
/// - Own the random source, seeded exactly once on construction
/// - Generate one word at a time with a biased push/pop walk
/// - Enforce the optional word length bound
///
/// Two generators built from equal configurations carrying the same seed
/// produce the same words in the same order. The random source is
/// `StdRng` from `rand`, so that sequence is stable for a given `rand`
/// release.
#[derive(Debug)]
pub struct Generator {
	config: GenerationConfig,
	rng: StdRng,
}

impl Generator {
	/// Creates a generator for a validated configuration.
	///
	/// With a seed the random source is initialized from it, otherwise from
	/// the operating system's entropy source.
	pub fn new(config: GenerationConfig) -> Self {
		let rng = match config.seed() {
			Some(seed) => {
				debug!(seed, "seeding generator");
				StdRng::seed_from_u64(seed)
			}
			None => {
				debug!("seeding generator from OS entropy");
				StdRng::from_os_rng()
			}
		};
		Self { config, rng }
	}

	pub fn config(&self) -> &GenerationConfig {
		&self.config
	}

	/// Generates a single word.
	///
	/// # Behavior
	/// - Opens a uniformly chosen bracket.
	/// - While brackets are pending, draws `r` in `[0, 1)`: below the open
	///   probability another uniformly chosen bracket is opened, otherwise
	///   the innermost one is closed.
	/// - Joins the symbols with the configured delimiter.
	///
	/// # Errors
	/// Returns `ResourceExhaustion` if a length bound is configured and the
	/// word would grow past it. Without a bound this never fails.
	pub fn next_word(&mut self) -> Result<String> {
		let Self { config, rng } = self;
		let alphabet = config.alphabet();
		let kinds = alphabet.len();
		let open_probability = config.open_probability();

		let mut state = GenerationState::new(alphabet, rng.random_range(0..kinds));
		while !state.is_complete() {
			if let Some(limit) = config.max_length() {
				if state.len() >= limit {
					warn!(limit, depth = state.max_depth(), "word exceeded maximum length");
					return Err(DyckError::ResourceExhaustion { limit });
				}
			}

			let r: f64 = rng.random();
			if r < open_probability {
				state.open(rng.random_range(0..kinds));
			} else {
				let closed = state.close();
				debug_assert!(closed, "loop guard keeps the stack non-empty");
			}
		}

		trace!(length = state.len(), depth = state.max_depth(), "word generated");
		Ok(state.into_word(config.delimiter()))
	}

	/// Turns the generator into a lazy sequence of `word_count` words.
	pub fn words(self) -> Words {
		let remaining = self.config.word_count();
		Words { generator: self, remaining }
	}
}

/// Generates the words described by `config`.
///
/// Shorthand for `Generator::new(config).words()`.
pub fn generate(config: GenerationConfig) -> Words {
	Generator::new(config).words()
}

/// Lazy sequence of generated words.
///
/// Yields at most `word_count` items. After a `ResourceExhaustion` error
/// the sequence ends. Dropping it early releases nothing but memory.
#[derive(Debug)]
pub struct Words {
	generator: Generator,
	remaining: usize,
}

impl Iterator for Words {
	type Item = Result<String>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.remaining == 0 {
			return None;
		}
		self.remaining -= 1;

		let word = self.generator.next_word();
		if word.is_err() {
			self.remaining = 0;
		}
		Some(word)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		// A bounded run may stop early on an error
		let lower = if self.generator.config.max_length().is_some() { 0 } else { self.remaining };
		(lower, Some(self.remaining))
	}
}

impl FusedIterator for Words {}

use super::alphabet::BracketAlphabet;
use crate::error::{DyckError, Result};

/// Immutable settings of one generation run.
///
/// # Invariants
/// - `word_count >= 1`
/// - `0 < open_probability < 0.5`, so the walk drifts towards closing and
///   every word terminates with probability 1
/// - `max_length`, when set, is at least 2 (the shortest Dyck word)
///
/// All checks happen in the constructors; a value of this type is always valid.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationConfig {
	/// Number of words to generate.
	word_count: usize,

	/// Probability of opening another bracket at each step.
	open_probability: f64,

	/// Bracket pairs to draw from.
	alphabet: BracketAlphabet,

	/// Seed of the random source. `None` seeds from the operating system.
	seed: Option<u64>,

	/// String placed between consecutive symbols of a word.
	delimiter: String,

	/// Upper bound on the number of symbols in a single word.
	max_length: Option<usize>,
}

impl GenerationConfig {
	/// Creates a validated configuration without a length bound.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `word_count` is zero or if
	/// `open_probability` is not strictly between 0 and 0.5.
	pub fn new(
		word_count: usize,
		open_probability: f64,
		alphabet: BracketAlphabet,
		seed: Option<u64>,
		delimiter: impl Into<String>,
	) -> Result<Self> {
		if word_count < 1 {
			return Err(DyckError::invalid("word count must be at least 1"));
		}
		// NaN fails both comparisons
		if !(open_probability > 0.0 && open_probability < 0.5) {
			return Err(DyckError::invalid(format!(
				"{open_probability} is not a probability between 0 and 0.5 (exclusive)"
			)));
		}

		Ok(Self {
			word_count,
			open_probability,
			alphabet,
			seed,
			delimiter: delimiter.into(),
			max_length: None,
		})
	}

	/// Bounds the number of symbols a single word may contain.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `max_length < 2`.
	pub fn with_max_length(mut self, max_length: usize) -> Result<Self> {
		if max_length < 2 {
			return Err(DyckError::invalid(format!(
				"maximum word length must be at least 2, got {max_length}"
			)));
		}
		self.max_length = Some(max_length);
		Ok(self)
	}

	pub fn word_count(&self) -> usize {
		self.word_count
	}

	pub fn open_probability(&self) -> f64 {
		self.open_probability
	}

	pub fn alphabet(&self) -> &BracketAlphabet {
		&self.alphabet
	}

	pub fn seed(&self) -> Option<u64> {
		self.seed
	}

	pub fn delimiter(&self) -> &str {
		&self.delimiter
	}

	pub fn max_length(&self) -> Option<usize> {
		self.max_length
	}

	/// Expected number of symbols per word, `2 * (1 - p) / (1 - 2p)`.
	///
	/// One symbol for the first opening, then on average `1 / (1 - 2p)`
	/// steps until the stack is empty again.
	pub fn expected_length(&self) -> f64 {
		let p = self.open_probability;
		2.0 * (1.0 - p) / (1.0 - 2.0 * p)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn config(word_count: usize, p: f64) -> Result<GenerationConfig> {
		GenerationConfig::new(word_count, p, BracketAlphabet::default(), Some(42), " ")
	}

	#[test]
	fn accepts_values_inside_the_bounds() {
		let config = config(3, 0.25).unwrap();
		assert_eq!(config.word_count(), 3);
		assert_eq!(config.open_probability(), 0.25);
		assert_eq!(config.seed(), Some(42));
		assert_eq!(config.delimiter(), " ");
		assert_eq!(config.max_length(), None);
	}

	#[test]
	fn rejects_zero_words() {
		assert!(matches!(config(0, 0.25), Err(DyckError::InvalidConfiguration(_))));
	}

	#[test]
	fn rejects_probabilities_on_or_outside_the_bounds() {
		for p in [0.0, 0.5, 0.75, 1.0, -0.1, f64::NAN, f64::INFINITY] {
			assert!(
				matches!(config(1, p), Err(DyckError::InvalidConfiguration(_))),
				"{p} should be rejected"
			);
		}
	}

	#[test]
	fn max_length_must_fit_a_word() {
		assert!(config(1, 0.25).unwrap().with_max_length(1).is_err());
		let bounded = config(1, 0.25).unwrap().with_max_length(2).unwrap();
		assert_eq!(bounded.max_length(), Some(2));
	}

	#[test]
	fn expected_length_grows_with_probability() {
		assert!((config(1, 0.25).unwrap().expected_length() - 3.0).abs() < 1e-12);
		assert!(config(1, 0.45).unwrap().expected_length() > 10.0);
	}
}

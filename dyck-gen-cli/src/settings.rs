//! Generation settings gathered from a TOML file and command-line flags.
//!
//! Precedence (highest first): command-line flags, configuration file,
//! built-in defaults.

use std::fs;
use std::path::Path;

use anyhow::Context;
use dyck_gen_core::{BracketAlphabet, DyckError, GenerationConfig};
use serde::Deserialize;
use tracing::debug;

use crate::cli::Cli;

pub const DEFAULT_DELIMITER: &str = " ";
pub const DEFAULT_KINDS: usize = 1;

/// Raw, not yet validated settings.
///
/// Example file:
/// ```toml
/// words = 100
/// probability = 0.3
/// seed = 42
/// delimiter = " "
/// brackets = [["(", ")"], ["[", "]"]]
/// ```
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
	pub words: Option<usize>,
	pub probability: Option<f64>,
	pub kinds: Option<usize>,
	/// Reinterpreted bit for bit as an unsigned seed.
	pub seed: Option<i64>,
	pub delimiter: Option<String>,
	pub max_length: Option<usize>,
	/// Explicit bracket pairs; takes the place of `kinds`.
	pub brackets: Option<BracketAlphabet>,
}

impl Settings {
	/// Reads settings from a TOML file.
	pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
		let path = path.as_ref();
		let contents = fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file {}", path.display()))?;
		let settings = toml::from_str(&contents)
			.with_context(|| format!("Failed to parse config file {}", path.display()))?;
		debug!(path = %path.display(), "loaded config file");
		Ok(settings)
	}

	/// Combines the config file named by `cli` (if any) with its flags.
	pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
		let file = match &cli.config {
			Some(path) => Self::load(path)?,
			None => Self::default(),
		};
		Ok(file.override_with(cli))
	}

	/// Replaces every value given on the command line.
	///
	/// A `-n` flag also discards bracket pairs read from the file.
	pub fn override_with(mut self, cli: &Cli) -> Self {
		if cli.words.is_some() {
			self.words = cli.words;
		}
		if cli.probability.is_some() {
			self.probability = cli.probability;
		}
		if cli.kinds.is_some() {
			self.kinds = cli.kinds;
			self.brackets = None;
		}
		if cli.seed.is_some() {
			self.seed = cli.seed;
		}
		if let Some(delimiter) = &cli.delimiter {
			self.delimiter = Some(delimiter.clone());
		}
		if cli.max_length.is_some() {
			self.max_length = cli.max_length;
		}
		self
	}

	/// Validates the settings into a `GenerationConfig`.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if the word count or probability is
	/// missing, or if any value is out of range.
	pub fn into_config(self) -> Result<GenerationConfig, DyckError> {
		let words = self.words.ok_or_else(|| {
			DyckError::InvalidConfiguration("number of words is required (-w or `words`)".to_owned())
		})?;
		let probability = self.probability.ok_or_else(|| {
			DyckError::InvalidConfiguration("open probability is required (-p or `probability`)".to_owned())
		})?;
		let alphabet = match self.brackets {
			Some(alphabet) => alphabet,
			None => BracketAlphabet::indexed(self.kinds.unwrap_or(DEFAULT_KINDS))?,
		};
		let delimiter = self.delimiter.unwrap_or_else(|| DEFAULT_DELIMITER.to_owned());

		let config = GenerationConfig::new(words, probability, alphabet, self.seed.map(|s| s as u64), delimiter)?;
		match self.max_length {
			Some(max_length) => config.with_max_length(max_length),
			None => Ok(config),
		}
	}
}

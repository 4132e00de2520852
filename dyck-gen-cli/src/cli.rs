use std::path::PathBuf;

use clap::Parser;

/// Generator for Dyck words.
///
/// Prints one balanced bracket word per line. Each step opens another
/// bracket with probability P and closes the innermost one otherwise.
#[derive(Parser, Debug, Default)]
#[command(name = "dyck-gen")]
#[command(version)]
pub struct Cli {
	/// Number of words to generate
	#[arg(short = 'w', value_name = "NATURAL_NUMBER")]
	pub words: Option<usize>,

	/// Probability for adding an opening bracket, strictly between 0 and 0.5
	#[arg(short = 'p', value_name = "FLOAT")]
	pub probability: Option<f64>,

	/// Number of kinds of brackets [default: 1]
	#[arg(short = 'n', value_name = "NATURAL_NUMBER")]
	pub kinds: Option<usize>,

	/// Random seed; negative values are accepted
	#[arg(short = 's', value_name = "INTEGER", allow_negative_numbers = true)]
	pub seed: Option<i64>,

	/// Delimiter for separating brackets [default: " "]
	#[arg(short = 'd', value_name = "STRING", allow_hyphen_values = true)]
	pub delimiter: Option<String>,

	/// Fail instead of emitting a word longer than this many symbols
	#[arg(long, value_name = "NATURAL_NUMBER")]
	pub max_length: Option<usize>,

	/// Path to a TOML configuration file
	#[arg(short, long, value_name = "FILE")]
	pub config: Option<PathBuf>,

	/// Verbose logging on stderr
	#[arg(short, long, conflicts_with = "quiet")]
	pub verbose: bool,

	/// Only log errors
	#[arg(short, long)]
	pub quiet: bool,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_short_flags() {
		let cli = Cli::try_parse_from(["dyck-gen", "-w", "3", "-p", "0.25", "-n", "2", "-s", "42", "-d", "-"]).unwrap();
		assert_eq!(cli.words, Some(3));
		assert_eq!(cli.probability, Some(0.25));
		assert_eq!(cli.kinds, Some(2));
		assert_eq!(cli.seed, Some(42));
		assert_eq!(cli.delimiter.as_deref(), Some("-"));
		assert!(cli.config.is_none());
	}

	#[test]
	fn accepts_negative_seed() {
		let cli = Cli::try_parse_from(["dyck-gen", "-w", "1", "-p", "0.2", "-s", "-1"]).unwrap();
		assert_eq!(cli.seed, Some(-1));
	}

	#[test]
	fn rejects_negative_word_count() {
		assert!(Cli::try_parse_from(["dyck-gen", "-w", "-3", "-p", "0.25"]).is_err());
	}

	#[test]
	fn verbose_and_quiet_conflict() {
		assert!(Cli::try_parse_from(["dyck-gen", "-w", "1", "-p", "0.2", "-v", "-q"]).is_err());
	}
}

//! Command-line front end printing random Dyck words, one per line.

mod cli;
mod logging;
mod settings;

use std::io::{self, BufWriter, ErrorKind, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use dyck_gen_core::{Words, generate};
use tracing::info;

use crate::cli::Cli;
use crate::logging::init_logging;
use crate::settings::Settings;

fn main() -> ExitCode {
	let cli = Cli::parse();

	if let Err(e) = init_logging(cli.verbose, cli.quiet) {
		eprintln!("{e}");
		return ExitCode::FAILURE;
	}

	match run(&cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("Error: {e:#}");
			ExitCode::FAILURE
		}
	}
}

/// Validates the configuration, then streams every word to stdout.
fn run(cli: &Cli) -> anyhow::Result<()> {
	let config = Settings::resolve(cli)?.into_config()?;

	info!(
		words = config.word_count(),
		probability = config.open_probability(),
		kinds = config.alphabet().len(),
		expected_length = config.expected_length(),
		"generating Dyck words"
	);

	let stdout = io::stdout();
	let mut out = BufWriter::new(stdout.lock());
	let written = write_words(&mut out, generate(config))?;

	info!(written, "done");
	Ok(())
}

/// Writes each word on its own line and returns how many were written.
///
/// A closed reader (`BrokenPipe`) stops output without an error.
fn write_words<W: Write>(out: &mut W, words: Words) -> anyhow::Result<usize> {
	let mut written = 0;
	for word in words {
		let word = word.context("Generation aborted")?;
		match writeln!(out, "{word}") {
			Ok(()) => written += 1,
			Err(e) if e.kind() == ErrorKind::BrokenPipe => return Ok(written),
			Err(e) => return Err(e).context("Failed to write word"),
		}
	}
	match out.flush() {
		Err(e) if e.kind() != ErrorKind::BrokenPipe => Err(e).context("Failed to flush output"),
		_ => Ok(written),
	}
}

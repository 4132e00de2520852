//! Logging setup for the command-line front end.
//!
//! Events go to stderr so that stdout carries nothing but generated words.

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive, e.g. `debug`.
pub const LOG_ENV: &str = "DYCK_GEN_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

/// Picks the filter: `-v` and `-q` win over `DYCK_GEN_LOG`, which wins over
/// the default.
fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
	if verbose {
		EnvFilter::new("debug")
	} else if quiet {
		EnvFilter::new("error")
	} else {
		EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
	}
}

/// Installs the global subscriber.
pub fn init_logging(verbose: bool, quiet: bool) -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(build_filter(verbose, quiet))
		.with_writer(std::io::stderr)
		.with_target(false)
		.compact()
		.try_init()
		.map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}

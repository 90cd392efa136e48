//! Reclip - reassembles split audio subclips into whole recordings.
//!
//! Subclips are grouped by a 6-character identifier parsed from their
//! filenames, ordered by numeric sequence suffix, and concatenated into one
//! WAV file per group.

#![warn(missing_docs)]

pub mod audio;
pub mod cli;
pub mod constants;
pub mod error;
pub mod reassembler;

use clap::Parser;
use cli::Cli;

pub use error::{Error, Result};

/// Main entry point for the reclip CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.quiet);

    reassembler::command::execute(&cli)
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}

//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

use crate::constants::{APP_NAME, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_SAMPLE_RATE};

/// Reassemble split audio subclips into whole recordings.
///
/// Scans a directory of `.wav` subclips named `<clip_id><sep><sequence>.wav`,
/// groups them by the 6-character clip identifier, orders each group by its
/// numeric sequence suffix, and writes one concatenated `<clip_id>.wav` per
/// group.
#[derive(Debug, Parser)]
#[command(name = APP_NAME)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory containing split subclips [default: ./ids_subclips].
    ///
    /// Either pass both directories or neither; a single path is rejected.
    #[arg(requires = "output_dir", value_name = "INPUT_DIR")]
    pub input_dir: Option<PathBuf>,

    /// Directory to write reassembled clips to [default: ./reconcatenated].
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Expected sample rate of every subclip in Hz.
    #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE,
          value_parser = parse_sample_rate, env = "RECLIP_SAMPLE_RATE")]
    pub sample_rate: u32,

    /// Suppress progress output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Input directory with the default applied.
    #[must_use]
    pub fn input_dir(&self) -> PathBuf {
        self.input_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR))
    }

    /// Output directory with the default applied.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }
}

/// Parse and validate a sample rate value.
fn parse_sample_rate(s: &str) -> Result<u32, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid sample rate"))?;

    if value == 0 {
        return Err("sample rate must be greater than zero".to_string());
    }

    Ok(value)
}

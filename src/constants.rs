//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used in user-facing messages.
pub const APP_NAME: &str = "reclip";

/// Default directory containing split subclips.
pub const DEFAULT_INPUT_DIR: &str = "./ids_subclips";

/// Default directory for reassembled clips.
pub const DEFAULT_OUTPUT_DIR: &str = "./reconcatenated";

/// Sample rate every subclip is expected to carry, in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Length of the clip identifier prefix in subclip base-names.
pub const CLIP_ID_LEN: usize = 6;

/// Minimum base-name length: identifier + separator + at least one digit.
pub const MIN_BASENAME_LEN: usize = CLIP_ID_LEN + 2;

/// Only files with this extension are treated as subclips; everything else
/// in the input directory is intentionally ignored.
pub const WAV_EXTENSION: &str = "wav";

/// Bit depth of written output files.
pub const OUTPUT_BITS_PER_SAMPLE: u16 = 16;

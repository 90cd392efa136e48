//! WAV file writing.
//!
//! Writes reassembled clips as 16-bit PCM, one file per clip identifier.

use std::fs;
use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavSpec, WavWriter as HoundWriter};

use crate::constants::OUTPUT_BITS_PER_SAMPLE;
use crate::error::{Error, Result};

/// Writes reassembled audio to WAV files.
pub struct WavWriter {
    /// Output directory for reassembled clips.
    output_dir: PathBuf,
}

impl WavWriter {
    /// Create a new WAV writer with the given output directory.
    #[must_use]
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Write a planar sample buffer to `<output_dir>/<clip_id>.wav`.
    ///
    /// Channels are interleaved frame by frame on write. Channel buffers are
    /// expected to be equally long; if not, the shortest caps the frame
    /// count.
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory cannot be created or the
    /// file cannot be written.
    pub fn write_clip(
        &self,
        clip_id: &str,
        channels: &[Vec<f32>],
        sample_rate: u32,
    ) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir).map_err(|e| Error::OutputDirCreateFailed {
            path: self.output_dir.clone(),
            source: e,
        })?;

        let output_path = self.output_dir.join(format!("{clip_id}.wav"));
        write_wav_file(&output_path, channels, sample_rate)?;

        Ok(output_path)
    }
}

/// Write planar samples to a WAV file, interleaving channels.
fn write_wav_file(path: &Path, channels: &[Vec<f32>], sample_rate: u32) -> Result<()> {
    #[allow(clippy::cast_possible_truncation)]
    let spec = WavSpec {
        channels: channels.len() as u16,
        sample_rate,
        bits_per_sample: OUTPUT_BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    };

    let mut writer = HoundWriter::create(path, spec).map_err(|e| Error::WavWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    // Channel buffers are expected to be equally long; a shorter one caps
    // the frame count rather than panicking on index.
    let frames = channels.iter().map(Vec::len).min().unwrap_or(0);
    for i in 0..frames {
        for channel in channels {
            #[allow(clippy::cast_possible_truncation)]
            let sample_i16 = (channel[i].clamp(-1.0, 1.0) * f32::from(i16::MAX)) as i16;
            writer
                .write_sample(sample_i16)
                .map_err(|e| Error::WavWriteFailed {
                    path: path.to_path_buf(),
                    source: e,
                })?;
        }
    }

    writer.finalize().map_err(|e| Error::WavWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

//! Audio decoding using symphonia.
//!
//! Unlike typical analysis pipelines, subclips are decoded with their
//! channel layout preserved; nothing is mixed down.

use crate::error::{Error, Result};
use std::fs::File;
use std::path::Path;
use symphonia::core::audio::{AudioBufferRef, Signal};
use symphonia::core::codecs::{CODEC_TYPE_NULL, DecoderOptions};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Decoded audio data with planar channel layout.
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// One sample buffer per channel, f32 in range [-1.0, 1.0].
    pub channels: Vec<Vec<f32>>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl DecodedAudio {
    /// Number of samples per channel.
    #[must_use]
    pub fn len(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    /// Whether the buffer holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Decode a subclip to planar f32 samples, keeping all channels.
///
/// The file's sample rate is checked against `expected_rate` before any
/// packet is decoded; a mismatch is fatal and names the offending file.
pub fn decode_subclip(path: &Path, expected_rate: u32) -> Result<DecodedAudio> {
    let file = File::open(path).map_err(|e| Error::AudioOpen {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

    // Create hint from file extension
    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    // Probe the file
    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| Error::AudioOpen {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    let mut format = probed.format;

    // Find the first audio track
    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| Error::NoAudioTracks {
            path: path.to_path_buf(),
        })?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| Error::AudioDecode {
            path: path.to_path_buf(),
            source: "missing sample rate".into(),
        })?;

    if sample_rate != expected_rate {
        return Err(Error::SampleRateMismatch {
            path: path.to_path_buf(),
            found: sample_rate,
            expected: expected_rate,
        });
    }

    let channel_count = track
        .codec_params
        .channels
        .map_or(1, symphonia::core::audio::Channels::count);

    // Create decoder
    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| Error::AudioDecode {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    let mut channels: Vec<Vec<f32>> = vec![Vec::new(); channel_count];

    // Decode all packets
    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(symphonia::core::errors::Error::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => {
                return Err(Error::AudioDecode {
                    path: path.to_path_buf(),
                    source: Box::new(e),
                });
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = decoder.decode(&packet).map_err(|e| Error::AudioDecode {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

        append_samples(&decoded, &mut channels, path)?;
    }

    Ok(DecodedAudio {
        channels,
        sample_rate,
    })
}

/// Append one decoded buffer to the planar output, channel by channel.
///
/// Silently dropping an unknown sample format would lose audio from the
/// reassembled clip, so anything unhandled is an error.
fn append_samples(
    buffer: &AudioBufferRef,
    output: &mut [Vec<f32>],
    path: &Path,
) -> Result<()> {
    match buffer {
        AudioBufferRef::F32(buf) => {
            for (ch, out) in output.iter_mut().enumerate() {
                out.extend(buf.chan(ch));
            }
        }
        AudioBufferRef::F64(buf) => {
            for (ch, out) in output.iter_mut().enumerate() {
                #[allow(clippy::cast_possible_truncation)]
                out.extend(buf.chan(ch).iter().map(|&s| s as f32));
            }
        }
        AudioBufferRef::S16(buf) => {
            const I16_NORM: f32 = 32768.0;
            for (ch, out) in output.iter_mut().enumerate() {
                out.extend(buf.chan(ch).iter().map(|&s| f32::from(s) / I16_NORM));
            }
        }
        AudioBufferRef::S24(buf) => {
            const I24_NORM: f32 = 8_388_608.0;
            for (ch, out) in output.iter_mut().enumerate() {
                #[allow(clippy::cast_precision_loss)]
                out.extend(buf.chan(ch).iter().map(|&s| s.inner() as f32 / I24_NORM));
            }
        }
        AudioBufferRef::S32(buf) => {
            const I32_NORM: f32 = 2_147_483_648.0;
            for (ch, out) in output.iter_mut().enumerate() {
                #[allow(clippy::cast_precision_loss)]
                out.extend(buf.chan(ch).iter().map(|&s| s as f32 / I32_NORM));
            }
        }
        other => {
            let name = match other {
                AudioBufferRef::U8(_) => "u8",
                AudioBufferRef::U16(_) => "u16",
                AudioBufferRef::U24(_) => "u24",
                AudioBufferRef::U32(_) => "u32",
                AudioBufferRef::S8(_) => "s8",
                _ => "unknown",
            };
            return Err(Error::UnsupportedSampleFormat {
                path: path.to_path_buf(),
                format: name.to_string(),
            });
        }
    }

    Ok(())
}

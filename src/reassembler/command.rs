//! Reassembly command execution.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::audio::{DecodedAudio, decode_subclip};
use crate::cli::Cli;
use crate::error::{Error, Result};

use super::{ClipGroup, WavWriter, scan_subclips};

/// Execute the reassembly pipeline.
///
/// Scans the input directory, then for each clip group decodes its subclips
/// in sequence order, concatenates them, and writes `<clip_id>.wav` to the
/// output directory. A group is concatenated entirely in memory before its
/// output file is created, so a failing subclip never leaves a partial file.
///
/// # Errors
///
/// Returns an error on the first unreadable directory, malformed subclip
/// name, decode failure, sample-rate or channel mismatch, or write failure.
/// Nothing is retried; output files from earlier groups are left in place.
pub fn execute(args: &Cli) -> Result<()> {
    let input_dir = args.input_dir();
    let output_dir = args.output_dir();

    let groups = scan_subclips(&input_dir)?;
    info!(
        "Found {} clip group(s) in {}",
        groups.len(),
        input_dir.display()
    );

    let writer = WavWriter::new(output_dir.clone());

    #[allow(clippy::cast_possible_truncation)]
    let pb = if args.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(groups.len() as u64);
        // Template is hardcoded and known to be valid
        #[allow(clippy::expect_used)]
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} clips ({msg})")
                .expect("valid progress template")
                .progress_chars("#>-"),
        );
        pb
    };

    let mut total_subclips = 0;

    for group in &groups {
        pb.set_message(group.clip_id.clone());
        if !args.quiet {
            pb.println(format!("~ Concatenating {} ~", group.clip_id));
        }

        let reassembled = reassemble_group(group, args.sample_rate, &pb, args.quiet)?;
        let path = writer.write_clip(
            &group.clip_id,
            &reassembled.channels,
            reassembled.sample_rate,
        )?;

        info!(
            "Wrote {} ({} samples, {} channel(s))",
            path.display(),
            reassembled.len(),
            reassembled.channels.len()
        );

        total_subclips += group.subclips.len();
        pb.inc(1);
    }

    pb.finish_with_message("done");

    info!(
        "Reassembled {} clip(s) from {} subclip(s) to {}",
        groups.len(),
        total_subclips,
        output_dir.display()
    );

    Ok(())
}

/// Decode and concatenate one group's subclips in sequence order.
///
/// The first subclip establishes the group's channel layout; any later
/// subclip with a different channel count is a fatal mismatch.
fn reassemble_group(
    group: &ClipGroup,
    expected_rate: u32,
    pb: &ProgressBar,
    quiet: bool,
) -> Result<DecodedAudio> {
    let mut combined: Option<DecodedAudio> = None;

    for subclip in &group.subclips {
        if !quiet {
            pb.println(format!("Concatenating {}...", subclip.base_name));
        }

        let decoded = decode_subclip(&subclip.path, expected_rate)?;

        match combined.as_mut() {
            None => combined = Some(decoded),
            Some(buffer) => {
                if decoded.channels.len() != buffer.channels.len() {
                    return Err(Error::ChannelMismatch {
                        path: subclip.path.clone(),
                        found: decoded.channels.len(),
                        expected: buffer.channels.len(),
                    });
                }
                for (out, chan) in buffer.channels.iter_mut().zip(&decoded.channels) {
                    out.extend_from_slice(chan);
                }
            }
        }
    }

    // Groups are never empty by construction.
    Ok(combined.unwrap_or_else(|| DecodedAudio {
        channels: Vec::new(),
        sample_rate: expected_rate,
    }))
}

//! Subclip discovery and grouping.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::WAV_EXTENSION;
use crate::error::{Error, Result};

use super::parse_subclip_name;

/// A discovered subclip file.
#[derive(Debug, Clone)]
pub struct Subclip {
    /// Full path to the subclip file.
    pub path: PathBuf,
    /// Base-name without extension, for progress output and diagnostics.
    pub base_name: String,
    /// Numeric sequence index parsed from the base-name.
    pub sequence: u32,
}

/// All subclips belonging to one clip identifier, in playback order.
#[derive(Debug, Clone)]
pub struct ClipGroup {
    /// The shared clip identifier.
    pub clip_id: String,
    /// Subclips sorted ascending by sequence index. Never empty: a group
    /// only exists because at least one subclip produced it.
    pub subclips: Vec<Subclip>,
}

/// Scan the input directory and build clip groups.
///
/// Files without a `.wav` extension are intentionally skipped; this mirrors
/// the splitting tool, which writes nothing else into the directory. Every
/// `.wav` base-name must parse, so a single malformed name fails the scan.
///
/// Groups are returned sorted by clip identifier and each group's subclips
/// sorted numerically by sequence, so output is independent of directory
/// listing order.
///
/// # Errors
///
/// Returns an error if the directory cannot be read, if a `.wav` base-name
/// does not follow the naming convention, or if no subclips are found.
pub fn scan_subclips(input_dir: &Path) -> Result<Vec<ClipGroup>> {
    let entries = fs::read_dir(input_dir).map_err(|e| Error::InputDirRead {
        path: input_dir.to_path_buf(),
        source: e,
    })?;

    let mut groups: BTreeMap<String, Vec<Subclip>> = BTreeMap::new();

    for entry in entries {
        let entry = entry.map_err(|e| Error::InputDirRead {
            path: input_dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();

        if !path.is_file() || !has_wav_extension(&path) {
            continue;
        }

        let base_name = path
            .file_stem()
            .and_then(OsStr::to_str)
            .ok_or_else(|| Error::InvalidSubclipName {
                name: path.display().to_string(),
                reason: "base-name is not valid UTF-8".to_string(),
            })?
            .to_string();

        let parsed = parse_subclip_name(&base_name)?;

        groups.entry(parsed.clip_id).or_default().push(Subclip {
            path,
            base_name,
            sequence: parsed.sequence,
        });
    }

    if groups.is_empty() {
        return Err(Error::NoSubclipsFound {
            path: input_dir.to_path_buf(),
        });
    }

    Ok(groups
        .into_iter()
        .map(|(clip_id, mut subclips)| {
            subclips.sort_by_key(|s| s.sequence);
            ClipGroup { clip_id, subclips }
        })
        .collect())
}

/// Filter predicate for subclip discovery: extension is exactly `wav`.
fn has_wav_extension(path: &Path) -> bool {
    path.extension().and_then(OsStr::to_str) == Some(WAV_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_wav_extension() {
        assert!(has_wav_extension(Path::new("abc123_0.wav")));
        assert!(!has_wav_extension(Path::new("abc123_0.WAV")));
        assert!(!has_wav_extension(Path::new("abc123_0.flac")));
        assert!(!has_wav_extension(Path::new("abc123_0")));
        assert!(!has_wav_extension(Path::new("notes.txt")));
    }
}

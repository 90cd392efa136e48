//! Subclip filename parsing.
//!
//! Subclip base-names follow a fixed-width convention established by the
//! splitting tool: a 6-character clip identifier, one separator character,
//! and a numeric sequence suffix (`abc123_0`, `abc123_17`). Parsing is
//! positional; the separator itself is not validated.

use crate::constants::{CLIP_ID_LEN, MIN_BASENAME_LEN};
use crate::error::{Error, Result};

/// A subclip base-name split into its structured parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubclipName {
    /// The 6-character clip identifier shared by all subclips of one group.
    pub clip_id: String,
    /// Position of this subclip within its group.
    pub sequence: u32,
}

/// Parse a subclip base-name (without extension) into identifier and
/// sequence index.
///
/// # Errors
///
/// Returns [`Error::InvalidSubclipName`] if the name is shorter than
/// identifier + separator + one digit, if a slice boundary falls inside a
/// multi-byte character, or if the suffix is not an unsigned integer.
pub fn parse_subclip_name(name: &str) -> Result<SubclipName> {
    if name.len() < MIN_BASENAME_LEN {
        return Err(Error::InvalidSubclipName {
            name: name.to_string(),
            reason: format!(
                "name must be at least {MIN_BASENAME_LEN} characters (identifier, separator, sequence)"
            ),
        });
    }

    let clip_id = name
        .get(..CLIP_ID_LEN)
        .ok_or_else(|| Error::InvalidSubclipName {
            name: name.to_string(),
            reason: "identifier is not valid UTF-8 at the 6-character boundary".to_string(),
        })?;

    // One separator character sits between identifier and sequence.
    let suffix = name
        .get(CLIP_ID_LEN + 1..)
        .ok_or_else(|| Error::InvalidSubclipName {
            name: name.to_string(),
            reason: "separator is not a single-byte character".to_string(),
        })?;

    let sequence: u32 = suffix.parse().map_err(|_| Error::InvalidSubclipName {
        name: name.to_string(),
        reason: format!("sequence suffix '{suffix}' is not an unsigned integer"),
    })?;

    Ok(SubclipName {
        clip_id: clip_id.to_string(),
        sequence,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_name() {
        let parsed = parse_subclip_name("abc123_0").unwrap();
        assert_eq!(parsed.clip_id, "abc123");
        assert_eq!(parsed.sequence, 0);
    }

    #[test]
    fn test_parse_multi_digit_sequence() {
        let parsed = parse_subclip_name("xyz789_142").unwrap();
        assert_eq!(parsed.clip_id, "xyz789");
        assert_eq!(parsed.sequence, 142);
    }

    #[test]
    fn test_parse_separator_not_validated() {
        // Any single separator character is accepted, matching the
        // positional convention of the splitting tool.
        let parsed = parse_subclip_name("abc123-7").unwrap();
        assert_eq!(parsed.clip_id, "abc123");
        assert_eq!(parsed.sequence, 7);
    }

    #[test]
    fn test_parse_too_short() {
        let result = parse_subclip_name("abc123_");
        assert!(matches!(result, Err(Error::InvalidSubclipName { .. })));

        let result = parse_subclip_name("abc");
        assert!(matches!(result, Err(Error::InvalidSubclipName { .. })));
    }

    #[test]
    fn test_parse_non_numeric_suffix() {
        let result = parse_subclip_name("abc123_final");
        assert!(matches!(result, Err(Error::InvalidSubclipName { .. })));
    }

    #[test]
    fn test_parse_negative_suffix_rejected() {
        let result = parse_subclip_name("abc123_-1");
        assert!(matches!(result, Err(Error::InvalidSubclipName { .. })));
    }

    #[test]
    fn test_parse_multibyte_identifier_boundary() {
        // Multi-byte character straddling the identifier boundary must be a
        // parse error, not a panic.
        let result = parse_subclip_name("abcde\u{e9}_0");
        assert!(matches!(result, Err(Error::InvalidSubclipName { .. })));

        // Multi-byte separator likewise.
        let result = parse_subclip_name("abcdef\u{e9}0");
        assert!(matches!(result, Err(Error::InvalidSubclipName { .. })));
    }
}

//! Hex color parsing and encoding
//!
//! Decodes CSS-style hex color strings into sRGB channel values:
//! - 6-digit form (`#RRGGBB`), case-insensitive
//! - 3-digit shorthand (`#abc` expands to `#aabbcc`)
//! - Leading `#` optional

use crate::error::{ContrastError, Result};
use palette::Srgb;

/// Parse a hex color string into 8-bit sRGB channels
///
/// # Arguments
///
/// * `input` - Hex color string (e.g., "#FF0000", "ff0000" or "#f00")
///
/// # Returns
///
/// sRGB color with channels in [0, 255]
///
/// # Errors
///
/// Returns `ContrastError` if the string does not contain exactly 3 or 6
/// hexadecimal digits after the optional leading `#`.
pub fn parse_hex(input: &str) -> Result<Srgb<u8>> {
    let hex = input.trim_start_matches('#');

    // Reject non-hex characters before slicing so that multi-byte input
    // cannot split a character boundary below.
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ContrastError::InvalidHexDigit {
            input: input.to_string(),
        });
    }

    let expanded: String = match hex.len() {
        6 => hex.to_owned(),
        // Shorthand: each digit doubled, "f80" -> "ff8800"
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        digits => {
            return Err(ContrastError::InvalidHexLength {
                input: input.to_string(),
                digits,
            })
        }
    };

    let channel = |range: std::ops::Range<usize>| -> Result<u8> {
        u8::from_str_radix(&expanded[range], 16).map_err(|_| ContrastError::InvalidHexDigit {
            input: input.to_string(),
        })
    };

    Ok(Srgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Encode an sRGB color as an uppercase hex string
///
/// # Arguments
///
/// * `color` - sRGB color with 8-bit channels
///
/// # Returns
///
/// Hex color string (e.g., "#FF0000")
pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02X}{:02X}{:02X}", color.red, color.green, color.blue)
}

/// Check whether a string matches the strict palette pattern: `#`
/// followed by exactly six hex digits, case-insensitive.
///
/// Stricter than [`parse_hex`]: shorthand and `#`-less forms are
/// parseable but do not satisfy this predicate.
#[must_use]
pub fn is_strict_hex(input: &str) -> bool {
    match input.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit() {
        let color = parse_hex("#3366CC").unwrap();
        assert_eq!((color.red, color.green, color.blue), (0x33, 0x66, 0xCC));
    }

    #[test]
    fn test_parse_without_hash() {
        assert_eq!(parse_hex("3366CC").unwrap(), parse_hex("#3366CC").unwrap());
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(parse_hex("#aabbcc").unwrap(), parse_hex("#AABBCC").unwrap());
    }

    #[test]
    fn test_parse_shorthand_expansion() {
        assert_eq!(parse_hex("#abc").unwrap(), parse_hex("#aabbcc").unwrap());
        assert_eq!(parse_hex("#f80").unwrap(), parse_hex("#ff8800").unwrap());
    }

    #[test]
    fn test_round_trip_normalizes_case() {
        let color = parse_hex("#a1b2c3").unwrap();
        assert_eq!(to_hex(color), "#A1B2C3");
        assert_eq!(parse_hex(&to_hex(color)).unwrap(), color);
    }

    #[test]
    fn test_parse_invalid_length() {
        assert!(matches!(
            parse_hex("#FF"),
            Err(ContrastError::InvalidHexLength { digits: 2, .. })
        ));
        assert!(matches!(
            parse_hex("#FF00FF0"),
            Err(ContrastError::InvalidHexLength { digits: 7, .. })
        ));
        assert!(matches!(
            parse_hex(""),
            Err(ContrastError::InvalidHexLength { digits: 0, .. })
        ));
    }

    #[test]
    fn test_parse_invalid_digit() {
        assert!(matches!(
            parse_hex("#GGGGGG"),
            Err(ContrastError::InvalidHexDigit { .. })
        ));
        assert!(matches!(
            parse_hex("#12345z"),
            Err(ContrastError::InvalidHexDigit { .. })
        ));
    }

    #[test]
    fn test_parse_multibyte_input_errors() {
        // 3-byte characters would split a slice boundary if unvalidated
        assert!(parse_hex("#€€").is_err());
        assert!(parse_hex("#ÿÿÿ").is_err());
    }

    #[test]
    fn test_strict_pattern_accepts_full_form() {
        assert!(is_strict_hex("#FFFFFF"));
        assert!(is_strict_hex("#a1b2c3"));
    }

    #[test]
    fn test_strict_pattern_rejects_parser_tolerated_forms() {
        // parse_hex accepts these; the palette filter does not
        assert!(!is_strict_hex("#abc"));
        assert!(!is_strict_hex("FFFFFF"));
        assert!(!is_strict_hex("#FF00FF0"));
        assert!(!is_strict_hex("#GGGGGG"));
        assert!(!is_strict_hex(""));
    }
}

//! # Contrast Colors
//!
//! A Rust crate for evaluating color accessibility per WCAG 2.x.
//!
//! This library answers whether text in one color is readable on a
//! background of another by:
//! - Decoding hex color strings (6-digit, 3-digit shorthand, optional `#`)
//! - Computing relative luminance with the standardized sRGB linearization
//! - Computing the contrast ratio between two colors
//! - Classifying a ratio against the AA/AAA thresholds for normal and
//!   large text
//! - Ranking every foreground/background pairing of a palette
//!
//! ## Example
//!
//! ```rust
//! use contrast_colors::evaluate_pair;
//!
//! let result = evaluate_pair("#FFFFFF", "#000000")?;
//! assert_eq!(result.ratio, 21.0);
//! assert!(result.aaa_normal);
//! # Ok::<(), contrast_colors::ContrastError>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod color;
pub mod config;
pub mod constants;
pub mod contrast;
pub mod error;

pub use color::{is_strict_hex, parse_hex, relative_luminance, to_hex};
pub use config::CombinerConfig;
pub use contrast::{
    classify, contrast_ratio, contrast_ratio_between, round_ratio, Compliance, PaletteCombiner,
};
pub use error::{ContrastError, Result};

/// Complete evaluation of one foreground/background pair
///
/// The ratio is rounded to two decimals, and the four WCAG flags are
/// derived from the rounded value, so the displayed number and the
/// verdicts always agree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResult {
    /// Foreground (text) color as supplied by the caller
    pub foreground: String,
    /// Background color as supplied by the caller
    pub background: String,
    /// Contrast ratio, rounded to two decimals
    pub ratio: f64,
    /// Normal text, AA level (>= 4.5:1)
    pub aa_normal: bool,
    /// Normal text, AAA level (>= 7:1)
    pub aaa_normal: bool,
    /// Large text, AA level (>= 3:1)
    pub aa_large: bool,
    /// Large text, AAA level (>= 4.5:1)
    pub aaa_large: bool,
}

impl ComplianceResult {
    /// Build a result from a full-precision ratio: round, then classify
    pub(crate) fn from_raw_ratio(foreground: &str, background: &str, raw_ratio: f64) -> Self {
        let ratio = round_ratio(raw_ratio);
        let compliance = classify(ratio);
        Self {
            foreground: foreground.to_string(),
            background: background.to_string(),
            ratio,
            aa_normal: compliance.aa_normal,
            aaa_normal: compliance.aaa_normal,
            aa_large: compliance.aa_large,
            aaa_large: compliance.aaa_large,
        }
    }
}

/// Evaluate a single foreground/background pair
///
/// This is the main entry point for checking one color combination. It
/// accepts any form [`parse_hex`] accepts.
///
/// # Arguments
///
/// * `foreground` - Text color as a hex string
/// * `background` - Background color as a hex string
///
/// # Returns
///
/// A [`ComplianceResult`] with the rounded ratio and all four WCAG flags
///
/// # Errors
///
/// Returns `ContrastError` if either color fails to parse.
pub fn evaluate_pair(foreground: &str, background: &str) -> Result<ComplianceResult> {
    let raw = contrast_ratio(foreground, background)?;
    Ok(ComplianceResult::from_raw_ratio(foreground, background, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_pair_black_on_white() {
        let result = evaluate_pair("#000000", "#FFFFFF").unwrap();
        assert_eq!(result.ratio, 21.0);
        assert!(result.aa_normal);
        assert!(result.aaa_normal);
        assert!(result.aa_large);
        assert!(result.aaa_large);
        assert_eq!(result.foreground, "#000000");
        assert_eq!(result.background, "#FFFFFF");
    }

    #[test]
    fn test_evaluate_pair_preserves_caller_spelling() {
        let result = evaluate_pair("#ffffff", "#36C").unwrap();
        assert_eq!(result.foreground, "#ffffff");
        assert_eq!(result.background, "#36C");
    }

    #[test]
    fn test_compliance_result_serialization() {
        let result = ComplianceResult {
            foreground: "#FFFFFF".to_string(),
            background: "#000000".to_string(),
            ratio: 21.0,
            aa_normal: true,
            aaa_normal: true,
            aa_large: true,
            aaa_large: true,
        };

        let json = serde_json::to_string(&result).unwrap();
        let deserialized: ComplianceResult = serde_json::from_str(&json).unwrap();

        assert_eq!(result, deserialized);
    }
}

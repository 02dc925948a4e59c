//! Contrast ratio computation and WCAG classification
//!
//! The ratio is computed at full floating-point precision and rounded to
//! two decimals only for display. Classification runs on the rounded
//! value, so the number a user sees and the pass/fail verdict always
//! agree near threshold boundaries (4.496 displays as 4.50 and passes
//! AA; 4.494 displays as 4.49 and fails).

use crate::color::{parse_hex, relative_luminance};
use crate::constants::{display, wcag};
use crate::error::Result;
use palette::Srgb;
use serde::{Deserialize, Serialize};

/// Compute the contrast ratio between two hex color strings
///
/// Accepts any form [`parse_hex`] accepts (6-digit, 3-digit shorthand,
/// optional `#`).
///
/// # Arguments
///
/// * `foreground`, `background` - Hex color strings
///
/// # Returns
///
/// Ratio in [1.0, 21.0], symmetric under argument swap
///
/// # Errors
///
/// Returns `ContrastError` if either string fails to parse. A failure is
/// a distinct type, never a sentinel ratio, so callers cannot mistake
/// invalid input for genuinely low contrast.
pub fn contrast_ratio(foreground: &str, background: &str) -> Result<f64> {
    let fg = parse_hex(foreground)?;
    let bg = parse_hex(background)?;
    Ok(contrast_ratio_between(fg, bg))
}

/// Compute the contrast ratio between two already-parsed colors
#[must_use]
pub fn contrast_ratio_between(a: Srgb<u8>, b: Srgb<u8>) -> f64 {
    ratio_from_luminance(relative_luminance(a), relative_luminance(b))
}

/// Ratio from two precomputed luminances: (L1 + 0.05) / (L2 + 0.05)
/// with L1 >= L2
pub(crate) fn ratio_from_luminance(la: f64, lb: f64) -> f64 {
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + wcag::RATIO_FLARE) / (darker + wcag::RATIO_FLARE)
}

/// Round a ratio to two decimal places for display and classification
#[must_use]
pub fn round_ratio(ratio: f64) -> f64 {
    let scale = 10f64.powi(display::RATIO_DECIMALS as i32);
    (ratio * scale).round() / scale
}

/// Pass/fail flags for the four WCAG threshold checks
///
/// All four axes are independent and all four are exposed: AAA-large and
/// AA-normal coincide numerically at 4.5:1 but apply to different text
/// sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compliance {
    /// Normal text, AA level (>= 4.5:1)
    pub aa_normal: bool,
    /// Normal text, AAA level (>= 7:1)
    pub aaa_normal: bool,
    /// Large text, AA level (>= 3:1)
    pub aa_large: bool,
    /// Large text, AAA level (>= 4.5:1)
    pub aaa_large: bool,
}

/// Classify a contrast ratio against the WCAG thresholds
///
/// Callers should pass the ROUNDED ratio (see [`round_ratio`]) so that
/// classification matches the displayed value.
#[must_use]
pub fn classify(ratio: f64) -> Compliance {
    Compliance {
        aa_normal: ratio >= wcag::AA_NORMAL_MIN,
        aaa_normal: ratio >= wcag::AAA_NORMAL_MIN,
        aa_large: ratio >= wcag::AA_LARGE_MIN,
        aaa_large: ratio >= wcag::AAA_LARGE_MIN,
    }
}

//! WCAG relative luminance
//!
//! Converts 8-bit sRGB channels to the perceptually weighted brightness
//! defined by WCAG 2.x: normalize, linearize each channel, then take the
//! weighted sum. Values are carried at full f64 precision; rounding
//! happens only at display time.

use crate::constants::srgb;
use palette::Srgb;

/// Linearize one 8-bit sRGB channel
fn linearize(channel: u8) -> f64 {
    let v = f64::from(channel) / srgb::CHANNEL_MAX;
    if v <= srgb::LINEAR_THRESHOLD {
        v / srgb::LINEAR_DIVISOR
    } else {
        ((v + srgb::GAMMA_OFFSET) / srgb::GAMMA_DIVISOR).powf(srgb::GAMMA_EXPONENT)
    }
}

/// Compute the relative luminance of a color per WCAG 2.x
///
/// # Arguments
///
/// * `color` - sRGB color with 8-bit channels
///
/// # Returns
///
/// Luminance in [0.0, 1.0], where 0.0 is black and 1.0 is white
#[must_use]
pub fn relative_luminance(color: Srgb<u8>) -> f64 {
    srgb::RED_WEIGHT * linearize(color.red)
        + srgb::GREEN_WEIGHT * linearize(color.green)
        + srgb::BLUE_WEIGHT * linearize(color.blue)
}

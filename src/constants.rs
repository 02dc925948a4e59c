//! Reference constants for WCAG contrast evaluation
//!
//! This module contains compile-time constants for the contrast formula,
//! taken from the relevant web accessibility standards.

/// WCAG 2.x conformance thresholds and contrast-ratio bounds
///
/// Source: WCAG 2.1, Success Criteria 1.4.3 (Contrast Minimum) and
/// 1.4.6 (Contrast Enhanced). Normal and large text carry separate
/// minimums at each conformance level.
pub mod wcag {
    /// Minimum ratio for AA conformance, normal text
    pub const AA_NORMAL_MIN: f64 = 4.5;

    /// Minimum ratio for AAA conformance, normal text
    pub const AAA_NORMAL_MIN: f64 = 7.0;

    /// Minimum ratio for AA conformance, large text
    pub const AA_LARGE_MIN: f64 = 3.0;

    /// Minimum ratio for AAA conformance, large text
    ///
    /// Numerically equal to `AA_NORMAL_MIN`, but a distinct check: the
    /// two apply to different text-size categories.
    pub const AAA_LARGE_MIN: f64 = 4.5;

    /// Smallest possible contrast ratio (identical colors)
    pub const MIN_CONTRAST_RATIO: f64 = 1.0;

    /// Largest possible contrast ratio (black on white)
    pub const MAX_CONTRAST_RATIO: f64 = 21.0;

    /// Flare term added to both luminances in the ratio formula
    ///
    /// WCAG defines the ratio as (L1 + 0.05) / (L2 + 0.05) to account
    /// for ambient light reflected off the display.
    pub const RATIO_FLARE: f64 = 0.05;
}

/// sRGB linearization parameters for relative luminance
///
/// Source: WCAG 2.x definition of relative luminance. Note the 0.03928
/// low-signal threshold: WCAG carries this value from the original sRGB
/// draft (IEC 61966-2-1 uses 0.04045), and the standard is explicit that
/// the published formula is the normative one. For 8-bit channels the two
/// thresholds never disagree, since no channel value lands between them.
pub mod srgb {
    /// Maximum 8-bit channel value, as a float divisor
    pub const CHANNEL_MAX: f64 = 255.0;

    /// Channel values at or below this are in the linear segment
    pub const LINEAR_THRESHOLD: f64 = 0.03928;

    /// Divisor for the linear segment
    pub const LINEAR_DIVISOR: f64 = 12.92;

    /// Offset applied before the power curve
    pub const GAMMA_OFFSET: f64 = 0.055;

    /// Divisor applied before the power curve
    pub const GAMMA_DIVISOR: f64 = 1.055;

    /// Exponent of the power curve
    pub const GAMMA_EXPONENT: f64 = 2.4;

    /// Red channel weight in the luminance sum
    pub const RED_WEIGHT: f64 = 0.2126;

    /// Green channel weight in the luminance sum
    pub const GREEN_WEIGHT: f64 = 0.7152;

    /// Blue channel weight in the luminance sum
    pub const BLUE_WEIGHT: f64 = 0.0722;
}

/// Display formatting parameters
pub mod display {
    /// Decimal places kept when rounding a ratio for display and
    /// classification
    pub const RATIO_DECIMALS: u32 = 2;
}

//! Contrast evaluation and palette combination
//!
//! This module computes WCAG contrast ratios, classifies them against
//! the AA/AAA thresholds, and ranks every foreground/background pairing
//! of a palette.

pub mod combine;
pub mod evaluate;

pub use combine::PaletteCombiner;
pub use evaluate::{classify, contrast_ratio, contrast_ratio_between, round_ratio, Compliance};

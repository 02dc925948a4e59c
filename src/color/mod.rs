//! Color parsing and luminance computation
//!
//! This module handles hex color decoding/encoding and the WCAG
//! relative luminance formula.

pub mod luminance;
pub mod parse;

pub use luminance::relative_luminance;
pub use parse::{is_strict_hex, parse_hex, to_hex};

//! Error types for the contrast_colors library

use thiserror::Error;

/// Result type alias for contrast_colors operations
pub type Result<T> = std::result::Result<T, ContrastError>;

/// Error types for color parsing and contrast evaluation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContrastError {
    /// Hex string has the wrong number of digits after shorthand expansion
    #[error("Invalid hex color '{input}': expected 3 or 6 hex digits, got {digits}")]
    InvalidHexLength { input: String, digits: usize },

    /// Hex string contains a character outside [0-9a-fA-F]
    #[error("Invalid hex color '{input}': contains a non-hexadecimal digit")]
    InvalidHexDigit { input: String },
}

impl ContrastError {
    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ContrastError::InvalidHexLength { input, .. } => {
                format!(
                    "'{}' is not a valid color. Use a 6-digit hex code like #3366CC (or 3-digit shorthand like #36C).",
                    input
                )
            }
            ContrastError::InvalidHexDigit { input } => {
                format!(
                    "'{}' is not a valid color. Hex codes may only contain the digits 0-9 and A-F.",
                    input
                )
            }
        }
    }
}

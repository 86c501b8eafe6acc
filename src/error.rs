//! Error types for the shadex library

use thiserror::Error;

/// Result type alias for shadex operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Everything that can go wrong when handing colors or settings to the
/// library.  Color math itself never fails.
#[derive(Error, Debug)]
pub enum ColorError {
    /// Hex string without exactly six digits (after an optional `#`)
    #[error("Invalid hex color: expected 6 digits, got {len}")]
    InvalidHexLength { len: usize },

    /// Hex string containing something else than `0-9a-fA-F`
    #[error("Invalid hex color: {digit:?} is not a hex digit")]
    InvalidHexDigit { digit: char },

    /// Invalid configuration value
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration could not be decoded
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ColorError {
    pub(crate) fn invalid_parameter(parameter: &str, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.to_string(),
            value: value.to_string(),
        }
    }

    /// Whether the error comes from user-typed color input, for which a
    /// default color is an acceptable answer.
    pub fn is_color_input(&self) -> bool {
        matches!(self,
                 ColorError::InvalidHexLength { .. }
                 | ColorError::InvalidHexDigit { .. })
    }
}

//! Error types for the signpost library.

use thiserror::Error;

/// Errors raised while resolving display options.
///
/// Formatting itself never fails; only user-supplied configuration values
/// can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignpostError {
    /// Unrecognized color choice, e.g. from `SIGNPOST_COLOR`
    #[error("Invalid color choice '{value}': expected one of always, never")]
    InvalidColorChoice { value: String },
    /// Unrecognized message tone
    #[error("Invalid tone '{value}': expected one of info, success, fail")]
    InvalidTone { value: String },
}

impl SignpostError {
    /// Creates an invalid color choice error for the given raw value.
    pub fn invalid_color_choice(value: impl Into<String>) -> Self {
        Self::InvalidColorChoice {
            value: value.into(),
        }
    }

    /// Creates an invalid tone error for the given raw value.
    pub fn invalid_tone(value: impl Into<String>) -> Self {
        Self::InvalidTone {
            value: value.into(),
        }
    }
}

/// Result type alias for signpost operations
pub type Result<T> = std::result::Result<T, SignpostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SignpostError::invalid_color_choice("sometimes");
        assert_eq!(
            err.to_string(),
            "Invalid color choice 'sometimes': expected one of always, never"
        );

        let err = SignpostError::invalid_tone("warn");
        assert!(err.to_string().contains("'warn'"));
    }
}

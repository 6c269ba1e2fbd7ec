//! ANSI escape sequences and message tones.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::SignpostError;

/// Resets terminal styling after a colored segment.
pub const RESET: &str = "\x1b[m";
/// Green, used for the first segment of success messages.
pub const SUCCESS_COLOR: &str = "\x1b[32m";
/// Red, used for the first segment of failure messages.
pub const FAIL_COLOR: &str = "\x1b[31m";
/// Yellow, used for the second segment of every message.
pub const VAR_COLOR: &str = "\x1b[33m";

/// Which of the three message variants to produce.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Informational, first segment is never colored
    #[default]
    Info,

    /// Success, first segment in green
    Success,

    /// Failure, first segment in red
    Fail,
}

impl Tone {
    /// Escape sequence applied to the first segment, if any.
    pub fn color_code(&self) -> Option<&'static str> {
        match self {
            Tone::Info => None,
            Tone::Success => Some(SUCCESS_COLOR),
            Tone::Fail => Some(FAIL_COLOR),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Info => "info",
            Tone::Success => "success",
            Tone::Fail => "fail",
        }
    }
}

impl FromStr for Tone {
    type Err = SignpostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Tone::Info),
            "success" => Ok(Tone::Success),
            "fail" | "failure" => Ok(Tone::Fail),
            _ => Err(SignpostError::invalid_tone(s)),
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

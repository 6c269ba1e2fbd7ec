//! Display options shared by every formatter.
//!
//! The options are resolved once, by whatever front end parses the command
//! line, and then lent to [`Formatter`](crate::Formatter)s. This module never
//! reads the process environment itself; callers pass the raw values in.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SignpostError};

/// Process-wide display options.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GlobalOptions {
    /// Wrap message segments in ANSI color sequences
    pub show_colors: bool,
}

impl Default for GlobalOptions {
    fn default() -> Self {
        Self { show_colors: true }
    }
}

/// Explicit color setting, as given by `SIGNPOST_COLOR`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    Always,
    Never,
}

impl ColorChoice {
    pub fn show_colors(&self) -> bool {
        matches!(self, ColorChoice::Always)
    }
}

impl FromStr for ColorChoice {
    type Err = SignpostError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "always" | "on" | "true" | "1" => Ok(ColorChoice::Always),
            "never" | "off" | "false" | "0" => Ok(ColorChoice::Never),
            _ => Err(SignpostError::invalid_color_choice(s)),
        }
    }
}

/// Builder for resolving [`GlobalOptions`] from flags and environment values.
///
/// Precedence, highest first:
///
/// 1. the `--no-color` flag
/// 2. `SIGNPOST_COLOR`
/// 3. `NO_COLOR`
/// 4. the default, colors on
#[derive(Debug, Clone, Default)]
pub struct GlobalOptionsBuilder {
    no_color: bool,
    color_choice: Option<String>,
    no_color_env: bool,
}

impl GlobalOptionsBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether `--no-color` was given.
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    /// Sets the raw `SIGNPOST_COLOR` value, if present.
    ///
    /// An empty value is treated as unset.
    pub fn with_color_choice<S: AsRef<str>>(mut self, value: Option<S>) -> Self {
        self.color_choice = value
            .map(|v| v.as_ref().to_string())
            .filter(|v| !v.is_empty());
        self
    }

    /// Sets whether a non-empty `NO_COLOR` is present.
    pub fn with_no_color_env(mut self, present: bool) -> Self {
        self.no_color_env = present;
        self
    }

    /// Builds the resolved options.
    ///
    /// # Errors
    ///
    /// Returns `SignpostError::InvalidColorChoice` if the `SIGNPOST_COLOR`
    /// value is not recognized, unless `--no-color` already decided the
    /// outcome.
    pub fn build(self) -> Result<GlobalOptions> {
        if self.no_color {
            return Ok(GlobalOptions { show_colors: false });
        }

        if let Some(value) = self.color_choice {
            let choice: ColorChoice = value.parse()?;
            return Ok(GlobalOptions {
                show_colors: choice.show_colors(),
            });
        }

        Ok(GlobalOptions {
            show_colors: !self.no_color_env,
        })
    }
}

//! Display wrapper for a single status line.
//!
//! [`StatusLine`] borrows everything it needs and writes the formatted line
//! straight into any [`fmt::Formatter`], so callers can `print!` or `write!`
//! it without building an intermediate `String`.
//!
//! ```text
//! segments            output (colors disabled)
//! []                  ""
//! ["a"]               "--> a"
//! ["a", "b"]          "--> a: b"
//! ["a", "b", "c"]     "--> a: b c"
//! ```
//!
//! With colors enabled the first segment is wrapped in the line's color and
//! the second in [`VAR_COLOR`], each followed by [`RESET`]. Segments after
//! the second are always written as plain text.

use std::fmt;

use crate::style::{RESET, VAR_COLOR};

const MARKER: &str = "--> ";

/// One formatted status line.
#[derive(Debug, Clone, Copy)]
pub struct StatusLine<'a, S> {
    color: Option<&'a str>,
    use_colors: bool,
    segments: &'a [S],
}

impl<'a, S: AsRef<str>> StatusLine<'a, S> {
    /// Create a line.
    ///
    /// `color` is applied to the first segment only when `use_colors` is
    /// set. `None` leaves the first segment unadorned in every case.
    pub fn new(color: Option<&'a str>, use_colors: bool, segments: &'a [S]) -> Self {
        Self {
            color,
            use_colors,
            segments,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl<S: AsRef<str>> fmt::Display for StatusLine<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut segments = self.segments.iter().map(AsRef::as_ref);

        let Some(first) = segments.next() else {
            return Ok(());
        };

        f.write_str(MARKER)?;
        match self.color.filter(|_| self.use_colors) {
            Some(color) => write!(f, "{color}{first}{RESET}")?,
            None => f.write_str(first)?,
        }

        if let Some(second) = segments.next() {
            if self.use_colors {
                write!(f, ": {VAR_COLOR}{second}{RESET}")?;
            } else {
                write!(f, ": {second}")?;
            }
        }

        for segment in segments {
            write!(f, " {segment}")?;
        }

        Ok(())
    }
}

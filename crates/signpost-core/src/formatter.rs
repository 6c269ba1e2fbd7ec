//! The message formatter and its three named variants.

use crate::{display::StatusLine, options::GlobalOptions, style::Tone};

/// Format `segments` into a single status line.
///
/// - no segments: empty string
/// - 1 segment : `--> segments[0]`
/// - 2 segments: `--> segments[0]: segments[1]`
/// - more      : the rest are appended, space separated and uncolored
///
/// When `use_colors` is set, `color` wraps the first segment and
/// [`VAR_COLOR`](crate::style::VAR_COLOR) wraps the second. Otherwise no
/// escape sequences are emitted at all.
///
/// # Examples
///
/// ```rust
/// use signpost_core::{format_message, RESET, SUCCESS_COLOR, VAR_COLOR};
///
/// assert_eq!(format_message(Some(SUCCESS_COLOR), false, &["a", "b"]), "--> a: b");
/// assert_eq!(
///     format_message(Some(SUCCESS_COLOR), true, &["a", "b"]),
///     format!("--> {SUCCESS_COLOR}a{RESET}: {VAR_COLOR}b{RESET}"),
/// );
/// ```
pub fn format_message<S: AsRef<str>>(color: Option<&str>, use_colors: bool, segments: &[S]) -> String {
    StatusLine::new(color, use_colors, segments).to_string()
}

/// Formats messages using the color setting of the borrowed options.
///
/// The options are owned by whoever parsed them; the formatter only reads
/// [`GlobalOptions::show_colors`].
#[derive(Debug, Clone, Copy)]
pub struct Formatter<'a> {
    options: &'a GlobalOptions,
}

impl<'a> Formatter<'a> {
    pub fn new(options: &'a GlobalOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &'a GlobalOptions {
        self.options
    }

    /// Informational message. The first segment is never colored.
    pub fn info<S: AsRef<str>>(&self, segments: &[S]) -> String {
        self.format(Tone::Info, segments)
    }

    /// Success message, first segment in green.
    pub fn success<S: AsRef<str>>(&self, segments: &[S]) -> String {
        self.format(Tone::Success, segments)
    }

    /// Failure message, first segment in red.
    pub fn fail<S: AsRef<str>>(&self, segments: &[S]) -> String {
        self.format(Tone::Fail, segments)
    }

    pub fn format<S: AsRef<str>>(&self, tone: Tone, segments: &[S]) -> String {
        self.line(tone, segments).to_string()
    }

    /// Borrowing variant of [`Formatter::format`] for use with `write!`.
    pub fn line<'s, S: AsRef<str>>(&self, tone: Tone, segments: &'s [S]) -> StatusLine<'s, S> {
        StatusLine::new(tone.color_code(), self.options.show_colors, segments)
    }
}

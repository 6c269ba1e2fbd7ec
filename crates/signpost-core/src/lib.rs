//! Core library for the Signpost status message formatter.
//!
//! This crate turns a short list of message segments into a single line of
//! terminal output, optionally colored with ANSI escape sequences.
//!
//! # Display Architecture
//!
//! - **Styles** ([`style`]): The fixed escape sequences and the [`Tone`] that
//!   picks one of them for the first segment
//! - **Display Wrapper** ([`display`]): [`StatusLine`] implements
//!   [`std::fmt::Display`] for a single formatted line
//! - **Formatter** ([`formatter`]): [`format_message`] plus the
//!   [`Formatter`] that reads the color flag from [`GlobalOptions`]
//!
//! Nothing in this crate writes to a terminal. Callers print the returned
//! strings themselves.
//!
//! # Quick Start
//!
//! ```rust
//! use signpost_core::{Formatter, GlobalOptions};
//!
//! let options = GlobalOptions { show_colors: false };
//! let formatter = Formatter::new(&options);
//!
//! assert_eq!(formatter.success(&["deployed", "api"]), "--> deployed: api");
//! assert_eq!(formatter.info(&[] as &[&str]), "");
//! ```

pub mod display;
pub mod error;
pub mod formatter;
pub mod options;
pub mod style;

// Re-export commonly used types
pub use display::StatusLine;
pub use error::{Result, SignpostError};
pub use formatter::{format_message, Formatter};
pub use options::{ColorChoice, GlobalOptions, GlobalOptionsBuilder};
pub use style::{Tone, FAIL_COLOR, RESET, SUCCESS_COLOR, VAR_COLOR};

//! Terminal output for formatted status lines.

use std::io::Write;

use anyhow::{Context, Result};

/// Writes formatted lines, one per call, to the underlying writer.
pub struct TerminalRenderer<W> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write `line` followed by a newline. Empty lines are skipped.
    pub fn render(&mut self, line: &str) -> Result<()> {
        if line.is_empty() {
            return Ok(());
        }
        writeln!(self.out, "{line}").context("Failed to write message")?;
        self.out.flush().context("Failed to flush output")
    }
}

#[cfg(test)]
impl<W> TerminalRenderer<W> {
    pub fn into_inner(self) -> W {
        self.out
    }
}

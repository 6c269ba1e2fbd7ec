//! Command handling: turns parsed commands into printed status lines.

use std::io::Write;

use anyhow::Result;
use log::debug;
use signpost_core::Formatter;

use crate::{args::Commands, renderer::TerminalRenderer};

pub struct Cli<'a, W> {
    formatter: Formatter<'a>,
    renderer: TerminalRenderer<W>,
}

impl<'a, W: Write> Cli<'a, W> {
    pub fn new(formatter: Formatter<'a>, renderer: TerminalRenderer<W>) -> Self {
        Self {
            formatter,
            renderer,
        }
    }

    pub fn handle_command(&mut self, command: Commands) -> Result<()> {
        let (tone, segments) = command.into_parts();
        debug!("Formatting {} message with {} segment(s)", tone, segments.len());

        let line = self.formatter.format(tone, &segments);
        self.renderer.render(&line)
    }
}

#[cfg(test)]
impl<W> Cli<'_, W> {
    pub fn into_renderer(self) -> TerminalRenderer<W> {
        self.renderer
    }
}

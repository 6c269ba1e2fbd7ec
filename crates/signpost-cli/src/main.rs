//! Signpost CLI Application
//!
//! Prints short, optionally colored status messages for shell scripts.

mod args;
mod cli;
mod renderer;

use std::{env, io};

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use log::{debug, info};
use renderer::TerminalRenderer;
use signpost_core::{Formatter, GlobalOptionsBuilder};

fn main() -> Result<()> {
    env_logger::init();

    let Args { no_color, command } = Args::parse();

    let options = GlobalOptionsBuilder::new()
        .with_no_color(no_color)
        .with_color_choice(env::var("SIGNPOST_COLOR").ok())
        .with_no_color_env(env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()))
        .build()
        .context("Failed to resolve display options")?;

    debug!("Resolved display options: {options:?}");
    info!("Signpost started");

    Cli::new(Formatter::new(&options), TerminalRenderer::new(io::stdout().lock()))
        .handle_command(command)
}

//! `ttyframe` draws one frame around its arguments (or stdin) and exits.
//!
//! Options come from, in order of precedence: command-line flags, then a
//! `--config` file or a `--preset`, then the library defaults.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, IsTerminal, Read, Write};
use tracing::debug;
use ttyframe::{init_tracing, Frame, FrameOptions};

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = init_tracing(cli.logs, cli.no_logs) {
        debug!(log = %path.display(), "trace log enabled");
    }

    let base = match (&cli.config, cli.preset) {
        (Some(path), _) => FrameOptions::load(path)?,
        (None, Some(preset)) => preset.options(),
        (None, None) => FrameOptions::default(),
    };
    let options = cli.apply(base);

    let content = read_content(&cli.content)?;
    debug!(lines = content.len(), "framing content");
    let frame = Frame::new(&content, options);

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(frame.render().as_bytes())
        .context("failed to write frame")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}

/// Positional content, or all of stdin when none is given and input is piped.
fn read_content(args: &[String]) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(Vec::new());
    }
    let mut buffer = String::new();
    stdin
        .lock()
        .read_to_string(&mut buffer)
        .context("failed to read content from stdin")?;
    Ok(vec![buffer])
}

//! Show command implementation

use std::path::Path;

use colored::Colorize;

use super::{ConfigSource, render};
use crate::cli::OutputFormat;
use crate::error::Result;

/// Run the show command
///
/// Problems in the file are reported on stderr; the printed configuration
/// already has them replaced by defaults.
pub fn run_show(explicit: Option<&Path>, format: OutputFormat) -> Result<()> {
    let source = ConfigSource::locate(explicit);
    let resolution = source.load()?;

    for diagnostic in &resolution.diagnostics {
        eprintln!("{}: {}", "warning".yellow().bold(), diagnostic);
    }

    print!("{}", render(&resolution.config, format)?);
    Ok(())
}

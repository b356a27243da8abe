//! Defaults command implementation

use deck_config::Config;

use super::render;
use crate::cli::OutputFormat;
use crate::error::Result;

/// Run the defaults command
pub fn run_defaults(format: OutputFormat) -> Result<()> {
    print!("{}", render(&Config::default(), format)?);
    Ok(())
}

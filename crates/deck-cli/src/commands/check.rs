//! Check command implementation

use std::path::Path;

use colored::Colorize;
use deck_config::Diagnostic;
use serde::Serialize;

use super::ConfigSource;
use crate::error::{CliError, Result};

#[derive(Serialize)]
struct CheckReport<'a> {
    source: String,
    valid: bool,
    diagnostics: &'a [Diagnostic],
}

/// Run the check command
pub fn run_check(explicit: Option<&Path>, json: bool) -> Result<()> {
    let source = ConfigSource::locate(explicit);
    let resolution = source.load()?;
    let diagnostics = resolution.diagnostics.as_slice();

    if json {
        let report = CheckReport {
            source: source.describe(),
            valid: diagnostics.is_empty(),
            diagnostics,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if diagnostics.is_empty() {
        println!("{} {}", "ok".green().bold(), source.describe());
    } else {
        println!("{}", source.describe().bold());
        for diagnostic in diagnostics {
            println!(
                "  {} {}: {} {}",
                "x".red(),
                diagnostic.path.to_string().cyan(),
                diagnostic.detail,
                format!("[{}]", diagnostic.kind).dimmed()
            );
        }
    }

    match diagnostics.len() {
        0 => Ok(()),
        1 => Err(CliError::user("configuration has 1 problem")),
        n => Err(CliError::user(format!("configuration has {n} problems"))),
    }
}

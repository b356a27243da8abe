//! deck CLI
//!
//! Locates, validates and prints configuration for the deck terminal
//! presentation tool.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Verbose mode enabled");
        }
    }

    match cli.command {
        Some(Commands::Check { json }) => commands::run_check(cli.config.as_deref(), json),
        Some(Commands::Show { format }) => commands::run_show(cli.config.as_deref(), format),
        Some(Commands::Defaults { format }) => commands::run_defaults(format),
        Some(Commands::Schema) => commands::run_schema(),
        None => {
            println!("{} presentation configuration", "deck".green().bold());
            println!();
            println!("Run {} for available commands.", "deck --help".cyan());
            Ok(())
        }
    }
}

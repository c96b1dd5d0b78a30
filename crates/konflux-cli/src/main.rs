//! Konflux config resolver CLI
//!
//! Resolves every version and application in the root config and writes
//! the resolved applications. Stops at the first error.

mod cli;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use konflux_core::ConfigResolver;

use cli::Cli;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let settings = cli.settings();
    tracing::debug!(?settings, "Starting");

    ConfigResolver::from_settings(&settings).run()?;
    Ok(())
}

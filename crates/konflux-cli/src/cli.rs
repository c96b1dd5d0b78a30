//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use konflux_core::Settings;
use konflux_core::settings::{DEFAULT_CONFIG_FILE, DEFAULT_ORG, DEFAULT_OUTPUT_DIR};

/// Resolve release configuration and generate Konflux pipeline inputs
///
/// Every flag has a default, so running `konflux` with no arguments reads
/// `config/konflux.yaml` and writes into `.konflux/`.
#[derive(Parser, Debug)]
#[command(name = "konflux")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root config file (.yaml, .yml, .json or .toml); applications/ and
    /// repos/ live next to it in the same format
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// GitHub organization hosting the repositories
    #[arg(long, env = "KONFLUX_ORG", default_value = DEFAULT_ORG)]
    pub org: String,

    /// Directory generated files are written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Resolve everything without writing output
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            config_file: self.config.clone(),
            org: self.org.clone(),
            output_dir: self.output.clone(),
            dry_run: self.dry_run,
        }
    }
}

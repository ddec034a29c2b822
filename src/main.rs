//! vfsh - an in-memory virtual filesystem shell.
//!
//! Usage:
//!   vfsh                     Start an interactive session
//!   vfsh --script FILE       Run commands from FILE
//!   vfsh -v / -vv            Log engine activity to stderr
//!   vfsh --help              Show help

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use vfsh_core::{DEFAULT_BIN_CAPACITY, DEFAULT_FILE_SIZE, DEFAULT_FOLDER_SIZE, EngineConfig};

#[derive(Parser)]
#[command(
    name = "vfsh",
    version,
    about = "An in-memory virtual filesystem shell",
    long_about = "vfsh simulates a tree of files and folders in memory.\n\n\
                  Create, move and remove nodes with shell-like commands; removed \
                  nodes go to a bounded recycle bin from which they can be recovered. \
                  Nothing is written to disk."
)]
struct Cli {
    /// Run commands from a file instead of prompting
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Number of removed items the bin keeps before deleting the oldest
    #[arg(long, default_value_t = DEFAULT_BIN_CAPACITY)]
    bin_capacity: usize,

    /// Size given to newly created folders
    #[arg(long, default_value_t = DEFAULT_FOLDER_SIZE)]
    folder_size: u64,

    /// Size given to files created without an explicit size
    #[arg(long, default_value_t = DEFAULT_FILE_SIZE)]
    file_size: u64,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = EngineConfig::builder()
        .bin_capacity(cli.bin_capacity)
        .folder_size(cli.folder_size)
        .default_file_size(cli.file_size)
        .build()
        .context("Invalid configuration")?;

    match cli.script {
        Some(path) => vfsh_shell::run_script(&path, config)?,
        None => vfsh_shell::run_interactive(config)?,
    }

    Ok(())
}

/// Send logs to stderr so command output stays on stdout.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

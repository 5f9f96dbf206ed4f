//! CLI argument parsing for commit-embed
//!
//! Uses clap for argument parsing.
//! Supports global flags: --vault, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod commands;
pub mod output;
pub mod parse;
pub mod paths;
pub mod settings;

use clap::Parser;
use std::path::PathBuf;

pub use args::CommitArgs;
pub use commands::Commands;
pub use output::OutputFormat;
pub use settings::SettingsCommands;

/// commit-embed - move a markdown selection into its own callout note and embed it back
#[derive(Parser, Debug)]
#[command(name = "commit-embed")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Vault root directory (defaults to the current directory)
    #[arg(long, global = true, env = "COMMIT_EMBED_VAULT")]
    pub vault: Option<PathBuf>,

    /// Output format: human or json
    #[arg(long, global = true, value_parser = output::parse_output_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log each step of the command
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

//! commit-embed - commit a markdown selection to its own callout note
//!
//! Creates a Theorem/Lemma/Proposition/Corollary/Definition note from the
//! selected text and replaces the selection with an embed of the new block.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use commit_embed_core::error::{CommitEmbedError, ExitCode as CommitExitCode};
use commit_embed_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit_with(CommitExitCode::Success),
        Err(e) => {
            report(&cli, &e);
            exit_with(e.exit_code())
        }
    }
}

/// Handle a clap failure; `--format json` gets the JSON error envelope on stderr
fn parse_failure(err: clap::Error) -> ExitCode {
    if !argv_requests_json() {
        err.exit();
    }

    let error = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::MissingRequiredArgument => CommitEmbedError::UsageError(err.to_string()),
        _ => CommitEmbedError::Other(err.to_string()),
    };
    eprintln!("{}", error.to_json());
    exit_with(error.exit_code())
}

/// Print a failed command's notice, or its JSON envelope
fn report(cli: &Cli, error: &CommitEmbedError) {
    if cli.format == OutputFormat::Json {
        eprintln!("{}", error.to_json());
    } else if !cli.quiet {
        eprintln!("{}", error.notice());
    }
}

fn exit_with(code: CommitExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

/// `--format json` / `--format=json` anywhere on the command line
fn argv_requests_json() -> bool {
    let args: Vec<String> = env::args().skip(1).collect();
    args.iter().enumerate().any(|(i, arg)| {
        arg == "--format=json"
            || (arg == "--format" && args.get(i + 1).is_some_and(|v| v == "json"))
    })
}

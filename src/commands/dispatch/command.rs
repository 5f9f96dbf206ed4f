//! Dispatch context and the `Command` seam

use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::cli::Cli;
use commit_embed_core::error::Result;

/// What every subcommand receives: parsed flags, the vault root, start time
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a Path,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a Path, start: Instant) -> Self {
        Self { cli, root, start }
    }

    /// Log time since process start under `--verbose`
    pub fn trace_finished(&self, command: &'static str) {
        if self.cli.verbose {
            debug!(command, elapsed = ?self.start.elapsed(), "command_finished");
        }
    }
}

/// A runnable subcommand
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Bare `commit-embed`: print a banner pointing at `--help`
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        println!("commit-embed {}", env!("CARGO_PKG_VERSION"));
        if !ctx.cli.quiet {
            println!();
            println!("Turn a selected passage into a Theorem, Lemma, Proposition,");
            println!("Corollary or Definition note and embed it where it was.");
            println!();
            println!("Vault: {}", ctx.root.display());
            println!("Run `commit-embed --help` for usage information.");
        }
        Ok(())
    }
}

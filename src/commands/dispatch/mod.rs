//! Routes the parsed command line to a subcommand

use std::time::Instant;

use tracing::debug;

use crate::cli::paths::resolve_root_path;
use crate::cli::Cli;
use commit_embed_core::error::Result;

mod command;
mod commands;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = resolve_root_path(cli.vault.clone());
    debug!(vault = %root.display(), "resolve_vault");

    let ctx = CommandContext::new(cli, &root, start);
    match &cli.command {
        Some(command) => command.execute(&ctx),
        None => NoCommand.execute(&ctx),
    }
}

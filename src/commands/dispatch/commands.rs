//! `Command` implementation for the parsed subcommand tree

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{commit, settings};
use commit_embed_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Commit(args) => {
                commit::execute(ctx.cli, ctx.root, args)?;
                ctx.trace_finished("commit");
            }
            Commands::Settings { command } => {
                settings::execute(ctx.cli, ctx.root, command)?;
                ctx.trace_finished("settings");
            }
        }
        Ok(())
    }
}

//! Main CLI commands enum

use clap::Subcommand;

use crate::cli::args::CommitArgs;
use crate::cli::settings::SettingsCommands;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Move the selected text into a new item note and embed it in its place
    Commit(CommitArgs),

    /// Show or change the item counter and target folder
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}

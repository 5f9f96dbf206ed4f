//! `commit-embed settings` command - view and edit the persisted settings

use tracing::debug;

use crate::cli::{Cli, OutputFormat, SettingsCommands};
use commit_embed_core::config::{FileSettingsStore, Settings, SettingsStore};
use commit_embed_core::error::Result;

/// Execute a settings subcommand
pub fn execute(cli: &Cli, root: &std::path::Path, command: &SettingsCommands) -> Result<()> {
    let store = FileSettingsStore::for_vault(root);
    let mut settings = store.load()?;

    match command {
        SettingsCommands::Show => {}
        SettingsCommands::SetCounter { value } => {
            if settings.set_counter_from_input(value) {
                store.save(&settings)?;
            } else {
                debug!(value = value.as_str(), counter = settings.counter, "counter_input_ignored");
            }
        }
        SettingsCommands::SetFolder { folder } => {
            settings.set_target_folder(folder);
            store.save(&settings)?;
        }
    }

    print_settings(cli, &store, &settings)
}

fn print_settings(cli: &Cli, store: &FileSettingsStore, settings: &Settings) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "counter": settings.counter,
                "target_folder": settings.target_folder,
                "path": store.path().display().to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("counter: {}", settings.counter);
            println!("target_folder: {}", settings.target_folder);
            if !cli.quiet {
                println!("settings: {}", store.path().display());
            }
        }
    }
    Ok(())
}

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show the counter and target folder
    Show,

    /// Set the item counter; input without leading digits is ignored
    SetCounter {
        /// New counter value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Set the folder new notes are created in (blank restores the default)
    SetFolder {
        /// Vault-relative folder
        folder: String,
    },
}

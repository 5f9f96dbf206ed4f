//! Settings type definitions

use serde::{Deserialize, Serialize};

/// Folder new notes land in when none is configured
pub const DEFAULT_TARGET_FOLDER: &str = "Theorems";

/// Per-vault settings directory
pub const SETTINGS_DIR: &str = ".commit-embed";

/// Settings file name inside [`SETTINGS_DIR`]
pub const SETTINGS_FILE: &str = "settings.toml";

/// Persisted settings record
///
/// Every field has a default so a partial file on disk is merged over the
/// defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Number of the most recently created item
    #[serde(default)]
    pub counter: u64,

    /// Vault-relative folder for created notes
    #[serde(default = "default_target_folder")]
    pub target_folder: String,
}

fn default_target_folder() -> String {
    DEFAULT_TARGET_FOLDER.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            counter: 0,
            target_folder: default_target_folder(),
        }
    }
}

impl Settings {
    /// Coerce a blank target folder to the default
    pub fn normalized(mut self) -> Self {
        if self.target_folder.trim().is_empty() {
            self.target_folder = default_target_folder();
        }
        self
    }

    /// Sequence number the next created item receives
    pub fn next_number(&self) -> u64 {
        self.counter.saturating_add(1)
    }

    /// Target folder as a vault-relative path without surrounding slashes
    pub fn folder_path(&self) -> &str {
        let trimmed = self.target_folder.trim().trim_matches('/');
        if trimmed.is_empty() {
            DEFAULT_TARGET_FOLDER
        } else {
            trimmed
        }
    }

    /// Update the counter from free-text input.
    ///
    /// Leading digits are taken (`"12abc"` reads as 12); input without
    /// leading digits is ignored and the prior value kept. Returns whether
    /// the counter changed.
    pub fn set_counter_from_input(&mut self, input: &str) -> bool {
        let trimmed = input.trim();
        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let digits: String = unsigned
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();

        match digits.parse::<u64>() {
            Ok(value) => {
                self.counter = value;
                true
            }
            Err(_) => false,
        }
    }

    /// Set the target folder, coercing blank input to the default
    pub fn set_target_folder(&mut self, folder: &str) {
        let trimmed = folder.trim();
        self.target_folder = if trimmed.is_empty() {
            default_target_folder()
        } else {
            trimmed.to_string()
        };
    }
}

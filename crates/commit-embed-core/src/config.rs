//! Settings persistence for commit-embed
//!
//! Settings live in `<vault>/.commit-embed/settings.toml`. They are loaded
//! once per command and saved after every mutation. Nothing serializes
//! concurrent writers: two overlapping invocations may read the same counter.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CommitEmbedError, Result};

pub use types::{Settings, DEFAULT_TARGET_FOLDER, SETTINGS_DIR, SETTINGS_FILE};

/// Durable storage for the [`Settings`] record
pub trait SettingsStore {
    /// Load settings, merging any persisted partial record over defaults
    fn load(&self) -> Result<Settings>;

    /// Persist the full settings record
    fn save(&self, settings: &Settings) -> Result<()>;
}

/// TOML file backed settings store
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    /// Store backed by an explicit file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the conventional location inside a vault
    pub fn for_vault(vault_root: &Path) -> Self {
        Self::new(vault_root.join(SETTINGS_DIR).join(SETTINGS_FILE))
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "settings_defaults");
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            CommitEmbedError::io_operation("read settings", self.path.display(), e)
        })?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings.normalized())
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CommitEmbedError::io_operation("create settings directory", parent.display(), e)
            })?;
        }

        let content = toml::to_string_pretty(settings)?;
        fs::write(&self.path, content).map_err(|e| {
            CommitEmbedError::io_operation("write settings", self.path.display(), e)
        })?;

        tracing::debug!(counter = settings.counter, "settings_saved");
        Ok(())
    }
}

//! Hierarchical file store the synthesizer writes into
//!
//! Paths are vault-relative and `/`-separated, the same strings that appear
//! inside embeds.

mod fs;

pub use fs::FsVault;

use thiserror::Error;

/// Errors reported by a [`Vault`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VaultError {
    #[error("already exists: {0}")]
    AlreadyExists(String),

    #[error("{0}")]
    Other(String),
}

/// Handle to a file created in a vault
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    path: String,
}

impl FileHandle {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Vault-relative path
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// File store operations used while committing a selection
pub trait Vault {
    /// Whether `path` resolves to an existing folder
    fn folder_exists(&self, path: &str) -> bool;

    /// Create a folder and any missing parents
    fn create_folder(&self, path: &str) -> Result<(), VaultError>;

    /// Create a new file; an existing file at `path` is [`VaultError::AlreadyExists`]
    fn create_file(&self, path: &str, content: &str) -> Result<FileHandle, VaultError>;

    /// Append to an existing file
    fn append(&self, file: &FileHandle, content: &str) -> Result<(), VaultError>;

    /// Read a file's current content
    fn read(&self, file: &FileHandle) -> Result<String, VaultError>;

    /// Signal that a file's content changed so watchers re-render it
    fn notify_changed(&self, file: &FileHandle);
}

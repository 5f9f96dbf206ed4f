//! Vault backed by a directory on the local file system

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

use super::{FileHandle, Vault, VaultError};

/// Vault rooted at a directory
#[derive(Debug, Clone)]
pub struct FsVault {
    root: PathBuf,
}

impl FsVault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Vault root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a vault-relative path, refusing anything that leaves the root
    pub fn resolve(&self, path: &str) -> Result<PathBuf, VaultError> {
        let relative = Path::new(path);
        let escapes = relative.components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if escapes {
            return Err(VaultError::Other(format!(
                "path leaves the vault: {}",
                path
            )));
        }

        Ok(path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |acc, segment| acc.join(segment)))
    }
}

fn other(err: impl std::fmt::Display) -> VaultError {
    VaultError::Other(err.to_string())
}

impl Vault for FsVault {
    fn folder_exists(&self, path: &str) -> bool {
        self.resolve(path).map(|p| p.is_dir()).unwrap_or(false)
    }

    fn create_folder(&self, path: &str) -> Result<(), VaultError> {
        let full = self.resolve(path)?;
        fs::create_dir_all(&full).map_err(other)?;
        tracing::debug!(path, "create_folder");
        Ok(())
    }

    fn create_file(&self, path: &str, content: &str) -> Result<FileHandle, VaultError> {
        let full = self.resolve(path)?;
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&full)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => VaultError::AlreadyExists(path.to_string()),
                _ => other(e),
            })?;
        file.write_all(content.as_bytes()).map_err(other)?;
        tracing::debug!(path, bytes = content.len(), "create_file");
        Ok(FileHandle::new(path))
    }

    fn append(&self, file: &FileHandle, content: &str) -> Result<(), VaultError> {
        let full = self.resolve(file.path())?;
        let mut handle = OpenOptions::new()
            .append(true)
            .open(&full)
            .map_err(other)?;
        handle.write_all(content.as_bytes()).map_err(other)?;
        Ok(())
    }

    fn read(&self, file: &FileHandle) -> Result<String, VaultError> {
        let full = self.resolve(file.path())?;
        fs::read_to_string(full).map_err(other)
    }

    fn notify_changed(&self, file: &FileHandle) {
        let touched = self
            .resolve(file.path())
            .and_then(|full| File::options().write(true).open(full).map_err(other))
            .and_then(|handle| handle.set_modified(SystemTime::now()).map_err(other));
        if let Err(e) = touched {
            tracing::debug!(path = file.path(), error = %e, "notify_changed_skipped");
        }
    }
}

//! Path resolution utilities for CLI commands

use std::env;
use std::path::{Path, PathBuf};

/// Resolve the vault root.
///
/// If a root path is provided, returns it. Otherwise, falls back to the
/// current working directory, or "." if that cannot be determined.
pub fn resolve_root_path(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Resolve a document path against the vault root unless it is absolute
pub fn resolve_document_path(root: &Path, document: &Path) -> PathBuf {
    if document.is_absolute() {
        document.to_path_buf()
    } else {
        root.join(document)
    }
}

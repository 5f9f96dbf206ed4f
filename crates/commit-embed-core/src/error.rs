//! Error types and exit codes for commit-embed
//!
//! Exit codes:
//! - 0: Success (a cancelled dialog is also a success)
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, empty or unresolvable selection)
//! - 3: Data error (target folder or note file could not be created)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - folder or note creation failed (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while committing a selection
#[derive(Error, Debug)]
pub enum CommitEmbedError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("no text selected")]
    EmptySelection,

    #[error("selection not found in {path:?}: {reason}")]
    SelectionNotFound { path: PathBuf, reason: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("error creating \"{folder}\" folder: {reason}")]
    FolderCreationFailed { folder: String, reason: String },

    /// Creation failures are reported uniformly; `reason` is kept for logs.
    #[error("file \"{name}\" might already exist")]
    FileCreationFailed { name: String, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl CommitEmbedError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        CommitEmbedError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        CommitEmbedError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a selection that could not be resolved in a document
    pub fn selection_not_found(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        CommitEmbedError::SelectionNotFound {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CommitEmbedError::UnknownFormat(_)
            | CommitEmbedError::UsageError(_)
            | CommitEmbedError::EmptySelection
            | CommitEmbedError::SelectionNotFound { .. }
            | CommitEmbedError::InvalidValue { .. } => ExitCode::Usage,

            CommitEmbedError::FolderCreationFailed { .. }
            | CommitEmbedError::FileCreationFailed { .. } => ExitCode::Data,

            CommitEmbedError::Io(_)
            | CommitEmbedError::Json(_)
            | CommitEmbedError::Toml(_)
            | CommitEmbedError::TomlSer(_)
            | CommitEmbedError::FailedOperationWithTarget { .. }
            | CommitEmbedError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            CommitEmbedError::UnknownFormat(_) => "unknown_format",
            CommitEmbedError::UsageError(_) => "usage_error",
            CommitEmbedError::EmptySelection => "empty_selection",
            CommitEmbedError::SelectionNotFound { .. } => "selection_not_found",
            CommitEmbedError::InvalidValue { .. } => "invalid_value",
            CommitEmbedError::FolderCreationFailed { .. } => "folder_creation_failed",
            CommitEmbedError::FileCreationFailed { .. } => "file_creation_failed",
            CommitEmbedError::Io(_) => "io_error",
            CommitEmbedError::Json(_) => "json_error",
            CommitEmbedError::Toml(_) | CommitEmbedError::TomlSer(_) => "toml_error",
            CommitEmbedError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            CommitEmbedError::Other(_) => "other",
        }
    }

    /// User-facing notice for this error, in the wording the editor plugin used
    pub fn notice(&self) -> String {
        match self {
            CommitEmbedError::EmptySelection => "Error: No text selected.".to_string(),
            CommitEmbedError::FolderCreationFailed { folder, .. } => {
                format!("Error creating \"{}\" folder.", folder)
            }
            CommitEmbedError::FileCreationFailed { name, .. } => {
                format!("Error: File \"{}\" might already exist.", name)
            }
            other => format!("error: {}", other),
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        match self {
            CommitEmbedError::FileCreationFailed { name, reason } => {
                error_obj["name"] = serde_json::json!(name);
                error_obj["reason"] = serde_json::json!(reason);
            }
            CommitEmbedError::FolderCreationFailed { folder, reason } => {
                error_obj["folder"] = serde_json::json!(folder);
                error_obj["reason"] = serde_json::json!(reason);
            }
            _ => {}
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for commit-embed operations
pub type Result<T> = std::result::Result<T, CommitEmbedError>;

//! CLI commands for commit-embed

pub mod commit;
pub mod dispatch;
pub mod prompt;
pub mod settings;

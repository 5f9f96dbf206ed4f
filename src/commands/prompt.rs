//! Interactive naming dialog for the terminal
//!
//! Asks for the item kind first (default Theorem), then for an optional
//! name. Enter confirms each step; Esc or Ctrl-C cancels the whole dialog.

use inquire::{InquireError, Select, Text};

use commit_embed_core::dialog::{Naming, NamingDialog};
use commit_embed_core::error::{CommitEmbedError, Result};
use commit_embed_core::note::ItemKind;

/// Terminal form built on inquire
#[derive(Debug, Default)]
pub struct PromptDialog;

impl PromptDialog {
    pub fn new() -> Self {
        Self
    }
}

/// Map an inquire result to "answered", "cancelled" or an error
fn answered<T>(result: std::result::Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(CommitEmbedError::io_operation("show", "naming dialog", e)),
    }
}

impl NamingDialog for PromptDialog {
    fn prompt(&mut self) -> Result<Option<Naming>> {
        let kind = Select::new("Type", ItemKind::ALL.to_vec())
            .with_starting_cursor(0)
            .with_help_message("↑↓ to choose, Enter to confirm, Esc to cancel")
            .prompt();
        let Some(kind) = answered(kind)? else {
            return Ok(None);
        };

        let placeholder = format!("(optional) {} name", kind);
        let name = Text::new("Name").with_placeholder(&placeholder).prompt();
        let Some(name) = answered(name)? else {
            return Ok(None);
        };

        Ok(Some(Naming::new(&name, kind)))
    }
}

/// Check if stdin is a TTY (interactive terminal)
///
/// Returns false if running in a non-interactive environment (CI, pipe, etc.)
pub fn is_interactive() -> bool {
    atty::is(atty::Stream::Stdin)
}

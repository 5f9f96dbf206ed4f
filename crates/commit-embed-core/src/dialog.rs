//! Data contract of the naming dialog
//!
//! The dialog collects a name and an item kind. Presentation lives with
//! the implementations; the synthesizer only sees the [`Naming`] handed off
//! on confirm, or `None` when the user cancels.

use crate::error::Result;
use crate::note::ItemKind;

/// What the user confirmed in the dialog
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Naming {
    /// Trimmed name, possibly empty
    pub name: String,
    pub kind: ItemKind,
}

impl Naming {
    /// Build a naming, trimming the name the way the dialog does on submit
    pub fn new(name: &str, kind: ItemKind) -> Self {
        Self {
            name: name.trim().to_string(),
            kind,
        }
    }
}

/// A modal that asks for a name and kind
pub trait NamingDialog {
    /// Show the dialog; `Ok(None)` means the user cancelled
    fn prompt(&mut self) -> Result<Option<Naming>>;
}

/// Dialog answered up front, e.g. from command-line flags
#[derive(Debug, Clone, Default)]
pub struct PresetDialog {
    answer: Option<Naming>,
}

impl PresetDialog {
    /// Dialog that confirms with the given name and kind
    pub fn confirm(name: &str, kind: ItemKind) -> Self {
        Self {
            answer: Some(Naming::new(name, kind)),
        }
    }

    /// Dialog that is cancelled
    pub fn cancel() -> Self {
        Self { answer: None }
    }
}

impl NamingDialog for PresetDialog {
    fn prompt(&mut self) -> Result<Option<Naming>> {
        Ok(self.answer.take())
    }
}

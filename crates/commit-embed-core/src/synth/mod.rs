//! Committing a selection: the effect sequence around a [`NoteDraft`]
//!
//! Order of effects:
//! 1. empty selection is rejected before the dialog opens
//! 2. the dialog is shown; cancel ends the command with nothing changed
//! 3. the counter is incremented and saved
//! 4. the target folder is created if missing
//! 5. the note file is created with the callout header
//! 6. the appendix is appended (best effort)
//! 7. the note is read back and its change signalled
//! 8. the selection is replaced with the embed
//! 9. the document is re-synced (best effort)
//!
//! The counter is never rolled back: a failed folder or file creation still
//! consumes the number.


use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{Settings, SettingsStore};
use crate::dialog::NamingDialog;
use crate::document::DocumentSurface;
use crate::error::{CommitEmbedError, Result};
use crate::note::{AnchorId, Clock, ItemKind, NoteDraft};
use crate::trace_time;
use crate::vault::Vault;

/// Result of one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The note was created and the selection replaced
    Created(CommitReport),
    /// The user dismissed the dialog
    Cancelled,
}

/// What a successful commit produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitReport {
    /// Vault-relative path of the created note
    pub path: String,
    pub anchor: String,
    /// Embed now standing where the selection was
    pub embed: String,
    pub kind: ItemKind,
    /// Callout title line
    pub title: String,
    pub number: u64,
    /// Success notice for the user
    pub notice: String,
    /// False when the appendix write failed and the note has only the callout
    pub appendix_written: bool,
    /// False when re-syncing the document failed
    pub refreshed: bool,
}

/// Runs the commit sequence against a vault and a settings store
pub struct Synthesizer<'a> {
    vault: &'a dyn Vault,
    settings_store: &'a dyn SettingsStore,
    clock: &'a dyn Clock,
}

impl<'a> Synthesizer<'a> {
    pub fn new(
        vault: &'a dyn Vault,
        settings_store: &'a dyn SettingsStore,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            vault,
            settings_store,
            clock,
        }
    }

    /// Move the document's selection into a new callout note and embed it back
    #[tracing::instrument(skip_all, fields(document = %document.path().display()))]
    pub fn commit_selection(
        &self,
        settings: &mut Settings,
        document: &mut dyn DocumentSurface,
        dialog: &mut dyn NamingDialog,
    ) -> Result<CommitOutcome> {
        let start = Instant::now();

        let selection = document.selection().to_string();
        if selection.is_empty() {
            return Err(CommitEmbedError::EmptySelection);
        }
        debug!(selection_len = selection.len(), "read_selection");

        let Some(naming) = dialog.prompt()? else {
            info!("dialog_cancelled");
            return Ok(CommitOutcome::Cancelled);
        };
        debug!(name = naming.name.as_str(), kind = %naming.kind, "dialog_confirmed");

        let number = settings.next_number();
        settings.counter = number;
        self.settings_store.save(settings)?;
        debug!(number, "counter_saved");

        let folder = settings.folder_path().to_string();
        self.ensure_folder(&folder)?;

        let anchor = AnchorId::generate(self.clock);
        let draft = NoteDraft::new(&selection, &naming.name, naming.kind, number, &folder, anchor);
        debug!(path = draft.file_path.as_str(), anchor = %draft.anchor, "draft_built");

        let handle = self
            .vault
            .create_file(&draft.file_path, &draft.header())
            .map_err(|e| {
                warn!(path = draft.file_path.as_str(), error = %e, "create_file_failed");
                CommitEmbedError::FileCreationFailed {
                    name: draft.safe_title.clone(),
                    reason: e.to_string(),
                }
            })?;
        trace_time!(start, "create_file");

        let appendix_written = match self.vault.append(&handle, &draft.appendix()) {
            Ok(()) => true,
            Err(e) => {
                warn!(path = handle.path(), error = %e, "append_appendix_failed");
                false
            }
        };

        match self.vault.read(&handle) {
            Ok(content) => debug!(path = handle.path(), bytes = content.len(), "read_back"),
            Err(e) => warn!(path = handle.path(), error = %e, "read_back_failed"),
        }
        self.vault.notify_changed(&handle);

        let embed = draft.embed_reference();
        document.replace_selection(&embed)?;
        debug!(embed = embed.as_str(), "selection_replaced");

        let refreshed = match document.refresh() {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "document_refresh_failed");
                false
            }
        };

        trace_time!(start, "commit_selection");
        Ok(CommitOutcome::Created(CommitReport {
            path: draft.file_path.clone(),
            anchor: draft.anchor.to_string(),
            embed,
            kind: draft.kind,
            title: draft.title_line(),
            number,
            notice: draft.success_notice(),
            appendix_written,
            refreshed,
        }))
    }

    fn ensure_folder(&self, folder: &str) -> Result<()> {
        if self.vault.folder_exists(folder) {
            return Ok(());
        }

        self.vault.create_folder(folder).map_err(|e| {
            warn!(folder, error = %e, "create_folder_failed");
            CommitEmbedError::FolderCreationFailed {
                folder: folder.to_string(),
                reason: e.to_string(),
            }
        })
    }
}

//! `commit-embed commit` command - create an item note from a selection
//!
//! - `commit <document> --lines A:B` or `--match TEXT` addresses the selection
//! - `--name` / `--kind` answer the naming dialog up front
//! - without them, an interactive dialog is shown when stdin is a terminal
//!
//! Example usage:
//! - `commit-embed commit Scratch.md --lines 12:14 --kind lemma --name "Yoneda Lemma"`
//! - `commit-embed commit Scratch.md --match "Every presheaf"`

use std::time::Instant;

use tracing::debug;

use crate::cli::paths::resolve_document_path;
use crate::cli::{Cli, CommitArgs, OutputFormat};
use crate::commands::prompt::{self, PromptDialog};
use commit_embed_core::bail_usage;
use commit_embed_core::config::{FileSettingsStore, SettingsStore};
use commit_embed_core::dialog::{NamingDialog, PresetDialog};
use commit_embed_core::document::FileDocument;
use commit_embed_core::error::Result;
use commit_embed_core::note::SystemClock;
use commit_embed_core::synth::{CommitOutcome, CommitReport, Synthesizer};
use commit_embed_core::vault::FsVault;

/// Pick the dialog: flags answer it, otherwise prompt on a terminal
fn naming_dialog(args: &CommitArgs) -> Box<dyn NamingDialog> {
    if args.is_preset() || !prompt::is_interactive() {
        Box::new(PresetDialog::confirm(
            args.name.as_deref().unwrap_or(""),
            args.kind.unwrap_or_default(),
        ))
    } else {
        Box::new(PromptDialog::new())
    }
}

/// Execute the commit command
pub fn execute(cli: &Cli, root: &std::path::Path, args: &CommitArgs) -> Result<()> {
    let start = Instant::now();

    let Some(spec) = args.selection() else {
        bail_usage!("a selection is required: pass --lines or --match");
    };
    let document_path = resolve_document_path(root, &args.document);
    let mut document = FileDocument::open(&document_path, &spec)?;

    if cli.verbose {
        debug!(document = %document_path.display(), ?spec, elapsed = ?start.elapsed(), "open_document");
    }

    let store = FileSettingsStore::for_vault(root);
    let mut settings = store.load()?;
    let vault = FsVault::new(root);
    let mut dialog = naming_dialog(args);

    let outcome = Synthesizer::new(&vault, &store, &SystemClock).commit_selection(
        &mut settings,
        &mut document,
        dialog.as_mut(),
    )?;

    match outcome {
        CommitOutcome::Created(report) => print_created(cli, &report)?,
        CommitOutcome::Cancelled => print_cancelled(cli),
    }

    if cli.verbose {
        debug!(elapsed = ?start.elapsed(), "execute_command");
    }

    Ok(())
}

fn print_created(cli: &Cli, report: &CommitReport) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let mut output = serde_json::to_value(report)?;
            output["status"] = serde_json::json!("created");
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("{}", report.notice);
            }
            println!("{}", report.path);
        }
    }
    Ok(())
}

fn print_cancelled(cli: &Cli) {
    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "status": "cancelled" })),
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Cancelled.");
            }
        }
    }
}

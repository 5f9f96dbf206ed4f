//! commit-embed core library
//!
//! Moves a selected passage of a markdown document into its own callout note
//! (Theorem, Lemma, Proposition, Corollary or Definition) and replaces the
//! selection with an embed of the new block.

pub mod config;
pub mod dialog;
pub mod document;
pub mod error;
pub mod format;
pub mod logging;
pub mod note;
pub mod synth;
pub mod vault;

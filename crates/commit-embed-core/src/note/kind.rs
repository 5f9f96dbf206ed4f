//! Item kinds a selection can be committed as

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CommitEmbedError;

/// Closed set of item kinds offered by the naming dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ItemKind {
    #[default]
    Theorem,
    Lemma,
    Proposition,
    Corollary,
    Definition,
}

impl ItemKind {
    /// All kinds, in the order the dialog lists them
    pub const ALL: [ItemKind; 5] = [
        ItemKind::Theorem,
        ItemKind::Lemma,
        ItemKind::Proposition,
        ItemKind::Corollary,
        ItemKind::Definition,
    ];

    /// Label used in titles and file names
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Theorem => "Theorem",
            ItemKind::Lemma => "Lemma",
            ItemKind::Proposition => "Proposition",
            ItemKind::Corollary => "Corollary",
            ItemKind::Definition => "Definition",
        }
    }

    /// Callout type tag and frontmatter tag
    pub fn tag(&self) -> &'static str {
        match self {
            ItemKind::Theorem => "theorem",
            ItemKind::Lemma => "lemma",
            ItemKind::Proposition => "proposition",
            ItemKind::Corollary => "corollary",
            ItemKind::Definition => "definition",
        }
    }

    /// Heading of the section appended after the callout
    pub fn appendix_heading(&self) -> &'static str {
        match self {
            ItemKind::Definition => "Details",
            _ => "Proof & Details",
        }
    }

    /// What the appendix placeholder asks the author to write
    pub fn appendix_subject(&self) -> &'static str {
        match self {
            ItemKind::Definition => "details",
            _ => "proof",
        }
    }
}

impl FromStr for ItemKind {
    type Err = CommitEmbedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ItemKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                CommitEmbedError::invalid_value(
                    "item kind",
                    format!(
                        "{} (expected: theorem, lemma, proposition, corollary, or definition)",
                        wanted
                    ),
                )
            })
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

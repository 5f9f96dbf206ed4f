use std::path::PathBuf;

use clap::{ArgGroup, Args};

use super::parse::{parse_item_kind, parse_line_range};
use commit_embed_core::document::SelectionSpec;
use commit_embed_core::note::ItemKind;

#[derive(Args, Debug, Clone)]
#[command(group(ArgGroup::new("selection").required(true).args(["lines", "text"])))]
pub struct CommitArgs {
    /// Markdown document holding the selection (relative to the vault root)
    pub document: PathBuf,

    /// Select a 1-based line range: `N` or `A:B`
    #[arg(long, short = 'l', value_parser = parse_line_range)]
    pub lines: Option<SelectionSpec>,

    /// Select the first occurrence of this text
    #[arg(long = "match", short = 'm', value_name = "TEXT")]
    pub text: Option<String>,

    /// Item name; giving a name or kind skips the interactive dialog
    #[arg(long, short)]
    pub name: Option<String>,

    /// Item kind (theorem, lemma, proposition, corollary, definition)
    #[arg(long, short, value_parser = parse_item_kind)]
    pub kind: Option<ItemKind>,
}

impl CommitArgs {
    /// The selection these flags address
    pub fn selection(&self) -> Option<SelectionSpec> {
        self.lines
            .clone()
            .or_else(|| self.text.clone().map(SelectionSpec::Match))
    }

    /// Whether the dialog was answered on the command line
    pub fn is_preset(&self) -> bool {
        self.name.is_some() || self.kind.is_some()
    }
}

//! Note synthesis: the pure part of committing a selection
//!
//! A [`NoteDraft`] is built from the selection, the user's title, the item
//! kind, the sequence number and the anchor. It knows the target path, the
//! file header with the callout block, the appended section and the embed
//! that replaces the selection. Nothing here touches the file system.

use std::sync::OnceLock;

use regex::Regex;

use super::anchor::AnchorId;
use super::kind::ItemKind;

/// Title used when the user leaves the name empty
pub const UNTITLED: &str = "Untitled";

/// Topic tag written next to the kind tag in the frontmatter
pub const TOPIC_TAG: &str = "category-theory";

/// Placeholder value of the frontmatter `details` field
pub const DETAILS_PLACEHOLDER: &str = "Add private notes or context here.";

static PATH_SEPARATORS: OnceLock<Regex> = OnceLock::new();

fn path_separators() -> &'static Regex {
    PATH_SEPARATORS
        .get_or_init(|| Regex::new(r"[/\\]+").expect("Invalid path separator regex pattern"))
}

/// Replace runs of `/` and `\` with a single `-` and trim.
///
/// Idempotent: the output contains no separators, so a second pass is a no-op.
pub fn sanitize_title(raw: &str) -> String {
    path_separators().replace_all(raw, "-").trim().to_string()
}

/// Title as the callout shows it: `Kind N`, or `Kind N (title)` when named
pub fn format_title(kind: ItemKind, number: u64, title: &str) -> String {
    if title.is_empty() || title == UNTITLED {
        format!("{} {}", kind, number)
    } else {
        format!("{} {} ({})", kind, number, title)
    }
}

/// Everything one commit writes, computed up front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub kind: ItemKind,
    pub number: u64,
    /// Trimmed user input, or [`UNTITLED`]
    pub title: String,
    /// Title with path separators replaced, or [`UNTITLED`]
    pub safe_title: String,
    pub anchor: AnchorId,
    /// File name without extension
    pub file_name: String,
    /// Vault-relative path of the new note
    pub file_path: String,
    pub selection: String,
}

impl NoteDraft {
    pub fn new(
        selection: &str,
        raw_title: &str,
        kind: ItemKind,
        number: u64,
        folder: &str,
        anchor: AnchorId,
    ) -> Self {
        let trimmed = raw_title.trim();
        let sanitized = sanitize_title(trimmed);
        let (title, safe_title) = if trimmed.is_empty() || sanitized.is_empty() {
            (UNTITLED.to_string(), UNTITLED.to_string())
        } else {
            (trimmed.to_string(), sanitized)
        };

        let file_name = format!("{} {} - {}", kind, number, safe_title);
        let folder = folder.trim_matches('/');
        let file_path = if folder.is_empty() {
            format!("{}.md", file_name)
        } else {
            format!("{}/{}.md", folder, file_name)
        };

        Self {
            kind,
            number,
            title,
            safe_title,
            anchor,
            file_name,
            file_path,
            selection: selection.to_string(),
        }
    }

    /// `Kind N` or `Kind N (title)`
    pub fn title_line(&self) -> String {
        format_title(self.kind, self.number, &self.title)
    }

    /// Frontmatter plus the anchored callout holding the selection
    pub fn header(&self) -> String {
        let tag = self.kind.tag();
        format!(
            "---\ntags: [{tag}, {topic}]\ndetails: \"{details}\"\n---\n\n> [!{tag}] {title} ^{anchor}\n> {selection}\n",
            tag = tag,
            topic = TOPIC_TAG,
            details = DETAILS_PLACEHOLDER,
            title = self.title_line(),
            anchor = self.anchor,
            selection = self.selection,
        )
    }

    /// Section appended after the callout once the file exists
    pub fn appendix(&self) -> String {
        format!(
            "\n## {}\n\n(Write {}, related examples, or additional context here...)\n",
            self.kind.appendix_heading(),
            self.kind.appendix_subject(),
        )
    }

    /// Full file body after both writes succeed
    pub fn body(&self) -> String {
        let mut body = self.header();
        body.push_str(&self.appendix());
        body
    }

    /// Embed that replaces the selection in the source document
    pub fn embed_reference(&self) -> String {
        format!("![[{}#^{}]]", self.file_path, self.anchor)
    }

    /// Success notice shown after the commit
    pub fn success_notice(&self) -> String {
        format!("{} \"{}\" created successfully.", self.kind, self.safe_title)
    }
}

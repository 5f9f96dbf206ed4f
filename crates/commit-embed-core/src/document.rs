//! The active document and its selection
//!
//! A document is a markdown file held in memory together with the byte
//! range of the current selection. Replacing the selection writes the file
//! back immediately, the way an editor applies an edit.

use std::fs::{self, File};
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::bail_invalid;
use crate::error::{CommitEmbedError, Result};

/// How the selection is addressed inside a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionSpec {
    /// 1-based inclusive line range
    Lines { start: usize, end: usize },
    /// First exact occurrence of the text
    Match(String),
}

impl SelectionSpec {
    /// Parse `N` or `A:B` into a line range
    pub fn parse_lines(s: &str) -> Result<Self> {
        let s = s.trim();
        let (start, end) = match s.split_once(':') {
            Some((a, b)) => (a.trim(), b.trim()),
            None => (s, s),
        };

        let (Ok(start), Ok(end)) = (start.parse::<usize>(), end.parse::<usize>()) else {
            bail_invalid!("line range", s);
        };
        if start == 0 || end < start {
            bail_invalid!("line range", s);
        }

        Ok(SelectionSpec::Lines { start, end })
    }
}

/// Editor-side operations on the active document
pub trait DocumentSurface {
    /// Identifies the active document
    fn path(&self) -> &Path;

    /// Currently selected text, possibly empty
    fn selection(&self) -> &str;

    /// Replace the selected text; the replacement becomes the new selection
    fn replace_selection(&mut self, replacement: &str) -> Result<()>;

    /// Full in-editor text
    fn full_text(&self) -> &str;

    /// Bring the stored copy in line with the in-editor text and signal the change
    fn refresh(&mut self) -> Result<()>;
}

/// Markdown file on disk with an addressed selection
#[derive(Debug, Clone)]
pub struct FileDocument {
    path: PathBuf,
    text: String,
    range: Range<usize>,
}

impl FileDocument {
    /// Load a document and resolve its selection
    pub fn open(path: &Path, spec: &SelectionSpec) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| CommitEmbedError::io_operation("read document", path.display(), e))?;
        Self::from_text(path, text, spec)
    }

    /// Build a document from text already in memory
    pub fn from_text(path: &Path, text: String, spec: &SelectionSpec) -> Result<Self> {
        let range = resolve_selection(&text, spec)
            .map_err(|reason| CommitEmbedError::selection_not_found(path, reason))?;
        Ok(Self {
            path: path.to_path_buf(),
            text,
            range,
        })
    }

    /// Byte range of the selection
    pub fn selection_range(&self) -> Range<usize> {
        self.range.clone()
    }

    fn touch(&self) -> std::io::Result<()> {
        File::options()
            .write(true)
            .open(&self.path)?
            .set_modified(SystemTime::now())
    }
}

impl DocumentSurface for FileDocument {
    fn path(&self) -> &Path {
        &self.path
    }

    fn selection(&self) -> &str {
        &self.text[self.range.clone()]
    }

    fn replace_selection(&mut self, replacement: &str) -> Result<()> {
        self.text.replace_range(self.range.clone(), replacement);
        self.range = self.range.start..self.range.start + replacement.len();
        fs::write(&self.path, &self.text).map_err(|e| {
            CommitEmbedError::io_operation("write document", self.path.display(), e)
        })?;
        Ok(())
    }

    fn full_text(&self) -> &str {
        &self.text
    }

    fn refresh(&mut self) -> Result<()> {
        let stored = fs::read_to_string(&self.path).map_err(|e| {
            CommitEmbedError::io_operation("read document", self.path.display(), e)
        })?;
        if stored != self.text {
            tracing::debug!(path = %self.path.display(), "document_resync");
            fs::write(&self.path, &self.text).map_err(|e| {
                CommitEmbedError::io_operation("write document", self.path.display(), e)
            })?;
        }
        self.touch().map_err(|e| {
            CommitEmbedError::io_operation("touch document", self.path.display(), e)
        })?;
        Ok(())
    }
}

/// Byte ranges of each line's content, excluding the line terminator
fn line_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let content = line
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(line);
        spans.push(offset..offset + content.len());
        offset += line.len();
    }
    spans
}

fn resolve_selection(text: &str, spec: &SelectionSpec) -> std::result::Result<Range<usize>, String> {
    match spec {
        SelectionSpec::Lines { start, end } => {
            let spans = line_spans(text);
            if *start == 0 || end < start || *end > spans.len() {
                return Err(format!(
                    "lines {}:{} out of range (document has {} lines)",
                    start,
                    end,
                    spans.len()
                ));
            }
            Ok(spans[start - 1].start..spans[end - 1].end)
        }
        SelectionSpec::Match(needle) => text
            .find(needle.as_str())
            .map(|at| at..at + needle.len())
            .ok_or_else(|| format!("text not found: {:?}", needle)),
    }
}

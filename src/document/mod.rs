//! Read access to document state.
//!
//! The tracker never stores document text. After each change it only needs
//! to ask two questions about the document's post-edit state: how many lines
//! it has, and whether a given line is blank. Hosts answer through the
//! [`DocumentQuery`] trait; [`InMemoryDocument`] is a simple line-vector
//! implementation for tests and hosts that already hold the full text.

/// Read-only view of a document's current state.
pub trait DocumentQuery {
    /// Number of lines in the document.
    fn line_count(&self) -> usize;

    /// True if the line is empty or contains only whitespace.
    ///
    /// A line index at or past [`line_count`](Self::line_count) must also
    /// report blank: the line no longer exists, and history entries pointing
    /// at it are dropped.
    fn is_line_blank(&self, line: usize) -> bool;
}

/// A document held as a vector of lines.
///
/// # Examples
///
/// ```
/// use edittrail::document::{DocumentQuery, InMemoryDocument};
///
/// let doc = InMemoryDocument::from_text("fn main() {\n\n}\n");
/// assert_eq!(doc.line_count(), 3);
/// assert!(!doc.is_line_blank(0));
/// assert!(doc.is_line_blank(1));
/// assert!(doc.is_line_blank(99));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocument {
    lines: Vec<String>,
}

impl InMemoryDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Creates a document from full text, splitting on line breaks.
    ///
    /// A trailing newline does not produce an extra empty line, matching how
    /// editors count lines.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    /// Creates a document from pre-split lines.
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Returns the line at the given index, if it exists.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }
}

impl DocumentQuery for InMemoryDocument {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn is_line_blank(&self, line: usize) -> bool {
        match self.lines.get(line) {
            Some(text) => text.trim().is_empty(),
            None => true,
        }
    }
}

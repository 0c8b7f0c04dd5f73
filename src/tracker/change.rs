//! Document-change event types.
//!
//! A [`TextChange`] describes a single edit as delivered by the host: the
//! document it happened in, the range that was replaced, and the text that
//! replaced it. An empty replacement text denotes a pure deletion.

/// A zero-based line/character position in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    /// Creates a new position.
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// The span of text replaced by an edit.
///
/// `start` and `end` are equal for a pure insertion; `end.line > start.line`
/// when the replaced span covered multiple lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRange {
    pub start: Position,
    pub end: Position,
}

impl TextRange {
    /// Creates a new range.
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Number of full lines the range covers beyond its first line.
    pub fn line_span(&self) -> usize {
        self.end.line.saturating_sub(self.start.line)
    }
}

/// One document-change notification from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChange {
    /// Document the change happened in
    pub file: String,
    /// Range that was replaced
    pub range: TextRange,
    /// Replacement text; empty means deletion-only
    pub text: String,
}

impl TextChange {
    /// Creates a new change event.
    pub fn new(file: impl Into<String>, range: TextRange, text: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            range,
            text: text.into(),
        }
    }

    /// True if this change removed text without inserting any.
    pub fn is_deletion(&self) -> bool {
        self.text.is_empty()
    }

    /// True if the inserted text consists solely of line-break characters.
    ///
    /// Matches only non-empty text; a deletion is not a newline insertion.
    pub fn is_newline_insertion(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(|c| c == '\r' || c == '\n')
    }
}

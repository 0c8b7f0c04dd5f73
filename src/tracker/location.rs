//! Edit location record.

/// A single point where a textual edit occurred.
///
/// The `file` identifies the document (a path or an in-memory URI) and is
/// fixed for the lifetime of the entry; `line` and `character` are adjusted
/// in place as later edits shift the surrounding text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditLocation {
    /// Stable document identifier (file path or in-memory URI)
    pub file: String,
    /// Zero-based line of the edit
    pub line: usize,
    /// Zero-based character column just after the inserted text
    pub character: usize,
}

impl EditLocation {
    /// Creates a new edit location.
    pub fn new(file: impl Into<String>, line: usize, character: usize) -> Self {
        Self {
            file: file.into(),
            line,
            character,
        }
    }
}

//! Edit-location history with back/forward navigation.
//!
//! [`EditHistory`] stores locations as a vector ordered by recency (oldest
//! first) with a cursor index for navigation. Recording a change reconciles
//! the existing entries against the edit before anything new is appended:
//! deletions and newline insertions shift later entries, entries on lines
//! that became blank or disappeared are dropped, and rapid edits on the same
//! line coalesce into one entry.

use tracing::trace;

use crate::document::DocumentQuery;
use crate::tracker::change::TextChange;
use crate::tracker::location::EditLocation;

/// Default maximum number of locations kept.
pub const DEFAULT_MAX_LOCATIONS: usize = 1000;

/// Smallest maximum the history will accept.
pub const MIN_MAX_LOCATIONS: usize = 2;

/// Bounded history of edit locations with a navigation cursor.
///
/// The cursor is owned by the history: callers only ever ask for the
/// previous or next location, and every record resets the cursor past the
/// end so the next "previous" lands on the newest entry. Navigation never
/// fails; it saturates at the oldest and newest entries and returns `None`
/// only when the history is empty.
///
/// # Examples
///
/// ```
/// use edittrail::document::InMemoryDocument;
/// use edittrail::tracker::change::{Position, TextChange, TextRange};
/// use edittrail::tracker::history::EditHistory;
///
/// let mut history = EditHistory::new(1000);
/// let doc = InMemoryDocument::from_text("alpha\nbeta\ngamma");
///
/// let at = |line| TextRange::new(Position::new(line, 0), Position::new(line, 0));
/// history.record_change(&TextChange::new("a.txt", at(0), "x"), &doc);
/// history.record_change(&TextChange::new("a.txt", at(2), "y"), &doc);
///
/// let back = history.previous_location().unwrap();
/// assert_eq!(back.line, 0);
/// let forward = history.next_location().unwrap();
/// assert_eq!(forward.line, 2);
/// ```
#[derive(Debug, Clone)]
pub struct EditHistory {
    /// Stored locations, oldest first
    locations: Vec<EditLocation>,
    /// Navigation cursor (0-based index into `locations`)
    current: usize,
    /// Maximum locations to store
    max_locations: usize,
}

impl EditHistory {
    /// Creates an empty history with a maximum size.
    ///
    /// The maximum is floored at [`MIN_MAX_LOCATIONS`].
    pub fn new(max_locations: usize) -> Self {
        let max_locations = max_locations.max(MIN_MAX_LOCATIONS);
        Self {
            locations: Vec::new(),
            current: max_locations - 1,
            max_locations,
        }
    }

    /// Reconciles the history against one document change.
    ///
    /// `doc` must reflect the document's state after the change was applied;
    /// it is consulted to drop entries whose line became blank or no longer
    /// exists.
    ///
    /// In priority order:
    ///
    /// 1. A pure deletion shifts entries at or below the deleted span up by
    ///    the number of removed lines. No entry is recorded.
    /// 2. An insertion of only line-break characters shifts entries below
    ///    the insertion point down by one line. No entry is recorded.
    ///    (The shift is one line even when several newlines were inserted
    ///    in a single change; a multi-line paste under-shifts.)
    /// 3. Any other insertion records a location at the change's start line.
    ///    If the newest entry is already on that line, only its character
    ///    is updated; otherwise the new entry replaces any older entry for
    ///    the same line and the navigation cursor resets past the end.
    pub fn record_change(&mut self, change: &TextChange, doc: &dyn DocumentQuery) {
        let start = change.range.start;
        let end = change.range.end;

        if change.is_deletion() {
            let removed = change.range.line_span();
            if removed > 0 {
                for loc in self.locations.iter_mut() {
                    if loc.file == change.file && loc.line >= end.line {
                        loc.line -= removed;
                    }
                }
            }
            self.drop_blank_lines(&change.file, doc);
            return;
        }

        if change.is_newline_insertion() {
            for loc in self.locations.iter_mut() {
                if loc.file == change.file && loc.line > start.line {
                    loc.line += 1;
                }
            }
            self.drop_blank_lines(&change.file, doc);
            return;
        }

        let character = start.character + change.text.chars().count();

        let coalesced = match self.locations.last_mut() {
            Some(last) if last.file == change.file && last.line == start.line => {
                last.character = character;
                true
            }
            _ => false,
        };

        if !coalesced {
            // One entry per (file, line): the new location replaces any
            // older entry on the same line.
            self.locations
                .retain(|loc| loc.file != change.file || loc.line != start.line);
            self.locations
                .push(EditLocation::new(change.file.clone(), start.line, character));
            self.current = self.max_locations - 1;

            // Drop entries pointing past the end of the document.
            let line_count = doc.line_count();
            self.locations
                .retain(|loc| loc.file != change.file || loc.line <= line_count);
        }

        self.enforce_max();
    }

    /// Steps the cursor backward and returns the location there.
    ///
    /// Returns `None` only when the history is empty. Calling repeatedly
    /// past the oldest entry keeps returning the oldest entry.
    pub fn previous_location(&mut self) -> Option<EditLocation> {
        if self.locations.is_empty() {
            return None;
        }

        let newest = self.locations.len() - 1;
        self.current = self.current.min(newest).saturating_sub(1);
        Some(self.locations[self.current].clone())
    }

    /// Steps the cursor forward and returns the location there.
    ///
    /// Returns `None` only when the history is empty. Saturates at the
    /// newest entry.
    pub fn next_location(&mut self) -> Option<EditLocation> {
        if self.locations.is_empty() {
            return None;
        }

        let newest = self.locations.len() - 1;
        self.current = (self.current + 1).min(newest);
        Some(self.locations[self.current].clone())
    }

    /// Removes all locations.
    pub fn clear(&mut self) {
        self.locations.clear();
    }

    /// Removes the entry equal to `location`, if present.
    ///
    /// Used by the revealer when a document failed to open as a regular
    /// file and the entry should be skipped.
    pub fn remove_exact(&mut self, location: &EditLocation) {
        self.locations.retain(|loc| loc != location);
    }

    /// Removes every entry for the given document.
    ///
    /// Used by the revealer when a document could not be found in any open
    /// view.
    pub fn remove_document(&mut self, file: &str) {
        let before = self.locations.len();
        self.locations.retain(|loc| loc.file != file);
        if self.locations.len() < before {
            trace!(file, pruned = before - self.locations.len(), "pruned unreachable document");
        }
    }

    /// True if an entry equal to `location` is still present.
    pub fn contains(&self, location: &EditLocation) -> bool {
        self.locations.iter().any(|loc| loc == location)
    }

    /// Returns the number of stored locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns true if the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Returns the stored locations, oldest first.
    pub fn locations(&self) -> &[EditLocation] {
        &self.locations
    }

    /// Returns the configured maximum.
    pub fn max_locations(&self) -> usize {
        self.max_locations
    }

    /// Updates the configured maximum, floored at [`MIN_MAX_LOCATIONS`],
    /// truncating oldest entries if the history is now over the limit.
    pub fn set_max_locations(&mut self, max_locations: usize) {
        self.max_locations = max_locations.max(MIN_MAX_LOCATIONS);
        self.enforce_max();
    }

    /// Drops entries for `file` whose line is blank or no longer exists.
    ///
    /// Blank-line filtering keeps the history meaningful (no stops on empty
    /// lines); an out-of-range line counts as blank.
    fn drop_blank_lines(&mut self, file: &str, doc: &dyn DocumentQuery) {
        self.locations
            .retain(|loc| loc.file != file || !doc.is_line_blank(loc.line));
    }

    /// Truncates oldest entries until the history fits the maximum.
    fn enforce_max(&mut self) {
        if self.locations.len() > self.max_locations {
            let excess = self.locations.len() - self.max_locations;
            self.locations.drain(..excess);
        }
    }
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LOCATIONS)
    }
}

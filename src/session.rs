//! Per-session wiring of history, navigation, and reveal.
//!
//! A [`Session`] is the single long-lived instance a host constructs when it
//! starts up. The host forwards its document-change and active-view-change
//! notifications to it and maps its three user commands onto [`Command`].

use tracing::debug;

use crate::config::Config;
use crate::document::DocumentQuery;
use crate::reveal::{EditorHost, RevealOutcome, Revealer};
use crate::tracker::change::TextChange;
use crate::tracker::history::EditHistory;
use crate::tracker::location::EditLocation;

/// The user-invocable commands a host registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Go to the previous edit location.
    GotoPreviousEditLocation,
    /// Go to the next edit location.
    GotoNextEditLocation,
    /// Clear the edit-location history.
    ClearEditLocationsHistory,
}

/// Owns the edit-location history and revealer for one editing session.
///
/// All methods run synchronously on the host's event-processing path; the
/// host is expected to serialize its notifications, so no locking is needed.
#[derive(Debug)]
pub struct Session {
    history: EditHistory,
    revealer: Revealer,
}

impl Session {
    /// Creates a session from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            history: EditHistory::new(config.effective_max_locations()),
            revealer: Revealer::new(),
        }
    }

    /// Creates a session with an explicit maximum history length.
    pub fn with_max_locations(max_locations: usize) -> Self {
        Self {
            history: EditHistory::new(max_locations),
            revealer: Revealer::new(),
        }
    }

    /// Handles one document-change notification.
    ///
    /// `doc` must reflect the document's state after the change.
    pub fn handle_text_change(&mut self, change: &TextChange, doc: &dyn DocumentQuery) {
        self.history.record_change(change, doc);
    }

    /// Handles one active-view-change notification.
    ///
    /// Only a pending untitled-document search reacts to this; the tracker
    /// itself does not care which view is active.
    pub fn handle_active_view_changed(&mut self, host: &mut dyn EditorHost) {
        self.revealer.on_active_view_changed(&mut self.history, host);
    }

    /// Executes one user command.
    pub fn execute(&mut self, command: Command, host: &mut dyn EditorHost) {
        match command {
            Command::GotoPreviousEditLocation => self.goto_previous_edit_location(host),
            Command::GotoNextEditLocation => self.goto_next_edit_location(host),
            Command::ClearEditLocationsHistory => self.clear_edit_locations(),
        }
    }

    /// Navigates back and reveals the location, if any.
    pub fn goto_previous_edit_location(&mut self, host: &mut dyn EditorHost) {
        self.navigate(host, |history| history.previous_location());
    }

    /// Navigates forward and reveals the location, if any.
    pub fn goto_next_edit_location(&mut self, host: &mut dyn EditorHost) {
        self.navigate(host, |history| history.next_location());
    }

    /// Empties the history.
    pub fn clear_edit_locations(&mut self) {
        debug!(len = self.history.len(), "clearing edit-location history");
        self.history.clear();
    }

    /// Returns the tracked history, for inspection.
    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// Navigates with `step` and reveals the result, renavigating while
    /// entries turn out to be unopenable. Each retry removed an entry, so
    /// the loop terminates.
    fn navigate(
        &mut self,
        host: &mut dyn EditorHost,
        step: impl Fn(&mut EditHistory) -> Option<EditLocation>,
    ) {
        loop {
            let Some(location) = step(&mut self.history) else {
                return;
            };
            match self.revealer.reveal(location, &mut self.history, host) {
                RevealOutcome::Retry => continue,
                RevealOutcome::Revealed | RevealOutcome::Pending => return,
            }
        }
    }
}

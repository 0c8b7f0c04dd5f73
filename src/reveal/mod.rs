//! Revealing edit locations in the host.
//!
//! The [`Revealer`] takes a location returned by navigation and gets the
//! host to show it: directly when the document is already active, via
//! [`EditorHost::open_document`] otherwise. Untitled documents cannot be
//! reopened by path, so for those it runs a [`ViewSearch`] that cycles
//! through the open views until the document turns up or the cycle returns
//! to where it started.
//!
//! Nothing here surfaces an error to the user. A location that cannot be
//! reached is pruned from the history and the reveal is abandoned silently;
//! `tracing` debug events are the only record.

use std::fmt;

use tracing::debug;

use crate::tracker::history::EditHistory;
use crate::tracker::location::EditLocation;

/// Why a document could not be opened by path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenError {
    /// The document is untitled or in-memory; it has no file to reopen.
    Untitled,
    /// The document could not be opened for any other reason.
    NotFound { message: String },
}

impl fmt::Display for OpenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenError::Untitled => write!(f, "document is untitled or in-memory"),
            OpenError::NotFound { message } => {
                write!(f, "document could not be opened: {}", message)
            }
        }
    }
}

impl std::error::Error for OpenError {}

/// Host-integration seam for showing and opening documents.
///
/// The tracker core never talks to the editor directly; a host implements
/// this trait and the [`Revealer`] drives it. `open_document` may complete
/// asynchronously on the host side — the revealer only requires that the
/// document is active by the time the host delivers the next
/// active-view-change notification.
pub trait EditorHost {
    /// Identifier of the currently active document, if any view is focused.
    fn active_document(&self) -> Option<String>;

    /// Moves the caret and viewport of the active view to the location.
    ///
    /// Only called when the location's document is the active one.
    fn show_location(&mut self, location: &EditLocation);

    /// Opens the document and shows it, making it the active view.
    fn open_document(&mut self, file: &str) -> Result<(), OpenError>;

    /// Cycles focus to the next open view.
    fn focus_next_view(&mut self);
}

/// What a reveal request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The location was shown.
    Revealed,
    /// A view search was started; the reveal completes (or is abandoned)
    /// on a later active-view-change notification.
    Pending,
    /// The location's document could not be opened; its entry was removed
    /// and the caller should navigate again.
    Retry,
}

/// Progress of a view-cycling search for an untitled document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchState {
    /// Still cycling through views.
    Searching,
    /// The target document's view became active.
    Found,
    /// The cycle returned to its starting view without a match.
    Exhausted,
}

/// One in-flight search across open views.
///
/// `started_at` marks the view that was active when the search began; the
/// search is exhausted when cycling brings that view back around.
#[derive(Debug, Clone)]
struct ViewSearch {
    target: EditLocation,
    started_at: Option<String>,
    state: SearchState,
}

impl ViewSearch {
    fn new(target: EditLocation, started_at: Option<String>) -> Self {
        Self {
            target,
            started_at,
            state: SearchState::Searching,
        }
    }

    /// Advances the search for the newly active document.
    fn advance(&mut self, active: Option<&str>) {
        if active == Some(self.target.file.as_str()) {
            self.state = SearchState::Found;
        } else if active == self.started_at.as_deref() {
            self.state = SearchState::Exhausted;
        }
    }
}

/// Orchestrates revealing locations, including the untitled-document
/// fallback search.
///
/// At most one search is in flight at a time; starting a new reveal drops
/// any pending one.
#[derive(Debug, Default)]
pub struct Revealer {
    search: Option<ViewSearch>,
}

impl Revealer {
    /// Creates a revealer with no pending search.
    pub fn new() -> Self {
        Self { search: None }
    }

    /// True if a view search is still in flight.
    pub fn is_searching(&self) -> bool {
        self.search.is_some()
    }

    /// Shows the location, opening its document if necessary.
    ///
    /// On [`RevealOutcome::Retry`] the entry has already been removed from
    /// `history`; the caller is expected to navigate again.
    pub fn reveal(
        &mut self,
        location: EditLocation,
        history: &mut EditHistory,
        host: &mut dyn EditorHost,
    ) -> RevealOutcome {
        self.search = None;

        if host.active_document().as_deref() == Some(location.file.as_str()) {
            host.show_location(&location);
            return RevealOutcome::Revealed;
        }

        match host.open_document(&location.file) {
            Ok(()) => {
                host.show_location(&location);
                RevealOutcome::Revealed
            }
            Err(OpenError::Untitled) => {
                debug!(file = %location.file, "untitled document, searching open views");
                self.search = Some(ViewSearch::new(location, host.active_document()));
                host.focus_next_view();
                RevealOutcome::Pending
            }
            Err(OpenError::NotFound { message }) => {
                debug!(file = %location.file, %message, "open failed, skipping entry");
                history.remove_exact(&location);
                RevealOutcome::Retry
            }
        }
    }

    /// Drives a pending view search with an active-view-change notification.
    ///
    /// No-op when no search is in flight. A found view is shown unless the
    /// target entry was filtered out of the history while the search was
    /// pending (the reveal is then abandoned). An exhausted cycle prunes
    /// every entry for the target document.
    pub fn on_active_view_changed(
        &mut self,
        history: &mut EditHistory,
        host: &mut dyn EditorHost,
    ) {
        let Some(search) = self.search.as_mut() else {
            return;
        };

        let active = host.active_document();
        search.advance(active.as_deref());

        match search.state {
            SearchState::Searching => {
                host.focus_next_view();
            }
            SearchState::Found => {
                let target = search.target.clone();
                self.search = None;
                if history.contains(&target) {
                    host.show_location(&target);
                } else {
                    debug!(file = %target.file, "target entry gone, abandoning reveal");
                }
            }
            SearchState::Exhausted => {
                let file = search.target.file.clone();
                self.search = None;
                debug!(%file, "view cycle exhausted, pruning document");
                history.remove_document(&file);
            }
        }
    }
}

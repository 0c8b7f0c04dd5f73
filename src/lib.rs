//! edittrail - edit-location history with back/forward navigation.
//!
//! edittrail tracks the locations of recent text edits inside an editing
//! host and lets the user step backward and forward through them, like
//! browser back/forward navigation. The host feeds it document-change and
//! active-view-change notifications; edittrail keeps the history coherent
//! as the document shifts underneath it (lines inserted and removed, lines
//! becoming blank, documents closed) and tells the host which location to
//! reveal.
//!
//! # Architecture
//!
//! - `tracker`: the history buffer, navigation cursor, and reconciliation
//!   algorithm (the core)
//! - `document`: the read-only document seam the tracker consults
//! - `reveal`: the host seam for showing locations, with the open-view
//!   search fallback for untitled documents
//! - `session`: one owned instance per editing session, wiring events and
//!   commands together
//! - `config`: the maximum-history-length option
//!
//! # Example
//!
//! ```
//! use edittrail::document::InMemoryDocument;
//! use edittrail::session::Session;
//! use edittrail::tracker::{Position, TextChange, TextRange};
//!
//! let mut session = Session::with_max_locations(1000);
//! let doc = InMemoryDocument::from_text("one\ntwo\nthree");
//!
//! let range = TextRange::new(Position::new(1, 0), Position::new(1, 0));
//! session.handle_text_change(&TextChange::new("notes.txt", range, "x"), &doc);
//!
//! assert_eq!(session.history().len(), 1);
//! ```
//!
//! All state lives in memory for the lifetime of the session; nothing is
//! persisted.

pub mod config;
pub mod document;
pub mod reveal;
pub mod session;
pub mod tracker;

pub use config::Config;
pub use document::{DocumentQuery, InMemoryDocument};
pub use reveal::{EditorHost, OpenError, RevealOutcome, Revealer};
pub use session::{Command, Session};
pub use tracker::{EditHistory, EditLocation, Position, TextChange, TextRange};

//! Edit-location tracking.
//!
//! This module owns the history of recent edit locations and the navigation
//! cursor over it.
//!
//! - `change`: document-change event types delivered by the host
//! - `location`: the stored edit-location record
//! - `history`: the history buffer and reconciliation algorithm

pub mod change;
pub mod history;
pub mod location;

pub use change::{Position, TextChange, TextRange};
pub use history::EditHistory;
pub use location::EditLocation;

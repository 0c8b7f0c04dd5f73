// tests/reveal_tests.rs
use edittrail::document::InMemoryDocument;
use edittrail::reveal::{EditorHost, OpenError, RevealOutcome, Revealer};
use edittrail::tracker::change::{Position, TextChange, TextRange};
use edittrail::tracker::history::EditHistory;
use edittrail::tracker::location::EditLocation;

/// Editor host with a ring of open views and a fixed set of on-disk files.
///
/// `focus_next_view` advances the ring; the test then delivers the
/// active-view-change notification by calling `on_active_view_changed`,
/// the way a real host would after the focus moved.
struct FakeHost {
    views: Vec<String>,
    active: usize,
    on_disk: Vec<String>,
    revealed: Vec<EditLocation>,
    focus_calls: usize,
}

impl FakeHost {
    fn new(views: &[&str], on_disk: &[&str]) -> Self {
        Self {
            views: views.iter().map(|v| v.to_string()).collect(),
            active: 0,
            on_disk: on_disk.iter().map(|v| v.to_string()).collect(),
            revealed: Vec::new(),
            focus_calls: 0,
        }
    }
}

impl EditorHost for FakeHost {
    fn active_document(&self) -> Option<String> {
        self.views.get(self.active).cloned()
    }

    fn show_location(&mut self, location: &EditLocation) {
        self.revealed.push(location.clone());
    }

    fn open_document(&mut self, file: &str) -> Result<(), OpenError> {
        if self.on_disk.iter().any(|f| f == file) {
            if let Some(index) = self.views.iter().position(|v| v == file) {
                self.active = index;
            } else {
                self.views.push(file.to_string());
                self.active = self.views.len() - 1;
            }
            return Ok(());
        }
        if file.starts_with("untitled:") {
            return Err(OpenError::Untitled);
        }
        Err(OpenError::NotFound {
            message: format!("no such file: {}", file),
        })
    }

    fn focus_next_view(&mut self) {
        if !self.views.is_empty() {
            self.active = (self.active + 1) % self.views.len();
        }
        self.focus_calls += 1;
    }
}

fn history_with(entries: &[(&str, usize, usize)]) -> EditHistory {
    let mut history = EditHistory::new(1000);
    let doc = InMemoryDocument::from_text("aaa\nbbb\nccc\nddd\neee\nfff");
    for &(file, line, character) in entries {
        let position = Position::new(line, character);
        let range = TextRange::new(position, position);
        history.record_change(&TextChange::new(file, range, "x"), &doc);
    }
    history
}

#[test]
fn test_reveal_in_active_view() {
    let mut host = FakeHost::new(&["a.txt"], &["a.txt"]);
    let mut history = history_with(&[("a.txt", 1, 0)]);
    let mut revealer = Revealer::new();

    let location = EditLocation::new("a.txt", 1, 1);
    let outcome = revealer.reveal(location.clone(), &mut history, &mut host);

    assert_eq!(outcome, RevealOutcome::Revealed);
    assert_eq!(host.revealed, vec![location]);
}

#[test]
fn test_reveal_opens_inactive_document() {
    let mut host = FakeHost::new(&["other.txt"], &["other.txt", "a.txt"]);
    let mut history = history_with(&[("a.txt", 1, 0)]);
    let mut revealer = Revealer::new();

    let location = EditLocation::new("a.txt", 1, 1);
    let outcome = revealer.reveal(location.clone(), &mut history, &mut host);

    assert_eq!(outcome, RevealOutcome::Revealed);
    assert_eq!(host.active_document().as_deref(), Some("a.txt"));
    assert_eq!(host.revealed, vec![location]);
}

#[test]
fn test_unopenable_document_removes_entry_and_retries() {
    let mut host = FakeHost::new(&["other.txt"], &["other.txt"]);
    let mut history = history_with(&[("gone.txt", 1, 0)]);
    let mut revealer = Revealer::new();

    let location = EditLocation::new("gone.txt", 1, 1);
    let outcome = revealer.reveal(location, &mut history, &mut host);

    assert_eq!(outcome, RevealOutcome::Retry);
    assert!(history.is_empty());
    assert!(host.revealed.is_empty());
}

#[test]
fn test_untitled_search_finds_open_view() {
    let mut host = FakeHost::new(&["a.txt", "b.txt", "untitled:1"], &["a.txt", "b.txt"]);
    let mut history = history_with(&[("untitled:1", 2, 0)]);
    let mut revealer = Revealer::new();

    let location = EditLocation::new("untitled:1", 2, 1);
    let outcome = revealer.reveal(location.clone(), &mut history, &mut host);
    assert_eq!(outcome, RevealOutcome::Pending);
    assert!(revealer.is_searching());

    // First hop landed on b.txt: still searching.
    revealer.on_active_view_changed(&mut history, &mut host);
    assert!(revealer.is_searching());

    // Second hop landed on untitled:1: found and shown.
    revealer.on_active_view_changed(&mut history, &mut host);
    assert!(!revealer.is_searching());
    assert_eq!(host.revealed, vec![location]);
    assert_eq!(history.len(), 1);
}

#[test]
fn test_untitled_search_exhausts_and_prunes() {
    let mut host = FakeHost::new(&["a.txt", "b.txt"], &["a.txt", "b.txt"]);
    let mut history = history_with(&[("untitled:1", 2, 0), ("b.txt", 3, 0)]);
    let mut revealer = Revealer::new();

    let location = EditLocation::new("untitled:1", 2, 1);
    assert_eq!(
        revealer.reveal(location, &mut history, &mut host),
        RevealOutcome::Pending
    );

    // b.txt, then back around to a.txt where the search started.
    revealer.on_active_view_changed(&mut history, &mut host);
    revealer.on_active_view_changed(&mut history, &mut host);

    assert!(!revealer.is_searching());
    assert!(host.revealed.is_empty());
    // Entries for the unreachable document are pruned, others stay.
    assert_eq!(history.len(), 1);
    assert_eq!(history.locations()[0].file, "b.txt");
}

#[test]
fn test_stale_target_abandons_reveal() {
    let mut host = FakeHost::new(&["a.txt", "untitled:1"], &["a.txt"]);
    let mut history = history_with(&[("untitled:1", 2, 0)]);
    let mut revealer = Revealer::new();

    let location = EditLocation::new("untitled:1", 2, 1);
    assert_eq!(
        revealer.reveal(location, &mut history, &mut host),
        RevealOutcome::Pending
    );

    // The entry is filtered out while the search is pending.
    history.clear();

    revealer.on_active_view_changed(&mut history, &mut host);
    assert!(!revealer.is_searching());
    assert!(host.revealed.is_empty());
}

#[test]
fn test_new_reveal_drops_pending_search() {
    let mut host = FakeHost::new(&["a.txt", "untitled:1"], &["a.txt"]);
    let mut history = history_with(&[("untitled:1", 2, 0), ("a.txt", 3, 0)]);
    let mut revealer = Revealer::new();

    let untitled = EditLocation::new("untitled:1", 2, 1);
    assert_eq!(
        revealer.reveal(untitled, &mut history, &mut host),
        RevealOutcome::Pending
    );

    let plain = EditLocation::new("a.txt", 3, 1);
    assert_eq!(
        revealer.reveal(plain.clone(), &mut history, &mut host),
        RevealOutcome::Revealed
    );
    assert!(!revealer.is_searching());
    assert_eq!(host.revealed, vec![plain]);
}

#[test]
fn test_open_error_display() {
    assert_eq!(
        OpenError::Untitled.to_string(),
        "document is untitled or in-memory"
    );
    let err = OpenError::NotFound {
        message: "gone".to_string(),
    };
    assert_eq!(err.to_string(), "document could not be opened: gone");
}

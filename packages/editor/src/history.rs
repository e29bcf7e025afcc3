//! # Undo/Redo History
//!
//! Bounded, linear timeline of page snapshots.
//!
//! ## Design
//!
//! - The entry under the cursor is always the live page state
//! - Saving truncates everything after the cursor, then appends
//! - Undo/redo move the cursor and hand back the snapshot to restore
//! - Past `max_size` entries the oldest one is evicted, so the true
//!   initial state stops being reachable
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut history = History::with_max_size(50);
//! history.reset(Snapshot::new(PageState::default()));
//!
//! history.save(Snapshot::labeled(next_state, "Add hero section"));
//!
//! if let Some(previous) = history.undo() {
//!     // restore previous.state
//! }
//! ```

use crate::mutations::PageState;

/// Default number of retained snapshots
pub const DEFAULT_MAX_HISTORY_SIZE: usize = 50;

/// Deep copy of the sections and selection at one point in time
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub state: PageState,

    /// Label of the edit that produced this state
    pub label: Option<String>,
}

impl Snapshot {
    pub fn new(state: PageState) -> Self {
        Self { state, label: None }
    }

    pub fn labeled(state: PageState, label: impl Into<String>) -> Self {
        Self {
            state,
            label: Some(label.into()),
        }
    }
}

/// Linear undo/redo history for a page
#[derive(Debug)]
pub struct History {
    /// Snapshots, oldest first
    entries: Vec<Snapshot>,

    /// Index of the live state (`None` while empty)
    cursor: Option<usize>,

    /// Maximum number of retained snapshots (at least 1)
    max_size: usize,

    /// Snapshots dropped from the front so far
    evicted: usize,
}

impl History {
    /// Create a history with the default size (50)
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_MAX_HISTORY_SIZE)
    }

    /// Create a history with a custom size
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
            max_size: max_size.max(1),
            evicted: 0,
        }
    }

    /// Replace the whole timeline with a single baseline snapshot
    pub fn reset(&mut self, snapshot: Snapshot) {
        self.entries.clear();
        self.entries.push(snapshot);
        self.cursor = Some(0);
        self.evicted = 0;
    }

    /// Record a new state after the cursor, dropping any redo tail
    pub fn save(&mut self, snapshot: Snapshot) {
        let keep = self.cursor.map_or(0, |cursor| cursor + 1);
        self.entries.truncate(keep);
        self.entries.push(snapshot);

        // Trim if exceeded max size
        if self.entries.len() > self.max_size {
            self.entries.remove(0);
            self.evicted += 1;
            tracing::debug!(
                max_size = self.max_size,
                evicted = self.evicted,
                "history full, dropped oldest snapshot"
            );
        }

        self.cursor = Some(self.entries.len() - 1);
    }

    /// Step back; returns the snapshot to restore
    pub fn undo(&mut self) -> Option<&Snapshot> {
        match self.cursor {
            Some(cursor) if cursor > 0 => {
                self.cursor = Some(cursor - 1);
                self.entries.get(cursor - 1)
            }
            _ => None, // Nothing to undo
        }
    }

    /// Step forward; returns the snapshot to restore
    pub fn redo(&mut self) -> Option<&Snapshot> {
        let next = self.cursor.map_or(0, |cursor| cursor + 1);
        if next < self.entries.len() && self.cursor.is_some() {
            self.cursor = Some(next);
            self.entries.get(next)
        } else {
            None // Nothing to redo
        }
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor > 0)
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor + 1 < self.entries.len())
    }

    /// Number of retained snapshots
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Number of snapshots evicted since the last reset
    pub fn evicted(&self) -> usize {
        self.evicted
    }

    /// Snapshot under the cursor
    pub fn current(&self) -> Option<&Snapshot> {
        self.cursor.and_then(|cursor| self.entries.get(cursor))
    }

    /// Mutable access to the live snapshot, for changes that are not undo steps
    pub fn current_mut(&mut self) -> Option<&mut Snapshot> {
        match self.cursor {
            Some(cursor) => self.entries.get_mut(cursor),
            None => None,
        }
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
        self.evicted = 0;
    }

    /// Label of the edit the next undo reverts
    pub fn undo_description(&self) -> Option<&str> {
        if !self.can_undo() {
            return None;
        }
        self.current().and_then(|snapshot| snapshot.label.as_deref())
    }

    /// Label of the edit the next redo replays
    pub fn redo_description(&self) -> Option<&str> {
        if !self.can_redo() {
            return None;
        }
        self.cursor
            .and_then(|cursor| self.entries.get(cursor + 1))
            .and_then(|snapshot| snapshot.label.as_deref())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionInstance;
    use pagesmith_sections::{Content, SectionType};

    fn state(n: usize) -> PageState {
        PageState {
            sections: (0..n)
                .map(|i| SectionInstance {
                    id: format!("s-{}", i),
                    section_type: SectionType::Hero,
                    variation_id: "hero-centered".to_string(),
                    content: Content::new(),
                    order: i,
                })
                .collect(),
            selected_section_id: None,
        }
    }

    #[test]
    fn test_history_creation() {
        let history = History::new();
        assert_eq!(history.len(), 0);
        assert_eq!(history.cursor(), None);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_and_redo_walk_the_timeline() {
        let mut history = History::new();
        history.reset(Snapshot::new(state(0)));
        history.save(Snapshot::labeled(state(1), "Add hero section"));

        assert!(history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo_description(), Some("Add hero section"));

        let restored = history.undo().unwrap();
        assert_eq!(restored.state, state(0));
        assert!(history.can_redo());
        assert_eq!(history.redo_description(), Some("Add hero section"));

        let restored = history.redo().unwrap();
        assert_eq!(restored.state, state(1));
        assert_eq!(history.cursor(), Some(1));
    }

    #[test]
    fn test_undo_at_start_is_noop() {
        let mut history = History::new();
        assert!(history.undo().is_none());

        history.reset(Snapshot::new(state(0)));
        assert!(history.undo().is_none());
        assert_eq!(history.cursor(), Some(0));
    }

    #[test]
    fn test_redo_at_end_is_noop() {
        let mut history = History::new();
        assert!(history.redo().is_none());

        history.reset(Snapshot::new(state(0)));
        history.save(Snapshot::new(state(1)));
        assert!(history.redo().is_none());
        assert_eq!(history.cursor(), Some(1));
    }

    #[test]
    fn test_save_after_undo_clears_redo() {
        let mut history = History::new();
        history.reset(Snapshot::new(state(0)));
        history.save(Snapshot::new(state(1)));
        history.save(Snapshot::new(state(2)));

        history.undo();
        history.undo();
        assert!(history.can_redo());

        history.save(Snapshot::new(state(3)));
        assert!(!history.can_redo());
        assert_eq!(history.len(), 2);
        assert_eq!(history.current().unwrap().state, state(3));
    }

    #[test]
    fn test_max_size_enforced() {
        let mut history = History::with_max_size(3);
        history.reset(Snapshot::new(state(0)));

        for n in 1..=5 {
            history.save(Snapshot::new(state(n)));
            assert!(history.len() <= 3);
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.evicted(), 3);
        assert_eq!(history.cursor(), Some(2));

        // Oldest retained snapshot, not the initial state
        while history.undo().is_some() {}
        assert_eq!(history.current().unwrap().state, state(3));
    }

    #[test]
    fn test_zero_max_size_is_clamped() {
        let mut history = History::with_max_size(0);
        history.reset(Snapshot::new(state(0)));
        history.save(Snapshot::new(state(1)));

        assert_eq!(history.max_size(), 1);
        assert_eq!(history.len(), 1);
        assert!(!history.can_undo());
    }
}

//! Undo/redo history of the live element collection.

use crate::element::Element;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;

/// Maximum number of undo states to keep.
pub const MAX_UNDO_HISTORY: usize = 50;

/// A recorded state of the live collection.
///
/// `elements` holds the state on the far side of the cursor, so it changes
/// on undo and redo. `timestamp` is when the entry was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub elements: Vec<Element>,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    fn new(elements: Vec<Element>) -> Self {
        Self {
            elements,
            timestamp: Utc::now(),
        }
    }
}

/// Linear undo history with a cursor.
///
/// `record` stores the collection as it was *before* a mutation. Entries at
/// or below the cursor are undoable; entries above it are redoable. Undo and
/// redo exchange the live collection with the entry they step over, so every
/// entry always holds the state on the far side of the cursor and an undo
/// followed by a redo lands on exactly the collection it started from.
///
/// There is one timeline for the whole editor. It follows the live
/// collection across category switches rather than keeping a stack per
/// category.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    cursor: Option<usize>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self::with_capacity(MAX_UNDO_HISTORY)
    }

    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "history capacity must be positive");
        Self {
            entries: VecDeque::with_capacity(capacity),
            cursor: None,
            capacity,
        }
    }

    /// Record the live collection as it was before a mutation.
    ///
    /// Drops every redoable entry, then evicts the oldest entries past
    /// capacity.
    pub fn record(&mut self, prior: Vec<Element>) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        if keep < self.entries.len() {
            log::debug!("Discarding {} redo entries", self.entries.len() - keep);
        }
        self.entries.truncate(keep);
        self.entries.push_back(HistoryEntry::new(prior));
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Step back one entry, exchanging it with `live`.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self, live: &mut Vec<Element>) -> bool {
        let Some(cursor) = self.cursor else {
            return false;
        };
        let entry = &mut self.entries[cursor];
        std::mem::swap(&mut entry.elements, live);
        self.cursor = cursor.checked_sub(1);
        true
    }

    /// Step forward one entry, exchanging it with `live`.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self, live: &mut Vec<Element>) -> bool {
        let next = self.next_index();
        let Some(entry) = self.entries.get_mut(next) else {
            return false;
        };
        std::mem::swap(&mut entry.elements, live);
        self.cursor = Some(next);
        true
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn can_redo(&self) -> bool {
        self.next_index() < self.entries.len()
    }

    /// Index of the most recently applied entry, `None` when nothing is
    /// undoable.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    fn next_index(&self) -> usize {
        self.cursor.map_or(0, |c| c + 1)
    }
}

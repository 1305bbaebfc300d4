//! Bounded activity log of dashboard actions

use std::collections::VecDeque;

use chrono::{DateTime, Local};

/// Number of entries kept; older entries are evicted first
pub const HISTORY_CAPACITY: usize = 50;

/// One recorded action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub time: DateTime<Local>,
    pub action: String,
    pub detail: Option<String>,
}

impl HistoryEntry {
    /// `action: detail`, or just `action` when there is no detail
    pub fn summary(&self) -> String {
        match &self.detail {
            Some(detail) if !detail.is_empty() => format!("{}: {}", self.action, detail),
            _ => self.action.clone(),
        }
    }
}

/// Newest-first log capped at a fixed capacity.
///
/// Index 0 is always the most recently recorded entry.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}

impl HistoryLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record an action stamped with the current local time
    pub fn record(&mut self, action: impl Into<String>, detail: Option<String>) {
        self.push(HistoryEntry {
            time: Local::now(),
            action: action.into(),
            detail,
        });
    }

    /// Insert at the front, dropping from the tail when over capacity
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
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

    /// Iterate newest to oldest
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }
}

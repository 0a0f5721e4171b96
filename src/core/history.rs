//! Bounded calculation history.
//!
//! Newest entries sit at index 0; once the bound is reached the oldest entry
//! is evicted. The shells render entries top-down straight from `iter`.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::core::format_value;

/// A single completed calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The reduced expression, e.g. `"7 + 3"` or `"sqrt(9)"`
    pub expression: String,
    /// The computed result
    pub result: f64,
}

impl HistoryEntry {
    /// Creates a new history entry
    #[must_use]
    pub fn new(expression: String, result: f64) -> Self {
        Self { expression, result }
    }

    /// Returns the formatted line, e.g. `"7 + 3 = 10"`
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression, format_value(self.result))
    }
}

/// Bounded log of completed calculations, newest first
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
}

impl History {
    /// Maximum number of retained entries
    pub const MAX_ENTRIES: usize = 15;

    /// Creates an empty history
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Prepends an entry, evicting the oldest once the bound is reached
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        if self.entries.len() > Self::MAX_ENTRIES {
            self.entries.pop_back();
        }
    }

    /// Records a completed calculation
    pub fn record(&mut self, expression: &str, result: f64) {
        self.push(HistoryEntry::new(expression.to_string(), result));
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the history is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clears all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns an iterator over the entries, newest first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Returns the entry at the given index (0 = newest)
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn newest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Returns the oldest retained entry
    #[must_use]
    pub fn oldest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Returns the formatted lines, newest first
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(HistoryEntry::display).collect()
    }

    /// Serializes the entries to JSON, newest first
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries.iter().collect::<Vec<_>>())
    }

    /// Deserializes a history from JSON, keeping at most the newest
    /// [`Self::MAX_ENTRIES`] entries
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<HistoryEntry> = serde_json::from_str(json)?;
        let mut deque = VecDeque::from(entries);
        deque.truncate(Self::MAX_ENTRIES);
        Ok(Self { entries: deque })
    }
}

//! Bounded command history
//!
//! Entries are kept oldest first. The cap is enforced on every append by
//! dropping from the front; loading from a store replaces the sequence
//! wholesale and does not truncate it.

use crate::config::constants::defaults;
use crate::store::LineStore;
use std::collections::VecDeque;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    max_entries: usize,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(defaults::HISTORY_MAX_ENTRIES)
    }
}

impl CommandHistory {
    /// Create an empty history holding at most `max_entries` lines.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: max_entries.max(1),
        }
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a line, evicting the oldest entries beyond the cap.
    pub fn append(&mut self, line: impl Into<String>) {
        self.entries.push_back(line.into());
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }

    /// Independent copy of all entries, oldest first.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    /// The last `limit` entries paired with their 1-based position.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = (usize, &str)> {
        let start = self.entries.len().saturating_sub(limit);
        self.entries
            .iter()
            .enumerate()
            .skip(start)
            .map(|(index, entry)| (index + 1, entry.as_str()))
    }

    /// Replace the in-memory history with the store's content.
    ///
    /// Failures are logged and leave the history untouched.
    pub fn load(&mut self, store: &dyn LineStore) {
        match store.load() {
            Ok(Some(lines)) => {
                debug!(count = lines.len(), source = %store.describe(), "loaded command history");
                self.entries = lines.into();
            }
            Ok(None) => {}
            Err(err) => {
                warn!("Could not load command history: {err:#}");
            }
        }
    }

    /// Write every entry to the store. Failures are logged, never raised.
    pub fn save(&self, store: &dyn LineStore) {
        if let Err(err) = store.save(&self.snapshot()) {
            warn!("Could not save command history: {err:#}");
        }
    }
}

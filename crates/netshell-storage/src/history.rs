//! Navigation history
//!
//! Append-only log of visited URLs with adjacent-duplicate suppression.
//! The same URL may reappear non-consecutively; only an immediate repeat
//! is dropped. The store imposes no cap — callers slice for bounded views.

use crate::store::{JsonStore, HISTORY_FILE};
use crate::Result;

pub struct HistoryLog {
    store: JsonStore,
    entries: Vec<String>,
}

impl HistoryLog {
    pub fn load(store: JsonStore) -> Self {
        let entries = store.load(HISTORY_FILE, Vec::new);
        Self { store, entries }
    }

    /// Record a visit. Returns Ok(false) without persisting when `url`
    /// equals the most recent entry.
    pub fn record(&mut self, url: &str) -> Result<bool> {
        if self.entries.last().is_some_and(|last| last == url) {
            return Ok(false);
        }

        self.entries.push(url.to_string());
        self.store.save(HISTORY_FILE, &self.entries)?;

        tracing::debug!(url = %url, "Recorded history entry");

        Ok(true)
    }

    /// Empty the log and persist.
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.store.save(HISTORY_FILE, &self.entries)?;

        tracing::info!("Cleared history");

        Ok(())
    }

    pub fn list(&self) -> &[String] {
        &self.entries
    }

    /// The most recent `limit` entries, oldest first.
    pub fn recent(&self, limit: usize) -> &[String] {
        let start = self.entries.len().saturating_sub(limit);
        &self.entries[start..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

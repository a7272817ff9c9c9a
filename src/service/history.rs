use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use querybar_backend_api::Suggestion;

const DEFAULT_CAPACITY: usize = 100;

/// Recency-ordered store of queries that produced a non-empty result.
///
/// Recording is idempotent: a repeated query moves to the front instead of
/// duplicating. The store is bounded; the oldest entries fall off first.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl HistoryStore {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record a successfully committed query.
    pub fn record(&mut self, query: &str) {
        if query.trim().is_empty() {
            return;
        }
        if let Some(position) = self.entries.iter().position(|entry| entry == query) {
            self.entries.remove(position);
        }
        self.entries.push_front(query.to_string());
        self.entries.truncate(self.capacity);
    }

    #[must_use]
    pub fn contains(&self, query: &str) -> bool {
        self.entries.iter().any(|entry| entry == query)
    }

    /// Up to `limit` entries relevant to `query`, most recent first.
    ///
    /// Relevance is a case-insensitive substring match, so the empty query
    /// matches everything and yields the most recent entries. Entries whose
    /// text already appears in `excluding` are skipped.
    #[must_use]
    pub fn matching(&self, limit: usize, query: &str, excluding: &[Suggestion]) -> Vec<Suggestion> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.to_lowercase().contains(&needle))
            .filter(|entry| !excluding.iter().any(|option| option.label() == *entry))
            .take(limit)
            .map(|entry| Suggestion::from(entry.clone()))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a store from a JSON file; a missing file yields an empty store.
    pub fn load(path: &Path, capacity: usize) -> Result<Self> {
        let mut store = Self::with_capacity(capacity);
        if !path.exists() {
            return Ok(store);
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read history file {}", path.display()))?;
        let entries: Vec<String> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse history file {}", path.display()))?;
        // Stored most recent first; replay oldest first to rebuild ordering.
        for entry in entries.iter().rev() {
            store.record(entry);
        }
        Ok(store)
    }

    /// Persist the store as a JSON list, most recent entry first.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let entries: Vec<&String> = self.entries.iter().collect();
        let raw = serde_json::to_string_pretty(&entries)?;
        fs::write(path, raw)
            .with_context(|| format!("failed to write history file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_moves_repeats_to_the_front() {
        let mut store = HistoryStore::default();
        store.record("cats");
        store.record("dogs");
        store.record("cats");

        assert_eq!(store.len(), 2);
        assert_eq!(
            store.matching(5, "", &[]),
            vec![Suggestion::from("cats"), Suggestion::from("dogs")]
        );
    }

    #[test]
    fn blank_queries_are_never_recorded() {
        let mut store = HistoryStore::default();
        store.record("");
        store.record("   ");
        assert!(store.is_empty());
    }

    #[test]
    fn capacity_drops_the_oldest_entries() {
        let mut store = HistoryStore::with_capacity(2);
        store.record("one");
        store.record("two");
        store.record("three");

        assert_eq!(store.len(), 2);
        assert!(!store.contains("one"));
        assert!(store.contains("three"));
    }

    #[test]
    fn matching_filters_by_substring_and_exclusions() {
        let mut store = HistoryStore::default();
        store.record("cat videos");
        store.record("dog parks");
        store.record("cat food");

        let excluding = vec![Suggestion::from("cat food")];
        assert_eq!(
            store.matching(5, "CAT", &excluding),
            vec![Suggestion::from("cat videos")]
        );
    }

    #[test]
    fn matching_respects_the_limit() {
        let mut store = HistoryStore::default();
        for index in 0..10 {
            store.record(&format!("query {index}"));
        }
        assert_eq!(store.matching(3, "query", &[]).len(), 3);
    }

    #[test]
    fn history_round_trips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut store = HistoryStore::default();
        store.record("cats");
        store.record("dogs");
        store.save(&path).unwrap();

        let reloaded = HistoryStore::load(&path, DEFAULT_CAPACITY).unwrap();
        assert_eq!(
            reloaded.matching(5, "", &[]),
            vec![Suggestion::from("dogs"), Suggestion::from("cats")]
        );
    }

    #[test]
    fn loading_a_missing_file_yields_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::load(&dir.path().join("absent.json"), 10).unwrap();
        assert!(store.is_empty());
    }
}

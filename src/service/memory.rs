use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use anyhow::Result;
use querybar_backend_api::{ResultItem, SearchService, ServiceError, Suggestion};

use super::history::HistoryStore;

/// Suggestion responses are capped the way a remote backend would cap them.
const SUGGEST_LIMIT: usize = 10;

/// An in-memory [`SearchService`] over a fixed corpus of result items.
///
/// Matching policy: strict searches require an exact (case-insensitive) name
/// match, fuzzy searches accept any name containing the query. Suggestions
/// are corpus names matching the query, with the empty query surfacing the
/// corpus head as default options.
pub struct MemoryService {
    corpus: Vec<ResultItem>,
    history: Mutex<HistoryStore>,
}

impl MemoryService {
    #[must_use]
    pub fn new(corpus: Vec<ResultItem>) -> Self {
        Self::with_history(corpus, HistoryStore::default())
    }

    #[must_use]
    pub fn with_history(corpus: Vec<ResultItem>, history: HistoryStore) -> Self {
        Self {
            corpus,
            history: Mutex::new(history),
        }
    }

    /// Persist the current history store to `path` as JSON.
    pub fn save_history(&self, path: &Path) -> Result<()> {
        self.lock_history().save(path)
    }

    fn lock_history(&self) -> MutexGuard<'_, HistoryStore> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SearchService for MemoryService {
    fn search(&self, query: &str, strict: bool) -> Result<Vec<ResultItem>, ServiceError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let needle = query.to_lowercase();
        let items = self
            .corpus
            .iter()
            .filter(|item| {
                if strict {
                    item.name.eq_ignore_ascii_case(query)
                } else {
                    item.name.to_lowercase().contains(&needle)
                }
            })
            .cloned()
            .collect();
        Ok(items)
    }

    fn suggest(&self, query: &str) -> Result<Vec<Suggestion>, ServiceError> {
        let needle = query.trim().to_lowercase();
        let items = self
            .corpus
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .take(SUGGEST_LIMIT)
            .map(|item| Suggestion::from(item.name.clone()))
            .collect();
        Ok(items)
    }

    fn history(&self, limit: usize, query: &str, excluding: &[Suggestion]) -> Vec<Suggestion> {
        self.lock_history().matching(limit, query, excluding)
    }

    fn add_history(&self, query: &str) {
        self.lock_history().record(query);
    }

    fn has_history(&self, query: &str) -> bool {
        self.lock_history().contains(query)
    }
}

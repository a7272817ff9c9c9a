use crate::error::ServiceError;
use crate::types::{ResultItem, Suggestion};

/// The remote search capability consumed by the controller.
///
/// Implementations own ranking, matching policy, and the history store; the
/// controller only sequences calls and reconciles their responses with the
/// latest user input. `search` and `suggest` run on the background worker
/// thread, the history operations are called synchronously from the
/// controller thread, so implementations must be safe to share across both.
pub trait SearchService: Send + Sync {
    /// Run a search for `query`.
    ///
    /// `strict` asks for exact/known-query matching instead of fuzzy
    /// matching; the controller sets it when the commit was explicit or the
    /// query already succeeded before. An empty result means "no match".
    fn search(&self, query: &str, strict: bool) -> Result<Vec<ResultItem>, ServiceError>;

    /// Produce autocomplete suggestions for `query`.
    ///
    /// Called for every (debounced) input change, including the empty query,
    /// which should surface recent or default suggestions.
    fn suggest(&self, query: &str) -> Result<Vec<Suggestion>, ServiceError>;

    /// Up to `limit` history entries relevant to `query`, most recent first,
    /// excluding entries already present in `excluding`.
    fn history(&self, limit: usize, query: &str, excluding: &[Suggestion]) -> Vec<Suggestion>;

    /// Record a query that produced a non-empty result. Best effort and
    /// idempotent: recording the same query twice must not duplicate it.
    fn add_history(&self, query: &str);

    /// Whether `query` was previously committed successfully.
    fn has_history(&self, query: &str) -> bool;
}

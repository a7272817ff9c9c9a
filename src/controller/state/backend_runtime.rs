use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::{Duration, Instant};

use crate::systems::backend::{BackendCommand, BackendResponse};

/// Channel endpoints and request bookkeeping for the backend worker.
///
/// Every request carries a monotonically increasing id. Suggestion fetches
/// additionally publish their id through a shared atomic so the worker can
/// skip fetches that are already superseded when it dequeues them; the
/// controller side discards any response whose id no longer matches the
/// latest one issued.
pub(crate) struct BackendRuntime {
    tx: Sender<BackendCommand>,
    rx: Receiver<BackendResponse>,
    latest_suggest_id: Arc<AtomicU64>,
    next_id: u64,
    current_suggest_id: Option<u64>,
    debounce: Duration,
    pending_query: Option<String>,
    last_input_at: Option<Instant>,
}

impl BackendRuntime {
    pub(crate) fn new(
        tx: Sender<BackendCommand>,
        rx: Receiver<BackendResponse>,
        latest_suggest_id: Arc<AtomicU64>,
        debounce: Duration,
    ) -> Self {
        Self {
            tx,
            rx,
            latest_suggest_id,
            next_id: 0,
            current_suggest_id: None,
            debounce,
            pending_query: None,
            last_input_at: None,
        }
    }

    pub(crate) fn shutdown(&self) {
        let _ = self.tx.send(BackendCommand::Shutdown);
    }

    /// Remember `query` as waiting for a suggestion fetch and restart the
    /// debounce window.
    pub(crate) fn mark_pending(&mut self, query: String) {
        self.pending_query = Some(query);
        self.last_input_at = Some(Instant::now());
    }

    /// Take the pending query once the debounce window has elapsed.
    pub(crate) fn take_ready(&mut self) -> Option<String> {
        let last_input_at = self.last_input_at?;
        if last_input_at.elapsed() < self.debounce {
            return None;
        }
        self.last_input_at = None;
        self.pending_query.take()
    }

    pub(crate) fn has_pending(&self) -> bool {
        self.pending_query.is_some()
    }

    /// Send a suggestion fetch for `query`, superseding any earlier one.
    pub(crate) fn issue_suggest(&mut self, query: String) {
        let id = self.bump_id();
        self.current_suggest_id = Some(id);
        self.latest_suggest_id.store(id, AtomicOrdering::Release);
        let _ = self.tx.send(BackendCommand::Suggest { id, query });
    }

    /// Send a search request and return the id the outcome will carry.
    pub(crate) fn issue_search(&mut self, query: String, strict: bool) -> u64 {
        let id = self.bump_id();
        let _ = self.tx.send(BackendCommand::Search { id, query, strict });
        id
    }

    pub(crate) fn matches_latest_suggest(&self, response_id: u64) -> bool {
        Some(response_id) == self.current_suggest_id
    }

    pub(crate) fn try_recv(&mut self) -> Result<BackendResponse, TryRecvError> {
        self.rx.try_recv()
    }

    fn bump_id(&mut self) -> u64 {
        self.next_id = self.next_id.saturating_add(1);
        self.next_id
    }
}

use std::sync::Arc;

use querybar_backend_api::{SearchService, Suggestion};

use super::config::ControllerConfig;
use super::hooks::{EventSink, FocusTarget};
use crate::systems::backend;

mod backend_runtime;

use backend_runtime::BackendRuntime;

impl Drop for SearchBar {
    fn drop(&mut self) {
        self.backend.shutdown();
    }
}

/// The interaction controller behind a search input.
///
/// Owns the authoritative query text and the published option list, and
/// drives the injected backend service through a background worker. All
/// methods run on the interaction thread; callers pump [`SearchBar::tick`]
/// from their event loop to let debounced fetches fire and asynchronous
/// responses land.
pub struct SearchBar {
    pub(super) service: Arc<dyn SearchService>,
    pub(super) config: ControllerConfig,
    pub(super) focus: Box<dyn FocusTarget>,
    pub(super) sink: Box<dyn EventSink>,
    pub(super) backend: BackendRuntime,
    pub(super) pending_commit: Option<PendingCommit>,
    query: String,
    options: Vec<Suggestion>,
}

/// A commit waiting for its search outcome.
pub(super) struct PendingCommit {
    pub(super) id: u64,
    pub(super) query: String,
    pub(super) explicit: bool,
}

impl SearchBar {
    pub fn new(
        service: Arc<dyn SearchService>,
        focus: Box<dyn FocusTarget>,
        sink: Box<dyn EventSink>,
    ) -> Self {
        Self::with_config(service, focus, sink, ControllerConfig::default())
    }

    pub fn with_config(
        service: Arc<dyn SearchService>,
        focus: Box<dyn FocusTarget>,
        sink: Box<dyn EventSink>,
        config: ControllerConfig,
    ) -> Self {
        let (command_tx, response_rx, latest_suggest_id) = backend::spawn(Arc::clone(&service));
        let backend = BackendRuntime::new(
            command_tx,
            response_rx,
            latest_suggest_id,
            config.suggest_debounce,
        );

        Self {
            service,
            config,
            focus,
            sink,
            backend,
            pending_commit: None,
            query: String::new(),
            options: Vec::new(),
        }
    }

    /// The current raw input text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The option list as of the most recent live suggestion response.
    pub fn options(&self) -> &[Suggestion] {
        &self.options
    }

    /// Record an input-value change.
    ///
    /// Every change schedules a (debounced) suggestion fetch, the empty
    /// query included so the backend can surface recent or default options.
    /// Clearing the input additionally runs the clear pathway.
    pub fn set_query(&mut self, value: &str) {
        self.query = value.to_string();
        if value.is_empty() {
            self.notify_cleared();
        }
        self.backend.mark_pending(self.query.clone());
    }

    /// Schedule the initial suggestion fetch for the starting query.
    pub fn hydrate_initial_suggestions(&mut self) {
        self.backend.mark_pending(self.query.clone());
    }

    /// Cooperative pump: issue the debounced suggestion fetch once it is due
    /// and apply any backend responses that have arrived.
    pub fn tick(&mut self) {
        if let Some(query) = self.backend.take_ready() {
            self.backend.issue_suggest(query);
        }
        self.pump_responses();
    }

    /// Whether a commit is awaiting its outcome.
    pub fn is_pending(&self) -> bool {
        self.pending_commit.is_some()
    }

    /// Whether an input change is still waiting out the debounce window.
    pub fn has_pending_fetch(&self) -> bool {
        self.backend.has_pending()
    }

    pub(super) fn publish_options(&mut self, options: Vec<Suggestion>) {
        self.options = options;
    }
}

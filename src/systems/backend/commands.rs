use querybar_backend_api::{ResultItem, Suggestion};

/// Commands understood by the background backend worker.
#[derive(Debug)]
pub(crate) enum BackendCommand {
    /// Fetch autocomplete suggestions for the provided query.
    Suggest {
        /// Generation id that lets the controller correlate responses with
        /// the originating query and discard superseded ones.
        id: u64,
        /// User supplied query string.
        query: String,
    },
    /// Run a search for a committed query.
    Search {
        /// Identifier matching the pending commit this search resolves.
        id: u64,
        /// The committed query string.
        query: String,
        /// Ask the backend for exact/known-query matching.
        strict: bool,
    },
    /// Stop the background worker thread.
    Shutdown,
}

/// Responses sent back from the worker to the controller.
#[derive(Debug)]
pub(crate) enum BackendResponse {
    /// Suggestions for the query issued under `id`.
    Suggestions {
        id: u64,
        query: String,
        items: Vec<Suggestion>,
    },
    /// The outcome of the search issued under `id`. An empty `items` means
    /// the backend found no match.
    Outcome { id: u64, items: Vec<ResultItem> },
}

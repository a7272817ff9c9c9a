use querybar_backend_api::ResultItem;

use super::state::{PendingCommit, SearchBar};

/// How a commit was triggered. Only an Enter press counts as explicit: an
/// explicit miss is reported to the user, an implicit one is silently
/// recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitEvent {
    /// The user pressed Enter in the input.
    EnterKey,
    /// The user picked an option from the dropdown.
    PointerSelection,
    /// The embedding application committed on the user's behalf.
    Programmatic,
}

impl CommitEvent {
    fn is_explicit(self) -> bool {
        matches!(self, CommitEvent::EnterKey)
    }
}

impl SearchBar {
    /// Turn a commit intent into exactly one search request.
    ///
    /// The backend searches strictly when the commit is explicit or the
    /// query already succeeded before; a fresh commit supersedes any earlier
    /// one still in flight.
    pub fn commit(&mut self, query: &str, event: CommitEvent) {
        let explicit = event.is_explicit();
        let strict = explicit || self.service.has_history(query);
        let id = self.backend.issue_search(query.to_string(), strict);
        self.pending_commit = Some(PendingCommit {
            id,
            query: query.to_string(),
            explicit,
        });
    }

    /// Resolve a search outcome against the pending commit.
    pub(super) fn resolve_commit(&mut self, id: u64, items: Vec<ResultItem>) {
        if self.pending_commit.as_ref().map(|pending| pending.id) != Some(id) {
            log::debug!("discarding superseded search outcome {id}");
            return;
        }
        let Some(pending) = self.pending_commit.take() else {
            return;
        };

        if !items.is_empty() {
            self.focus.blur();
            self.service.add_history(&pending.query);
            self.sink.on_search_result(items);
        } else if pending.explicit {
            self.sink.on_search_result(vec![no_match_notice(&pending.query)]);
            self.focus.select_all();
        } else {
            // Not yet a real commit: let the user keep typing.
            self.focus.focus();
        }
    }

    /// Run the clear pathway: report upward without touching the backend.
    pub(super) fn notify_cleared(&mut self) {
        self.sink.on_clear_result();
    }
}

fn no_match_notice(query: &str) -> ResultItem {
    ResultItem::view([
        format!("Sorry, no result has been found for '{query}'."),
        "Please try again with other inputs...".to_string(),
    ])
}

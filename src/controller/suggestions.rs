use std::sync::mpsc::TryRecvError;

use querybar_backend_api::Suggestion;

use super::SearchBar;
use crate::systems::backend::BackendResponse;

impl SearchBar {
    /// Drain any backend responses waiting on the receiver channel.
    pub(super) fn pump_responses(&mut self) {
        loop {
            match self.backend.try_recv() {
                Ok(BackendResponse::Suggestions { id, query, items }) => {
                    self.handle_suggestions(id, &query, items);
                }
                Ok(BackendResponse::Outcome { id, items }) => {
                    self.resolve_commit(id, items);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    /// Apply a suggestion response if it corresponds to the most recent
    /// fetch, backfilling sparse responses from history.
    fn handle_suggestions(&mut self, id: u64, query: &str, items: Vec<Suggestion>) {
        if !self.backend.matches_latest_suggest(id) {
            log::debug!("discarding stale suggestion response {id} for '{query}'");
            return;
        }

        let options = if items.len() < self.config.backfill_threshold {
            let mut merged =
                self.service
                    .history(self.config.backfill_limit, query, &items);
            merged.extend(items);
            merged
        } else {
            items
        };
        self.publish_options(options);
    }
}

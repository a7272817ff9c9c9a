use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use querybar_backend_api::SearchService;

use super::commands::{BackendCommand, BackendResponse};

/// Launches the background backend worker thread and returns communication
/// channels plus the shared latest-suggestion generation.
pub(crate) fn spawn(
    service: Arc<dyn SearchService>,
) -> (
    Sender<BackendCommand>,
    Receiver<BackendResponse>,
    Arc<AtomicU64>,
) {
    let (command_tx, command_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    let latest_suggest_id = Arc::new(AtomicU64::new(0));
    let thread_latest = Arc::clone(&latest_suggest_id);

    thread::spawn(move || worker_loop(service.as_ref(), command_rx, response_tx, &thread_latest));

    (command_tx, response_rx, latest_suggest_id)
}

fn worker_loop(
    service: &dyn SearchService,
    command_rx: Receiver<BackendCommand>,
    response_tx: Sender<BackendResponse>,
    latest_suggest_id: &AtomicU64,
) {
    while let Ok(command) = command_rx.recv() {
        if !handle_command(service, &response_tx, latest_suggest_id, command) {
            break;
        }
    }
}

fn handle_command(
    service: &dyn SearchService,
    response_tx: &Sender<BackendResponse>,
    latest_suggest_id: &AtomicU64,
    command: BackendCommand,
) -> bool {
    match command {
        BackendCommand::Suggest { id, query } => {
            // A newer suggestion request was issued while this one was still
            // queued; servicing it would only produce a response the
            // controller discards.
            if latest_suggest_id.load(Ordering::Acquire) != id {
                log::debug!("skipping superseded suggestion fetch {id} for '{query}'");
                return true;
            }
            let items = match service.suggest(&query) {
                Ok(items) => items,
                Err(err) => {
                    log::warn!("suggestion fetch for '{query}' failed: {err}");
                    Vec::new()
                }
            };
            response_tx
                .send(BackendResponse::Suggestions { id, query, items })
                .is_ok()
        }
        BackendCommand::Search { id, query, strict } => {
            let items = match service.search(&query, strict) {
                Ok(items) => items,
                Err(err) => {
                    log::warn!("search for '{query}' failed: {err}");
                    Vec::new()
                }
            };
            response_tx
                .send(BackendResponse::Outcome { id, items })
                .is_ok()
        }
        BackendCommand::Shutdown => false,
    }
}

//! The search-input interaction controller.
//!
//! [`SearchBar`] owns the current query text and the published option list,
//! and mediates between UI events (input changes, commits, clears) and the
//! injected [`SearchService`](querybar_backend_api::SearchService). The
//! [`suggestions`] and [`submit`] submodules split the two halves of that
//! job: keeping the option list current, and turning commit intents into
//! exactly one reported outcome.

mod config;
mod hooks;
mod state;
mod submit;
mod suggestions;


pub use config::ControllerConfig;
pub use hooks::{EventSink, FocusTarget};
pub use state::SearchBar;
pub use submit::CommitEvent;

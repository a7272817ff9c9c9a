//! Core crate exports for the `querybar` search-input controller.
//!
//! The root module re-exports the controller surface and the backend-api
//! types so that embedders can wire up a search bar without digging through
//! the module hierarchy.

pub mod app_dirs;
pub mod controller;
pub mod logging;
pub mod service;
mod systems;

pub use controller::{CommitEvent, ControllerConfig, EventSink, FocusTarget, SearchBar};
pub use service::{HistoryStore, MemoryService};

pub use querybar_backend_api::{ResultItem, SearchService, ServiceError, Suggestion};

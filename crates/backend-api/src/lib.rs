//! Backend capability surface shared between `querybar` and service
//! implementations.
//!
//! The controller never talks to a concrete backend; it is handed a
//! [`SearchService`] trait object and routes every suggestion fetch, search
//! request, and history operation through it.

pub mod error;
pub mod service;
pub mod types;

pub use error::ServiceError;
pub use service::SearchService;
pub use types::{ResultItem, Suggestion};

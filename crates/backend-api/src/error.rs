use thiserror::Error;

/// Errors a [`SearchService`](crate::SearchService) implementation may report.
///
/// The backend worker treats any of these as "no data": it logs the failure
/// and substitutes an empty payload, so the controller only ever observes
/// resolved responses.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The backend could not be reached at all.
    #[error("backend unavailable: {reason}")]
    Unavailable { reason: String },

    /// The backend refused to process the request.
    #[error("backend rejected query '{query}': {reason}")]
    Rejected { query: String, reason: String },
}

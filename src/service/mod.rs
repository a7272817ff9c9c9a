//! Reference backend: an in-memory [`MemoryService`] over a fixed corpus,
//! with a recency-ordered [`HistoryStore`] of previously successful queries.

mod history;
mod memory;

pub use history::HistoryStore;
pub use memory::MemoryService;

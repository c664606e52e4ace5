//! Scan history persistence
//!
//! A deduplicated, JSON-backed log of previously observed scan roots, keyed
//! by normalized path, with merge-on-conflict recording and tolerant loads.

pub mod entry;
pub mod store;

pub use entry::HistoryEntry;
pub use store::{HistoryError, HistoryStore};

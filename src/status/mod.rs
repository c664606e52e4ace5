//! Working-tree status classification
//!
//! Runs one porcelain status query per discovered repository, concurrently
//! with a bounded fan-out, and reduces each result to Clean, Dirty or
//! Inaccessible.

pub mod classifier;
pub mod types;

pub use classifier::{reduce_status_output, StatusClassifier};
pub use types::{ClassifiedRepo, StatusClass};

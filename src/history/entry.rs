//! Persisted history entries.

use crate::scanner::types::RepoRoot;
use crate::status::types::StatusClass;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One observation of a scan root.
///
/// `changes` is reserved for a future per-file summary and is always empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub path: String,
    pub date: String,
    pub status: StatusClass,
    #[serde(default)]
    pub changes: Vec<String>,
}

impl HistoryEntry {
    /// Entry for an observation made right now.
    pub fn observed(root: &RepoRoot, status: StatusClass) -> Self {
        Self {
            path: root.path().to_string_lossy().into_owned(),
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            status,
            changes: Vec::new(),
        }
    }
}

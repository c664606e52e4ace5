//! JSON-backed history store.

use super::entry::HistoryEntry;
use crate::core::paths;
use crate::status::types::StatusClass;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("history file IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("history serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type HistoryResult<T> = Result<T, HistoryError>;

/// Mapping-backed-by-file from normalized path to its latest observation.
///
/// The backing file is loaded lazily once per process and fully rewritten on
/// every accepted write. A missing or malformed file is an empty history;
/// load problems are never surfaced to callers. Single-process use only:
/// concurrent external mutation of the file is not coordinated.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    entries: Option<Vec<HistoryEntry>>,
}

impl HistoryStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            entries: None,
        }
    }

    /// Documented default location: the platform data directory, falling
    /// back to a dotfile in the working directory when none is reported.
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .map(|dir| dir.join("gitsweep").join("history.json"))
            .unwrap_or_else(|| PathBuf::from(".gitsweep-history.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries, oldest first. Missing or malformed backing files read as
    /// empty.
    pub fn load(&mut self) -> &[HistoryEntry] {
        if self.entries.is_none() {
            let entries = match fs::read_to_string(&self.path) {
                Ok(contents) => match serde_json::from_str(&contents) {
                    Ok(entries) => entries,
                    Err(err) => {
                        log::debug!(
                            "malformed history file {}, starting empty: {}",
                            self.path.display(),
                            err
                        );
                        Vec::new()
                    }
                },
                Err(err) => {
                    if err.kind() != ErrorKind::NotFound {
                        log::debug!(
                            "unreadable history file {}, starting empty: {}",
                            self.path.display(),
                            err
                        );
                    }
                    Vec::new()
                }
            };
            self.entries = Some(entries);
        }
        self.entries.as_deref().unwrap_or(&[])
    }

    /// Merge one observation into the store.
    ///
    /// An existing entry for the same normalized path is replaced only when
    /// its status changed; timestamp-only updates are dropped so unchanged
    /// observations never rewrite the file. A new path is persisted only when
    /// it is the scope root the user chose to scan, or when it needs
    /// attention (status not Clean).
    ///
    /// Returns whether the backing file was rewritten.
    pub fn record(
        &mut self,
        entry: HistoryEntry,
        scope_root: Option<&Path>,
    ) -> HistoryResult<bool> {
        let entry_path = paths::normalize(Path::new(&entry.path));
        let entry = HistoryEntry {
            path: entry_path.to_string_lossy().into_owned(),
            ..entry
        };

        self.load();
        let entries = self.entries.get_or_insert_with(Vec::new);

        let existing = entries
            .iter()
            .position(|e| paths::normalize(Path::new(&e.path)) == entry_path);

        let changed = match existing {
            Some(index) => {
                if entries[index].status == entry.status {
                    false
                } else {
                    entries[index] = entry;
                    true
                }
            }
            None => {
                let is_scope = scope_root
                    .map(|scope| paths::normalize(scope) == entry_path)
                    .unwrap_or(false);
                if is_scope || entry.status != StatusClass::Clean {
                    entries.push(entry);
                    true
                } else {
                    false
                }
            }
        };

        if changed {
            self.save()?;
        }
        Ok(changed)
    }

    /// Up to `limit` most-recently-appended entries, most recent first.
    pub fn recent(&mut self, limit: usize) -> Vec<HistoryEntry> {
        self.load().iter().rev().take(limit).cloned().collect()
    }

    /// Replace the whole store, bypassing the merge policy.
    pub fn replace(&mut self, entries: Vec<HistoryEntry>) -> HistoryResult<()> {
        self.entries = Some(entries);
        self.save()
    }

    fn save(&self) -> HistoryResult<()> {
        let entries = match &self.entries {
            Some(entries) => entries,
            None => return Ok(()),
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

//! History store integration tests
//!
//! Exercises the persisted JSON layout and the merge policy against a real
//! backing file.

use gitsweep::history::{HistoryEntry, HistoryStore};
use gitsweep::scanner::RepoRoot;
use gitsweep::status::StatusClass;
use std::fs;
use tempfile::TempDir;

fn entry(path: &str, status: StatusClass) -> HistoryEntry {
    HistoryEntry::observed(&RepoRoot::new(path), status)
}

#[test]
fn test_persisted_layout_is_a_json_array_of_objects() {
    let dir = TempDir::new().expect("tempdir");
    let file = dir.path().join("history.json");
    let mut store = HistoryStore::new(&file);

    store
        .record(entry("/scan/app", StatusClass::Dirty), None)
        .expect("record");

    let raw = fs::read_to_string(&file).expect("read backing file");
    let parsed: serde_json::Value = serde_json::from_str(&raw).expect("valid JSON");
    let entries = parsed.as_array().expect("top-level array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["path"], "/scan/app");
    assert_eq!(entries[0]["status"], "dirty");
    assert!(entries[0]["date"].is_string());
    assert!(entries[0]["changes"].as_array().expect("changes").is_empty());
}

#[test]
fn test_unchanged_observation_does_not_rewrite_the_file() {
    let dir = TempDir::new().expect("tempdir");
    let file = dir.path().join("history.json");
    let mut store = HistoryStore::new(&file);

    store
        .record(entry("/scan/app", StatusClass::Dirty), None)
        .expect("first record");
    let before = fs::read_to_string(&file).expect("read");

    let written = store
        .record(entry("/scan/app", StatusClass::Dirty), None)
        .expect("second record");

    assert!(!written, "identical observation must not write");
    let after = fs::read_to_string(&file).expect("read again");
    assert_eq!(before, after, "backing file must be byte-identical");
}

#[test]
fn test_status_change_updates_in_place() {
    let dir = TempDir::new().expect("tempdir");
    let file = dir.path().join("history.json");
    let mut store = HistoryStore::new(&file);

    store
        .record(entry("/scan/app", StatusClass::Dirty), None)
        .expect("dirty");
    store
        .record(entry("/scan/other", StatusClass::Inaccessible), None)
        .expect("other");
    store
        .record(entry("/scan/app", StatusClass::Clean), None)
        .expect("now clean");

    let mut reloaded = HistoryStore::new(&file);
    let entries = reloaded.load().to_vec();
    assert_eq!(entries.len(), 2, "one entry per path");
    let app = entries
        .iter()
        .find(|e| e.path == "/scan/app")
        .expect("app entry");
    assert_eq!(app.status, StatusClass::Clean);
}

#[test]
fn test_corrupt_backing_file_reads_as_empty_history() {
    let dir = TempDir::new().expect("tempdir");
    let file = dir.path().join("history.json");
    fs::write(&file, "[{\"path\": \"trunc").expect("write corrupt file");

    let mut store = HistoryStore::new(&file);
    assert!(store.load().is_empty());

    // The store is usable again after the corrupt load.
    store
        .record(entry("/scan/app", StatusClass::Dirty), None)
        .expect("record after corruption");
    let mut reloaded = HistoryStore::new(&file);
    assert_eq!(reloaded.load().len(), 1);
}

#[test]
fn test_recent_is_a_quick_resume_window() {
    let dir = TempDir::new().expect("tempdir");
    let mut store = HistoryStore::new(dir.path().join("history.json"));

    for n in 0..8 {
        store
            .record(entry(&format!("/scan/repo-{}", n), StatusClass::Dirty), None)
            .expect("record");
    }

    let recent = store.recent(5);
    assert_eq!(recent.len(), 5);
    assert_eq!(recent[0].path, "/scan/repo-7");
    assert_eq!(recent[4].path, "/scan/repo-3");
}

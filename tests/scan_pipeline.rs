//! End-to-end scan pipeline tests
//!
//! Walks a real tree, classifies it with a scripted git stand-in and records
//! the outcome, checking the contract between the three core pieces.

#![cfg(unix)]

mod common;

use common::{fake_git, make_repo};
use gitsweep::core::paths;
use gitsweep::git::GitCommand;
use gitsweep::history::{HistoryEntry, HistoryStore};
use gitsweep::scanner::{RepoRoot, RepoWalker};
use gitsweep::status::{StatusClass, StatusClassifier};
use std::fs;
use tempfile::TempDir;

#[tokio::test]
async fn test_scan_classify_and_record_one_tree() {
    let scripts = TempDir::new().expect("scripts dir");
    let tree = TempDir::new().expect("tree");
    let scope = paths::normalize(tree.path());

    // a: clean repo, b: dirty repo (one modified file), c: plain directory.
    make_repo(tree.path(), "a");
    make_repo(tree.path(), "b");
    fs::create_dir(tree.path().join("c")).expect("plain dir");

    // Dirty output only for b; failure outside any repo.
    let program = fake_git(
        scripts.path(),
        r#"
if [ ! -d .git ]; then
  echo "fatal: not a git repository" >&2
  exit 128
fi
case "$(basename "$PWD")" in
  b) echo " M lib.rs" ;;
esac
exit 0
"#,
    );
    let git = GitCommand::with_program(program);

    // Discovery: exactly {a, b}, as a set.
    let repos = RepoWalker::new().walk(tree.path(), None);
    let mut found: Vec<_> = repos.iter().map(|r| r.path().to_path_buf()).collect();
    found.sort();
    assert_eq!(found, vec![scope.join("a"), scope.join("b")]);

    // Classification: clean before dirty.
    let classifier = StatusClassifier::new(git.clone());
    let classified = classifier.classify(repos).await;
    assert_eq!(classified.len(), 2);
    assert_eq!(classified[0].root.path(), scope.join("a"));
    assert_eq!(classified[0].class, StatusClass::Clean);
    assert_eq!(classified[1].root.path(), scope.join("b"));
    assert_eq!(classified[1].class, StatusClass::Dirty);

    // Recording: the dirty repo and the scope root are remembered, the
    // clean sub-repository is not.
    let mut history = HistoryStore::new(tree.path().join("history.json"));
    for repo in &classified {
        history
            .record(HistoryEntry::observed(&repo.root, repo.class), Some(&scope))
            .expect("record");
    }
    let scope_root = RepoRoot::new(&scope);
    let scope_class = classifier.classify_one(&scope_root).await;
    assert_eq!(scope_class, StatusClass::Inaccessible);
    history
        .record(HistoryEntry::observed(&scope_root, scope_class), Some(&scope))
        .expect("record scope");

    let entries = history.load().to_vec();
    let paths: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
    let scope_str = scope.to_string_lossy().into_owned();
    let b_str = scope.join("b").to_string_lossy().into_owned();

    assert!(paths.contains(&b_str.as_str()), "dirty repo is remembered");
    assert!(
        paths.contains(&scope_str.as_str()),
        "scope root is always remembered"
    );
    assert_eq!(entries.len(), 2, "clean sub-repository is not remembered");
}

//! Recursive repository discovery walk.

use super::filter::{PathFilter, GIT_DIR};
use super::types::RepoRoot;
use crate::core::paths;
use std::fs;
use std::path::{Path, PathBuf};

/// Walks a directory tree and collects every repository root it can reach.
///
/// Discovery rules:
/// - a directory directly containing a `.git` directory is a repository root;
/// - the `.git` directory itself is never entered, but the repository's other
///   subdirectories are still walked, so nested repositories are discovered
///   as distinct roots;
/// - unreadable, vanished or non-directory paths count as empty and the walk
///   continues elsewhere.
#[derive(Debug, Clone, Default)]
pub struct RepoWalker {
    filter: PathFilter,
}

#[derive(Default)]
struct WalkCounters {
    directories: usize,
    unreadable: usize,
}

impl RepoWalker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(filter: PathFilter) -> Self {
        Self { filter }
    }

    /// Collect repository roots under `root`, descending at most `max_depth`
    /// levels (`None` = unbounded, `Some(0)` = check `root` itself only).
    pub fn walk(&self, root: &Path, max_depth: Option<usize>) -> Vec<RepoRoot> {
        let root = paths::normalize(root);
        let mut repos = Vec::new();
        let mut counters = WalkCounters::default();

        self.search(&root, max_depth, &mut repos, &mut counters);

        log::debug!(
            "discovery walk of {}: {} directories listed, {} unreadable, {} repositories",
            root.display(),
            counters.directories,
            counters.unreadable,
            repos.len()
        );
        repos
    }

    fn search(
        &self,
        dir: &Path,
        budget: Option<usize>,
        repos: &mut Vec<RepoRoot>,
        counters: &mut WalkCounters,
    ) {
        counters.directories += 1;

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                counters.unreadable += 1;
                log::debug!("skipping unreadable directory {}: {}", dir.display(), err);
                return;
            }
        };

        let mut is_repo = false;
        let mut subdirs: Vec<PathBuf> = Vec::new();

        for entry in entries.flatten() {
            // DirEntry::file_type reports the entry's own type; symlinks are
            // not followed, so a link to a directory is not descended into.
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(_) => continue,
            };
            if !file_type.is_dir() {
                continue;
            }

            let name = entry.file_name();
            if name == GIT_DIR {
                is_repo = true;
            } else if self.filter.should_descend(&name, true) {
                subdirs.push(entry.path());
            }
        }

        if is_repo {
            repos.push(RepoRoot::from_normalized(dir.to_path_buf()));
        }

        let child_budget = match budget {
            Some(0) => return,
            Some(remaining) => Some(remaining - 1),
            None => None,
        };
        for subdir in subdirs {
            self.search(&subdir, child_budget, repos, counters);
        }
    }
}

//! Concurrent working-tree status classification.

use super::types::{ClassifiedRepo, StatusClass};
use crate::git::GitCommand;
use crate::scanner::types::RepoRoot;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

/// Default cap on in-flight status queries. Protects the process table on
/// very large trees; correctness does not depend on the value.
pub const DEFAULT_CONCURRENCY: usize = 16;

/// Default time budget for one status query before the repository is
/// reported inaccessible.
pub const DEFAULT_STATUS_TIMEOUT: Duration = Duration::from_secs(10);

/// Classifies repositories by running porcelain status queries.
#[derive(Debug, Clone)]
pub struct StatusClassifier {
    git: GitCommand,
    concurrency: usize,
    timeout: Duration,
}

impl StatusClassifier {
    pub fn new(git: GitCommand) -> Self {
        Self {
            git,
            concurrency: DEFAULT_CONCURRENCY,
            timeout: DEFAULT_STATUS_TIMEOUT,
        }
    }

    pub fn with_limits(mut self, concurrency: usize, timeout: Duration) -> Self {
        self.concurrency = concurrency.max(1);
        self.timeout = timeout;
        self
    }

    /// Classify all repositories, one query in flight per repository up to
    /// the concurrency cap, and return the results stably sorted by class
    /// rank (discovery order preserved within a class).
    pub async fn classify(&self, repos: Vec<RepoRoot>) -> Vec<ClassifiedRepo> {
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let queries = repos.into_iter().map(|root| {
            let semaphore = Arc::clone(&semaphore);
            async move {
                // The semaphore is never closed; a failed acquire can only
                // mean shutdown, in which case running ungated is harmless.
                let _permit = semaphore.acquire().await.ok();
                let class = self.classify_one(&root).await;
                ClassifiedRepo { root, class }
            }
        });

        // join_all preserves input order, so the sort below sees the repos
        // in discovery order and its stability keeps that order per class.
        let mut classified = join_all(queries).await;
        classified.sort_by_key(|repo| repo.class.rank());
        classified
    }

    /// Run one porcelain status query scoped to the repository.
    pub async fn classify_one(&self, repo: &RepoRoot) -> StatusClass {
        let query = self.git.run_captured(repo.path(), &["status", "--porcelain"]);
        match tokio::time::timeout(self.timeout, query).await {
            Ok(Ok(output)) => reduce_status_output(output.status.success(), &output.stdout),
            Ok(Err(err)) => {
                log::debug!("status query failed for {}: {}", repo, err);
                StatusClass::Inaccessible
            }
            Err(_) => {
                log::debug!(
                    "status query for {} exceeded {:?}, reporting inaccessible",
                    repo,
                    self.timeout
                );
                StatusClass::Inaccessible
            }
        }
    }
}

/// Pure reduction of a status query result to a class: a failed query is
/// Inaccessible, blank porcelain output is Clean, anything else is Dirty.
pub fn reduce_status_output(exited_ok: bool, stdout: &[u8]) -> StatusClass {
    if !exited_ok {
        StatusClass::Inaccessible
    } else if String::from_utf8_lossy(stdout).trim().is_empty() {
        StatusClass::Clean
    } else {
        StatusClass::Dirty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_output_is_clean() {
        assert_eq!(reduce_status_output(true, b""), StatusClass::Clean);
        assert_eq!(reduce_status_output(true, b"  \n\t\n"), StatusClass::Clean);
    }

    #[test]
    fn test_any_content_is_dirty() {
        assert_eq!(
            reduce_status_output(true, b" M src/main.rs\n"),
            StatusClass::Dirty
        );
        assert_eq!(
            reduce_status_output(true, b"?? untracked.txt\n"),
            StatusClass::Dirty
        );
    }

    #[test]
    fn test_failed_query_is_inaccessible_regardless_of_output() {
        assert_eq!(reduce_status_output(false, b""), StatusClass::Inaccessible);
        assert_eq!(
            reduce_status_output(false, b"fatal: not a git repository\n"),
            StatusClass::Inaccessible
        );
    }

    #[test]
    fn test_invalid_utf8_output_is_dirty() {
        assert_eq!(
            reduce_status_output(true, &[0xff, 0xfe, b'x']),
            StatusClass::Dirty
        );
    }

    #[tokio::test]
    async fn test_missing_executable_is_inaccessible() {
        let classifier =
            StatusClassifier::new(GitCommand::with_program("/nonexistent/gitsweep-no-such-git"));
        let repo = RepoRoot::new(std::env::temp_dir());
        assert_eq!(
            classifier.classify_one(&repo).await,
            StatusClass::Inaccessible
        );
    }

    #[tokio::test]
    async fn test_classify_empty_list_is_empty() {
        let classifier = StatusClassifier::new(GitCommand::new());
        assert!(classifier.classify(Vec::new()).await.is_empty());
    }
}

//! Scanner types

use crate::core::paths;
use std::fmt;
use std::path::{Path, PathBuf};

/// A directory directly containing git metadata, identified by its
/// normalized absolute path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct RepoRoot(PathBuf);

impl RepoRoot {
    /// Create a root from any path, normalizing it first.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self(paths::normalize(path.as_ref()))
    }

    /// Wrap a path the walker has already normalized.
    pub(crate) fn from_normalized(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RepoRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_root_normalizes_on_construction() {
        let root = RepoRoot::new("/scan/./projects/../projects/app");
        assert_eq!(root.path(), Path::new("/scan/projects/app"));
    }

    #[test]
    fn test_identity_is_the_normalized_path() {
        assert_eq!(
            RepoRoot::new("/scan/projects/app"),
            RepoRoot::new("/scan/projects/../projects/app")
        );
    }
}

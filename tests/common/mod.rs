//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Create a fake repository: a directory containing a `.git` directory.
pub fn make_repo(base: &Path, rel: &str) -> PathBuf {
    let dir = base.join(rel);
    fs::create_dir_all(dir.join(".git")).expect("create repo dirs");
    dir
}

/// Write an executable shell script that stands in for the git executable.
#[cfg(unix)]
pub fn fake_git(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-git");
    fs::write(&script, format!("#!/bin/sh\n{}\n", body)).expect("write fake git");
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).expect("chmod fake git");
    script
}

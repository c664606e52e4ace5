//! External git executable invocation
//!
//! Every git operation is delegated to the external executable as a
//! subprocess. Arguments are always passed as a discrete argument vector,
//! never as a shell-interpreted string, so operator-supplied text (commit
//! messages, paths) cannot be reinterpreted by a shell.

use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::{Output, Stdio};
use tokio::process::Command;

/// Handle to the external git executable.
///
/// The program name is injectable so tests can substitute a script and the
/// operator can point at a non-default installation.
#[derive(Debug, Clone)]
pub struct GitCommand {
    program: OsString,
}

impl GitCommand {
    pub fn new() -> Self {
        Self {
            program: OsString::from("git"),
        }
    }

    pub fn with_program<S: Into<OsString>>(program: S) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Run git in `working_dir` with captured output.
    pub async fn run_captured(&self, working_dir: &Path, args: &[&str]) -> std::io::Result<Output> {
        Command::new(&self.program)
            .args(args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
    }

    /// Run git in `working_dir` with inherited stdio, so its human-readable
    /// output and any interactive credential prompts reach the terminal.
    pub async fn run_interactive(
        &self,
        working_dir: &Path,
        args: &[&str],
    ) -> std::io::Result<std::process::ExitStatus> {
        Command::new(&self.program)
            .args(args)
            .current_dir(working_dir)
            .status()
            .await
    }
}

impl Default for GitCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_program_is_git() {
        assert_eq!(GitCommand::new().program(), OsStr::new("git"));
    }

    #[test]
    fn test_program_override() {
        let git = GitCommand::with_program("/opt/git/bin/git");
        assert_eq!(git.program(), OsStr::new("/opt/git/bin/git"));
    }
}

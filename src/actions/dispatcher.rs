//! Remediation action menu and dispatch.

use super::error::ActionResult;
use crate::app::session::PromptSession;
use crate::git::GitCommand;
use crate::scanner::filter::GIT_DIR;
use crate::scanner::types::RepoRoot;
use colored::Colorize;
use std::path::Path;

/// One remediation choice for a selected repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoAction {
    ShowStatus,
    StageAll,
    RestoreAll,
    Commit,
    PushAll,
    RemoveMetadata,
    DeleteFolder,
    Cancel,
}

impl RepoAction {
    /// Parse a menu answer; anything unrecognized cancels.
    pub fn parse(choice: &str) -> Self {
        match choice.trim() {
            "1" => RepoAction::ShowStatus,
            "2" => RepoAction::StageAll,
            "3" => RepoAction::RestoreAll,
            "4" => RepoAction::Commit,
            "5" => RepoAction::PushAll,
            "6" => RepoAction::RemoveMetadata,
            "7" => RepoAction::DeleteFolder,
            _ => RepoAction::Cancel,
        }
    }

    /// Whether this action destroys data and needs a typed confirmation.
    pub fn is_irreversible(self) -> bool {
        matches!(self, RepoAction::RemoveMetadata | RepoAction::DeleteFolder)
    }
}

/// What happened to the selected repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The repository still exists and can be acted on again.
    Kept,
    /// The repository (or its metadata) is gone.
    Removed,
    Cancelled,
}

/// Presents the action menu for one repository and runs the chosen action.
pub struct ActionDispatcher<'a> {
    git: &'a GitCommand,
    session: &'a mut PromptSession,
}

impl<'a> ActionDispatcher<'a> {
    pub fn new(git: &'a GitCommand, session: &'a mut PromptSession) -> Self {
        Self { git, session }
    }

    pub async fn dispatch(&mut self, repo: &RepoRoot) -> ActionResult<ActionOutcome> {
        print_menu(repo);
        let choice = self.session.ask("> ").await?;
        let action = RepoAction::parse(&choice);

        if action.is_irreversible() && !self.confirm_irreversible(action, repo).await? {
            println!("❌ Cancelled.");
            return Ok(ActionOutcome::Cancelled);
        }

        match action {
            RepoAction::ShowStatus => {
                println!("\n📄 Git status for {}:\n", repo);
                if !self.run_git(repo.path(), &["status"]).await {
                    println!("❌ Failed to run git status.");
                }
                Ok(ActionOutcome::Kept)
            }
            RepoAction::StageAll => {
                self.report(
                    self.run_git(repo.path(), &["add", "."]).await,
                    "✅ Changes staged.",
                    "❌ Failed to stage changes.",
                );
                Ok(ActionOutcome::Kept)
            }
            RepoAction::RestoreAll => {
                self.report(
                    self.run_git(repo.path(), &["restore", "."]).await,
                    "🔄 Changes restored.",
                    "❌ Failed to restore changes.",
                );
                Ok(ActionOutcome::Kept)
            }
            RepoAction::Commit => {
                let message = self.session.ask("📝 Commit message: ").await?;
                if message.is_empty() {
                    println!("❌ Cancelled.");
                    return Ok(ActionOutcome::Cancelled);
                }
                self.report(
                    self.run_git(repo.path(), &["commit", "-m", &message]).await,
                    "✅ Committed.",
                    "❌ Commit failed.",
                );
                Ok(ActionOutcome::Kept)
            }
            RepoAction::PushAll => {
                let message = self.session.ask("📝 Commit message: ").await?;
                if message.is_empty() {
                    println!("❌ Cancelled.");
                    return Ok(ActionOutcome::Cancelled);
                }
                let pushed = self.run_git(repo.path(), &["add", "."]).await
                    && self.run_git(repo.path(), &["commit", "-m", &message]).await
                    && self.run_git(repo.path(), &["push"]).await;
                self.report(
                    pushed,
                    "✅ Changes pushed successfully.",
                    "❌ Failed to push changes.",
                );
                Ok(ActionOutcome::Kept)
            }
            RepoAction::RemoveMetadata => {
                match std::fs::remove_dir_all(repo.path().join(GIT_DIR)) {
                    Ok(()) => {
                        println!("✅ {} folder removed.", GIT_DIR);
                        Ok(ActionOutcome::Removed)
                    }
                    Err(err) => {
                        log::debug!("metadata removal failed for {}: {}", repo, err);
                        println!("❌ Failed to remove {} folder.", GIT_DIR);
                        Ok(ActionOutcome::Kept)
                    }
                }
            }
            RepoAction::DeleteFolder => match std::fs::remove_dir_all(repo.path()) {
                Ok(()) => {
                    println!("✅ Folder deleted.");
                    Ok(ActionOutcome::Removed)
                }
                Err(err) => {
                    log::debug!("folder deletion failed for {}: {}", repo, err);
                    println!("❌ Failed to delete folder.");
                    Ok(ActionOutcome::Kept)
                }
            },
            RepoAction::Cancel => {
                println!("❌ Cancelled.");
                Ok(ActionOutcome::Cancelled)
            }
        }
    }

    // Same confirmation for every irreversible action.
    async fn confirm_irreversible(
        &mut self,
        action: RepoAction,
        repo: &RepoRoot,
    ) -> ActionResult<bool> {
        let what = match action {
            RepoAction::RemoveMetadata => format!("Remove all git metadata from {}?", repo),
            _ => format!("Delete the entire folder {}?", repo),
        };
        let answer = self
            .session
            .ask(&format!(
                "⚠️  {} This cannot be undone. Type 'yes' to continue: ",
                what
            ))
            .await?;
        Ok(answer.eq_ignore_ascii_case("yes"))
    }

    async fn run_git(&self, working_dir: &Path, args: &[&str]) -> bool {
        match self.git.run_interactive(working_dir, args).await {
            Ok(status) => status.success(),
            Err(err) => {
                log::debug!(
                    "failed to run {:?} {:?} in {}: {}",
                    self.git.program(),
                    args,
                    working_dir.display(),
                    err
                );
                false
            }
        }
    }

    fn report(&self, ok: bool, success_line: &str, failure_line: &str) {
        if ok {
            println!("{}", success_line);
        } else {
            println!("{}", failure_line);
        }
    }
}

fn print_menu(repo: &RepoRoot) {
    println!("\nOptions for {}:", repo);
    println!("[1] Show git status");
    println!("[2] Stage all changes (git add .)");
    println!("[3] Restore all changes (git restore .)");
    println!("[4] Commit staged changes");
    println!("[5] Stage, commit and push");
    println!("[6] Remove {} metadata", GIT_DIR);
    println!("[7] Delete folder");
    println!("{}", "[Enter] Cancel".red());
}

//! Interactive scan-and-remediate control loop
//!
//! Drives one scan: resolve the scope root, discover repositories, classify
//! them concurrently, record the outcome in history and hand the sorted
//! list to the action menu until the operator quits.

use crate::actions::dispatcher::{ActionDispatcher, ActionOutcome};
use crate::actions::error::ActionResult;
use crate::app::cli::args::Args;
use crate::app::session::PromptSession;
use crate::core::paths;
use crate::git::GitCommand;
use crate::history::entry::HistoryEntry;
use crate::history::store::HistoryStore;
use crate::scanner::filter::PathFilter;
use crate::scanner::types::RepoRoot;
use crate::scanner::walker::RepoWalker;
use crate::status::classifier::{StatusClassifier, DEFAULT_CONCURRENCY, DEFAULT_STATUS_TIMEOUT};
use crate::status::types::ClassifiedRepo;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How many history entries the quick-resume prompt offers.
const RECENT_SCAN_CHOICES: usize = 5;

/// Resolved runtime settings, after merging CLI and config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub target: Option<PathBuf>,
    pub depth: Option<usize>,
    pub jobs: usize,
    pub status_timeout: Duration,
    pub exclude: Vec<String>,
    pub history_file: PathBuf,
    pub no_history: bool,
    pub git: GitCommand,
}

impl Settings {
    pub fn from_args(args: &Args) -> Self {
        Self {
            target: args.target.clone(),
            depth: args.depth,
            jobs: args.jobs.unwrap_or(DEFAULT_CONCURRENCY),
            status_timeout: args
                .status_timeout
                .map(|secs| Duration::from_secs(secs as u64))
                .unwrap_or(DEFAULT_STATUS_TIMEOUT),
            exclude: args.exclude.clone(),
            history_file: args
                .history_file
                .clone()
                .unwrap_or_else(HistoryStore::default_path),
            no_history: args.no_history,
            git: args
                .git_program
                .as_deref()
                .map(GitCommand::with_program)
                .unwrap_or_default(),
        }
    }
}

/// Run one interactive session.
pub async fn run(settings: Settings) -> ActionResult<()> {
    let mut session = PromptSession::new();
    let mut history = HistoryStore::new(settings.history_file.clone());

    let scope = resolve_scope(&settings, &mut history, &mut session).await?;
    let scope = paths::normalize(&scope);

    println!("\n🔍 Scanning {} ...", scope.display());
    let repos = discover(&settings, scope.clone()).await;

    let classifier =
        StatusClassifier::new(settings.git.clone()).with_limits(settings.jobs, settings.status_timeout);
    let mut classified = classifier.classify(repos).await;

    if !settings.no_history {
        record_scan(&mut history, &classifier, &classified, &scope).await;
    }

    if classified.is_empty() {
        println!("❌ No git repositories found.");
        return Ok(());
    }

    loop {
        print_scan_results(&classified);
        let choice = session
            .ask("\n🔢 Repository to act on (Enter to quit): ")
            .await?;
        if choice.is_empty() {
            break;
        }

        let index = match choice.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) {
            Some(index) if index < classified.len() => index,
            _ => {
                println!("❌ No such repository.");
                continue;
            }
        };

        let root = classified[index].root.clone();
        let mut dispatcher = ActionDispatcher::new(&settings.git, &mut session);
        if dispatcher.dispatch(&root).await? == ActionOutcome::Removed {
            classified.remove(index);
            if classified.is_empty() {
                println!("Nothing left to tidy.");
                break;
            }
        }
    }

    println!("👋 Bye.");
    Ok(())
}

/// Pick the scope root: explicit target, then history quick-resume, then an
/// interactive prompt defaulting to the current directory.
async fn resolve_scope(
    settings: &Settings,
    history: &mut HistoryStore,
    session: &mut PromptSession,
) -> ActionResult<PathBuf> {
    if let Some(target) = &settings.target {
        return Ok(target.clone());
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let recent = if settings.no_history {
        Vec::new()
    } else {
        history.recent(RECENT_SCAN_CHOICES)
    };

    if recent.is_empty() {
        let answer = session
            .ask(&format!("📁 Folder to scan [default: {}]: ", cwd.display()))
            .await?;
        return Ok(if answer.is_empty() {
            cwd
        } else {
            PathBuf::from(answer)
        });
    }

    println!("Recent scans:");
    for (position, entry) in recent.iter().enumerate() {
        println!(
            "{} {:>2}. {}  ({})",
            entry.status.glyph(),
            position + 1,
            entry.path,
            entry.date
        );
    }
    let answer = session
        .ask(&format!(
            "📁 Number to rescan, a path, or Enter for {}: ",
            cwd.display()
        ))
        .await?;

    if answer.is_empty() {
        return Ok(cwd);
    }
    if let Some(entry) = answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| recent.get(index))
    {
        return Ok(PathBuf::from(&entry.path));
    }
    Ok(PathBuf::from(answer))
}

async fn discover(settings: &Settings, scope: PathBuf) -> Vec<RepoRoot> {
    let filter = PathFilter::new().with_excluded(settings.exclude.iter().cloned());
    let walker = RepoWalker::with_filter(filter);
    let depth = settings.depth;

    match tokio::task::spawn_blocking(move || walker.walk(&scope, depth)).await {
        Ok(repos) => repos,
        Err(err) => {
            log::error!("discovery walk failed: {}", err);
            Vec::new()
        }
    }
}

/// Offer every classification to the history store. The scope root always
/// gets an entry; when it is not among the discovered repositories it is
/// classified once on its own.
async fn record_scan(
    history: &mut HistoryStore,
    classifier: &StatusClassifier,
    classified: &[ClassifiedRepo],
    scope: &Path,
) {
    let mut scope_seen = false;
    for repo in classified {
        scope_seen = scope_seen || repo.root.path() == scope;
        offer(history, HistoryEntry::observed(&repo.root, repo.class), scope);
    }
    if !scope_seen {
        let scope_root = RepoRoot::new(scope);
        let class = classifier.classify_one(&scope_root).await;
        offer(history, HistoryEntry::observed(&scope_root, class), scope);
    }
}

// A failed history write is reported once and the scan continues.
fn offer(history: &mut HistoryStore, entry: HistoryEntry, scope: &Path) {
    let path = entry.path.clone();
    if let Err(err) = history.record(entry, Some(scope)) {
        log::warn!("history not updated for {}: {}", path, err);
    }
}

fn print_scan_results(classified: &[ClassifiedRepo]) {
    println!();
    for (position, repo) in classified.iter().enumerate() {
        println!(
            "{} {:>2}. {}  [{}]",
            repo.class.glyph(),
            position + 1,
            repo.root,
            repo.class
        );
    }
}

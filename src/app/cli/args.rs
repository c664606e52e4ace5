//! Command-line arguments structure and parsing
//!
//! Configuration file loading lives in the config module; values given on
//! the command line always win over the config file.

use super::validation::validate_positive_int;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "gitsweep")]
#[command(about = "Find git working trees under a directory and tidy the ones needing attention")]
#[command(version)]
pub struct Args {
    /// Directory to scan (interactive prompt when omitted)
    #[arg(value_name = "DIR")]
    pub target: Option<PathBuf>,

    /// Maximum recursion depth; 0 checks the target itself only
    #[arg(short = 'd', long = "depth", value_name = "LEVELS")]
    pub depth: Option<usize>,

    /// Maximum concurrent status queries
    #[arg(short = 'j', long = "jobs", value_name = "COUNT", value_parser = validate_positive_int)]
    pub jobs: Option<usize>,

    /// Seconds before an unresponsive status query counts as inaccessible
    #[arg(long = "status-timeout", value_name = "SECONDS", value_parser = validate_positive_int)]
    pub status_timeout: Option<usize>,

    /// Additional directory names to skip during discovery
    #[arg(short = 'x', long = "exclude", value_name = "NAME", action = ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// History file path override
    #[arg(long = "history-file", value_name = "FILE")]
    pub history_file: Option<PathBuf>,

    /// Do not read or write scan history
    #[arg(long = "no-history")]
    pub no_history: bool,

    /// Git executable override
    #[arg(long = "git", value_name = "PROGRAM")]
    pub git_program: Option<String>,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log file path
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = ["text", "json"])]
    pub log_format: Option<String>,

    /// Force color output
    #[arg(long = "color", conflicts_with = "no_color")]
    pub color: bool,

    /// Disable color output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

//! TOML configuration file loading
//!
//! Loads the optional configuration file and fills in any setting the
//! command line left unset. A user-specified file must exist; the default
//! file is used only when present.

use super::args::Args;
use std::path::PathBuf;

impl Args {
    /// Locate, read and apply the configuration file.
    ///
    /// Problems with a file the user explicitly asked for are fatal; a
    /// missing default file is simply no configuration.
    pub fn apply_config_file(args: &mut Self) {
        let config_path = match args.config_file.take() {
            Some(path) => {
                if !path.exists() {
                    eprintln!(
                        "Error: The specified configuration file does not exist: {}",
                        path.display()
                    );
                    std::process::exit(1);
                }
                Some(path)
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Some(path),
                _ => None,
            },
        };

        let Some(path) = config_path else {
            return;
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<toml::Table>(&contents) {
                Ok(config) => Self::apply_toml_values(args, &config),
                Err(err) => {
                    eprintln!("Error parsing configuration file {}: {}", path.display(), err);
                    std::process::exit(1);
                }
            },
            Err(err) => {
                eprintln!("Error reading configuration file {}: {}", path.display(), err);
                std::process::exit(1);
            }
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gitsweep").join("gitsweep.toml"))
    }

    /// Apply TOML configuration values to any Args field the command line
    /// left unset. `exclude` extends rather than replaces.
    pub fn apply_toml_values(args: &mut Self, config: &toml::Table) {
        if args.depth.is_none() {
            if let Some(depth) = config.get("depth").and_then(|v| v.as_integer()) {
                if depth >= 0 {
                    args.depth = Some(depth as usize);
                }
            }
        }
        if args.jobs.is_none() {
            if let Some(jobs) = config.get("jobs").and_then(|v| v.as_integer()) {
                if jobs > 0 {
                    args.jobs = Some(jobs as usize);
                }
            }
        }
        if args.status_timeout.is_none() {
            if let Some(timeout) = config.get("status-timeout").and_then(|v| v.as_integer()) {
                if timeout > 0 {
                    args.status_timeout = Some(timeout as usize);
                }
            }
        }

        // Single string and array formats are both accepted.
        if let Some(value) = config.get("exclude") {
            if let Some(name) = value.as_str() {
                args.exclude.push(name.to_string());
            } else if let Some(names) = value.as_array() {
                for name in names {
                    if let Some(name) = name.as_str() {
                        args.exclude.push(name.to_string());
                    }
                }
            }
        }

        if args.history_file.is_none() {
            if let Some(path) = config.get("history-file").and_then(|v| v.as_str()) {
                args.history_file = Some(PathBuf::from(path));
            }
        }
        if !args.no_history {
            if let Some(no_history) = config.get("no-history").and_then(|v| v.as_bool()) {
                args.no_history = no_history;
            }
        }
        if args.git_program.is_none() {
            if let Some(program) = config.get("git").and_then(|v| v.as_str()) {
                args.git_program = Some(program.to_string());
            }
        }

        if args.log_level.is_none() {
            if let Some(level) = config.get("log-level").and_then(|v| v.as_str()) {
                args.log_level = Some(level.to_string());
            }
        }
        if args.log_file.is_none() {
            if let Some(log_file) = config.get("log-file").and_then(|v| v.as_str()) {
                // Magic values "none" and "-" disable file logging.
                if !log_file.eq_ignore_ascii_case("none") && log_file != "-" {
                    args.log_file = Some(PathBuf::from(log_file));
                }
            }
        }
        if args.log_format.is_none() {
            if let Some(format) = config.get("log-format").and_then(|v| v.as_str()) {
                args.log_format = Some(format.to_string());
            }
        }
        if !args.color && !args.no_color {
            if let Some(color) = config.get("color").and_then(|v| v.as_bool()) {
                args.color = color;
                args.no_color = !color;
            }
        }
    }
}

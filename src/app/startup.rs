//! Application startup wiring

use crate::app::cli::args::Args;
use crate::app::controller::{self, Settings};
use crate::core::error_handling::log_error_with_context;
use crate::core::logging::init_logging;
use clap::Parser;
use std::io::IsTerminal;

/// Parse arguments, initialise logging and run the interactive session.
pub fn startup() {
    let mut args = Args::parse();
    Args::apply_config_file(&mut args);

    let use_color = (args.color || std::io::stdout().is_terminal()) && !args.no_color;
    if let Err(err) = init_logging(
        args.log_level.as_deref(),
        args.log_format.as_deref(),
        args.log_file.as_deref(),
        use_color,
    ) {
        eprintln!("Error initialising logging: {}", err);
        std::process::exit(1);
    }

    log::info!(
        "gitsweep {} starting ({} {})",
        env!("CARGO_PKG_VERSION"),
        crate::GIT_HASH,
        crate::BUILD_TIME
    );
    log::debug!("arguments: {:?}", args);

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(err) => {
            log::error!("FATAL: could not start async runtime: {}", err);
            std::process::exit(1);
        }
    };

    let settings = Settings::from_args(&args);
    if let Err(err) = runtime.block_on(controller::run(settings)) {
        log_error_with_context(&err, "Interactive session failed");
        std::process::exit(1);
    }
}

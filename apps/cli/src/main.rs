use primer::cli::Cli;
use primer::commands::dispatch;
use primer::error::PrimerError;
use primer::logger::{initialize as LoggerInitialize, level_for_verbosity};

use primer_core::AppConfig;
use primer_core::config::log_level_from_str;

use std::fs::create_dir_all;
use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, debug, error, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), PrimerError> {
    let config_path = match cli.config {
        Some(path) => path,
        None => AppConfig::default_path()?,
    };
    let config = AppConfig::load(&config_path)?;

    // Config is validated, so the level always parses
    let configured = log_level_from_str(&config.logging.level).unwrap_or(LevelFilter::Info);
    let level = level_for_verbosity(cli.verbose, configured);

    let log_dir = config.logging.log_directory();
    let usable_log_dir = log_dir
        .as_deref()
        .filter(|dir| create_dir_all(dir).is_ok());

    // Initialize logger FIRST
    LoggerInitialize(usable_log_dir, level)?;

    debug!("primer {} starting", primer_core::PRIMER_VERSION);
    debug!("Config: {}", config_path.display());
    match (&log_dir, usable_log_dir) {
        (Some(dir), None) => warn!("Cannot create log directory {}, logging to stderr only", dir.display()),
        (_, Some(dir)) => debug!("Log directory: {}", dir.display()),
        (None, None) => debug!("No log directory available"),
    }

    dispatch(cli.command, &config).await
}

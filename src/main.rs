//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `url_guard` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Choosing between batch and interactive mode
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::BufReader;

use url_guard::app::{run_batch, run_interactive, HELP_TEXT};
use url_guard::initialization::{init_logger_with, init_prediction_client};
use url_guard::ui::TerminalView;
use url_guard::{Config, ControllerSettings, ScanController};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), e.g. URL_GUARD_SERVICE_URL.
    // Try the current directory first, then the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();
    if let Err(e) = config.validate() {
        eprintln!("url_guard error: {e}");
        process::exit(2);
    }

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let service = init_prediction_client(&config).context("Failed to initialize prediction client")?;
    log::info!("Using prediction service at {}", service.endpoint());

    let settings = ControllerSettings {
        meter_transition_delay: config.meter_transition_delay(),
    };
    let controller = ScanController::new(service, TerminalView::new(std::io::stdout()), settings);

    let tally = if config.urls.is_empty() {
        println!("{HELP_TEXT}");
        run_interactive(&controller, BufReader::new(tokio::io::stdin())).await?
    } else {
        run_batch(&controller, &config.urls).await
    };

    tally.log_summary();
    if tally.failed > 0 {
        process::exit(1);
    }
    Ok(())
}

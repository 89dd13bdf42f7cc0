//! url_guard library: client side of a malicious-URL scanner
//!
//! This library submits URLs to a prediction service (`POST /predict`) and
//! drives a scanner page through its presentation states: idle, loading, and a
//! resolved verdict with a confidence meter.
//!
//! # Example
//!
//! ```no_run
//! use url_guard::initialization::init_prediction_client;
//! use url_guard::ui::TerminalView;
//! use url_guard::{Config, ControllerSettings, ScanController};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let service = init_prediction_client(&config)?;
//! let controller = ScanController::new(
//!     service,
//!     TerminalView::new(std::io::stdout()),
//!     ControllerSettings::default(),
//! );
//!
//! let outcome = controller.on_submit("example.com").await;
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Submissions use `tokio::time` for the meter animation, so they must run
//! inside a Tokio runtime.

pub mod app;
pub mod config;
pub mod controller;
mod error_handling;
pub mod initialization;
mod models;
pub mod prediction;
pub mod ui;

// Re-export public API
pub use config::{Config, ConfigValidationError, LogFormat, LogLevel};
pub use controller::{ControllerSettings, ScanController, SubmitOutcome};
pub use error_handling::{InitializationError, ScanError, ViewError};
pub use models::{Confidence, ScanRequest, ScanResult, Verdict};
pub use prediction::{PredictionClient, PredictionService};

//! Configuration constants.
//!
//! This module defines the constants shared by the controller, the HTTP client and
//! the terminal page: endpoint paths, UI labels, timings and thresholds.

use std::time::Duration;

/// Default base URL of the prediction service (the local inference API)
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8000";

/// Path of the prediction route, resolved against the service base URL
pub const PREDICT_PATH: &str = "/predict";

/// Environment variable that overrides `--service-url`
pub const SERVICE_URL_ENV: &str = "URL_GUARD_SERVICE_URL";

// Meter animation
/// Delay between revealing the result panel and filling the confidence meter.
/// The meter is reset to 0% when loading starts; filling it after this delay keeps
/// the transition from 0% visible.
pub const METER_TRANSITION_DELAY: Duration = Duration::from_millis(DEFAULT_METER_DELAY_MS);
/// Default `--meter-delay-ms`
pub const DEFAULT_METER_DELAY_MS: u64 = 100;
/// Upper bound accepted for `--meter-delay-ms`
pub const MAX_METER_DELAY_MS: u64 = 10_000;

// Classification
/// Scores above this value are classified as malicious by the prediction service
pub const MALICIOUS_THRESHOLD: f64 = 0.5;

// Submit control labels
pub const IDLE_LABEL: &str = "Analyze";
pub const LOADING_LABEL: &str = "Scanning...";

/// Alert shown for every failed scan, whatever the failure kind
pub const CONNECTION_FAILED_ALERT: &str =
    "Failed to connect to the prediction server. Make sure the backend is running.";

// Tabs
pub const SCANNER_TAB: &str = "scanner";
pub const HOW_IT_WORKS_TAB: &str = "how-it-works";

// Status classes applied to the result card
pub const STATUS_SAFE_CLASS: &str = "status-safe";
pub const STATUS_DANGER_CLASS: &str = "status-danger";

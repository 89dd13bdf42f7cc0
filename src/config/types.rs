//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::config::constants::{
    DEFAULT_METER_DELAY_MS, DEFAULT_SERVICE_URL, MAX_METER_DELAY_MS, SERVICE_URL_ENV,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Application configuration.
///
/// Parsed from the command line by the binary, but can also be constructed
/// programmatically.
///
/// # Examples
///
/// ```no_run
/// use url_guard::Config;
///
/// let config = Config {
///     service_url: "http://10.0.0.5:8000".to_string(),
///     meter_delay_ms: 0,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "url_guard",
    version,
    about = "Classify URLs as safe or malicious using a remote prediction service"
)]
pub struct Config {
    /// URLs to scan. When omitted, URLs are read interactively from stdin
    pub urls: Vec<String>,

    /// Base URL of the prediction service
    #[arg(long, env = SERVICE_URL_ENV, default_value = DEFAULT_SERVICE_URL)]
    pub service_url: String,

    /// Delay in milliseconds before the confidence meter fills
    #[arg(long, default_value_t = DEFAULT_METER_DELAY_MS)]
    pub meter_delay_ms: u64,

    /// Per-request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            service_url: DEFAULT_SERVICE_URL.to_string(),
            meter_delay_ms: DEFAULT_METER_DELAY_MS,
            timeout_seconds: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// A configuration value that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value for {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending option
    pub field: &'static str,
    /// What is wrong and what a valid value looks like
    pub message: String,
}

impl ConfigValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl Config {
    /// Checks option values that clap cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found:
    /// - `service_url` must be an absolute http(s) URL
    /// - `timeout_seconds`, when set, must be greater than 0
    /// - `meter_delay_ms` must not exceed 10 seconds
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        match url::Url::parse(&self.service_url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            Ok(parsed) => {
                return Err(ConfigValidationError::new(
                    "service_url",
                    format!(
                        "unsupported scheme '{}', expected http or https (e.g. {})",
                        parsed.scheme(),
                        DEFAULT_SERVICE_URL
                    ),
                ));
            }
            Err(e) => {
                return Err(ConfigValidationError::new(
                    "service_url",
                    format!("'{}' is not a valid URL ({e}), e.g. {}", self.service_url, DEFAULT_SERVICE_URL),
                ));
            }
        }

        if self.timeout_seconds == Some(0) {
            return Err(ConfigValidationError::new(
                "timeout_seconds",
                "must be greater than 0 (omit the option to disable the timeout)",
            ));
        }

        if self.meter_delay_ms > MAX_METER_DELAY_MS {
            return Err(ConfigValidationError::new(
                "meter_delay_ms",
                format!("must be at most {MAX_METER_DELAY_MS}ms"),
            ));
        }

        Ok(())
    }

    /// Delay before the confidence meter animates.
    pub fn meter_transition_delay(&self) -> Duration {
        Duration::from_millis(self.meter_delay_ms)
    }

    /// Per-request timeout, if one was requested.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

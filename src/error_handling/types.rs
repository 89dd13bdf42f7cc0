//! Error type definitions.

use log::SetLoggerError;
use reqwest::{Error as ReqwestError, StatusCode};
use thiserror::Error;

/// Failure of a single prediction request.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The service answered with a non-success status.
    #[error("Server error occurred (HTTP {status})")]
    Server {
        /// Status returned by the prediction service
        status: StatusCode,
    },

    /// The request could not be completed: connection refused, DNS failure,
    /// timeout, or a response body that is not a prediction.
    #[error("Prediction request failed: {0}")]
    Network(#[from] ReqwestError),
}

impl ScanError {
    /// Returns `true` if the service was reached but answered with an error status.
    pub fn is_server_error(&self) -> bool {
        matches!(self, ScanError::Server { .. })
    }

    /// HTTP status associated with the failure, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ScanError::Server { status } => Some(*status),
            ScanError::Network(e) => e.status(),
        }
    }
}

/// Errors raised while manipulating the page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// `switch_tab` targeted a tab with no content section.
    #[error("No content section for tab '{0}'")]
    UnknownSection(String),
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The prediction service URL cannot be used as a base for `/predict`.
    #[error("Invalid prediction service URL: {0}")]
    ServiceUrlError(#[from] url::ParseError),
}

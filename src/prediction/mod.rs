//! Prediction service access.
//!
//! [`PredictionService`] is the seam between the controller and the inference
//! backend. [`PredictionClient`] is the HTTP implementation used by the binary;
//! tests substitute in-process fakes.

mod client;

use std::future::Future;

use crate::error_handling::ScanError;
use crate::models::{ScanRequest, ScanResult};

pub use client::PredictionClient;

/// Classifies one URL.
pub trait PredictionService {
    /// Sends `request` to the service and returns its verdict.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Server`] for a non-success status and
    /// [`ScanError::Network`] when the exchange itself fails.
    fn predict(
        &self,
        request: &ScanRequest,
    ) -> impl Future<Output = Result<ScanResult, ScanError>>;
}

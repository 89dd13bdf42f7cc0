//! HTTP client for the prediction route.

use std::sync::Arc;

use log::debug;
use url::Url;

use crate::config::PREDICT_PATH;
use crate::error_handling::{InitializationError, ScanError};
use crate::models::{ScanRequest, ScanResult};
use crate::prediction::PredictionService;

/// Calls `POST /predict` on a prediction service.
///
/// One request per call: no retry, no queuing. Timeouts are whatever the
/// wrapped `reqwest::Client` was built with.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    client: Arc<reqwest::Client>,
    endpoint: Url,
}

impl PredictionClient {
    /// Creates a client for the service rooted at `service_url`.
    ///
    /// The prediction path is resolved against the origin, the same way a page
    /// served by the service would resolve `/predict`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::ServiceUrlError` if `service_url` is not an
    /// absolute URL.
    pub fn new(client: Arc<reqwest::Client>, service_url: &str) -> Result<Self, InitializationError> {
        let endpoint = Url::parse(service_url)?.join(PREDICT_PATH)?;
        Ok(Self { client, endpoint })
    }

    /// Fully resolved prediction URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl PredictionService for PredictionClient {
    async fn predict(&self, request: &ScanRequest) -> Result<ScanResult, ScanError> {
        debug!("POST {} for {}", self.endpoint, request.url);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!("Prediction service answered {status} for {}", request.url);
            return Err(ScanError::Server { status });
        }

        let result = response.json::<ScanResult>().await?;
        Ok(result)
    }
}

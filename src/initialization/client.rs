//! HTTP client initialization.

use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::prediction::PredictionClient;

/// User-Agent sent to the prediction service
const USER_AGENT: &str = concat!("url_guard/", env!("CARGO_PKG_VERSION"));

/// Initializes the HTTP client used for prediction requests.
///
/// Creates a `reqwest::Client` configured with:
/// - A `url_guard/<version>` User-Agent
/// - The optional per-request timeout from the config (none by default)
/// - Rustls TLS backend (no native TLS)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }
    Ok(Arc::new(builder.build()?))
}

/// Builds the prediction client for `config.service_url`.
///
/// # Errors
///
/// Returns `InitializationError` if the HTTP client cannot be built or the
/// service URL is not absolute.
pub fn init_prediction_client(config: &Config) -> Result<PredictionClient, InitializationError> {
    let client = init_client(config)?;
    PredictionClient::new(client, &config.service_url)
}

// Shared helpers for integration tests against a mock prediction service.
//
// Every test file includes this module, but not every file uses every helper.

use std::sync::Arc;
use std::time::Duration;

use httptest::{all_of, matchers::*, responders::*, Expectation, Server};
use serde_json::json;

use url_guard::ui::Page;
use url_guard::{ControllerSettings, PredictionClient, ScanController};

/// Settings with no meter delay so tests don't wait on the animation.
#[allow(dead_code)]
pub fn instant_settings() -> ControllerSettings {
    ControllerSettings {
        meter_transition_delay: Duration::ZERO,
    }
}

/// Prediction client pointed at the mock server.
#[allow(dead_code)]
pub fn client_for(server: &Server) -> PredictionClient {
    let http = Arc::new(reqwest::Client::new());
    PredictionClient::new(http, &server.url("/").to_string()).expect("valid mock server URL")
}

/// Prediction client pointed at a port nothing listens on.
#[allow(dead_code)]
pub fn unreachable_client() -> PredictionClient {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    let http = Arc::new(reqwest::Client::new());
    PredictionClient::new(http, &format!("http://127.0.0.1:{port}")).expect("valid URL")
}

/// Controller on the standard page, talking to the mock server.
#[allow(dead_code)]
pub fn page_controller(server: &Server) -> ScanController<PredictionClient, Page> {
    ScanController::new(client_for(server), Page::standard(), instant_settings())
}

/// Expects exactly one `POST /predict` for `url` and answers with the given verdict.
#[allow(dead_code)]
pub fn expect_prediction(server: &Server, url: &str, score: f64, is_malicious: bool) {
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/predict"),
            request::body(json_decoded(eq(json!({ "url": url })))),
        ])
        .times(1)
        .respond_with(json_encoded(json!({
            "url": url,
            "prediction_score": score,
            "label": if is_malicious { "Defacement (Malicious)" } else { "Benign (Safe)" },
            "is_malicious": is_malicious,
        }))),
    );
}

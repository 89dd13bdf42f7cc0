//! End-to-end submissions against a mock prediction service.

mod common;

use httptest::{matchers::*, responders::*, Expectation, Server};

use common::{expect_prediction, instant_settings, page_controller, unreachable_client};
use url_guard::config::{CONNECTION_FAILED_ALERT, IDLE_LABEL};
use url_guard::ui::{Page, TerminalView};
use url_guard::{ScanController, ScanError, SubmitOutcome, Verdict};

fn assert_control_idle(page: &Page) {
    assert_eq!(page.submit.label, IDLE_LABEL);
    assert!(page.submit.enabled, "submit control should be enabled");
    assert!(!page.submit.spinner_visible, "spinner should be hidden");
}

#[tokio::test]
async fn test_malicious_url_shows_danger() {
    let server = Server::run();
    expect_prediction(&server, "example.com", 0.92, true);
    let controller = page_controller(&server);

    let outcome = controller.on_submit("example.com").await;

    assert!(matches!(outcome, SubmitOutcome::Resolved(_)));
    let page = controller.view();
    assert!(page.result.visible);
    assert_eq!(page.result.status, Some(Verdict::Danger));
    assert_eq!(page.result.confidence_text, "92.0%");
    assert_eq!(page.result.scanned_url, "example.com");
    assert_control_idle(&page);
}

#[tokio::test]
async fn test_benign_url_shows_safe() {
    let server = Server::run();
    expect_prediction(&server, "safe-site.org", 0.08, false);
    let controller = page_controller(&server);

    controller.on_submit("safe-site.org").await;

    let page = controller.view();
    assert_eq!(page.result.status, Some(Verdict::Safe));
    assert_eq!(page.result.confidence_text, "92.0%");
    assert!(page.result.description.contains("benign"));
    assert_control_idle(&page);
}

#[tokio::test]
async fn test_input_is_trimmed_before_sending() {
    let server = Server::run();
    expect_prediction(&server, "example.com", 0.92, true);
    let controller = page_controller(&server);

    let outcome = controller.on_submit("   example.com\t").await;

    assert!(matches!(outcome, SubmitOutcome::Resolved(_)));
}

#[tokio::test]
async fn test_blank_input_sends_nothing() {
    let server = Server::run();
    // Any request at all fails the test when the server is dropped
    server.expect(Expectation::matching(any()).times(0).respond_with(status_code(200)));
    let controller = page_controller(&server);
    let before = controller.view().clone();

    for input in ["", "   "] {
        assert!(matches!(
            controller.on_submit(input).await,
            SubmitOutcome::Ignored
        ));
    }

    assert_eq!(*controller.view(), before);
}

#[tokio::test]
async fn test_unreachable_service_alerts() {
    let controller = ScanController::new(unreachable_client(), Page::standard(), instant_settings());

    let outcome = controller.on_submit("example.com").await;

    assert!(matches!(outcome, SubmitOutcome::Failed(ScanError::Network(_))));
    let page = controller.view();
    assert_eq!(page.alerts, vec![CONNECTION_FAILED_ALERT.to_string()]);
    assert!(!page.result.visible);
    assert_control_idle(&page);
}

#[tokio::test]
async fn test_server_error_alerts() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("POST", "/predict"))
            .times(1)
            .respond_with(status_code(500)),
    );
    let controller = page_controller(&server);

    let outcome = controller.on_submit("example.com").await;

    assert!(matches!(outcome, SubmitOutcome::Failed(ScanError::Server { .. })));
    let page = controller.view();
    assert_eq!(page.alerts, vec![CONNECTION_FAILED_ALERT.to_string()]);
    assert!(!page.result.visible);
    assert_control_idle(&page);
}

#[tokio::test]
async fn test_client_error_status_is_a_failure_too() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("POST", "/predict"))
            .times(1)
            .respond_with(status_code(400).body(r#"{"detail":"URL cannot be empty."}"#)),
    );
    let controller = page_controller(&server);

    let outcome = controller.on_submit("example.com").await;

    assert!(outcome.is_failure());
    assert_control_idle(&controller.view());
}

#[tokio::test]
async fn test_terminal_view_renders_result_card() {
    let server = Server::run();
    expect_prediction(&server, "example.com", 0.92, true);
    let controller = ScanController::new(
        common::client_for(&server),
        TerminalView::new(Vec::new()),
        instant_settings(),
    );

    controller.on_submit("example.com").await;

    let output = String::from_utf8(controller.into_view().into_inner()).expect("utf-8");
    assert!(output.contains("Scanning..."));
    assert!(output.contains("Threat Detected"));
    assert!(output.contains("example.com"));
    assert!(output.contains("92.0%"));
    assert!(output.contains('█'));
}

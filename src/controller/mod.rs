//! Scan controller.
//!
//! Binds a submission to one prediction request and drives the page through
//! idle, loading and resolved presentation.
//!
//! Overlapping submissions are allowed; only the most recent one is reflected in
//! the page. Each submission takes a generation number, and anything a
//! superseded submission learns after its request completes is dropped.

mod guard;


use std::cell::{Cell, Ref, RefCell};
use std::time::Duration;

use log::{debug, error, info, warn};

use crate::config::{CONNECTION_FAILED_ALERT, LOADING_LABEL, METER_TRANSITION_DELAY};
use crate::error_handling::{ScanError, ViewError};
use crate::models::{Confidence, ScanRequest, ScanResult};
use crate::prediction::PredictionService;
use crate::ui::{ScanView, UiState};

use guard::IdleGuard;

/// Timing knobs of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerSettings {
    /// Delay between revealing the result and filling the confidence meter
    pub meter_transition_delay: Duration,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            meter_transition_delay: METER_TRANSITION_DELAY,
        }
    }
}

/// How a submission ended.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Input was empty after trimming; nothing happened.
    Ignored,
    /// The verdict was rendered.
    Resolved(ScanResult),
    /// The request failed and the user was alerted.
    Failed(ScanError),
    /// A newer submission started before this one completed; its result was discarded.
    Superseded,
}

impl SubmitOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, SubmitOutcome::Failed(_))
    }
}

/// Drives the scanner page.
///
/// Built once with its prediction service and view. Methods take `&self` so
/// several submissions can be in flight on the same event loop; the view is
/// borrowed only between suspension points.
pub struct ScanController<S, V> {
    service: S,
    view: RefCell<V>,
    state: RefCell<UiState>,
    settings: ControllerSettings,
    generation: Cell<u64>,
}

impl<S: PredictionService, V: ScanView> ScanController<S, V> {
    pub fn new(service: S, view: V, settings: ControllerSettings) -> Self {
        Self {
            service,
            view: RefCell::new(view),
            state: RefCell::new(UiState::Idle),
            settings,
            generation: Cell::new(0),
        }
    }

    /// Read access to the view, e.g. to inspect the page.
    ///
    /// Do not hold the returned guard across an `.await` on a submission.
    pub fn view(&self) -> Ref<'_, V> {
        self.view.borrow()
    }

    /// Current presentation state.
    pub fn state(&self) -> UiState {
        self.state.borrow().clone()
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn settings(&self) -> ControllerSettings {
        self.settings
    }

    /// Consumes the controller and returns its view.
    pub fn into_view(self) -> V {
        self.view.into_inner()
    }

    /// Shows the content section for `tab_id` and highlights its navigation item.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::UnknownSection` if the page has no section for
    /// `tab_id`; the page is left untouched. A missing navigation item is not
    /// an error, the section is still shown.
    pub fn switch_tab(&self, tab_id: &str) -> Result<(), ViewError> {
        let mut view = self.view.borrow_mut();
        if !view.has_section(tab_id) {
            warn!("Cannot switch to tab '{tab_id}': no such content section");
            return Err(ViewError::UnknownSection(tab_id.to_string()));
        }

        view.deactivate_tabs();
        if !view.activate_nav_item(tab_id) {
            debug!("No navigation item targets '{tab_id}'");
        }
        view.activate_section(tab_id);
        Ok(())
    }

    /// Handles a form submission.
    ///
    /// Blank input is ignored without side effects. Otherwise the page enters
    /// loading, one prediction request is issued, and the verdict or an alert
    /// is shown. The submit control is restored on every exit path of the
    /// latest submission, including a panic or the returned future being
    /// dropped.
    pub async fn on_submit(&self, input: impl AsRef<str>) -> SubmitOutcome {
        let Some(request) = ScanRequest::from_input(input.as_ref()) else {
            debug!("Ignoring blank submission");
            return SubmitOutcome::Ignored;
        };

        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.enter_loading();
        let guard = IdleGuard::new(self, generation);

        info!("Scanning {}", request.url);
        let outcome = self.service.predict(&request).await;

        if !self.is_current(generation) {
            debug!(
                "Discarding result for {} (submission {generation} superseded)",
                request.url
            );
            return SubmitOutcome::Superseded;
        }

        match outcome {
            Ok(result) => {
                let confidence = result.confidence();
                self.render(&result, confidence);
                drop(guard);

                self.animate_meter(generation, confidence).await;
                SubmitOutcome::Resolved(result)
            }
            Err(e) => {
                error!("Prediction failed: {e}");
                *self.state.borrow_mut() = UiState::Idle;
                self.view.borrow_mut().alert(CONNECTION_FAILED_ALERT);
                drop(guard);
                SubmitOutcome::Failed(e)
            }
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }

    fn enter_loading(&self) {
        *self.state.borrow_mut() = UiState::Loading;

        let mut view = self.view.borrow_mut();
        view.set_submit_label(LOADING_LABEL);
        view.set_spinner_visible(true);
        view.set_submit_enabled(false);

        view.set_result_visible(false);
        view.clear_status();
        view.set_meter_width(0.0);
    }

    fn render(&self, result: &ScanResult, confidence: Confidence) {
        if !result.is_consistent() {
            warn!(
                "Service flagged {} as {} with score {:.3}; rendering the flag as received",
                result.url,
                if result.is_malicious { "malicious" } else { "benign" },
                result.prediction_score
            );
        }

        let verdict = result.verdict();
        let confidence_text = confidence.percent_text();
        info!(
            "{} classified as {} ({} confidence)",
            result.url,
            result.label.as_deref().unwrap_or(verdict.status_text()),
            confidence_text
        );

        {
            let mut view = self.view.borrow_mut();
            view.set_scanned_url(&result.url);
            view.set_confidence_text(&confidence_text);
            view.apply_status(verdict);
            view.set_icon(verdict.icon());
            view.set_status_text(verdict.status_text());
            view.set_description(&verdict.description(&confidence_text));
            view.set_result_visible(true);
        }

        *self.state.borrow_mut() = UiState::resolved(result.clone());
    }

    async fn animate_meter(&self, generation: u64, confidence: Confidence) {
        let delay = self.settings.meter_transition_delay;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        // A newer submission has reset the meter; leave it alone
        if self.is_current(generation) {
            self.view.borrow_mut().set_meter_width(confidence.display_percent());
        }
    }
}

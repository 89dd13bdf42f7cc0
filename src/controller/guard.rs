//! Restores the idle submit control when a submission ends.

use log::warn;

use crate::config::IDLE_LABEL;
use crate::controller::ScanController;
use crate::prediction::PredictionService;
use crate::ui::{ScanView, UiState};

/// Held for the lifetime of a submission's request and render.
///
/// On drop, and only if its submission is still the latest, resets the submit
/// control to idle. Runs on success, failure, panic, and cancellation alike.
pub(super) struct IdleGuard<'a, S: PredictionService, V: ScanView> {
    controller: &'a ScanController<S, V>,
    generation: u64,
}

impl<'a, S: PredictionService, V: ScanView> IdleGuard<'a, S, V> {
    pub(super) fn new(controller: &'a ScanController<S, V>, generation: u64) -> Self {
        Self {
            controller,
            generation,
        }
    }
}

impl<S: PredictionService, V: ScanView> Drop for IdleGuard<'_, S, V> {
    fn drop(&mut self) {
        // The latest submission owns the control
        if self.controller.generation.get() != self.generation {
            return;
        }

        if let Ok(mut state) = self.controller.state.try_borrow_mut() {
            if state.is_loading() {
                *state = UiState::Idle;
            }
        }

        match self.controller.view.try_borrow_mut() {
            Ok(mut view) => {
                view.set_submit_label(IDLE_LABEL);
                view.set_spinner_visible(false);
                view.set_submit_enabled(true);
            }
            Err(_) => warn!(
                "Could not restore the submit control for submission {}: view is busy",
                self.generation
            ),
        }
    }
}

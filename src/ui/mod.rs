//! Page abstraction driven by the scan controller.
//!
//! The controller never touches concrete widgets. It talks to a [`ScanView`],
//! which exposes one operation per element role on the page: navigation items,
//! content sections, the submit control and the result panel.
//!
//! Two views are provided:
//! - [`Page`]: an in-memory element model, used directly by tests
//! - [`TerminalView`]: a `Page` that also renders transitions to a terminal

mod page;
mod state;
mod terminal;

use crate::models::Verdict;

pub use page::{NavItem, Page, ResultPanel, Section, SubmitControl};
pub use state::UiState;
pub use terminal::TerminalView;

/// Element-role operations the scan controller needs from a page.
pub trait ScanView {
    /// Returns `true` if a content section exists for `tab_id`.
    fn has_section(&self, tab_id: &str) -> bool;
    /// Removes the active marker from every navigation item and content section.
    fn deactivate_tabs(&mut self);
    /// Highlights the navigation item targeting `tab_id`.
    /// Returns `false` when no such item exists.
    fn activate_nav_item(&mut self, tab_id: &str) -> bool;
    /// Shows the content section for `tab_id`.
    fn activate_section(&mut self, tab_id: &str);

    fn set_submit_label(&mut self, label: &str);
    fn set_spinner_visible(&mut self, visible: bool);
    fn set_submit_enabled(&mut self, enabled: bool);

    fn set_result_visible(&mut self, visible: bool);
    /// Removes both status classes from the result card.
    fn clear_status(&mut self);
    fn apply_status(&mut self, verdict: Verdict);
    fn set_icon(&mut self, icon: &str);
    fn set_status_text(&mut self, text: &str);
    fn set_scanned_url(&mut self, url: &str);
    fn set_confidence_text(&mut self, text: &str);
    /// Sets the confidence meter fill, in percent.
    fn set_meter_width(&mut self, percent: f64);
    fn set_description(&mut self, text: &str);

    /// Blocking user-facing message.
    fn alert(&mut self, message: &str);
}

//! Terminal rendering of the scanner page.

use std::io::Write;

use colored::*;

use crate::config::{HOW_IT_WORKS_TAB, SCANNER_TAB};
use crate::models::Verdict;
use crate::ui::{Page, ScanView};

/// Number of cells in the rendered confidence meter
const METER_CELLS: usize = 30;

const SCANNER_SECTION_TEXT: &str =
    "Enter a URL to analyze. The prediction service will classify it as safe or malicious.";

const HOW_IT_WORKS_SECTION_TEXT: &str = "Each URL is split into characters, encoded as a \
    sequence of up to 200 tokens and scored by a neural network trained on benign and \
    defaced URLs. Scores above 0.5 are reported as threats; the confidence shown is the \
    model's certainty in the displayed verdict.";

/// A [`Page`] that prints every user-visible transition to a writer.
///
/// Element state lives in the inner page, so the terminal view answers the
/// same queries as the in-memory model.
pub struct TerminalView<W: Write> {
    page: Page,
    out: W,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self::with_page(Page::standard(), out)
    }

    pub fn with_page(page: Page, out: W) -> Self {
        Self { page, out }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: impl std::fmt::Display) {
        if let Err(e) = writeln!(self.out, "{line}") {
            log::debug!("Failed to write to terminal: {e}");
        }
    }

    fn status_colored(&self, text: &str) -> ColoredString {
        match self.page.result.status {
            Some(Verdict::Danger) => text.red().bold(),
            Some(Verdict::Safe) => text.green().bold(),
            None => text.normal(),
        }
    }

    fn render_result_card(&mut self) {
        let result = self.page.result.clone();
        let heading = format!("{} {}", result.icon, result.status_text);
        let heading = self.status_colored(&heading);
        self.emit("");
        self.emit(heading);
        self.emit(format!("   URL:        {}", result.scanned_url.cyan()));
        self.emit(format!("   Confidence: {}", result.confidence_text));
        self.emit(format!("   {}", result.description));
    }

    fn render_meter(&mut self, percent: f64) {
        let filled = ((percent.clamp(0.0, 100.0) / 100.0) * METER_CELLS as f64).round() as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(filled),
            "░".repeat(METER_CELLS - filled)
        );
        let bar = self.status_colored(&bar);
        let text = self.page.result.confidence_text.clone();
        self.emit(format!("   [{bar}] {text}"));
    }
}

impl<W: Write> ScanView for TerminalView<W> {
    fn has_section(&self, tab_id: &str) -> bool {
        self.page.has_section(tab_id)
    }

    fn deactivate_tabs(&mut self) {
        self.page.deactivate_tabs();
    }

    fn activate_nav_item(&mut self, tab_id: &str) -> bool {
        self.page.activate_nav_item(tab_id)
    }

    fn activate_section(&mut self, tab_id: &str) {
        self.page.activate_section(tab_id);
        let body = match tab_id {
            SCANNER_TAB => SCANNER_SECTION_TEXT,
            HOW_IT_WORKS_TAB => HOW_IT_WORKS_SECTION_TEXT,
            _ => "",
        };
        self.emit(format!("── {} ──", tab_id.bold()));
        if !body.is_empty() {
            self.emit(body);
        }
    }

    fn set_submit_label(&mut self, label: &str) {
        self.page.set_submit_label(label);
    }

    fn set_spinner_visible(&mut self, visible: bool) {
        self.page.set_spinner_visible(visible);
        if visible {
            let label = self.page.submit.label.clone();
            self.emit(format!("⏳ {}", label.dimmed()));
        }
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.page.set_submit_enabled(enabled);
    }

    fn set_result_visible(&mut self, visible: bool) {
        let was_visible = self.page.result.visible;
        self.page.set_result_visible(visible);
        if visible && !was_visible {
            self.render_result_card();
        }
    }

    fn clear_status(&mut self) {
        self.page.clear_status();
    }

    fn apply_status(&mut self, verdict: Verdict) {
        self.page.apply_status(verdict);
    }

    fn set_icon(&mut self, icon: &str) {
        self.page.set_icon(icon);
    }

    fn set_status_text(&mut self, text: &str) {
        self.page.set_status_text(text);
    }

    fn set_scanned_url(&mut self, url: &str) {
        self.page.set_scanned_url(url);
    }

    fn set_confidence_text(&mut self, text: &str) {
        self.page.set_confidence_text(text);
    }

    fn set_meter_width(&mut self, percent: f64) {
        self.page.set_meter_width(percent);
        // The reset to 0% while loading is not worth a line
        if self.page.result.visible && percent > 0.0 {
            self.render_meter(percent);
        }
    }

    fn set_description(&mut self, text: &str) {
        self.page.set_description(text);
    }

    fn alert(&mut self, message: &str) {
        self.page.alert(message);
        self.emit(format!("❗ {}", message.red().bold()));
    }
}

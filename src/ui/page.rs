//! In-memory page model.

use crate::config::{HOW_IT_WORKS_TAB, IDLE_LABEL, SCANNER_TAB};
use crate::models::Verdict;
use crate::ui::ScanView;

/// Navigation link, addressed like an anchor (`#<tab>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub active: bool,
}

/// Submit button with its text and spinner sub-elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: String,
    pub spinner_visible: bool,
    pub enabled: bool,
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self {
            label: IDLE_LABEL.to_string(),
            spinner_visible: false,
            enabled: true,
        }
    }
}

/// Result card and its sub-elements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultPanel {
    pub visible: bool,
    pub status: Option<Verdict>,
    pub icon: String,
    pub status_text: String,
    pub scanned_url: String,
    pub confidence_text: String,
    /// Meter fill in percent
    pub meter_width: f64,
    pub description: String,
}

/// Element model of the scanner page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub nav_items: Vec<NavItem>,
    pub sections: Vec<Section>,
    pub submit: SubmitControl,
    pub result: ResultPanel,
    /// Every alert shown, oldest first
    pub alerts: Vec<String>,
}

impl Page {
    /// Builds a page with one navigation item and one content section per tab.
    /// The first tab starts active.
    pub fn with_tabs(tabs: &[&str]) -> Self {
        let nav_items = tabs
            .iter()
            .enumerate()
            .map(|(i, tab)| NavItem {
                href: format!("#{tab}"),
                active: i == 0,
            })
            .collect();
        let sections = tabs
            .iter()
            .enumerate()
            .map(|(i, tab)| Section {
                id: tab.to_string(),
                active: i == 0,
            })
            .collect();
        Self {
            nav_items,
            sections,
            ..Default::default()
        }
    }

    /// The scanner page: `scanner` and `how-it-works` tabs.
    pub fn standard() -> Self {
        Self::with_tabs(&[SCANNER_TAB, HOW_IT_WORKS_TAB])
    }

    /// Id of the visible content section, if any.
    pub fn active_section(&self) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.active)
            .map(|s| s.id.as_str())
    }

    /// Target of the highlighted navigation item, without the `#`.
    pub fn active_nav(&self) -> Option<&str> {
        self.nav_items
            .iter()
            .find(|n| n.active)
            .map(|n| n.href.trim_start_matches('#'))
    }
}

impl ScanView for Page {
    fn has_section(&self, tab_id: &str) -> bool {
        self.sections.iter().any(|s| s.id == tab_id)
    }

    fn deactivate_tabs(&mut self) {
        for item in &mut self.nav_items {
            item.active = false;
        }
        for section in &mut self.sections {
            section.active = false;
        }
    }

    fn activate_nav_item(&mut self, tab_id: &str) -> bool {
        let href = format!("#{tab_id}");
        match self.nav_items.iter_mut().find(|n| n.href == href) {
            Some(item) => {
                item.active = true;
                true
            }
            None => false,
        }
    }

    fn activate_section(&mut self, tab_id: &str) {
        if let Some(section) = self.sections.iter_mut().find(|s| s.id == tab_id) {
            section.active = true;
        }
    }

    fn set_submit_label(&mut self, label: &str) {
        self.submit.label = label.to_string();
    }

    fn set_spinner_visible(&mut self, visible: bool) {
        self.submit.spinner_visible = visible;
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit.enabled = enabled;
    }

    fn set_result_visible(&mut self, visible: bool) {
        self.result.visible = visible;
    }

    fn clear_status(&mut self) {
        self.result.status = None;
    }

    fn apply_status(&mut self, verdict: Verdict) {
        self.result.status = Some(verdict);
    }

    fn set_icon(&mut self, icon: &str) {
        self.result.icon = icon.to_string();
    }

    fn set_status_text(&mut self, text: &str) {
        self.result.status_text = text.to_string();
    }

    fn set_scanned_url(&mut self, url: &str) {
        self.result.scanned_url = url.to_string();
    }

    fn set_confidence_text(&mut self, text: &str) {
        self.result.confidence_text = text.to_string();
    }

    fn set_meter_width(&mut self, percent: f64) {
        self.result.meter_width = percent;
    }

    fn set_description(&mut self, text: &str) {
        self.result.description = text.to_string();
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

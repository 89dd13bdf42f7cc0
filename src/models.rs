//! Wire types exchanged with the prediction service and the values derived from them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{MALICIOUS_THRESHOLD, STATUS_DANGER_CLASS, STATUS_SAFE_CLASS};

/// Body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRequest {
    pub url: String,
}

impl ScanRequest {
    /// Builds a request from raw user input.
    ///
    /// Input is trimmed; empty and whitespace-only input yields `None`. No other
    /// validation is applied, the service decides what a URL is.
    pub fn from_input(raw: &str) -> Option<Self> {
        let url = raw.trim();
        if url.is_empty() {
            return None;
        }
        Some(Self {
            url: url.to_string(),
        })
    }
}

/// Successful answer from the prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    pub url: String,
    /// Raw model output in [0, 1]
    pub prediction_score: f64,
    pub is_malicious: bool,
    /// Human readable class name, e.g. "Benign (Safe)"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ScanResult {
    /// Certainty of the displayed classification.
    ///
    /// The score is the probability of the URL being malicious, so a benign
    /// verdict is as confident as the score is low.
    pub fn confidence(&self) -> Confidence {
        if self.is_malicious {
            Confidence(self.prediction_score)
        } else {
            Confidence(1.0 - self.prediction_score)
        }
    }

    pub fn verdict(&self) -> Verdict {
        if self.is_malicious {
            Verdict::Danger
        } else {
            Verdict::Safe
        }
    }

    /// Returns `true` when `is_malicious` agrees with the score and the
    /// service's classification threshold.
    pub fn is_consistent(&self) -> bool {
        self.is_malicious == (self.prediction_score > MALICIOUS_THRESHOLD)
    }
}

/// Probability-like certainty in [0, 1] of a classification.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Confidence(f64);

impl Confidence {
    pub fn value(self) -> f64 {
        self.0
    }

    /// Unrounded confidence as a percentage.
    pub fn percent(self) -> f64 {
        self.0 * 100.0
    }

    /// Percentage with one decimal place, e.g. `"92.0%"`.
    ///
    /// Exact ties round away from zero, so `0.25` shows as `0.3%`.
    pub fn percent_text(self) -> String {
        format!("{}%", self.rounded_digits())
    }

    /// Percentage rounded to the displayed decimal, used for the meter width
    /// so the meter and its label always agree.
    pub fn display_percent(self) -> f64 {
        self.rounded_digits()
            .parse()
            .unwrap_or_else(|_| self.percent())
    }

    fn rounded_digits(self) -> String {
        let percent = self.percent();
        // Only multiples of 0.25 with an odd quarter count sit exactly halfway
        // between two tenths; `{:.1}` would round those to even.
        let quarters = percent * 4.0;
        if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
            format!("{:.1}", (percent * 10.0).round() / 10.0)
        } else {
            format!("{:.1}", percent)
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.percent_text())
    }
}

/// Outcome styling of the result card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Safe,
    Danger,
}

impl Verdict {
    /// Status class applied to the result card.
    pub fn status_class(self) -> &'static str {
        match self {
            Verdict::Safe => STATUS_SAFE_CLASS,
            Verdict::Danger => STATUS_DANGER_CLASS,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Verdict::Safe => "✅",
            Verdict::Danger => "⚠️",
        }
    }

    pub fn status_text(self) -> &'static str {
        match self {
            Verdict::Safe => "Safe to Browse",
            Verdict::Danger => "Threat Detected",
        }
    }

    /// Result description embedding the formatted confidence.
    pub fn description(self, confidence_text: &str) -> String {
        match self {
            Verdict::Safe => format!(
                "No malicious patterns were found. Our model is {confidence_text} confident \
                 that this URL is benign and safe for browsing."
            ),
            Verdict::Danger => format!(
                "Our model has determined with {confidence_text} confidence that this URL \
                 exhibits patterns consistent with defacement or malicious activity. \
                 Do not visit this site."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn result(score: f64, is_malicious: bool) -> ScanResult {
        ScanResult {
            url: "example.com".to_string(),
            prediction_score: score,
            is_malicious,
            label: None,
        }
    }

    #[test]
    fn test_from_input_trims() {
        let request = ScanRequest::from_input("  example.com \n").expect("non-empty input");
        assert_eq!(request.url, "example.com");
    }

    #[test]
    fn test_from_input_rejects_blank() {
        assert_eq!(ScanRequest::from_input(""), None);
        assert_eq!(ScanRequest::from_input("   "), None);
        assert_eq!(ScanRequest::from_input("\t\n"), None);
    }

    #[test]
    fn test_request_body_shape() {
        let request = ScanRequest::from_input("example.com").unwrap();
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, serde_json::json!({ "url": "example.com" }));
    }

    #[test]
    fn test_result_deserializes_with_and_without_label() {
        let without: ScanResult = serde_json::from_str(
            r#"{"url":"example.com","prediction_score":0.92,"is_malicious":true}"#,
        )
        .unwrap();
        assert_eq!(without.label, None);

        let with: ScanResult = serde_json::from_str(
            r#"{"url":"example.com","prediction_score":0.92,"label":"Defacement (Malicious)","is_malicious":true}"#,
        )
        .unwrap();
        assert_eq!(with.label.as_deref(), Some("Defacement (Malicious)"));
    }

    #[test]
    fn test_result_rejects_missing_fields() {
        let parsed: Result<ScanResult, _> =
            serde_json::from_str(r#"{"url":"example.com","is_malicious":true}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_malicious_confidence() {
        let r = result(0.92, true);
        assert_eq!(r.confidence().percent_text(), "92.0%");
        assert_eq!(r.verdict(), Verdict::Danger);
    }

    #[test]
    fn test_benign_confidence() {
        let r = result(0.08, false);
        assert_eq!(r.confidence().percent_text(), "92.0%");
        assert_eq!(r.verdict(), Verdict::Safe);
    }

    #[test]
    fn test_confidence_bounds() {
        assert_eq!(result(0.0, false).confidence().percent_text(), "100.0%");
        assert_eq!(result(1.0, true).confidence().percent_text(), "100.0%");
        assert_eq!(result(0.5, false).confidence().percent_text(), "50.0%");
    }

    #[test]
    fn test_confidence_text_rounds_ties_up() {
        assert_eq!(result(0.0025, true).confidence().percent_text(), "0.3%");
        assert_eq!(result(0.0075, false).confidence().percent_text(), "99.3%");
        assert_eq!(result(0.0125, true).confidence().percent_text(), "1.3%");
        assert_eq!(result(0.9975, true).confidence().percent_text(), "99.8%");
    }

    #[test]
    fn test_confidence_text_near_ties() {
        // Neither value is exactly halfway once scaled, so ordinary rounding applies
        assert_eq!(result(0.00349, true).confidence().percent_text(), "0.3%");
        assert_eq!(result(0.1234, true).confidence().percent_text(), "12.3%");
        assert_eq!(result(0.125, true).confidence().percent_text(), "12.5%");
    }

    #[test]
    fn test_display_percent_follows_text() {
        assert_eq!(result(0.0025, true).confidence().display_percent(), 0.3);
        assert_eq!(result(0.0075, false).confidence().display_percent(), 99.3);
        assert_eq!(result(0.92, true).confidence().display_percent(), 92.0);
    }

    #[test]
    fn test_consistency_with_threshold() {
        assert!(result(0.92, true).is_consistent());
        assert!(result(0.08, false).is_consistent());
        assert!(result(0.5, false).is_consistent());
        assert!(!result(0.3, true).is_consistent());
    }

    #[test]
    fn test_verdict_presentation() {
        assert_eq!(Verdict::Safe.status_class(), "status-safe");
        assert_eq!(Verdict::Danger.status_class(), "status-danger");
        assert_eq!(Verdict::Danger.status_text(), "Threat Detected");
        assert!(Verdict::Danger.description("92.0%").contains("92.0% confidence"));
        assert!(Verdict::Safe.description("92.0%").contains("92.0% confident"));
    }

    proptest! {
        #[test]
        fn test_confidence_in_unit_interval(score in 0.0f64..=1.0, is_malicious in any::<bool>()) {
            let confidence = result(score, is_malicious).confidence().value();
            prop_assert!((0.0..=1.0).contains(&confidence));
        }

        #[test]
        fn test_display_percent_matches_text(score in 0.0f64..=1.0, is_malicious in any::<bool>()) {
            let confidence = result(score, is_malicious).confidence();
            let text = confidence.percent_text();
            prop_assert_eq!(format!("{:.1}%", confidence.display_percent()), text);
            prop_assert!((confidence.display_percent() - confidence.percent()).abs() <= 0.05 + 1e-9);
        }

        #[test]
        fn test_confidence_text_has_one_decimal(score in 0.0f64..=1.0, is_malicious in any::<bool>()) {
            let text = result(score, is_malicious).confidence().percent_text();
            prop_assert!(text.ends_with('%'));
            let number = text.trim_end_matches('%');
            let (_, decimals) = number.split_once('.').expect("one decimal place");
            prop_assert_eq!(decimals.len(), 1);
        }
    }
}

//! Presentation state of the scanner.

use crate::models::{Confidence, ScanResult};

/// What the result area currently reflects.
///
/// Recreated on every submission; nothing survives from one scan to the next.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Resolved {
        result: ScanResult,
        confidence: Confidence,
    },
}

impl UiState {
    /// Resolved state for `result`, with the confidence derived from its verdict.
    pub fn resolved(result: ScanResult) -> Self {
        let confidence = result.confidence();
        UiState::Resolved { result, confidence }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }
}

//! Run statistics.

use log::info;

use crate::controller::SubmitOutcome;

/// Counts of submission outcomes over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanTally {
    pub safe: usize,
    pub threats: usize,
    pub failed: usize,
    pub superseded: usize,
    pub ignored: usize,
}

impl ScanTally {
    pub fn record(&mut self, outcome: &SubmitOutcome) {
        match outcome {
            SubmitOutcome::Resolved(result) if result.is_malicious => self.threats += 1,
            SubmitOutcome::Resolved(_) => self.safe += 1,
            SubmitOutcome::Failed(_) => self.failed += 1,
            SubmitOutcome::Superseded => self.superseded += 1,
            SubmitOutcome::Ignored => self.ignored += 1,
        }
    }

    /// Submissions that reached the prediction service.
    pub fn scanned(&self) -> usize {
        self.safe + self.threats + self.failed + self.superseded
    }

    /// Logs a one-line summary of the run.
    pub fn log_summary(&self) {
        info!(
            "Scanned {} URL{}: {} safe, {} threat{}, {} failed, {} superseded",
            self.scanned(),
            if self.scanned() == 1 { "" } else { "s" },
            self.safe,
            self.threats,
            if self.threats == 1 { "" } else { "s" },
            self.failed,
            self.superseded
        );
    }
}

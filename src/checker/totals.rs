// src/checker/totals.rs
// Accumulates the run counters. Only the scheduler holds an Aggregator.

use super::types::{Outcome, ProbeResult, RunTotals};

#[derive(Debug, Default)]
pub struct Aggregator {
    totals: RunTotals,
    skipped: usize,
}

impl Aggregator {
    pub fn observe(&mut self, result: &ProbeResult) {
        match result.outcome {
            Outcome::Success => self.totals.processed += 1,
            Outcome::Failure => {
                self.totals.processed += 1;
                self.totals.failed += 1;
            }
            // Not part of RunTotals, tracked on the side for reporting
            Outcome::Skipped => self.skipped += 1,
        }
    }

    pub fn snapshot(&self) -> RunTotals {
        self.totals
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::types::LinkEntry;

    fn probed(outcome: Outcome) -> ProbeResult {
        ProbeResult {
            url: "http://a.test".to_string(),
            label: String::new(),
            http_status: Some(200),
            elapsed_secs: 0.1,
            outcome,
        }
    }

    #[test]
    fn test_counts() {
        let mut aggregator = Aggregator::default();
        aggregator.observe(&probed(Outcome::Success));
        aggregator.observe(&probed(Outcome::Failure));
        aggregator.observe(&probed(Outcome::Failure));
        aggregator.observe(&ProbeResult::skipped(LinkEntry::new("place:1", "")));

        assert_eq!(
            aggregator.snapshot(),
            RunTotals {
                processed: 3,
                failed: 2
            }
        );
        assert_eq!(aggregator.skipped(), 1);
    }

    #[test]
    fn test_starts_at_zero() {
        let aggregator = Aggregator::default();
        assert_eq!(aggregator.snapshot(), RunTotals::default());
        assert_eq!(aggregator.skipped(), 0);
    }
}

// src/checker/types.rs
// =============================================================================
// Data model shared by every stage of a run.
//
// - LinkEntry: one (url, label) pair from the bookmarks file
// - Outcome / ProbeResult: what happened when we looked at one entry
// - RunTotals: the two counters reported back to the caller
// =============================================================================

use serde::Serialize;

/// A single bookmark: where it points and what it is called.
///
/// Entries are identified by their position in the input, so the same URL
/// may legitimately appear several times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub url: String,
    pub label: String,
}

impl LinkEntry {
    pub fn new(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            label: label.into(),
        }
    }
}

/// How an entry was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The server answered with a status from the success set
    Success,
    /// Bad status code, or no status at all (DNS, connect, TLS, timeout)
    Failure,
    /// Non-network scheme, never probed
    Skipped,
}

/// Result of looking at one LinkEntry
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    pub url: String,
    pub label: String,
    /// None when the request failed before a status line arrived
    pub http_status: Option<u16>,
    pub elapsed_secs: f64,
    pub outcome: Outcome,
}

impl ProbeResult {
    /// Result for an entry that was filtered out before dispatch
    pub fn skipped(entry: LinkEntry) -> Self {
        Self {
            url: entry.url,
            label: entry.label,
            http_status: None,
            elapsed_secs: 0.0,
            outcome: Outcome::Skipped,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.outcome == Outcome::Failure
    }
}

/// Counters for a whole run.
///
/// `processed` counts every probed entry (success or failure), skipped
/// entries are in neither counter. `failed <= processed` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunTotals {
    pub processed: usize,
    pub failed: usize,
}

impl RunTotals {
    /// Links that were probed and came back alive
    pub fn verified(&self) -> usize {
        self.processed - self.failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skipped_result_carries_entry() {
        let result = ProbeResult::skipped(LinkEntry::new("place:123", "Recent"));
        assert_eq!(result.url, "place:123");
        assert_eq!(result.label, "Recent");
        assert_eq!(result.http_status, None);
        assert_eq!(result.outcome, Outcome::Skipped);
        assert!(!result.is_failure());
    }

    #[test]
    fn test_verified_count() {
        let totals = RunTotals {
            processed: 10,
            failed: 3,
        };
        assert_eq!(totals.verified(), 7);
    }
}

#![cfg(test)]
// src/checker/testing.rs
// Scripted prober for exercising the runner and scheduler without a network.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::http::{ProbeReply, Prober};

/// Answers with a fixed status per URL (200 for anything not scripted)
/// and records how it was called.
#[derive(Debug, Default)]
pub(crate) struct ScriptedProber {
    replies: HashMap<String, Option<u16>>,
    delay: Duration,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl ScriptedProber {
    pub(crate) fn with(mut self, url: &str, status: Option<u16>) -> Self {
        self.replies.insert(url.to_string(), status);
        self
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

impl Prober for ScriptedProber {
    async fn probe(&self, url: &str) -> ProbeReply {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        ProbeReply {
            http_status: self.replies.get(url).copied().unwrap_or(Some(200)),
            elapsed: self.delay,
        }
    }
}

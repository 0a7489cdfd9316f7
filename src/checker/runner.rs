// src/checker/runner.rs
// =============================================================================
// Runs every probe of one batch concurrently.
//
// How it works:
// 1. Entries with a skipped scheme (file:, place:) become Skipped results
//    right away, without touching the network
// 2. All remaining entries are turned into futures and polled together on
//    the current task (one event loop, many sockets)
// 3. We wait until the slowest probe finishes, then hand back every result
//
// There is no limiter inside a batch: the batch size IS the concurrency.
// Results come back in completion order; the label travels with each one.
// =============================================================================

use futures::stream::{self, StreamExt}; // StreamExt gives us .buffer_unordered()
use log::debug;

use super::http::Prober;
use super::status::classify;
use super::types::{LinkEntry, ProbeResult};
use crate::config::CheckerConfig;

/// Probes one batch and returns exactly one result per entry
pub async fn run_batch<P: Prober>(
    prober: &P,
    batch: Vec<LinkEntry>,
    config: &CheckerConfig,
) -> Vec<ProbeResult> {
    let (skipped, to_probe): (Vec<_>, Vec<_>) =
        batch.into_iter().partition(|entry| config.is_skipped(&entry.url));

    let mut results: Vec<ProbeResult> = skipped.into_iter().map(ProbeResult::skipped).collect();

    if to_probe.is_empty() {
        return results;
    }

    // Every probe of the batch is in flight at the same time
    let width = to_probe.len();
    let probes = to_probe.into_iter().map(|entry| probe_entry(prober, entry));

    let probed: Vec<ProbeResult> = stream::iter(probes)
        .buffer_unordered(width)
        .collect()
        .await;

    results.extend(probed);
    results
}

// Probes a single entry and classifies the reply
async fn probe_entry<P: Prober>(prober: &P, entry: LinkEntry) -> ProbeResult {
    let reply = prober.probe(&entry.url).await;
    let outcome = classify(reply.http_status);

    debug!(
        "{} | {:?} | {:.3}s | {:?}",
        entry.url,
        reply.http_status,
        reply.elapsed.as_secs_f64(),
        outcome
    );

    ProbeResult {
        url: entry.url,
        label: entry.label,
        http_status: reply.http_status,
        elapsed_secs: reply.elapsed.as_secs_f64(),
        outcome,
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why buffer_unordered(width) with width = batch length?
//    - It polls up to `width` futures at once on the current task
//    - With width equal to the batch length, the whole batch is in flight
//    - No threads are spawned: one task multiplexes all the sockets
//
// 2. Why is there no Result here?
//    - A dead link is an answer, not an error
//    - Prober implementations report failures as `http_status: None`
//    - So one unreachable bookmark can never abort the batch
//
// 3. Why partition() first?
//    - Skipped entries must not use a slot or touch the network
//    - partition() splits one Vec into two in a single pass
// -----------------------------------------------------------------------------

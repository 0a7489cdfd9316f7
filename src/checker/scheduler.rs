// src/checker/scheduler.rs
// =============================================================================
// Drives a whole run, one batch at a time.
//
//   Idle -> Splitting -> (ProbingBatch -> Pacing)* -> Done
//
// For each batch:
// 1. Probe every entry concurrently (runner.rs)
// 2. For every result: append to the audit log, then update the counters
// 3. Sleep for the pacing delay, unless this was the last batch
//
// Batch i+1 never starts before batch i is fully logged and counted, so the
// audit log grows in a stable, replayable order. The only error that stops
// a run is a failure to write the audit log.
// =============================================================================

use std::time::Duration;

use tokio::time::Instant;

use log::{info, warn};
use serde::Serialize;

use super::audit::ResultLogger;
use super::batch::split;
use super::http::{HttpProber, Prober};
use super::runner::run_batch;
use super::totals::Aggregator;
use super::types::{LinkEntry, ProbeResult, RunTotals};
use crate::config::CheckerConfig;
use crate::error::Result;

/// What the scheduler hands back once it reaches Done
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub totals: RunTotals,
    /// Entries excluded by scheme, outside of `totals`
    pub skipped: usize,
    pub batches: usize,
    /// Number of pacing delays actually taken
    pub pauses: usize,
    #[serde(rename = "elapsed_secs", serialize_with = "as_secs")]
    pub elapsed: Duration,
}

/// Result of asking the core to check a list of links
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The input was empty, nothing was probed or logged
    NothingToCheck,
    Completed(RunReport),
}

/// Checks `links` over HTTP using `config`
pub async fn run_checks(links: Vec<LinkEntry>, config: &CheckerConfig) -> Result<RunOutcome> {
    if links.is_empty() {
        return Ok(RunOutcome::NothingToCheck);
    }

    let prober = HttpProber::new(config)?;
    run_with(&prober, links, config).await
}

/// Same as `run_checks`, with the prober supplied by the caller
pub async fn run_with<P: Prober>(
    prober: &P,
    links: Vec<LinkEntry>,
    config: &CheckerConfig,
) -> Result<RunOutcome> {
    if links.is_empty() {
        return Ok(RunOutcome::NothingToCheck);
    }

    let started = Instant::now();
    let mut logger = ResultLogger::start(&config.log_path)?;
    info!("appending results to {}", logger.path().display());

    let batches = split(links, config.batch_size);
    let batch_count = batches.len();
    let mut aggregator = Aggregator::default();
    let mut pauses = 0;

    for (index, batch) in batches.into_iter().enumerate() {
        info!("batch {}/{}: {} link(s)", index + 1, batch_count, batch.len());

        let results = run_batch(prober, batch, config).await;
        for result in &results {
            logger.record(result)?;
            aggregator.observe(result);
            if result.is_failure() {
                report_broken(result);
            }
        }

        if index + 1 < batch_count {
            tokio::time::sleep(config.pacing_delay).await;
            pauses += 1;
        }
    }

    let report = RunReport {
        totals: aggregator.snapshot(),
        skipped: aggregator.skipped(),
        batches: batch_count,
        pauses,
        elapsed: started.elapsed(),
    };
    info!(
        "done: {} processed, {} failed, {} skipped in {:.3}s",
        report.totals.processed,
        report.totals.failed,
        report.skipped,
        report.elapsed.as_secs_f64()
    );

    Ok(RunOutcome::Completed(report))
}

fn report_broken(result: &ProbeResult) {
    warn!(
        "broken | {} | {} | {:.3}",
        result.url,
        result
            .http_status
            .map_or_else(|| "-".to_string(), |code| code.to_string()),
        result.elapsed_secs
    );
}

fn as_secs<S: serde::Serializer>(
    elapsed: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

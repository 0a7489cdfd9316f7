// src/checker/mod.rs
// =============================================================================
// This module contains the batch-probing core.
//
// Submodules:
// - types: LinkEntry, ProbeResult, RunTotals
// - status: which HTTP status codes mean "alive"
// - http: the Prober trait and the reqwest-backed HttpProber
// - batch: splits the link list into fixed-size batches
// - runner: probes one batch concurrently
// - audit: the append-only audit log
// - totals: the processed / failed counters
// - scheduler: drives batches one after another
//
// The core never prints to the console. Callers get a RunOutcome back and
// decide how to present it.
// =============================================================================

mod audit;
mod batch;
mod http;
mod runner;
mod scheduler;
mod status;
mod testing;
mod totals;
mod types;

pub use scheduler::{run_checks, RunOutcome, RunReport};
pub use types::LinkEntry;

// src/error.rs
// =============================================================================
// Error types for the checking core.
//
// Only two things can stop a run:
// - the HTTP client cannot be built at all
// - the audit log cannot be opened or written
//
// A dead link is NOT an error here. Network failures for a single URL are
// turned into a ProbeResult with no status and counted as failures.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for the checking core.
pub type Result<T> = std::result::Result<T, CheckError>;

/// Fatal errors that abort a whole run.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The reqwest client could not be constructed from the configuration
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The audit log file could not be opened for appending
    #[error("could not open logfile {}: {source}", path.display())]
    LogOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line could not be appended to the audit log
    #[error("could not write to logfile {}: {source}", path.display())]
    LogWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

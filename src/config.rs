// src/config.rs
// =============================================================================
// Configuration for one checking run.
//
// CheckerConfig is built once (from defaults or from the CLI) and then only
// borrowed by the components that need it. Nothing mutates it mid-run.
// =============================================================================

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

/// Number of links probed concurrently in one batch
pub const DEFAULT_BATCH_SIZE: NonZeroUsize = match NonZeroUsize::new(200) {
    Some(size) => size,
    None => unreachable!(),
};

/// Where the audit log is appended when no path is given
pub const DEFAULT_LOG_FILE: &str = "bookmarks_checker.log";

/// Browser-like identification, some servers refuse unknown clients
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:64.0) Gecko/20100101 Firefox/64.0";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_PACING_DELAY: Duration = Duration::from_millis(1);

/// URL prefixes that are never sent over the network
/// (local files and Firefox's internal `place:` queries)
pub const DEFAULT_SKIP_PREFIXES: [&str; 2] = ["file:", "place:"];

/// Everything the checking core needs to know about a run.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Maximum number of links per batch, also the peak concurrency
    pub batch_size: NonZeroUsize,
    /// Append-only audit log destination
    pub log_path: PathBuf,
    /// Total time allowed for one probe
    pub request_timeout: Duration,
    /// Time allowed to establish the TCP/TLS connection
    pub connect_timeout: Duration,
    /// Value of the User-Agent header
    pub user_agent: String,
    /// Pause between two consecutive batches
    pub pacing_delay: Duration,
    /// Links starting with any of these are skipped
    pub skip_prefixes: Vec<String>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            pacing_delay: DEFAULT_PACING_DELAY,
            skip_prefixes: DEFAULT_SKIP_PREFIXES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl CheckerConfig {
    /// Returns true if the URL uses a scheme we never probe
    ///
    /// Prefix comparison ignores ASCII case, so `FILE:///x` is skipped too.
    pub fn is_skipped(&self, url: &str) -> bool {
        self.skip_prefixes.iter().any(|prefix| {
            url.get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        })
    }
}

// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Every setting of the checking core is exposed as a flag. Each flag can
// also come from an environment variable (BOOKMARKS_CHECKER_*), which is
// handy in cron jobs where editing the command line is awkward.
// =============================================================================

use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{
    CheckerConfig, DEFAULT_BATCH_SIZE, DEFAULT_LOG_FILE, DEFAULT_SKIP_PREFIXES, DEFAULT_USER_AGENT,
};

// #[derive(Parser)] tells clap to generate the parsing code for us
#[derive(Parser, Debug)]
#[command(
    name = "bookmarks-checker",
    version,
    about = "Verify every link in a Chrome or Firefox bookmarks export",
    long_about = "bookmarks-checker extracts all links from an exported bookmarks HTML file, \
                  probes them in concurrent batches and appends the outcome of every probe \
                  to a logfile."
)]
pub struct Cli {
    /// Bookmarks file exported from the browser
    #[arg(default_value = "bookmarks.html")]
    pub file: PathBuf,

    /// Number of links probed concurrently per batch
    #[arg(long, env = "BOOKMARKS_CHECKER_BATCH_SIZE", default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: NonZeroUsize,

    /// File the probe results are appended to
    #[arg(long, env = "BOOKMARKS_CHECKER_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Request timeout in seconds
    #[arg(long, env = "BOOKMARKS_CHECKER_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,

    /// Connection timeout in seconds
    #[arg(long, env = "BOOKMARKS_CHECKER_CONNECT_TIMEOUT", default_value_t = 5)]
    pub connect_timeout: u64,

    /// User-Agent header sent with every probe
    #[arg(long, env = "BOOKMARKS_CHECKER_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Pause between batches, in milliseconds
    #[arg(long, env = "BOOKMARKS_CHECKER_PACING_MS", default_value_t = 1)]
    pub pacing_ms: u64,

    /// URL prefix to skip without probing (repeatable)
    #[arg(long = "skip-prefix", value_name = "PREFIX", default_values = DEFAULT_SKIP_PREFIXES)]
    pub skip_prefixes: Vec<String>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,

    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Builds the core's configuration from the parsed flags
    pub fn checker_config(&self) -> CheckerConfig {
        CheckerConfig {
            batch_size: self.batch_size,
            log_path: self.log_file.clone(),
            request_timeout: Duration::from_secs(self.timeout),
            connect_timeout: Duration::from_secs(self.connect_timeout),
            user_agent: self.user_agent.clone(),
            pacing_delay: Duration::from_millis(self.pacing_ms),
            skip_prefixes: self.skip_prefixes.clone(),
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why NonZeroUsize for the batch size?
//    - A batch size of 0 makes no sense and would never finish
//    - clap parses NonZeroUsize through FromStr, so "0" is rejected at parse
//      time and the rest of the program never has to check it
//
// 2. What does `env = "..."` do?
//    - If the flag is missing, clap looks at that environment variable
//    - Needs the 'env' feature of clap (see Cargo.toml)
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_config() {
        let cli = Cli::try_parse_from(["bookmarks-checker"]).unwrap();
        let config = cli.checker_config();
        let defaults = CheckerConfig::default();

        assert_eq!(cli.file, PathBuf::from("bookmarks.html"));
        assert_eq!(config.batch_size, defaults.batch_size);
        assert_eq!(config.log_path, defaults.log_path);
        assert_eq!(config.request_timeout, defaults.request_timeout);
        assert_eq!(config.connect_timeout, defaults.connect_timeout);
        assert_eq!(config.user_agent, defaults.user_agent);
        assert_eq!(config.pacing_delay, defaults.pacing_delay);
        assert_eq!(config.skip_prefixes, defaults.skip_prefixes);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "bookmarks-checker",
            "export.html",
            "--batch-size",
            "50",
            "--log-file",
            "out.log",
            "--pacing-ms",
            "250",
            "--skip-prefix",
            "javascript:",
            "-vv",
        ])
        .unwrap();
        let config = cli.checker_config();

        assert_eq!(cli.file, PathBuf::from("export.html"));
        assert_eq!(config.batch_size.get(), 50);
        assert_eq!(config.log_path, PathBuf::from("out.log"));
        assert_eq!(config.pacing_delay, Duration::from_millis(250));
        assert_eq!(config.skip_prefixes, vec!["javascript:".to_string()]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        assert!(Cli::try_parse_from(["bookmarks-checker", "--batch-size", "0"]).is_err());
    }
}

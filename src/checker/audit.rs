// src/checker/audit.rs
// =============================================================================
// The append-only audit log: the durable record of what was checked.
//
// Format (one line per probed link):
//   <timestamp> | start                              (once, at run start)
//   url | status | elapsed                           (alive)
//   url | status | elapsed | label | ****            (failed)
//
// A missing status is written as 0. Skipped links are not written.
//
// The file is only ever touched from the scheduler's single flow of
// control, so there is no locking. Any I/O error is returned to the caller
// and ends the run: a report without its audit trail can't be trusted.
// =============================================================================

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use super::types::{Outcome, ProbeResult};
use crate::error::{CheckError, Result};

/// Written in place of a status code when no response was received
pub const MISSING_STATUS: u16 = 0;

/// Appended to the line of every failed link
pub const FAILURE_MARKER: &str = "****";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %:z %Z";

/// Open handle on the audit log
#[derive(Debug)]
pub struct ResultLogger {
    path: PathBuf,
    file: File,
}

impl ResultLogger {
    /// Opens (or creates) the log for appending and writes the start line
    pub fn start(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| CheckError::LogOpen {
                path: path.to_path_buf(),
                source,
            })?;

        let mut logger = Self {
            path: path.to_path_buf(),
            file,
        };
        let line = format!("{} | start", Local::now().format(TIMESTAMP_FORMAT));
        logger.write_line(&line)?;

        Ok(logger)
    }

    /// Appends the line for one result. Skipped results write nothing.
    pub fn record(&mut self, result: &ProbeResult) -> Result<()> {
        match format_line(result) {
            Some(line) => self.write_line(&line),
            None => Ok(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        self.file
            .write_all(buf.as_bytes())
            .map_err(|source| CheckError::LogWrite {
                path: self.path.clone(),
                source,
            })
    }
}

/// Renders the audit line for a result, None for skipped entries
pub fn format_line(result: &ProbeResult) -> Option<String> {
    let status = result.http_status.unwrap_or(MISSING_STATUS);
    let url = single_line(&result.url);

    match result.outcome {
        Outcome::Skipped => None,
        Outcome::Success => Some(format!("{} | {} | {:.6}", url, status, result.elapsed_secs)),
        Outcome::Failure => Some(format!(
            "{} | {} | {:.6} | {} | {}",
            url,
            status,
            result.elapsed_secs,
            single_line(&result.label),
            FAILURE_MARKER
        )),
    }
}

// One result must stay on one line: line breaks and the indentation
// around them collapse to a single space
fn single_line(text: &str) -> String {
    if !text.contains(['\r', '\n']) {
        return text.to_string();
    }
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::types::LinkEntry;

    fn result(url: &str, status: Option<u16>, outcome: Outcome) -> ProbeResult {
        ProbeResult {
            url: url.to_string(),
            label: "Label".to_string(),
            http_status: status,
            elapsed_secs: 0.25,
            outcome,
        }
    }

    #[test]
    fn test_success_line() {
        let line = format_line(&result("http://a.test", Some(200), Outcome::Success));
        assert_eq!(line.as_deref(), Some("http://a.test | 200 | 0.250000"));
    }

    #[test]
    fn test_failure_line_has_label_and_marker() {
        let line = format_line(&result("http://a.test", Some(404), Outcome::Failure));
        assert_eq!(
            line.as_deref(),
            Some("http://a.test | 404 | 0.250000 | Label | ****")
        );
    }

    #[test]
    fn test_missing_status_sentinel() {
        let line = format_line(&result("http://a.test", None, Outcome::Failure)).unwrap();
        assert!(line.starts_with("http://a.test | 0 | "));
    }

    #[test]
    fn test_multi_line_label_stays_on_one_line() {
        let mut failed = result("http://gone.test", Some(404), Outcome::Failure);
        failed.label = "Old\n   page\r\n".to_string();

        let line = format_line(&failed).unwrap();
        assert_eq!(line, "http://gone.test | 404 | 0.250000 | Old page | ****");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.log");
        let mut logger = ResultLogger::start(&path).unwrap();
        logger.record(&failed).unwrap();
        drop(logger);

        let contents = std::fs::read_to_string(&path).unwrap();
        let results: Vec<_> = contents
            .lines()
            .filter(|l| !l.ends_with(" | start"))
            .collect();
        assert_eq!(results, vec!["http://gone.test | 404 | 0.250000 | Old page | ****"]);
    }

    #[test]
    fn test_skipped_has_no_line() {
        let skipped = ProbeResult::skipped(LinkEntry::new("place:1", "P"));
        assert_eq!(format_line(&skipped), None);
    }

    #[test]
    fn test_appends_never_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.log");
        std::fs::write(&path, "earlier run\n").unwrap();

        let mut logger = ResultLogger::start(&path).unwrap();
        logger
            .record(&result("http://a.test", Some(200), Outcome::Success))
            .unwrap();
        logger
            .record(&ProbeResult::skipped(LinkEntry::new("file:///x", "X")))
            .unwrap();
        drop(logger);

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "earlier run");
        assert!(lines[1].ends_with(" | start"));
        // date, time, numeric offset, zone name
        assert_eq!(lines[1].trim_end_matches(" | start").split(' ').count(), 4);
        assert_eq!(lines[2], "http://a.test | 200 | 0.250000");
    }

    #[test]
    fn test_unwritable_destination_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory can't be opened as a log file
        let err = ResultLogger::start(dir.path()).unwrap_err();
        assert!(matches!(err, CheckError::LogOpen { .. }));
    }
}

// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Read the bookmarks file and extract every link
// 3. Hand the links to the checking core
// 4. Print the summary
// 5. Exit with proper code (0 = all alive, 1 = broken links, 2 = error)
// =============================================================================

mod bookmarks;     // src/bookmarks/ - reading the export, extracting links
mod checker;       // src/checker/ - the batch-probing core
mod cli;           // src/cli.rs - command-line parsing
mod config;        // src/config.rs - run configuration
mod error;         // src/error.rs - fatal core errors

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Env};
use log::LevelFilter;
use serde::Serialize;

use checker::{RunOutcome, RunReport};
use cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Sets up env_logger for diagnostics on stderr.
// RUST_LOG wins over -v when it is set.
fn init_logging(verbose: u8) {
    let env = Env::default().filter_or("RUST_LOG", "warn");
    let mut builder = Builder::from_env(env);

    if std::env::var("RUST_LOG").is_err() {
        let level = match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        };
        builder.filter_level(LevelFilter::Warn);
        builder.filter_module("bookmarks_checker", level);
    }

    builder
        .format(|buf, record| writeln!(buf, " [{}] {}", record.level(), record.args()))
        .init();
}

// Returns:
//   Ok(0) = nothing broken (or nothing to check)
//   Ok(1) = at least one link failed
//   Err   = unreadable file, unwritable logfile, ...
async fn run(cli: Cli) -> Result<i32> {
    let html = bookmarks::read_bookmarks(&cli.file)?;
    let links = bookmarks::extract_links(&html);
    let link_count = links.len();
    let config = cli.checker_config();

    if !cli.json && link_count > 0 {
        println!("\n {} links being checked ...\n", link_count);
    }

    let report = match checker::run_checks(links, &config).await? {
        RunOutcome::NothingToCheck => {
            if cli.json {
                let summary = Summary::empty(&cli.file, &config.log_path);
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("\n No links extracted from {}\n", cli.file.display());
            }
            return Ok(0);
        }
        RunOutcome::Completed(report) => report,
    };

    if cli.json {
        let summary = Summary::from_report(&cli.file, &config.log_path, link_count, &report);
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&report, &config.log_path);
    }

    if report.totals.failed > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}

fn print_summary(report: &RunReport, log_path: &Path) {
    println!();
    println!(" {} links failed", report.totals.failed);
    println!(" {} links verified", report.totals.verified());
    if report.skipped > 0 {
        println!(" {} links skipped", report.skipped);
    }
    println!();
    println!(" See generated logfile {}", log_path.display());
    println!(" URL parse time: {:.3} s", report.elapsed.as_secs_f64());
    println!();
}

// Shape of the --json output
#[derive(Debug, Serialize)]
struct Summary<'a> {
    file: &'a Path,
    logfile: &'a Path,
    links: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a RunReport>,
}

impl<'a> Summary<'a> {
    fn empty(file: &'a Path, logfile: &'a Path) -> Self {
        Self {
            file,
            logfile,
            links: 0,
            report: None,
        }
    }

    fn from_report(file: &'a Path, logfile: &'a Path, links: usize, report: &'a RunReport) -> Self {
        Self {
            file,
            logfile,
            links,
            report: Some(report),
        }
    }
}

//! # telejobs
//!
//! A job-posting aggregator for telecom and voice engineering roles. It
//! scrapes the first results page of five job boards, adds one curated
//! LinkedIn search entry, and merges everything into a single table of
//! normalized postings.
//!
//! ## Features
//!
//! - Searches multiple job boards in one run (Indeed, Naukri, FoundIt,
//!   Shine, Reed, plus a curated LinkedIn entry)
//! - Normalizes every posting into five fields: Title, Company, Summary,
//!   Link, Source
//! - Prints a Markdown table; optional CSV and JSON exports
//! - Tolerates unreachable boards and malformed job cards, reporting both
//!   in the logs instead of failing the search
//!
//! ## Usage
//!
//! ```sh
//! telejobs --location London --output jobs.csv
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **URL building**: Each board turns the search query into its results URL
//! 2. **Fetching**: One GET per board, 10-second timeout, first page only
//! 3. **Parsing**: Declarative card schemas extract at most 10 postings per board
//! 4. **Output**: Markdown table on stdout, plus optional CSV/JSON files

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod fetch;
mod models;
mod outputs;
mod schema;
mod scrapers;
mod utils;

use cli::Cli;
use fetch::HttpFetcher;
use models::{JobRecord, SearchQuery};
use outputs::{csv, json, table};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("telejobs starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.keywords, ?args.location, ?args.min_experience, "Parsed CLI arguments");

    let query = SearchQuery {
        keywords: args.keywords.clone(),
        location: args.location.clone(),
        min_experience: args.min_experience,
    };

    let fetcher = HttpFetcher::new()?;

    // ---- Search all boards, sequentially ----
    let results = scrapers::search_all(&fetcher, &query).await;

    for report in &results.reports {
        info!(
            source = %report.source,
            status = ?report.status,
            jobs = report.jobs.len(),
            skipped = report.skipped.len(),
            "Board report"
        );
    }
    info!(
        jobs = results.job_count(),
        skipped = results.skip_count(),
        unreachable = results.unreachable_count(),
        "Search complete"
    );

    let jobs: Vec<JobRecord> = results.jobs().cloned().collect();

    // ---- Terminal output ----
    println!("Found {} jobs.\n", jobs.len());
    print!("{}", table::render_table(&jobs));

    // ---- Optional exports ----
    if let Some(path) = args.output.as_deref() {
        if let Err(e) = csv::write_csv(&jobs, path).await {
            error!(%path, error = %e, "Failed to write CSV export");
        }
    }

    if let Some(path) = args.json.as_deref() {
        if let Err(e) = json::write_json(&jobs, path).await {
            error!(%path, error = %e, "Failed to write JSON export");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}

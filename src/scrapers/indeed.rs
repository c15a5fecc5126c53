//! Indeed job search scraper.
//!
//! Scrapes the first page of [Indeed](https://www.indeed.com) search results,
//! restricted to postings from the last week via `fromage=7`.
//!
//! # URL Pattern
//!
//! Comma-separated keywords are joined with `+` (surrounding spaces are kept
//! as-is) and interpolated together with the raw location:
//! `https://www.indeed.com/jobs?q=<terms>&l=<location>&fromage=7`.
//!
//! Result cards are `a.tapItem` anchors; the posting link is the card's own
//! `href` resolved against the site origin.

use crate::fetch::Fetch;
use crate::models::{JobSource, SearchQuery, SourceReport};
use crate::schema::{CardSchema, CompiledSchema, FieldRule, LinkRule};
use itertools::Itertools;
use once_cell::sync::Lazy;
use tracing::{debug, info, instrument, warn};

static SCHEMA: Lazy<CompiledSchema> = Lazy::new(|| {
    CardSchema {
        source: JobSource::Indeed,
        card: "a.tapItem",
        title: FieldRule::Required("h2"),
        company: FieldRule::Required("span.companyName"),
        summary: FieldRule::Required("div.job-snippet"),
        link: LinkRule::CardHref,
        link_base: Some(JobSource::Indeed.origin()),
    }
    .compile()
});

/// Build the Indeed results URL for a query.
pub fn search_url(query: &SearchQuery) -> String {
    let terms = query.keywords.split(',').join("+");
    format!(
        "https://www.indeed.com/jobs?q={terms}&l={location}&fromage=7",
        location = query.location
    )
}

/// Fetch and parse the first page of Indeed results.
///
/// An unreachable or non-200 page yields an empty unreachable report rather
/// than an error; the remaining boards still run.
#[instrument(level = "info", skip_all)]
pub async fn extract(fetcher: &impl Fetch, query: &SearchQuery) -> SourceReport {
    let url = search_url(query);
    debug!(%url, "Requesting Indeed results");

    let body = match fetcher.fetch(&url).await {
        Some(body) => body,
        None => {
            warn!(%url, "Indeed results page unreachable");
            return SourceReport::unreachable(JobSource::Indeed);
        }
    };

    let report = SCHEMA.parse(&body);
    info!(
        jobs = report.jobs.len(),
        skipped = report.skipped.len(),
        "Parsed Indeed results"
    );
    report
}

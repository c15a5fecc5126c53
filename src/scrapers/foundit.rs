//! FoundIt (formerly Monster India) job search scraper.
//!
//! # URL Pattern
//!
//! `https://www.foundit.in/srp/results?query=<terms>&locations=<location>&experience=10`
//!
//! Terms are hyphen-joined like Naukri's; the location is passed through
//! untouched. The experience filter is pinned at 10 years: the board's
//! query format for other values is undocumented, so the CLI's experience
//! flag does not reach this URL.
//!
//! Cards are `div.srp-jobtuple-wrapper` elements. The board renders
//! summaries lazily, so records carry a fixed placeholder instead.

use crate::fetch::Fetch;
use crate::models::{JobSource, SearchQuery, SourceReport};
use crate::schema::{CardSchema, CompiledSchema, FieldRule, LinkRule};
use crate::scrapers::join_keywords;
use once_cell::sync::Lazy;
use tracing::{debug, info, instrument, warn};

static SCHEMA: Lazy<CompiledSchema> = Lazy::new(|| {
    CardSchema {
        source: JobSource::FoundIt,
        card: "div.srp-jobtuple-wrapper",
        title: FieldRule::Required("h3"),
        company: FieldRule::Optional("span.company-name", "N/A"),
        summary: FieldRule::Fixed("No summary available"),
        link: LinkRule::ChildHref("a[href]"),
        link_base: Some(JobSource::FoundIt.origin()),
    }
    .compile()
});

/// Build the FoundIt results URL for a query.
pub fn search_url(query: &SearchQuery) -> String {
    format!(
        "https://www.foundit.in/srp/results?query={terms}&locations={location}&experience=10",
        terms = join_keywords(&query.keywords, "-"),
        location = query.location
    )
}

/// Fetch and parse the first page of FoundIt results.
#[instrument(level = "info", skip_all)]
pub async fn extract(fetcher: &impl Fetch, query: &SearchQuery) -> SourceReport {
    let url = search_url(query);
    debug!(%url, "Requesting FoundIt results");

    let body = match fetcher.fetch(&url).await {
        Some(body) => body,
        None => {
            warn!(%url, "FoundIt results page unreachable");
            return SourceReport::unreachable(JobSource::FoundIt);
        }
    };

    let report = SCHEMA.parse(&body);
    info!(
        jobs = report.jobs.len(),
        skipped = report.skipped.len(),
        "Parsed FoundIt results"
    );
    report
}

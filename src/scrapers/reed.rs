//! Reed (UK) job search scraper.
//!
//! # URL Pattern
//!
//! `https://www.reed.co.uk/jobs/<terms>-jobs-in-<location>`, with
//! hyphen-joined lowercase terms and the location lowercased with spaces
//! replaced by hyphens (`New York` becomes `new-york`).
//!
//! Cards are `article.job-result` elements; the posting link sits on the
//! anchor inside the first `h3`, the same node the title is read from. An
//! anchor elsewhere in the card is not a posting link.

use crate::fetch::Fetch;
use crate::models::{JobSource, SearchQuery, SourceReport};
use crate::schema::{CardSchema, CompiledSchema, FieldRule, LinkRule};
use crate::scrapers::join_keywords;
use once_cell::sync::Lazy;
use tracing::{debug, info, instrument, warn};

static SCHEMA: Lazy<CompiledSchema> = Lazy::new(|| {
    CardSchema {
        source: JobSource::Reed,
        card: "article.job-result",
        title: FieldRule::Required("h3"),
        company: FieldRule::Optional("a.gtmJobListingPostedBy", "N/A"),
        summary: FieldRule::Fixed("No summary available"),
        link: LinkRule::NestedHref("h3", "a"),
        link_base: Some(JobSource::Reed.origin()),
    }
    .compile()
});

/// Build the Reed results URL for a query.
pub fn search_url(query: &SearchQuery) -> String {
    format!(
        "https://www.reed.co.uk/jobs/{terms}-jobs-in-{location}",
        terms = join_keywords(&query.keywords, "-"),
        location = query.location.to_lowercase().replace(' ', "-")
    )
}

/// Fetch and parse the first page of Reed results.
#[instrument(level = "info", skip_all)]
pub async fn extract(fetcher: &impl Fetch, query: &SearchQuery) -> SourceReport {
    let url = search_url(query);
    debug!(%url, "Requesting Reed results");

    let body = match fetcher.fetch(&url).await {
        Some(body) => body,
        None => {
            warn!(%url, "Reed results page unreachable");
            return SourceReport::unreachable(JobSource::Reed);
        }
    };

    let report = SCHEMA.parse(&body);
    info!(
        jobs = report.jobs.len(),
        skipped = report.skipped.len(),
        "Parsed Reed results"
    );
    report
}

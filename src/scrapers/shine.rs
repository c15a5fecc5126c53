//! Shine job search scraper.
//!
//! Shine's results markup is the thinnest of the boards: cards are bare
//! `li.w-100` list items whose first anchor holds both the title and the
//! posting path. There is no reliable company or summary node, so both are
//! fixed placeholders.
//!
//! Search URLs are path-style,
//! `https://www.shine.com/job-search/<terms>-jobs-in-<location>`, with
//! plus-joined lowercase terms and a lowercased location.

use crate::fetch::Fetch;
use crate::models::{JobSource, SearchQuery, SourceReport};
use crate::schema::{CardSchema, CompiledSchema, FieldRule, LinkRule};
use crate::scrapers::join_keywords;
use once_cell::sync::Lazy;
use tracing::{debug, info, instrument, warn};

static SCHEMA: Lazy<CompiledSchema> = Lazy::new(|| {
    CardSchema {
        source: JobSource::Shine,
        card: "li.w-100",
        title: FieldRule::Required("a"),
        company: FieldRule::Fixed("Shine listing"),
        summary: FieldRule::Fixed("No summary available"),
        link: LinkRule::ChildHref("a"),
        link_base: Some(JobSource::Shine.origin()),
    }
    .compile()
});

/// Build the Shine results URL for a query.
pub fn search_url(query: &SearchQuery) -> String {
    format!(
        "https://www.shine.com/job-search/{terms}-jobs-in-{location}",
        terms = join_keywords(&query.keywords, "+"),
        location = query.location.to_lowercase()
    )
}

/// Fetch and parse the first page of Shine results.
#[instrument(level = "info", skip_all)]
pub async fn extract(fetcher: &impl Fetch, query: &SearchQuery) -> SourceReport {
    let url = search_url(query);
    debug!(%url, "Requesting Shine results");

    let body = match fetcher.fetch(&url).await {
        Some(body) => body,
        None => {
            warn!(%url, "Shine results page unreachable");
            return SourceReport::unreachable(JobSource::Shine);
        }
    };

    let report = SCHEMA.parse(&body);
    info!(
        jobs = report.jobs.len(),
        skipped = report.skipped.len(),
        "Parsed Shine results"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::stub::{Canned, Down};
    use crate::models::SourceStatus;

    fn query() -> SearchQuery {
        SearchQuery {
            keywords: "Ribbon SBC, SIP".to_string(),
            location: "New Delhi".to_string(),
            min_experience: 10,
        }
    }

    #[test]
    fn test_search_url_plus_joins_terms() {
        assert_eq!(
            search_url(&query()),
            "https://www.shine.com/job-search/ribbon+sbc+sip-jobs-in-new delhi"
        );
    }

    #[tokio::test]
    async fn test_extract_title_and_link_from_first_anchor() {
        let fetcher = Canned(
            r#"<li class="w-100">
                 <a href="/jobs/voice-engineer-jd-77">Voice Engineer</a>
                 <a href="/jobs/ignored">second anchor</a>
               </li>"#,
        );

        let report = extract(&fetcher, &query()).await;
        assert_eq!(report.jobs.len(), 1);

        let job = &report.jobs[0];
        assert_eq!(job.title, "Voice Engineer");
        assert_eq!(job.company, "Shine listing");
        assert_eq!(job.summary, "No summary available");
        assert_eq!(job.link, "https://www.shine.com/jobs/voice-engineer-jd-77");
    }

    #[tokio::test]
    async fn test_extract_card_without_anchor_is_skipped() {
        let fetcher = Canned(r#"<li class="w-100"><span>sidebar filter</span></li>"#);

        let report = extract(&fetcher, &query()).await;
        assert!(report.jobs.is_empty());
        assert_eq!(report.skipped.len(), 1);
    }

    #[tokio::test]
    async fn test_extract_unreachable_site_reports_empty() {
        let report = extract(&Down, &query()).await;
        assert_eq!(report.status, SourceStatus::Unreachable);
        assert!(report.jobs.is_empty());
    }
}

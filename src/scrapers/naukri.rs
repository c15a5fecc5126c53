//! Naukri job search scraper.
//!
//! Naukri uses path-style search URLs:
//! `https://www.naukri.com/<terms>-jobs-in-<location>`, where the terms are
//! lowercased, stripped of commas, and hyphen-joined, and the location is
//! lowercased. Cards are `article.jobTuple` elements and carry absolute
//! posting links, so no origin is glued on.

use crate::fetch::Fetch;
use crate::models::{JobSource, SearchQuery, SourceReport};
use crate::schema::{CardSchema, CompiledSchema, FieldRule, LinkRule};
use crate::scrapers::join_keywords;
use once_cell::sync::Lazy;
use tracing::{debug, info, instrument, warn};

static SCHEMA: Lazy<CompiledSchema> = Lazy::new(|| {
    CardSchema {
        source: JobSource::Naukri,
        card: "article.jobTuple",
        title: FieldRule::Required("a.title"),
        company: FieldRule::Required("a.subTitle"),
        summary: FieldRule::Optional("li.job-snippet", "No details"),
        link: LinkRule::ChildHref("a.title"),
        link_base: None,
    }
    .compile()
});

/// Build the Naukri results URL for a query.
pub fn search_url(query: &SearchQuery) -> String {
    format!(
        "https://www.naukri.com/{terms}-jobs-in-{location}",
        terms = join_keywords(&query.keywords, "-"),
        location = query.location.to_lowercase()
    )
}

/// Fetch and parse the first page of Naukri results.
#[instrument(level = "info", skip_all)]
pub async fn extract(fetcher: &impl Fetch, query: &SearchQuery) -> SourceReport {
    let url = search_url(query);
    debug!(%url, "Requesting Naukri results");

    let body = match fetcher.fetch(&url).await {
        Some(body) => body,
        None => {
            warn!(%url, "Naukri results page unreachable");
            return SourceReport::unreachable(JobSource::Naukri);
        }
    };

    let report = SCHEMA.parse(&body);
    info!(
        jobs = report.jobs.len(),
        skipped = report.skipped.len(),
        "Parsed Naukri results"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::stub::{Canned, Down};
    use crate::models::{Skip, SourceStatus};

    fn query() -> SearchQuery {
        SearchQuery {
            keywords: "Ribbon SBC, SIP".to_string(),
            location: "Bangalore".to_string(),
            min_experience: 10,
        }
    }

    #[test]
    fn test_search_url_hyphenates_terms_and_location() {
        assert_eq!(
            search_url(&query()),
            "https://www.naukri.com/ribbon-sbc-sip-jobs-in-bangalore"
        );
    }

    #[tokio::test]
    async fn test_extract_keeps_absolute_links_and_fills_missing_snippet() {
        let fetcher = Canned(
            r#"<article class="jobTuple">
                 <a class="title" href="https://www.naukri.com/job-listings-voice-42">Voice Lead</a>
                 <a class="subTitle">TeleCo</a>
               </article>"#,
        );

        let report = extract(&fetcher, &query()).await;
        assert_eq!(report.jobs.len(), 1);

        let job = &report.jobs[0];
        assert_eq!(job.title, "Voice Lead");
        assert_eq!(job.company, "TeleCo");
        assert_eq!(job.summary, "No details");
        assert_eq!(job.link, "https://www.naukri.com/job-listings-voice-42");
    }

    #[tokio::test]
    async fn test_extract_title_without_href_is_skipped() {
        let fetcher = Canned(
            r#"<article class="jobTuple">
                 <a class="title">Voice Lead</a>
                 <a class="subTitle">TeleCo</a>
               </article>"#,
        );

        let report = extract(&fetcher, &query()).await;
        assert!(report.jobs.is_empty());
        assert_eq!(report.skipped, vec![Skip::MissingHref]);
    }

    #[tokio::test]
    async fn test_extract_unreachable_site_reports_empty() {
        let report = extract(&Down, &query()).await;
        assert_eq!(report.status, SourceStatus::Unreachable);
        assert!(report.jobs.is_empty());
    }
}

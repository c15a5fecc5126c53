//! Data models for job postings and search results.
//!
//! This module defines the core data structures used throughout the application:
//! - [`JobRecord`]: one normalized job posting
//! - [`JobSource`]: which job board produced a record
//! - [`SearchQuery`]: the user's search input
//! - [`SourceReport`]: per-board outcome of one scrape (records plus skipped cards)
//! - [`SearchResults`]: the merged outcome of one search across all boards
//!
//! Records are immutable once created and are never merged or deduplicated:
//! the same vacancy appearing on two boards produces two records. Everything
//! here lives for a single search invocation unless exported.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The job board a record was scraped from.
///
/// Serialized with the exact user-facing labels, so the `Source` column of
/// the CSV export reads `Indeed`, `Naukri`, `FoundIt`, `Shine`,
/// `LinkedIn (Manual Entry)` or `Reed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobSource {
    Indeed,
    Naukri,
    FoundIt,
    Shine,
    #[serde(rename = "LinkedIn (Manual Entry)")]
    LinkedInManual,
    Reed,
}

impl JobSource {
    /// The user-facing label, as it appears in the Source column.
    pub const fn label(&self) -> &'static str {
        match self {
            JobSource::Indeed => "Indeed",
            JobSource::Naukri => "Naukri",
            JobSource::FoundIt => "FoundIt",
            JobSource::Shine => "Shine",
            JobSource::LinkedInManual => "LinkedIn (Manual Entry)",
            JobSource::Reed => "Reed",
        }
    }

    /// The board's HTTPS origin. Scraped relative paths are glued onto this
    /// to form absolute posting links.
    pub const fn origin(&self) -> &'static str {
        match self {
            JobSource::Indeed => "https://www.indeed.com",
            JobSource::Naukri => "https://www.naukri.com",
            JobSource::FoundIt => "https://www.foundit.in",
            JobSource::Shine => "https://www.shine.com",
            JobSource::LinkedInManual => "https://www.linkedin.com",
            JobSource::Reed => "https://www.reed.co.uk",
        }
    }
}

impl fmt::Display for JobSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One normalized job posting.
///
/// Field names serialize in PascalCase so the CSV header row is exactly
/// `Title,Company,Summary,Link,Source`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobRecord {
    pub title: String,
    /// Free text; some boards only ever yield a placeholder here.
    pub company: String,
    /// Free text; several boards substitute "No summary available".
    pub summary: String,
    /// Absolute URL of the posting (for the LinkedIn stand-in, of a search).
    pub link: String,
    pub source: JobSource,
}

/// The user's search input.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Comma-separated free-text keywords.
    pub keywords: String,
    /// Free-text location, e.g. "Remote" or "Pune".
    pub location: String,
    /// Minimum experience in years (0-20). Carried with the query, but no
    /// board currently narrows its results by it; FoundIt's URL embeds a
    /// fixed `experience=10` regardless.
    pub min_experience: u8,
}

/// Why a single job card was dropped while parsing a results page.
///
/// Dropping is always per-card: the rest of the page keeps parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    /// A required child node was not found under the card.
    MissingNode {
        field: &'static str,
        selector: &'static str,
    },
    /// The element carrying the posting link has no `href` attribute.
    MissingHref,
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skip::MissingNode { field, selector } => {
                write!(f, "missing {field} (wanted `{selector}`)")
            }
            Skip::MissingHref => f.write_str("link node has no href attribute"),
        }
    }
}

/// Whether a board's results page could be retrieved at all.
///
/// Network errors, timeouts and non-200 statuses all land in
/// [`SourceStatus::Unreachable`]; the fetcher logs the underlying detail but
/// the distinction is not retained here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceStatus {
    Fetched,
    Unreachable,
}

/// Outcome of scraping one job board.
#[derive(Debug)]
pub struct SourceReport {
    pub source: JobSource,
    pub status: SourceStatus,
    /// Parsed records in page order, capped at the per-page limit.
    pub jobs: Vec<JobRecord>,
    /// One entry per card dropped during parsing.
    pub skipped: Vec<Skip>,
}

impl SourceReport {
    /// Report for a board whose results page could not be fetched.
    pub fn unreachable(source: JobSource) -> Self {
        SourceReport {
            source,
            status: SourceStatus::Unreachable,
            jobs: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

/// The merged outcome of one search: per-board reports in the fixed
/// invocation order {Indeed, Naukri, FoundIt, Shine, LinkedIn, Reed}.
#[derive(Debug)]
pub struct SearchResults {
    pub reports: Vec<SourceReport>,
}

impl SearchResults {
    /// All records, preserving invocation order across boards and page order
    /// within each board.
    pub fn jobs(&self) -> impl Iterator<Item = &JobRecord> {
        self.reports.iter().flat_map(|r| r.jobs.iter())
    }

    pub fn job_count(&self) -> usize {
        self.reports.iter().map(|r| r.jobs.len()).sum()
    }

    /// Cards dropped during parsing, across all boards.
    pub fn skip_count(&self) -> usize {
        self.reports.iter().map(|r| r.skipped.len()).sum()
    }

    /// Boards whose results page could not be retrieved.
    pub fn unreachable_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| r.status == SourceStatus::Unreachable)
            .count()
    }
}

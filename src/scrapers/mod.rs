//! Job-board scrapers for collecting postings from various boards.
//!
//! This module contains one submodule per job board. Each scraper follows
//! a consistent single-page pattern:
//!
//! 1. **URL building**: Turn the search query into the board's results URL
//! 2. **Extraction**: Fetch the first results page and parse its job cards
//!
//! # Supported Boards
//!
//! | Board | Module | Method | Notes |
//! |-------|--------|--------|-------|
//! | Indeed | [`indeed`] | HTML scraping | `fromage=7` restricts to the last week |
//! | Naukri | [`naukri`] | HTML scraping | Cards carry absolute posting links |
//! | FoundIt | [`foundit`] | HTML scraping | Experience filter pinned at 10 years |
//! | Shine | [`shine`] | HTML scraping | Title and link share one anchor |
//! | LinkedIn | [`linkedin`] | Manual entry | Curated record, never fetched |
//! | Reed | [`reed`] | HTML scraping | UK listings |
//!
//! # Common Patterns
//!
//! Each scraper module exports:
//! - `search_url(query)`: Returns the board's results URL for the query
//! - `extract(fetcher, query)`: Fetches and parses one page, returns a
//!   [`SourceReport`] (the LinkedIn entry takes no fetcher)
//!
//! Scrapers use:
//! - Declarative card schemas from [`crate::schema`] for the brittle parts
//! - Graceful degradation (an unreachable board is reported, never fatal)
//! - At most ten cards per board, first results page only

use crate::fetch::Fetch;
use crate::models::{SearchQuery, SearchResults};
use itertools::Itertools;
use tracing::{info, instrument};

pub mod foundit;
pub mod indeed;
pub mod linkedin;
pub mod naukri;
pub mod reed;
pub mod shine;

/// Lowercase `keywords`, drop commas, and join the remaining
/// whitespace-separated words with `sep`. The path-style boards all
/// normalize search terms this way, differing only in the joiner.
pub(crate) fn join_keywords(keywords: &str, sep: &str) -> String {
    keywords
        .to_lowercase()
        .replace(',', "")
        .split_whitespace()
        .join(sep)
}

/// Run every board against the query, in a fixed order, and collect the
/// per-board reports.
///
/// Boards run sequentially; none of them can fail the whole search. The
/// curated LinkedIn entry is included unconditionally, so the results hold
/// at least one record even when every real board is unreachable.
#[instrument(level = "info", skip_all)]
pub async fn search_all(fetcher: &impl Fetch, query: &SearchQuery) -> SearchResults {
    info!(
        keywords = %query.keywords,
        location = %query.location,
        "Searching all job boards"
    );

    let reports = vec![
        indeed::extract(fetcher, query).await,
        naukri::extract(fetcher, query).await,
        foundit::extract(fetcher, query).await,
        shine::extract(fetcher, query).await,
        linkedin::extract(query),
        reed::extract(fetcher, query).await,
    ];

    SearchResults { reports }
}

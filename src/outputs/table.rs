//! Markdown table rendering for the terminal.
//!
//! The aggregated postings print as one GitHub-style Markdown table, which
//! stays readable raw and pastes cleanly into tickets and wikis. Scraped
//! text is flattened and pipe-escaped so a malformed posting cannot break
//! the layout, and summaries are truncated to keep rows near one line.

use crate::models::JobRecord;
use crate::utils::{table_cell, truncate_for_display};

/// Longest summary shown in the table before an ellipsis is appended.
pub const SUMMARY_DISPLAY_LEN: usize = 120;

/// Render job records as a Markdown table, one row per posting.
///
/// The header is always present; with no records the table is just the
/// header and separator rows.
pub fn render_table(jobs: &[JobRecord]) -> String {
    let mut out = String::new();
    out.push_str("| Title | Company | Summary | Link | Source |\n");
    out.push_str("|-------|---------|---------|------|--------|\n");

    for job in jobs {
        let summary = truncate_for_display(&job.summary, SUMMARY_DISPLAY_LEN);
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            table_cell(&job.title),
            table_cell(&job.company),
            table_cell(&summary),
            table_cell(&job.link),
            job.source,
        ));
    }

    out
}

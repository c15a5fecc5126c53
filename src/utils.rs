//! String helpers for terminal presentation.
//!
//! Scraped text is whatever the job board served: arbitrary length, stray
//! newlines, pipes, non-ASCII. These helpers flatten it into something a
//! Markdown table cell can hold.

/// Flatten a scraped string into a single table-safe line.
///
/// Line breaks become single spaces (a CRLF pair collapses to one space,
/// not two), and `|` is escaped so a cell cannot break out of its row.
///
/// # Arguments
///
/// * `s` - The scraped text to sanitize
///
/// # Returns
///
/// A single-line string safe to place between Markdown table pipes.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(table_cell("SIP | VoIP"), "SIP \\| VoIP");
/// assert_eq!(table_cell("line one\nline two"), "line one line two");
/// ```
pub fn table_cell(s: &str) -> String {
    s.replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
        .replace('|', "\\|")
}

/// Truncate a string to `max` characters for display, appending an
/// ellipsis when anything was cut. Counts characters, not bytes, so
/// non-ASCII board text never splits mid-character.
pub fn truncate_for_display(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max).collect();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_cell_escapes_pipes() {
        assert_eq!(table_cell("SIP | VoIP | SBC"), "SIP \\| VoIP \\| SBC");
    }

    #[test]
    fn test_table_cell_flattens_newlines() {
        assert_eq!(table_cell("line one\nline two\r\nline three"), "line one line two line three");
    }

    #[test]
    fn test_table_cell_collapses_crlf_to_one_space() {
        assert_eq!(table_cell("shift work\r\nincludes on-call"), "shift work includes on-call");
        assert_eq!(table_cell("lone\rreturn"), "lone return");
    }

    #[test]
    fn test_table_cell_plain_text_unchanged() {
        assert_eq!(table_cell("Senior Voice Engineer"), "Senior Voice Engineer");
    }

    #[test]
    fn test_truncate_for_display_short_string() {
        assert_eq!(truncate_for_display("Hello", 100), "Hello");
    }

    #[test]
    fn test_truncate_for_display_exact_length() {
        assert_eq!(truncate_for_display("abcde", 5), "abcde");
    }

    #[test]
    fn test_truncate_for_display_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_display(&s, 10);
        assert_eq!(result, format!("{}…", "a".repeat(10)));
    }

    #[test]
    fn test_truncate_for_display_multibyte() {
        // Hindi text as served by naukri.com; must cut on a char boundary.
        let s = "नौकरी खोजें और आवेदन करें";
        let result = truncate_for_display(s, 6);
        assert_eq!(result, "नौकरी …");
    }
}

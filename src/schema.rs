//! Declarative extraction schemas for job-board results pages.
//!
//! Every board describes its markup as a [`CardSchema`]: one CSS selector
//! matching a job card, plus a rule per logical field. A rule is either
//! `Required` (the card is dropped when the node is missing), `Optional`
//! with a declared fallback value, or `Fixed` placeholder text that is never
//! scraped at all. The schema is the single place to edit when a board
//! changes its markup; the selectors are known to be brittle and should be
//! revalidated against the live sites, not treated as stable.
//!
//! [`CardSchema::compile`] turns the CSS strings into `scraper` selectors
//! once; each extractor keeps the compiled form in a static. Parsing walks
//! at most [`MAX_CARDS`] cards and produces, per card, either a
//! [`JobRecord`] or a [`Skip`] explaining what was missing. A bad card never
//! aborts the page.

use crate::models::{JobRecord, JobSource, Skip, SourceReport, SourceStatus};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Upper bound on cards parsed from one results page. No extractor
/// paginates beyond the first page.
pub const MAX_CARDS: usize = 10;

/// How a text field is read out of a job card.
pub enum FieldRule {
    /// Text of the first child matching the selector; the card is dropped
    /// when no such node exists.
    Required(&'static str),
    /// Text of the first child matching the selector, or the fallback value
    /// when no such node exists.
    Optional(&'static str, &'static str),
    /// The field is never scraped; always this value.
    Fixed(&'static str),
}

/// Where the posting link comes from.
pub enum LinkRule {
    /// The `href` attribute of the card element itself.
    CardHref,
    /// The `href` attribute of the first child matching the selector; the
    /// card is dropped when no such node exists.
    ChildHref(&'static str),
    /// The `href` attribute of the first node matching the second selector,
    /// looked up only inside the first node matching the first selector. A
    /// match under a later outer node is never used; the card is dropped
    /// when either node is missing.
    NestedHref(&'static str, &'static str),
}

/// Declarative description of one board's results markup.
pub struct CardSchema {
    pub source: JobSource,
    /// Selector matching one job card.
    pub card: &'static str,
    pub title: FieldRule,
    pub company: FieldRule,
    pub summary: FieldRule,
    pub link: LinkRule,
    /// Origin glued onto scraped hrefs by plain concatenation; `None` keeps
    /// the href untouched (Naukri emits absolute links).
    pub link_base: Option<&'static str>,
}

impl CardSchema {
    /// Compile the CSS strings into `scraper` selectors. Panics on a
    /// malformed selector string.
    pub fn compile(self) -> CompiledSchema {
        CompiledSchema {
            source: self.source,
            card: parse_selector(self.card),
            title: TextRule::compile("title", self.title),
            company: TextRule::compile("company", self.company),
            summary: TextRule::compile("summary", self.summary),
            link: HrefRule::compile(self.link),
            link_base: self.link_base,
        }
    }
}

/// A [`CardSchema`] with its selectors parsed, ready to run against pages.
pub struct CompiledSchema {
    source: JobSource,
    card: Selector,
    title: TextRule,
    company: TextRule,
    summary: TextRule,
    link: HrefRule,
    link_base: Option<&'static str>,
}

impl CompiledSchema {
    /// Parse a results page body into a report: records for well-formed
    /// cards, a [`Skip`] for each card whose required nodes are missing.
    pub fn parse(&self, body: &str) -> SourceReport {
        let document = Html::parse_document(body);
        let mut jobs = Vec::new();
        let mut skipped = Vec::new();

        for card in document.select(&self.card).take(MAX_CARDS) {
            match self.parse_card(card) {
                Ok(job) => jobs.push(job),
                Err(skip) => {
                    debug!(source = %self.source, reason = %skip, "Skipping job card");
                    skipped.push(skip);
                }
            }
        }

        SourceReport {
            source: self.source,
            status: SourceStatus::Fetched,
            jobs,
            skipped,
        }
    }

    fn parse_card(&self, card: ElementRef<'_>) -> Result<JobRecord, Skip> {
        let title = self.title.read(card)?;
        let company = self.company.read(card)?;
        let summary = self.summary.read(card)?;
        let href = self.link.read(card)?;

        let link = match self.link_base {
            Some(base) => format!("{base}{href}"),
            None => href.to_string(),
        };

        Ok(JobRecord {
            title,
            company,
            summary,
            link,
            source: self.source,
        })
    }
}

enum TextRule {
    Required {
        field: &'static str,
        css: &'static str,
        selector: Selector,
    },
    Optional {
        selector: Selector,
        fallback: &'static str,
    },
    Fixed(&'static str),
}

impl TextRule {
    fn compile(field: &'static str, rule: FieldRule) -> TextRule {
        match rule {
            FieldRule::Required(css) => TextRule::Required {
                field,
                css,
                selector: parse_selector(css),
            },
            FieldRule::Optional(css, fallback) => TextRule::Optional {
                selector: parse_selector(css),
                fallback,
            },
            FieldRule::Fixed(text) => TextRule::Fixed(text),
        }
    }

    fn read(&self, card: ElementRef<'_>) -> Result<String, Skip> {
        match self {
            TextRule::Required {
                field,
                css,
                selector,
            } => card
                .select(selector)
                .next()
                .map(node_text)
                .ok_or(Skip::MissingNode {
                    field: *field,
                    selector: *css,
                }),
            TextRule::Optional { selector, fallback } => Ok(card
                .select(selector)
                .next()
                .map(node_text)
                .unwrap_or_else(|| (*fallback).to_string())),
            TextRule::Fixed(text) => Ok((*text).to_string()),
        }
    }
}

enum HrefRule {
    CardHref,
    ChildHref {
        css: &'static str,
        selector: Selector,
    },
    NestedHref {
        outer_css: &'static str,
        outer: Selector,
        inner_css: &'static str,
        inner: Selector,
    },
}

impl HrefRule {
    fn compile(rule: LinkRule) -> HrefRule {
        match rule {
            LinkRule::CardHref => HrefRule::CardHref,
            LinkRule::ChildHref(css) => HrefRule::ChildHref {
                css,
                selector: parse_selector(css),
            },
            LinkRule::NestedHref(outer_css, inner_css) => HrefRule::NestedHref {
                outer_css,
                outer: parse_selector(outer_css),
                inner_css,
                inner: parse_selector(inner_css),
            },
        }
    }

    fn read<'a>(&self, card: ElementRef<'a>) -> Result<&'a str, Skip> {
        match self {
            HrefRule::CardHref => card.value().attr("href").ok_or(Skip::MissingHref),
            HrefRule::ChildHref { css, selector } => card
                .select(selector)
                .next()
                .ok_or(Skip::MissingNode {
                    field: "link",
                    selector: *css,
                })?
                .value()
                .attr("href")
                .ok_or(Skip::MissingHref),
            HrefRule::NestedHref {
                outer_css,
                outer,
                inner_css,
                inner,
            } => {
                let scope = card.select(outer).next().ok_or(Skip::MissingNode {
                    field: "link",
                    selector: *outer_css,
                })?;
                scope
                    .select(inner)
                    .next()
                    .ok_or(Skip::MissingNode {
                        field: "link",
                        selector: *inner_css,
                    })?
                    .value()
                    .attr("href")
                    .ok_or(Skip::MissingHref)
            }
        }
    }
}

/// Concatenated descendant text of a node, trimmed at both ends. Interior
/// whitespace is preserved as the page had it.
fn node_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn parse_selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_schema() -> CompiledSchema {
        CardSchema {
            source: JobSource::Indeed,
            card: "div.card",
            title: FieldRule::Required("h2"),
            company: FieldRule::Optional("span.co", "N/A"),
            summary: FieldRule::Fixed("No summary available"),
            link: LinkRule::ChildHref("a"),
            link_base: Some("https://www.indeed.com"),
        }
        .compile()
    }

    #[test]
    fn test_well_formed_card_parses() {
        let report = test_schema().parse(
            r#"<div class="card">
                 <h2> Voice Engineer </h2>
                 <span class="co">Acme</span>
                 <a href="/job/42">view</a>
               </div>"#,
        );

        assert_eq!(report.status, SourceStatus::Fetched);
        assert_eq!(report.jobs.len(), 1);
        assert!(report.skipped.is_empty());

        let job = &report.jobs[0];
        assert_eq!(job.title, "Voice Engineer");
        assert_eq!(job.company, "Acme");
        assert_eq!(job.summary, "No summary available");
        assert_eq!(job.link, "https://www.indeed.com/job/42");
        assert_eq!(job.source, JobSource::Indeed);
    }

    #[test]
    fn test_missing_required_node_skips_only_that_card() {
        let report = test_schema().parse(
            r#"<div class="card"><span class="co">NoTitle Ltd</span><a href="/x">x</a></div>
               <div class="card"><h2>Kept</h2><a href="/y">y</a></div>"#,
        );

        assert_eq!(report.jobs.len(), 1);
        assert_eq!(report.jobs[0].title, "Kept");
        assert_eq!(
            report.skipped,
            vec![Skip::MissingNode {
                field: "title",
                selector: "h2",
            }]
        );
    }

    #[test]
    fn test_optional_fallback_applied() {
        let report = test_schema()
            .parse(r#"<div class="card"><h2>T</h2><a href="/j">j</a></div>"#);

        assert_eq!(report.jobs[0].company, "N/A");
    }

    #[test]
    fn test_link_node_without_href_is_reported() {
        let report =
            test_schema().parse(r#"<div class="card"><h2>T</h2><a name="x">no href</a></div>"#);

        assert!(report.jobs.is_empty());
        assert_eq!(report.skipped, vec![Skip::MissingHref]);
    }

    #[test]
    fn test_missing_link_node_is_reported() {
        let report = test_schema().parse(r#"<div class="card"><h2>T</h2></div>"#);

        assert!(report.jobs.is_empty());
        assert_eq!(
            report.skipped,
            vec![Skip::MissingNode {
                field: "link",
                selector: "a",
            }]
        );
    }

    #[test]
    fn test_card_href_rule_reads_container() {
        let schema = CardSchema {
            source: JobSource::Indeed,
            card: "a.tapItem",
            title: FieldRule::Required("h2"),
            company: FieldRule::Fixed("c"),
            summary: FieldRule::Fixed("s"),
            link: LinkRule::CardHref,
            link_base: Some("https://www.indeed.com"),
        }
        .compile();

        let report =
            schema.parse(r#"<a class="tapItem" href="/rc/clk?jk=1"><h2>T</h2></a>"#);
        assert_eq!(report.jobs[0].link, "https://www.indeed.com/rc/clk?jk=1");
    }

    #[test]
    fn test_nested_href_scoped_to_first_outer_node() {
        let schema = CardSchema {
            source: JobSource::Reed,
            card: "div.card",
            title: FieldRule::Required("h3"),
            company: FieldRule::Fixed("c"),
            summary: FieldRule::Fixed("s"),
            link: LinkRule::NestedHref("h3", "a"),
            link_base: Some("https://www.reed.co.uk"),
        }
        .compile();

        let report = schema.parse(
            r#"<div class="card">
                 <h3><a href="/jobs/first/1">First</a></h3>
                 <h3><a href="/jobs/second/2">Second</a></h3>
               </div>"#,
        );

        assert_eq!(report.jobs.len(), 1);
        assert_eq!(report.jobs[0].title, "First");
        assert_eq!(report.jobs[0].link, "https://www.reed.co.uk/jobs/first/1");
    }

    #[test]
    fn test_absolute_href_kept_without_base() {
        let schema = CardSchema {
            source: JobSource::Naukri,
            card: "div.card",
            title: FieldRule::Required("h2"),
            company: FieldRule::Fixed("c"),
            summary: FieldRule::Fixed("s"),
            link: LinkRule::ChildHref("a"),
            link_base: None,
        }
        .compile();

        let report = schema.parse(
            r#"<div class="card"><h2>T</h2><a href="https://www.naukri.com/job-42">j</a></div>"#,
        );
        assert_eq!(report.jobs[0].link, "https://www.naukri.com/job-42");
    }

    #[test]
    fn test_present_but_empty_node_is_kept() {
        let report = test_schema()
            .parse(r#"<div class="card"><h2></h2><a href="/j">j</a></div>"#);

        assert_eq!(report.jobs.len(), 1);
        assert_eq!(report.jobs[0].title, "");
    }

    #[test]
    fn test_at_most_ten_cards_parsed() {
        let mut body = String::new();
        for i in 0..12 {
            body.push_str(&format!(
                r#"<div class="card"><h2>Job {i}</h2><a href="/j/{i}">j</a></div>"#
            ));
        }

        let report = test_schema().parse(&body);
        assert_eq!(report.jobs.len(), MAX_CARDS);
        assert_eq!(report.jobs[0].title, "Job 0");
        assert_eq!(report.jobs[9].title, "Job 9");
    }

    #[test]
    fn test_descendant_text_is_concatenated_and_trimmed() {
        let report = test_schema().parse(
            r#"<div class="card">
                 <h2><span>Senior</span> <span>Engineer</span></h2>
                 <a href="/j">j</a>
               </div>"#,
        );

        assert_eq!(report.jobs[0].title, "Senior Engineer");
    }
}

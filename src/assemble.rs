//! Markdown document assembly.
//!
//! The heading text and callout-type markers below are part of the output
//! contract; downstream renderers match on them verbatim.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{ClipRequest, PageContent, SummaryOutcome};

// ── Fixed template strings ───────────────────────────────────────────────────

pub const FAILURE_SENTINEL: &str = "⚠️ Failed to get summary.";
pub const NOT_ENABLED_MESSAGE: &str = "AI Summary not enabled.";
pub const NO_CONTENT_MESSAGE: &str = "No content to summarize.";
const NO_COMMENTS_PLACEHOLDER: &str = "_no comments_";

// ── Template policy ──────────────────────────────────────────────────────────

/// Whether the "Page Content" section is emitted. Two historical template
/// variants exist; this crate captures the page body only while
/// summarization is active, so extraction-only clips stay metadata-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageContentPolicy {
    Always,
    SummarizeModeOnly,
}

pub const PAGE_CONTENT_POLICY: PageContentPolicy = PageContentPolicy::SummarizeModeOnly;

fn include_page_content(req: &ClipRequest) -> bool {
    match PAGE_CONTENT_POLICY {
        PageContentPolicy::Always => true,
        PageContentPolicy::SummarizeModeOnly => !req.extract_only,
    }
}

// ── Assembly ─────────────────────────────────────────────────────────────────

static LINE_BREAK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r?\n+").unwrap());

/// Compose the final Markdown document. Sections are joined with blank
/// lines; `page.title` is the resolved title (override already applied).
pub fn assemble_document(
    req: &ClipRequest,
    page: &PageContent,
    summary: &SummaryOutcome,
) -> String {
    let mut details = vec![
        "> [!info] Details".to_string(),
        format!("> **Title:** {}", page.title),
        format!("> **URL:** {}", req.url),
    ];
    if let Some(line) = req.tags.as_deref().and_then(tags_line) {
        details.push(line);
    }

    let mut sections = vec![
        details.join("\n"),
        format!(
            "> [!documentation] Comments\n{}",
            comment_text(req.comment.as_deref())
        ),
        "## AI Summary".to_string(),
        summary_text(summary).to_string(),
    ];

    if include_page_content(req) {
        let mut block = vec!["## Page Content".to_string()];
        block.extend(page.paragraphs.iter().cloned());
        sections.push(block.join("\n\n"));
    }

    sections.join("\n\n")
}

fn tags_line(tags: &str) -> Option<String> {
    let rendered: Vec<String> = tags
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| format!("#{}", t))
        .collect();

    if rendered.is_empty() {
        None
    } else {
        Some(format!("> **Tags:** {}", rendered.join(" ")))
    }
}

// Embedded line breaks are collapsed to single spaces so the comment stays
// inside its callout block.
fn comment_text(comment: Option<&str>) -> String {
    match comment {
        Some(c) if !c.trim().is_empty() => {
            LINE_BREAK_RE.replace_all(c, " ").trim().to_string()
        }
        _ => NO_COMMENTS_PLACEHOLDER.to_string(),
    }
}

fn summary_text(summary: &SummaryOutcome) -> &str {
    match summary {
        SummaryOutcome::Summary(text) => text,
        SummaryOutcome::Failed => FAILURE_SENTINEL,
        SummaryOutcome::NotEnabled => NOT_ENABLED_MESSAGE,
        SummaryOutcome::NoContent => NO_CONTENT_MESSAGE,
    }
}

//! clipnote — clip a web page into a Markdown vault.
//!
//! One submission runs a single sequential pipeline: validate the URL, fetch
//! the page, extract title and paragraphs, optionally summarize a bounded
//! snippet through a remote model, assemble the fixed Markdown template, and
//! write the file. Summarization failure is the only recovered error; the
//! clipping is still written with a sentinel in its place.

pub mod assemble;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod models;
pub mod normalize;
pub mod persist;
pub mod sanitize;
pub mod snippet;
pub mod summarize;
pub mod validate;

use crate::config::Config;
use crate::error::Result;
use crate::models::{ClipRequest, Clipping, SummaryOutcome};
use crate::summarize::Summarizer;

/// Run one full submission: validation and fetch included.
pub async fn clip(
    req: &ClipRequest,
    config: &Config,
    summarizer: &dyn Summarizer,
) -> Result<Clipping> {
    validate::validate_url_field(&req.url)?;
    validate::check_reachable(&req.url).await?;

    let html = fetch::fetch_html(&req.url).await?;
    clip_from_html(&html, req, config, summarizer).await
}

/// The pipeline from raw HTML onward. Split out so the document flow can be
/// exercised without a network fetch.
pub async fn clip_from_html(
    html: &str,
    req: &ClipRequest,
    config: &Config,
    summarizer: &dyn Summarizer,
) -> Result<Clipping> {
    let mut page = extract::extract_page(html);
    if let Some(title) = req.title.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        page.title = title.to_string();
    }
    tracing::info!(
        title = %page.title,
        paragraphs = page.paragraphs.len(),
        "extracted page content"
    );

    let snippet = snippet::build_snippet(&page.paragraphs);
    let summary = summarize_snippet(req, config, summarizer, &snippet).await;

    let markdown = assemble::assemble_document(req, &page, &summary);
    let file_stem = sanitize::sanitize_title(&page.title);
    let path = persist::write_clipping(&config.vault, req.folder.as_deref(), &file_stem, &markdown)
        .await?;
    tracing::info!(path = %path.display(), "clipping written");

    Ok(Clipping {
        title: page.title,
        path,
        markdown,
    })
}

async fn summarize_snippet(
    req: &ClipRequest,
    config: &Config,
    summarizer: &dyn Summarizer,
    snippet: &str,
) -> SummaryOutcome {
    if req.extract_only {
        return SummaryOutcome::NotEnabled;
    }
    if snippet.is_empty() {
        return SummaryOutcome::NoContent;
    }

    let prompt = format!("{}{}", config.ai_prompt, snippet);
    match summarizer.summarize(&prompt).await {
        Ok(raw) => SummaryOutcome::Summary(normalize::normalize_summary(&raw)),
        Err(e) => {
            tracing::warn!("summarization failed: {}", e);
            SummaryOutcome::Failed
        }
    }
}

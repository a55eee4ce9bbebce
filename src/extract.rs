//! Title and paragraph extraction from fetched HTML.
//!
//! Extraction is lenient by design: `scraper` tolerates malformed markup, and
//! this module always returns a best-effort `PageContent` rather than failing.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::models::PageContent;

/// Title used when the document has no non-empty `<title>`.
pub const UNTITLED: &str = "untitled";

static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("failed to parse title selector"));

static PARAGRAPH_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("failed to parse paragraph selector"));

/// Extract the page title and every non-empty paragraph, in document order.
pub fn extract_page(html: &str) -> PageContent {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNTITLED.to_string());

    let paragraphs: Vec<String> = document
        .select(&PARAGRAPH_SELECTOR)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|p| !p.is_empty())
        .collect();

    PageContent { title, paragraphs }
}

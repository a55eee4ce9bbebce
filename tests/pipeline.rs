//! End-to-end pipeline tests: HTML in, Markdown file in the vault out.
//! The summarizer is a scripted stub; fetch is bypassed via `clip_from_html`.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use clipnote::assemble::{FAILURE_SENTINEL, NO_CONTENT_MESSAGE, NOT_ENABLED_MESSAGE};
use clipnote::config::Config;
use clipnote::error::{ClipError, Result};
use clipnote::models::ClipRequest;
use clipnote::summarize::Summarizer;

const ARTICLE_HTML: &str = r#"
<html>
  <head><title>Example Article</title></head>
  <body>
    <p>First paragraph.</p>
    <p>   </p>
    <p>Second paragraph.</p>
    <p>Third paragraph.</p>
  </body>
</html>
"#;

struct StubSummarizer {
    reply: Option<String>,
    calls: AtomicUsize,
}

impl StubSummarizer {
    fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Summarizer for StubSummarizer {
    async fn summarize(&self, _prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err(ClipError::Summarize("boom".to_string())),
        }
    }
}

fn config_for(vault: &std::path::Path) -> Config {
    Config::from_toml_str(&format!("vault = {:?}", vault.to_str().unwrap())).unwrap()
}

fn request() -> ClipRequest {
    ClipRequest {
        url: "https://example.com/article".to_string(),
        ..ClipRequest::default()
    }
}

#[tokio::test]
async fn summary_success_writes_full_document() {
    let vault = tempfile::tempdir().unwrap();
    let summarizer =
        StubSummarizer::replying("Here's the summary:\n* Point one\n* Point two");

    let clipping = clipnote::clip_from_html(
        ARTICLE_HTML,
        &request(),
        &config_for(vault.path()),
        &summarizer,
    )
    .await
    .unwrap();

    assert_eq!(summarizer.call_count(), 1);
    assert_eq!(clipping.title, "Example Article");
    assert_eq!(clipping.path, vault.path().join("Example Article.md"));

    let written = std::fs::read_to_string(&clipping.path).unwrap();
    assert_eq!(written, clipping.markdown);
    assert!(written.contains("## AI Summary\n\n- Point one\n- Point two"));
    assert!(written.contains("> **Title:** Example Article"));
    assert!(written.contains("> **URL:** https://example.com/article"));
    assert!(written.contains(
        "## Page Content\n\nFirst paragraph.\n\nSecond paragraph.\n\nThird paragraph."
    ));
}

#[tokio::test]
async fn summarizer_failure_still_writes_the_file() {
    let vault = tempfile::tempdir().unwrap();
    let summarizer = StubSummarizer::failing();

    let clipping = clipnote::clip_from_html(
        ARTICLE_HTML,
        &request(),
        &config_for(vault.path()),
        &summarizer,
    )
    .await
    .unwrap();

    assert_eq!(summarizer.call_count(), 1);
    let written = std::fs::read_to_string(&clipping.path).unwrap();
    assert!(written.contains(&format!("## AI Summary\n\n{}", FAILURE_SENTINEL)));
    // Paragraphs survive a failed summary.
    assert!(written.contains("First paragraph."));
}

#[tokio::test]
async fn empty_page_skips_the_summarizer() {
    let vault = tempfile::tempdir().unwrap();
    let summarizer = StubSummarizer::replying("should never be used");

    let clipping = clipnote::clip_from_html(
        "<html><head><title>Empty</title></head><body></body></html>",
        &request(),
        &config_for(vault.path()),
        &summarizer,
    )
    .await
    .unwrap();

    assert_eq!(summarizer.call_count(), 0);
    let written = std::fs::read_to_string(&clipping.path).unwrap();
    assert!(written.contains(&format!("## AI Summary\n\n{}", NO_CONTENT_MESSAGE)));
}

#[tokio::test]
async fn extract_only_mode_is_metadata_only() {
    let vault = tempfile::tempdir().unwrap();
    let summarizer = StubSummarizer::replying("should never be used");
    let mut req = request();
    req.extract_only = true;

    let clipping = clipnote::clip_from_html(
        ARTICLE_HTML,
        &req,
        &config_for(vault.path()),
        &summarizer,
    )
    .await
    .unwrap();

    assert_eq!(summarizer.call_count(), 0);
    let written = std::fs::read_to_string(&clipping.path).unwrap();
    assert!(written.contains(&format!("## AI Summary\n\n{}", NOT_ENABLED_MESSAGE)));
    assert!(!written.contains("## Page Content"));
}

#[tokio::test]
async fn title_override_and_folder_and_tags() {
    let vault = tempfile::tempdir().unwrap();
    let summarizer = StubSummarizer::replying("* a");
    let mut req = request();
    req.title = Some("My: Override".to_string());
    req.folder = Some("web/clips".to_string());
    req.tags = Some("a, b ,c".to_string());
    req.comment = Some("line one\nline two".to_string());

    let clipping = clipnote::clip_from_html(
        ARTICLE_HTML,
        &req,
        &config_for(vault.path()),
        &summarizer,
    )
    .await
    .unwrap();

    // Colon stripped from the filename, kept in the document title.
    assert_eq!(
        clipping.path,
        vault.path().join("web/clips").join("My Override.md")
    );
    let written = std::fs::read_to_string(&clipping.path).unwrap();
    assert!(written.contains("> **Title:** My: Override"));
    assert!(written.contains("> **Tags:** #a #b #c"));
    assert!(written.contains("> [!documentation] Comments\nline one line two"));
}

#[tokio::test]
async fn invalid_url_aborts_before_any_write() {
    let vault = tempfile::tempdir().unwrap();
    let summarizer = StubSummarizer::failing();
    let mut req = request();
    req.url = "http://example.com/a".to_string();

    let err = clipnote::clip(&req, &config_for(vault.path()), &summarizer)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Requires https://");
    assert_eq!(std::fs::read_dir(vault.path()).unwrap().count(), 0);
}

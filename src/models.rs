use std::path::PathBuf;

/// One clipping submission, as entered by the user.
#[derive(Debug, Clone, Default)]
pub struct ClipRequest {
    /// Page URL; must be https and is validated before the pipeline runs.
    pub url: String,
    /// Title override; the extracted `<title>` is used when empty.
    pub title: Option<String>,
    /// Sub-folder under the vault root.
    pub folder: Option<String>,
    /// Comma-separated tag list.
    pub tags: Option<String>,
    /// Free-text comment stored with the clipping.
    pub comment: Option<String>,
    /// Skip summarization and page-content capture, keep metadata only.
    pub extract_only: bool,
}

/// Title and paragraph text extracted from one fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub title: String,
    /// Non-empty `<p>` texts in document order.
    pub paragraphs: Vec<String>,
}

/// What ends up in the "AI Summary" section. Exactly one of these per
/// submission; only `Summary` carries summarizer output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    /// Normalized summarizer output.
    Summary(String),
    /// The remote call failed; a fixed sentinel is rendered instead.
    Failed,
    /// Extraction-only mode, summarizer never invoked.
    NotEnabled,
    /// The page had no paragraph text to summarize.
    NoContent,
}

/// The written artifact.
#[derive(Debug, Clone)]
pub struct Clipping {
    pub title: String,
    pub path: PathBuf,
    pub markdown: String,
}

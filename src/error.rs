use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ClipError {
    /// URL field rejected before submission; the message is shown inline.
    #[error("{0}")]
    Validation(String),

    /// Fetching the page failed; nothing is written.
    #[error("{0}")]
    Fetch(String),

    /// The remote summarization call failed. Recovered by the pipeline: the
    /// clipping is still written with a fixed sentinel in the summary slot.
    #[error("{0}")]
    Summarize(String),

    /// Directory creation or file write failed.
    #[error("failed to write clipping at {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ClipError>;

//! Command-line surface. Mirrors the clipping form: one URL plus optional
//! title, folder, tags and comment, and the extraction-only toggle.

use clap::Parser;
use std::path::PathBuf;

use crate::models::ClipRequest;

/// Clip a web page into your Markdown vault, with an optional AI summary.
#[derive(Debug, Parser)]
#[command(name = "clipnote", version, about)]
pub struct Cli {
    /// Page URL to clip (https only)
    pub url: String,

    /// Title override; extracted from the page when omitted
    #[arg(long)]
    pub title: Option<String>,

    /// Sub-folder under the vault root
    #[arg(long)]
    pub folder: Option<String>,

    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,

    /// Free-text comment stored with the clipping
    #[arg(long)]
    pub comment: Option<String>,

    /// Skip the AI summary and page-content capture
    #[arg(long)]
    pub extract_only: bool,

    /// Alternate config file (default: ~/.config/clipnote/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn into_request(self) -> (ClipRequest, Option<PathBuf>) {
        let request = ClipRequest {
            url: self.url,
            title: self.title,
            folder: self.folder,
            tags: self.tags,
            comment: self.comment,
            extract_only: self.extract_only,
        };
        (request, self.config)
    }
}

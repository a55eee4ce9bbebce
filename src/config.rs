//! User preferences: vault root, prompt prefix, summarizer credentials.
//!
//! Read once per run from `~/.config/clipnote/config.toml` (or an explicit
//! `--config` path) and treated as read-only input to the pipeline. The API
//! key may also come from the `GEMINI_API_KEY` environment variable, which
//! takes precedence over the file.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{ClipError, Result};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_PROMPT: &str =
    "Summarize the following web page content as concise Markdown bullet points:\n\n";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Root directory clippings are written under.
    pub vault: PathBuf,
    /// Prefix prepended to the snippet to form the summarizer prompt.
    #[serde(default = "default_prompt")]
    pub ai_prompt: String,
    #[serde(default)]
    pub google_api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model_id: String,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => default_config_path()?,
        };
        let raw = std::fs::read_to_string(&path).map_err(|e| {
            ClipError::Config(format!("cannot read config {}: {}", path.display(), e))
        })?;
        let mut config = Self::from_toml_str(&raw)
            .map_err(|e| ClipError::Config(format!("invalid config {}: {}", path.display(), e)))?;

        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            if !key.is_empty() {
                config.google_api_key = Some(key);
            }
        }
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// The API key, required only when summarization is active.
    pub fn api_key(&self) -> Result<&str> {
        self.google_api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                ClipError::Config(
                    "google_api_key is not set; add it to config.toml or export GEMINI_API_KEY"
                        .to_string(),
                )
            })
    }
}

fn default_config_path() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("clipnote")
        .map_err(|e| ClipError::Config(e.to_string()))?;
    Ok(dirs.get_config_home().join("config.toml"))
}

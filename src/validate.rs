//! URL field validation, applied before a submission is accepted.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::error::{ClipError, Result};
use crate::fetch;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(https?)://[^\s/$.?#].[^\s]*$").unwrap());

/// Syntactic checks on the URL field. Messages are part of the contract and
/// surface inline next to the field.
pub fn validate_url_field(url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(ClipError::Validation("Field is empty.".to_string()));
    }
    if !URL_RE.is_match(url) {
        return Err(ClipError::Validation("Invalid URL".to_string()));
    }
    let parsed =
        Url::parse(url).map_err(|_| ClipError::Validation("Invalid URL".to_string()))?;
    if parsed.scheme() != "https" {
        return Err(ClipError::Validation("Requires https://".to_string()));
    }
    Ok(())
}

/// Live reachability probe, run after the syntactic checks pass.
pub async fn check_reachable(url: &str) -> Result<()> {
    let response = fetch::client()
        .get(url)
        .send()
        .await
        .map_err(|_| ClipError::Validation("Failed to fetch URL.".to_string()))?;

    if !response.status().is_success() {
        return Err(ClipError::Validation("URL not reachable.".to_string()));
    }
    Ok(())
}

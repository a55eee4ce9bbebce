//! HTTPS page fetch through a shared client.

use once_cell::sync::Lazy;
use reqwest::Client;
use std::time::Duration;

use crate::error::{ClipError, Result};

const USER_AGENT: &str = "clipnote/1.0";

// One client per process so connections are reused across the reachability
// probe and the page fetch.
static CLIENT: Lazy<Client> = Lazy::new(|| {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::ACCEPT,
        "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"
            .parse()
            .unwrap(),
    );
    headers.insert(
        reqwest::header::ACCEPT_LANGUAGE,
        "en-US,en;q=0.9".parse().unwrap(),
    );

    reqwest::ClientBuilder::new()
        .connect_timeout(Duration::from_secs(5))
        .timeout(Duration::from_secs(10))
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()
        .expect("failed to build HTTP client")
});

pub(crate) fn client() -> &'static Client {
    &CLIENT
}

/// Fetch the raw HTML for a page. Non-success status and transport errors
/// both abort the pipeline; nothing is written in that case.
pub async fn fetch_html(url: &str) -> Result<String> {
    let response = CLIENT.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            ClipError::Fetch(format!("TimeoutError: {}", e))
        } else if e.is_connect() {
            ClipError::Fetch(format!("ConnectError: {}", e))
        } else {
            ClipError::Fetch(format!("RequestError: {}", e))
        }
    })?;

    if !response.status().is_success() {
        return Err(ClipError::Fetch(format!(
            "upstream returned {}",
            response.status()
        )));
    }

    response
        .text()
        .await
        .map_err(|e| ClipError::Fetch(e.to_string()))
}

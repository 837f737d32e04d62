//! HTTP fetcher implementation
//!
//! One blocking-style GET per call, awaited to completion. Network errors,
//! timeouts, and non-2xx statuses all collapse into a single "unavailable"
//! outcome: the crawl never retries and never treats a bad fetch as fatal.

use crate::config::CrawlerConfig;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::Client;
use std::time::Duration;

/// Browser-like headers sent with every request
const USER_AGENT_VALUE: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const ACCEPT_VALUE: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const ACCEPT_LANGUAGE_VALUE: &str = "ru-RU,ru;q=0.9,en;q=0.8";

/// Builds the HTTP client used for the whole run
///
/// # Arguments
///
/// * `config` - Crawler configuration supplying the request timeout
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &CrawlerConfig) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE),
    );

    Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL, returning its body text or `None` if unavailable
///
/// All failure modes (connection error, timeout, non-2xx status, undecodable
/// body) are logged and reported identically; callers decide whether an
/// unavailable page means "skip it" or "stop paginating".
pub async fn fetch_page(client: &Client, url: &str) -> Option<String> {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            if !status.is_success() {
                tracing::warn!("Error fetching {}: HTTP {}", url, status);
                return None;
            }

            match response.text().await {
                Ok(body) => Some(body),
                Err(e) => {
                    tracing::warn!("Error reading body of {}: {}", url, e);
                    None
                }
            }
        }
        Err(e) => {
            if e.is_timeout() {
                tracing::warn!("Error fetching {}: request timeout", url);
            } else if e.is_connect() {
                tracing::warn!("Error fetching {}: connection failed", url);
            } else {
                tracing::warn!("Error fetching {}: {}", url, e);
            }
            None
        }
    }
}

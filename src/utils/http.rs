// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};

use crate::error::{AppError, Result};
use crate::models::HttpConfig;

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Create a configured asynchronous HTTP client.
///
/// Sets the identity and language headers on every request; some agency
/// endpoints reject default client identities. No client-wide timeout: the
/// primary feed fetch runs once per invocation and may wait, while
/// enrichment fetches pass a per-request timeout.
pub fn create_client(config: &HttpConfig) -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
    let accept_language = HeaderValue::from_str(&config.accept_language)
        .map_err(|e| AppError::config(format!("invalid accept_language: {e}")))?;
    headers.insert(ACCEPT_LANGUAGE, accept_language);

    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .default_headers(headers)
        .build()?;
    Ok(client)
}

/// Fetch a URL and return the body text.
///
/// Non-success statuses fail with `AppError::Fetch`.
pub async fn fetch_text(client: &reqwest::Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::fetch(status.as_u16(), url));
    }
    Ok(response.text().await?)
}

/// Fetch a URL with a per-request wall-clock budget.
///
/// Used by the enrichment worker; a timed-out request maps to
/// `AppError::Timeout` and is not retried.
pub async fn fetch_text_with_timeout(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Result<String> {
    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| map_transport_error(e, url, timeout))?;
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::fetch(status.as_u16(), url));
    }
    response
        .text()
        .await
        .map_err(|e| map_transport_error(e, url, timeout))
}

fn map_transport_error(error: reqwest::Error, url: &str, timeout: Duration) -> AppError {
    if error.is_timeout() {
        AppError::timeout(url, timeout.as_secs())
    } else {
        AppError::Http(error)
    }
}

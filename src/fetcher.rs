use std::time::Duration;

use crate::error::FetchError;

/// Default fetch timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Fetches a single page body as UTF-8 text.
///
/// One GET, one attempt. The timeout bounds the whole request, connect
/// included. Non-success statuses and transport failures map to
/// [`FetchError::Transport`]; a body that is not valid UTF-8 maps to
/// [`FetchError::Decode`]. Redirects follow reqwest's default policy
/// (up to 10 hops).
pub async fn fetch(url: &str, timeout: Duration) -> Result<String, FetchError> {
    ::log::info!("Fetching: {}", url);

    let client = reqwest::Client::builder().timeout(timeout).build()?;

    let response = client.get(url).send().await?.error_for_status()?;
    let status = response.status();
    let bytes = response.bytes().await?;
    let body = String::from_utf8(bytes.to_vec())?;

    ::log::debug!("Fetched {} ({}, {} bytes)", url, status, body.len());

    Ok(body)
}

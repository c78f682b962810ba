// src/core/net.rs
// Blocking HTTP GET + JSON decode. One attempt per call, no retries.

use std::time::Duration;

use serde_json::Value;

use crate::config::consts::USER_AGENT;
use crate::error::FetchError;

/// GET `url` (with optional query pairs) and parse the body as JSON.
///
/// * any status >= 400 is an error; the body is not looked at
/// * the body must be valid UTF-8 JSON
/// * `timeout` covers connect + the whole response
pub fn fetch_json(
    url: &str,
    params: Option<&[(&str, String)]>,
    timeout: Duration,
) -> Result<Value, FetchError> {
    let network = |source| FetchError::Network { url: url.to_string(), source };

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(network)?;

    let mut req = client.get(url);
    if let Some(p) = params {
        req = req.query(p);
    }
    tracing::debug!(url, ?params, "GET");

    let resp = req.send().map_err(network)?;
    let status = resp.status();
    let final_url = resp.url().to_string();
    // non-standard codes up to 999 get through reqwest; anything >= 400 fails
    if status.as_u16() >= 400 {
        tracing::warn!(url = %final_url, %status, "request failed");
        return Err(FetchError::Status { url: final_url, status });
    }

    // raw bytes: invalid UTF-8 must fail the parse, not turn into U+FFFD
    let body = resp.bytes().map_err(network)?;
    tracing::debug!(url = %final_url, bytes = body.len(), "response body");

    serde_json::from_slice(&body).map_err(|source| FetchError::Parse { url: final_url, source })
}

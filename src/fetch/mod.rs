//! Shared HTTP GET helpers.
//!
//! Both the directory service and the fetch proxy answer with JSON; these helpers
//! turn a URL into a decoded value or a [`NetworkError`].

use std::time::Instant;

use serde::de::DeserializeOwned;

use crate::config::SLOW_REQUEST_THRESHOLD;
use crate::error_handling::NetworkError;

/// Performs a GET request and returns the body as text.
///
/// Non-success statuses are turned into [`NetworkError::Status`] before the body is read.
pub(crate) async fn get_text(client: &reqwest::Client, url: &str) -> Result<String, NetworkError> {
    let start = Instant::now();
    log::debug!("GET {}", url);

    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(NetworkError::Status {
            status,
            url: url.to_string(),
        });
    }

    let body = response.text().await?;

    let elapsed = start.elapsed();
    if elapsed > SLOW_REQUEST_THRESHOLD {
        log::warn!("Slow response from {} ({:.1}s)", url, elapsed.as_secs_f64());
    } else {
        log::debug!("{} answered in {}ms", url, elapsed.as_millis());
    }

    Ok(body)
}

/// Performs a GET request and decodes the JSON body into `T`.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, NetworkError> {
    let body = get_text(client, url).await?;
    Ok(serde_json::from_str(&body)?)
}

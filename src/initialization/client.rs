//! HTTP client initialization.

use std::time::Duration;

use crate::config::{Config, TCP_CONNECT_TIMEOUT_SECS};
use reqwest::ClientBuilder;

/// Initializes the HTTP client shared by the directory service and the proxy.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Request timeout from the config
/// - A fixed TCP connect timeout
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS))
        .user_agent(config.user_agent.clone())
        .build()
}

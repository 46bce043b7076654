//! Holiday page retrieval through the fetch proxy.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error_handling::NetworkError;
use crate::fetch::get_json;

/// JSON envelope returned by the proxy. Other fields (status, etc.) are ignored.
#[derive(Debug, Deserialize)]
struct ProxyEnvelope {
    contents: Option<String>,
}

/// Source of holiday page HTML.
#[async_trait]
pub trait HolidayPageSource: Send + Sync {
    /// Fetches `url` and returns the HTML body of the target page.
    async fn fetch_page(&self, url: &str) -> Result<String, NetworkError>;
}

/// [`HolidayPageSource`] reading the `contents` field of the proxy's JSON answer.
pub struct ProxyPageSource {
    client: reqwest::Client,
}

impl ProxyPageSource {
    /// Creates a page source using `client`.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HolidayPageSource for ProxyPageSource {
    async fn fetch_page(&self, url: &str) -> Result<String, NetworkError> {
        let envelope: ProxyEnvelope = get_json(&self.client, url).await?;
        let html = envelope.contents.ok_or(NetworkError::MissingContents)?;
        log::debug!("Proxy returned {} bytes of HTML", html.len());
        Ok(html)
    }
}

/// Opens a resolved holiday page URL for the user.
pub trait PageOpener: Send + Sync {
    /// Called with the non-proxied URL on every submission.
    fn open(&self, url: &str);
}

/// [`PageOpener`] that only logs the URL.
#[derive(Debug, Default)]
pub struct LogOpener;

impl PageOpener for LogOpener {
    fn open(&self, url: &str) {
        log::info!("Holiday page: {}", url);
    }
}

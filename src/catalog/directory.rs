//! Directory service access.
//!
//! The directory service lists the regions (states) and, per region, its
//! sub-regions (districts). [`DirectoryService`] is the seam the catalogs depend
//! on; [`HttpDirectory`] is the production implementation.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::{REGIONS_PATH, SUB_REGIONS_SEGMENT};
use crate::error_handling::NetworkError;
use crate::fetch::get_json;

/// Region as returned by the directory service. Other fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRegion {
    /// Two-letter code, e.g. `SP`
    pub sigla: String,
}

/// Sub-region as returned by the directory service. Other fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSubRegion {
    /// Opaque identifier (a number for the IBGE API)
    pub id: serde_json::Value,
    /// Display name
    pub nome: String,
}

/// Source of region and sub-region listings.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Lists every region, in whatever order the service returns them.
    async fn fetch_regions(&self) -> Result<Vec<RawRegion>, NetworkError>;

    /// Lists the sub-regions of the region with the given lowercase code.
    async fn fetch_sub_regions(&self, region_code: &str) -> Result<Vec<RawSubRegion>, NetworkError>;
}

/// [`DirectoryService`] backed by the IBGE localities REST API.
pub struct HttpDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDirectory {
    /// Creates a directory client rooted at `base_url` (trailing slashes are ignored).
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn regions_url(&self) -> String {
        format!("{}/{}", self.base_url, REGIONS_PATH)
    }

    fn sub_regions_url(&self, region_code: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base_url, REGIONS_PATH, region_code, SUB_REGIONS_SEGMENT
        )
    }
}

#[async_trait]
impl DirectoryService for HttpDirectory {
    async fn fetch_regions(&self) -> Result<Vec<RawRegion>, NetworkError> {
        get_json(&self.client, &self.regions_url()).await
    }

    async fn fetch_sub_regions(&self, region_code: &str) -> Result<Vec<RawSubRegion>, NetworkError> {
        get_json(&self.client, &self.sub_regions_url(region_code)).await
    }
}

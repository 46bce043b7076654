//! Region catalog: the list of states, loaded once and cached.

use std::sync::Arc;

use crate::catalog::directory::{DirectoryService, RawRegion};
use crate::error_handling::{update_error_stats, ProcessingStats, WarningType};
use crate::models::Region;

/// Sorts raw regions by code and maps them to [`Region`]s.
///
/// Sorting is case-sensitive on the code as published. Labels are forced to
/// uppercase so a label is always the uppercase form of its code.
pub fn build_regions(mut raw: Vec<RawRegion>) -> Vec<Region> {
    raw.sort_by(|a, b| a.sigla.cmp(&b.sigla));
    raw.into_iter()
        .map(|r| {
            let sigla = r.sigla.trim();
            Region {
                code: sigla.to_lowercase(),
                label: sigla.to_uppercase(),
            }
        })
        .collect()
}

/// Loads and caches the regions offered by the directory service.
pub struct RegionCatalog {
    directory: Arc<dyn DirectoryService>,
    stats: Arc<ProcessingStats>,
    regions: Option<Vec<Region>>,
}

impl RegionCatalog {
    /// Creates an empty (not yet loaded) catalog.
    pub fn new(directory: Arc<dyn DirectoryService>, stats: Arc<ProcessingStats>) -> Self {
        Self {
            directory,
            stats,
            regions: None,
        }
    }

    /// Returns the cached regions, fetching them on first use.
    ///
    /// A failed fetch is logged and yields an empty list. Failures are not
    /// cached, so a later call fetches again.
    pub async fn load(&mut self) -> &[Region] {
        if self.regions.is_none() {
            match self.directory.fetch_regions().await {
                Ok(raw) => {
                    let regions = build_regions(raw);
                    log::info!("Loaded {} regions", regions.len());
                    self.regions = Some(regions);
                }
                Err(e) => {
                    log::error!("Failed to fetch regions: {}", e);
                    update_error_stats(&self.stats, &e);
                    self.stats
                        .increment_warning(WarningType::RegionListUnavailable);
                }
            }
        }
        self.regions()
    }

    /// Regions loaded so far (empty before a successful [`load`](Self::load)).
    pub fn regions(&self) -> &[Region] {
        self.regions.as_deref().unwrap_or(&[])
    }

    /// Looks a region up by code, ignoring case and surrounding whitespace.
    pub fn find(&self, code: &str) -> Option<&Region> {
        let code = code.trim().to_lowercase();
        self.regions().iter().find(|r| r.code == code)
    }
}

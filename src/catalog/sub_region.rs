//! Sub-region catalog: the districts of one region.

use std::sync::Arc;

use crate::catalog::collation::{locale_cmp, same_name};
use crate::catalog::directory::{DirectoryService, RawSubRegion};
use crate::error_handling::{update_error_stats, ProcessingStats};
use crate::models::{Region, SubRegion, SubRegionId};

/// Sorts raw sub-regions by display name (locale-aware) and maps them to [`SubRegion`]s.
pub fn build_sub_regions(mut raw: Vec<RawSubRegion>) -> Vec<SubRegion> {
    raw.sort_by(|a, b| locale_cmp(&a.nome, &b.nome));
    raw.into_iter()
        .map(|r| SubRegion {
            id: SubRegionId(opaque_id(&r.id)),
            label: r.nome,
        })
        .collect()
}

// Strings are kept verbatim; numbers and anything else use their JSON text
fn opaque_id(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Finds a sub-region by name, ignoring accents, case and surrounding whitespace.
pub fn find_sub_region<'a>(sub_regions: &'a [SubRegion], name: &str) -> Option<&'a SubRegion> {
    sub_regions
        .iter()
        .find(|s| s.label == name.trim())
        .or_else(|| sub_regions.iter().find(|s| same_name(&s.label, name)))
}

/// Loads the sub-regions of a region. Nothing is cached.
pub struct SubRegionCatalog {
    directory: Arc<dyn DirectoryService>,
    stats: Arc<ProcessingStats>,
}

impl SubRegionCatalog {
    /// Creates a catalog reading from `directory`.
    pub fn new(directory: Arc<dyn DirectoryService>, stats: Arc<ProcessingStats>) -> Self {
        Self { directory, stats }
    }

    /// Fetches and sorts the sub-regions of `region`.
    ///
    /// A failed fetch is logged and yields an empty list.
    pub async fn load(&self, region: &Region) -> Vec<SubRegion> {
        match self.directory.fetch_sub_regions(&region.code).await {
            Ok(raw) => {
                let sub_regions = build_sub_regions(raw);
                log::info!(
                    "Loaded {} sub-regions for {}",
                    sub_regions.len(),
                    region.label
                );
                sub_regions
            }
            Err(e) => {
                log::error!("Failed to fetch sub-regions for {}: {}", region.label, e);
                update_error_stats(&self.stats, &e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(entries: &[(serde_json::Value, &str)]) -> Vec<RawSubRegion> {
        entries
            .iter()
            .map(|(id, nome)| RawSubRegion {
                id: id.clone(),
                nome: nome.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_build_sub_regions_locale_sorted() {
        let subs = build_sub_regions(raw(&[
            (json!(3), "São Paulo"),
            (json!(1), "Santos"),
            (json!(2), "Águas de Lindóia"),
            (json!(4), "Sé"),
            (json!(5), "americana"),
        ]));
        let labels: Vec<_> = subs.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Águas de Lindóia", "americana", "Santos", "São Paulo", "Sé"]
        );
        for pair in subs.windows(2) {
            assert_ne!(
                locale_cmp(&pair[0].label, &pair[1].label),
                std::cmp::Ordering::Greater
            );
        }
    }

    #[test]
    fn test_ids_are_opaque_text() {
        let subs = build_sub_regions(raw(&[(json!(355030805), "Sé"), (json!("abc"), "Bixiga")]));
        assert_eq!(subs[0].id, SubRegionId("abc".to_string()));
        assert_eq!(subs[1].id, SubRegionId("355030805".to_string()));
    }

    #[test]
    fn test_find_sub_region_prefers_exact_match() {
        let subs = build_sub_regions(raw(&[(json!(1), "Sao Paulo"), (json!(2), "São Paulo")]));
        assert_eq!(
            find_sub_region(&subs, "São Paulo").map(|s| s.id.0.as_str()),
            Some("2")
        );
        assert!(find_sub_region(&subs, "sao paulo").is_some());
        assert!(find_sub_region(&subs, "Campinas").is_none());
    }
}

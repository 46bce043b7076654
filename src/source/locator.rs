//! Holiday page URL construction.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::config::{
    PROXY_TARGET_PARAM, REGION_PLACEHOLDER, SUB_REGION_PLACEHOLDER, YEAR_PLACEHOLDER,
};
use crate::error_handling::InitializationError;
use crate::models::{Region, SubRegion, YearOption};

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").unwrap_or_else(|e| panic!("Whitespace pattern failed to compile: {}", e))
});

/// Replaces every run of whitespace with a single underscore.
pub fn normalize_sub_region(label: &str) -> String {
    WHITESPACE_RUN.replace_all(label, "_").into_owned()
}

/// Builds holiday page URLs and their proxied form.
#[derive(Debug, Clone)]
pub struct HolidaySourceLocator {
    site_url: String,
    proxy_url: Url,
}

impl HolidaySourceLocator {
    /// Creates a locator for the given site and proxy endpoints.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::EndpointError` if `proxy_url` is not an absolute URL.
    pub fn new(site_url: &str, proxy_url: &str) -> Result<Self, InitializationError> {
        let proxy = Url::parse(proxy_url).map_err(|source| InitializationError::EndpointError {
            url: proxy_url.to_string(),
            source,
        })?;
        Ok(Self {
            site_url: site_url.trim_end_matches('/').to_string(),
            proxy_url: proxy,
        })
    }

    /// URL of the holiday page for the selection.
    ///
    /// Missing choices are replaced by fixed placeholders rather than rejected;
    /// the site then answers with a page that has no holiday list.
    pub fn build_url(
        &self,
        sub_region: Option<&SubRegion>,
        region: Option<&Region>,
        year: Option<&YearOption>,
    ) -> String {
        let city = sub_region
            .map(|s| normalize_sub_region(&s.label))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| SUB_REGION_PLACEHOLDER.to_string());
        let uf = region
            .map(|r| r.code.to_uppercase())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| REGION_PLACEHOLDER.to_string());
        let year = year
            .map(|y| y.value.to_string())
            .unwrap_or_else(|| YEAR_PLACEHOLDER.to_string());

        format!(
            "{}/feriados-{}-{}.php?ano={}",
            self.site_url, city, uf, year
        )
    }

    /// Wraps `target` for retrieval through the fetch proxy.
    pub fn proxy_url(&self, target: &str) -> String {
        let mut url = self.proxy_url.clone();
        url.query_pairs_mut()
            .append_pair(PROXY_TARGET_PARAM, target);
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_PROXY_URL, DEFAULT_SITE_URL};
    use crate::models::SubRegionId;

    fn locator() -> HolidaySourceLocator {
        HolidaySourceLocator::new(DEFAULT_SITE_URL, DEFAULT_PROXY_URL).unwrap()
    }

    fn sub_region(label: &str) -> SubRegion {
        SubRegion {
            id: SubRegionId("1".to_string()),
            label: label.to_string(),
        }
    }

    #[test]
    fn test_build_url_normalizes_city_and_uppercases_uf() {
        let region = Region {
            code: "sp".to_string(),
            label: "SP".to_string(),
        };
        let url = locator().build_url(
            Some(&sub_region("São Paulo")),
            Some(&region),
            Some(&YearOption::new(2025)),
        );
        assert_eq!(
            url,
            "https://www.feriados.com.br/feriados-São_Paulo-SP.php?ano=2025"
        );
    }

    #[test]
    fn test_build_url_placeholders() {
        let url = locator().build_url(None, None, None);
        assert!(url.contains("feriados-Cidade não selecionada-UF não selecionada.php"));
        assert!(url.ends_with("?ano=Ano não selecionado"));
    }

    #[test]
    fn test_normalize_collapses_runs() {
        assert_eq!(normalize_sub_region("Santa  Rita\tdo\nSapucaí"), "Santa_Rita_do_Sapucaí");
        assert_eq!(normalize_sub_region("Sé"), "Sé");
    }

    #[test]
    fn test_proxy_url_round_trips_target() {
        let target = "https://www.feriados.com.br/feriados-São_Paulo-SP.php?ano=2025";
        let proxied = locator().proxy_url(target);
        assert!(proxied.starts_with("https://api.allorigins.win/get?url="));

        let parsed = Url::parse(&proxied).unwrap();
        let (key, value) = parsed.query_pairs().next().unwrap();
        assert_eq!(key, "url");
        assert_eq!(value, target);
    }

    #[test]
    fn test_invalid_proxy_rejected() {
        assert!(matches!(
            HolidaySourceLocator::new(DEFAULT_SITE_URL, "not a url"),
            Err(InitializationError::EndpointError { .. })
        ));
    }
}

//! Session orchestration: the region → sub-region cascade and the holiday lookup.
//!
//! A session owns every piece of mutable state (selection, sub-region list,
//! holiday list). Remote calls never mutate it directly: sub-region fetches
//! return a [`SubRegionResponse`] that is applied only if it still matches the
//! latest region change.

use std::sync::Arc;

use crate::catalog::{DirectoryService, RegionCatalog, SubRegionCatalog};
use crate::error_handling::{update_error_stats, InfoType, NetworkError, ProcessingStats};
use crate::models::{HolidayRecord, Region, SubRegion, YearOption};
use crate::parse::{HolidayExtractor, HtmlDocumentParser};
use crate::selection::{RegionTransition, SelectionState, SubRegionRequest};
use crate::source::{HolidayPageSource, HolidaySourceLocator, PageOpener};

/// Sub-regions fetched for a [`SubRegionRequest`].
#[derive(Debug)]
pub struct SubRegionResponse {
    /// The request this answers
    pub request: SubRegionRequest,
    /// Sorted sub-regions (empty if the fetch failed)
    pub sub_regions: Vec<SubRegion>,
}

/// Result of a holiday lookup.
#[derive(Debug)]
pub enum LookupOutcome {
    /// The holiday list was replaced with `count` freshly extracted records.
    Replaced {
        /// Number of records now displayed
        count: usize,
    },
    /// The fetch failed; the previous holiday list is still displayed.
    Retained {
        /// Why the fetch failed
        error: NetworkError,
    },
}

/// A holiday lookup: the resolved page URL and what happened to the list.
#[derive(Debug)]
pub struct Lookup {
    /// Holiday page URL (not proxied)
    pub url: String,
    /// Effect on the displayed list
    pub outcome: LookupOutcome,
}

/// Remote collaborators of a session.
pub struct SessionServices {
    /// Region and sub-region listings
    pub directory: Arc<dyn DirectoryService>,
    /// Holiday page retrieval
    pub pages: Arc<dyn HolidayPageSource>,
    /// Receives every resolved page URL
    pub opener: Arc<dyn PageOpener>,
}

/// State and behaviour of one interactive session.
pub struct HolidaySession {
    regions: RegionCatalog,
    sub_region_catalog: SubRegionCatalog,
    sub_regions: Vec<SubRegion>,
    selection: SelectionState,
    years: Vec<YearOption>,
    holidays: Vec<HolidayRecord>,
    locator: HolidaySourceLocator,
    extractor: HolidayExtractor,
    pages: Arc<dyn HolidayPageSource>,
    opener: Arc<dyn PageOpener>,
    stats: Arc<ProcessingStats>,
}

impl HolidaySession {
    /// Creates a session with nothing selected and nothing loaded.
    pub fn new(
        services: SessionServices,
        locator: HolidaySourceLocator,
        years: Vec<YearOption>,
        stats: Arc<ProcessingStats>,
    ) -> Self {
        Self {
            regions: RegionCatalog::new(services.directory.clone(), stats.clone()),
            sub_region_catalog: SubRegionCatalog::new(services.directory, stats.clone()),
            sub_regions: Vec::new(),
            selection: SelectionState::new(),
            years,
            holidays: Vec::new(),
            locator,
            extractor: HolidayExtractor::new(HtmlDocumentParser).with_stats(stats.clone()),
            pages: services.pages,
            opener: services.opener,
            stats,
        }
    }

    /// Loads the region list (cached after the first success).
    pub async fn load_regions(&mut self) -> &[Region] {
        self.regions.load().await
    }

    /// The region catalog.
    pub fn regions(&self) -> &RegionCatalog {
        &self.regions
    }

    /// Sub-regions of the selected region (empty while none is loaded).
    pub fn sub_regions(&self) -> &[SubRegion] {
        &self.sub_regions
    }

    /// Selectable years.
    pub fn years(&self) -> &[YearOption] {
        &self.years
    }

    /// Current selection.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Holidays currently displayed.
    pub fn holidays(&self) -> &[HolidayRecord] {
        &self.holidays
    }

    /// Session statistics.
    pub fn stats(&self) -> &Arc<ProcessingStats> {
        &self.stats
    }

    /// Region change transition.
    ///
    /// Synchronously resets the sub-region selection and empties the sub-region
    /// list. Returns the fetch to issue, or `None` when the region was cleared.
    pub fn on_region_changed(&mut self, region: Option<Region>) -> Option<SubRegionRequest> {
        self.sub_regions.clear();
        match self.selection.set_region(region) {
            RegionTransition::Fetch(request) => {
                log::debug!(
                    "Region changed to {} (generation {})",
                    request.region.label,
                    request.generation
                );
                Some(request)
            }
            RegionTransition::Clear => {
                log::debug!("Region cleared");
                None
            }
        }
    }

    /// Fetches the sub-regions for `request`. Does not touch session state.
    pub async fn fetch_sub_regions(&self, request: SubRegionRequest) -> SubRegionResponse {
        let sub_regions = self.sub_region_catalog.load(&request.region).await;
        SubRegionResponse {
            request,
            sub_regions,
        }
    }

    /// Applies a sub-region response if it answers the latest region change.
    ///
    /// Returns `false` (and changes nothing) for a stale response. Applying also
    /// resets the sub-region selection, whether or not the fetch succeeded.
    pub fn apply_sub_regions(&mut self, response: SubRegionResponse) -> bool {
        if !self.selection.is_current(response.request.generation) {
            log::debug!(
                "Discarding stale sub-regions for {} (generation {}, current {})",
                response.request.region.label,
                response.request.generation,
                self.selection.generation()
            );
            self.stats.increment_info(InfoType::StaleSubRegionResponse);
            return false;
        }
        self.sub_regions = response.sub_regions;
        self.selection.clear_sub_region();
        true
    }

    /// Selects a region and loads its sub-regions.
    pub async fn select_region(&mut self, region: Option<Region>) {
        if let Some(request) = self.on_region_changed(region) {
            let response = self.fetch_sub_regions(request).await;
            self.apply_sub_regions(response);
        }
    }

    /// Selects a sub-region of the selected region.
    ///
    /// Rejected (returns `false`) while no region is selected or when the
    /// sub-region is not in the current list.
    pub fn select_sub_region(&mut self, sub_region: Option<SubRegion>) -> bool {
        if let Some(candidate) = &sub_region {
            if !self.sub_regions.contains(candidate) {
                log::warn!(
                    "Sub-region {} does not belong to the selected region",
                    candidate.label
                );
                return false;
            }
        }
        self.selection.set_sub_region(sub_region)
    }

    /// Selects a year.
    pub fn select_year(&mut self, year: Option<YearOption>) {
        self.selection.set_year(year);
    }

    /// Looks up the holidays for the current selection.
    ///
    /// The resolved URL goes to the page opener first, whatever the fetch does.
    /// On success the holiday list is replaced wholesale; on failure the error
    /// is logged and the previous list is kept on display.
    pub async fn submit(&mut self) -> Lookup {
        let url = self.locator.build_url(
            self.selection.sub_region(),
            self.selection.region(),
            self.selection.year(),
        );
        log::info!("Holiday page URL: {}", url);
        self.opener.open(&url);

        let proxied = self.locator.proxy_url(&url);
        let outcome = match self.pages.fetch_page(&proxied).await {
            Ok(html) => {
                self.holidays = self.extractor.extract(&html);
                log::info!("Extracted {} holidays", self.holidays.len());
                LookupOutcome::Replaced {
                    count: self.holidays.len(),
                }
            }
            Err(error) => {
                log::error!("Failed to fetch holiday page {}: {}", url, error);
                update_error_stats(&self.stats, &error);
                self.stats.increment_info(InfoType::HolidayListRetained);
                LookupOutcome::Retained { error }
            }
        };

        Lookup { url, outcome }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{RawRegion, RawSubRegion};
    use crate::config::{DEFAULT_PROXY_URL, DEFAULT_SITE_URL};
    use crate::error_handling::ErrorType;
    use crate::selection::year_options;
    use async_trait::async_trait;
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;

    struct FakeDirectory {
        sub_regions: HashMap<String, Vec<&'static str>>,
    }

    #[async_trait]
    impl DirectoryService for FakeDirectory {
        async fn fetch_regions(&self) -> Result<Vec<RawRegion>, NetworkError> {
            Ok(vec![
                RawRegion {
                    sigla: "SP".to_string(),
                },
                RawRegion {
                    sigla: "RJ".to_string(),
                },
            ])
        }

        async fn fetch_sub_regions(&self, code: &str) -> Result<Vec<RawSubRegion>, NetworkError> {
            match self.sub_regions.get(code) {
                Some(names) => Ok(names
                    .iter()
                    .enumerate()
                    .map(|(i, nome)| RawSubRegion {
                        id: serde_json::json!(i),
                        nome: nome.to_string(),
                    })
                    .collect()),
                None => Err(NetworkError::MissingContents),
            }
        }
    }

    /// Serves queued answers in order.
    struct ScriptedPages {
        answers: Mutex<VecDeque<Result<String, NetworkError>>>,
        requested: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl HolidayPageSource for ScriptedPages {
        async fn fetch_page(&self, url: &str) -> Result<String, NetworkError> {
            self.requested.lock().unwrap().push(url.to_string());
            self.answers
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(NetworkError::MissingContents))
        }
    }

    #[derive(Default)]
    struct RecordingOpener {
        opened: Mutex<Vec<String>>,
    }

    impl PageOpener for RecordingOpener {
        fn open(&self, url: &str) {
            self.opened.lock().unwrap().push(url.to_string());
        }
    }

    struct Harness {
        session: HolidaySession,
        pages: Arc<ScriptedPages>,
        opener: Arc<RecordingOpener>,
    }

    fn harness(answers: Vec<Result<String, NetworkError>>) -> Harness {
        let directory = Arc::new(FakeDirectory {
            sub_regions: HashMap::from([
                ("sp".to_string(), vec!["São Paulo", "Santos", "Campinas"]),
                ("rj".to_string(), vec!["Niterói", "Rio de Janeiro"]),
            ]),
        });
        let pages = Arc::new(ScriptedPages {
            answers: Mutex::new(answers.into()),
            requested: Mutex::new(Vec::new()),
        });
        let opener = Arc::new(RecordingOpener::default());
        let services = SessionServices {
            directory,
            pages: pages.clone(),
            opener: opener.clone(),
        };
        let locator = HolidaySourceLocator::new(DEFAULT_SITE_URL, DEFAULT_PROXY_URL).unwrap();
        let session = HolidaySession::new(
            services,
            locator,
            year_options(2025),
            Arc::new(ProcessingStats::new()),
        );
        Harness {
            session,
            pages,
            opener,
        }
    }

    const PAGE: &str = r#"<ul class="multi-column">
        <li><span>01/01 - Ano Novo</span></li>
        <li><span class="style_lista_facultativos">25/01 - Aniversário de São Paulo</span></li>
    </ul>"#;

    async fn select_sp(session: &mut HolidaySession) -> Region {
        session.load_regions().await;
        let sp = session.regions().find("sp").cloned().unwrap();
        session.select_region(Some(sp.clone())).await;
        sp
    }

    #[tokio::test]
    async fn test_region_change_resets_sub_region_before_fetch_completes() {
        let mut h = harness(vec![]);
        select_sp(&mut h.session).await;
        let santos = h.session.sub_regions()[1].clone();
        assert_eq!(santos.label, "Santos");
        assert!(h.session.select_sub_region(Some(santos)));

        let rj = h.session.regions().find("rj").cloned().unwrap();
        let request = h.session.on_region_changed(Some(rj)).unwrap();
        // Reset is synchronous: nothing has been fetched yet
        assert!(h.session.selection().sub_region().is_none());
        assert!(h.session.sub_regions().is_empty());

        let response = h.session.fetch_sub_regions(request).await;
        assert!(h.session.apply_sub_regions(response));
        let labels: Vec<_> = h.session.sub_regions().iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Niterói", "Rio de Janeiro"]);
    }

    #[tokio::test]
    async fn test_stale_sub_region_response_is_ignored() {
        let mut h = harness(vec![]);
        h.session.load_regions().await;
        let sp = h.session.regions().find("sp").cloned().unwrap();
        let rj = h.session.regions().find("rj").cloned().unwrap();

        let stale = h.session.on_region_changed(Some(sp)).unwrap();
        let fresh = h.session.on_region_changed(Some(rj)).unwrap();

        // The older fetch resolves last
        let fresh_response = h.session.fetch_sub_regions(fresh).await;
        let stale_response = h.session.fetch_sub_regions(stale).await;
        assert!(h.session.apply_sub_regions(fresh_response));
        assert!(!h.session.apply_sub_regions(stale_response));

        assert_eq!(h.session.sub_regions()[0].label, "Niterói");
        assert_eq!(
            h.session
                .stats()
                .get_info_count(InfoType::StaleSubRegionResponse),
            1
        );
    }

    #[tokio::test]
    async fn test_clearing_region_clears_sub_regions_without_fetch() {
        let mut h = harness(vec![]);
        select_sp(&mut h.session).await;
        assert!(!h.session.sub_regions().is_empty());

        assert!(h.session.on_region_changed(None).is_none());
        assert!(h.session.sub_regions().is_empty());
        assert!(!h.session.select_sub_region(None));
    }

    #[tokio::test]
    async fn test_failed_sub_region_fetch_still_resets_selection() {
        let mut h = harness(vec![]);
        select_sp(&mut h.session).await;
        let sp_city = h.session.sub_regions()[0].clone();
        h.session.select_sub_region(Some(sp_city));

        let unknown = Region {
            code: "xx".to_string(),
            label: "XX".to_string(),
        };
        h.session.select_region(Some(unknown)).await;
        assert!(h.session.sub_regions().is_empty());
        assert!(h.session.selection().sub_region().is_none());
        assert_eq!(
            h.session
                .stats()
                .get_error_count(ErrorType::ProxyMissingContents),
            1
        );
    }

    #[tokio::test]
    async fn test_sub_region_from_other_region_is_rejected() {
        let mut h = harness(vec![]);
        select_sp(&mut h.session).await;
        let foreign = SubRegion {
            id: crate::models::SubRegionId("0".to_string()),
            label: "Niterói".to_string(),
        };
        assert!(!h.session.select_sub_region(Some(foreign)));
        assert!(h.session.selection().sub_region().is_none());
    }

    #[tokio::test]
    async fn test_submit_replaces_holidays_and_opens_url() {
        let mut h = harness(vec![Ok(PAGE.to_string())]);
        select_sp(&mut h.session).await;
        let city = h.session.sub_regions()[2].clone();
        assert_eq!(city.label, "São Paulo");
        h.session.select_sub_region(Some(city));
        h.session.select_year(Some(YearOption::new(2026)));

        let lookup = h.session.submit().await;
        assert_eq!(
            lookup.url,
            "https://www.feriados.com.br/feriados-São_Paulo-SP.php?ano=2026"
        );
        assert!(matches!(lookup.outcome, LookupOutcome::Replaced { count: 2 }));
        assert_eq!(h.session.holidays()[1].description, "Aniversário de São Paulo");
        assert!(h.session.holidays()[1].is_discretionary);

        assert_eq!(h.opener.opened.lock().unwrap().as_slice(), &[lookup.url.clone()]);
        let requested = h.pages.requested.lock().unwrap();
        assert!(requested[0].starts_with("https://api.allorigins.win/get?url=https%3A%2F%2Fwww.feriados.com.br"));
    }

    #[tokio::test]
    async fn test_failed_submit_retains_previous_holidays() {
        let mut h = harness(vec![Ok(PAGE.to_string()), Err(NetworkError::MissingContents)]);
        select_sp(&mut h.session).await;

        h.session.submit().await;
        let before = h.session.holidays().to_vec();
        assert_eq!(before.len(), 2);

        let lookup = h.session.submit().await;
        assert!(matches!(
            lookup.outcome,
            LookupOutcome::Retained {
                error: NetworkError::MissingContents
            }
        ));
        // Deliberately not cleared: the last good list stays on display
        assert_eq!(h.session.holidays(), before.as_slice());
        assert_eq!(
            h.session
                .stats()
                .get_info_count(InfoType::HolidayListRetained),
            1
        );
        // Opened on every submission, successful or not
        assert_eq!(h.opener.opened.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_page_replaces_previous_holidays() {
        let mut h = harness(vec![
            Ok(PAGE.to_string()),
            Ok("<html><body>Página não encontrada</body></html>".to_string()),
        ]);
        h.session.submit().await;
        assert_eq!(h.session.holidays().len(), 2);

        let lookup = h.session.submit().await;
        assert!(matches!(lookup.outcome, LookupOutcome::Replaced { count: 0 }));
        assert!(h.session.holidays().is_empty());
        assert!(lookup.url.contains("Cidade não selecionada"));
    }
}

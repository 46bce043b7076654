//! city_holidays library: public holidays of a Brazilian city for a given year
//!
//! The library drives a small selection state machine (region → sub-region,
//! plus a year), resolves the holiday page for the selection, fetches it through
//! a CORS proxy and extracts a typed, ordered holiday list from its HTML.
//!
//! # Example
//!
//! ```no_run
//! use city_holidays::{run_lookup, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     region: Some("SP".to_string()),
//!     sub_region: Some("Santos".to_string()),
//!     year: Some(2026),
//!     ..Default::default()
//! };
//!
//! let report = run_lookup(config).await?;
//! for holiday in &report.holidays {
//!     println!("{} - {}", holiday.date, holiday.description);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

pub mod app;
pub mod catalog;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
pub mod models;
pub mod parse;
pub mod selection;
pub mod source;
mod utils;

// Re-export public API
pub use app::{HolidaySession, Lookup, LookupOutcome, SessionServices};
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{
    ErrorType, InfoType, InitializationError, NetworkError, ProcessingStats, WarningType,
};
pub use models::{HolidayRecord, Region, SubRegion, SubRegionId, YearOption};
pub use run::{list_regions, list_sub_regions, run_lookup, LookupReport};

// Entry points used by the binary
mod run {
    use std::sync::Arc;
    use std::time::Instant;

    use anyhow::{bail, Context, Result};
    use log::info;

    use crate::app::{HolidaySession, LookupOutcome, SessionServices};
    use crate::catalog::{find_sub_region, HttpDirectory};
    use crate::config::Config;
    use crate::error_handling::ProcessingStats;
    use crate::initialization::init_client;
    use crate::models::{HolidayRecord, Region, SubRegion};
    use crate::selection::upcoming_years;
    use crate::source::{HolidaySourceLocator, LogOpener, ProxyPageSource};

    /// Result of a holiday lookup run.
    #[derive(Debug, Clone)]
    pub struct LookupReport {
        /// Holiday page URL (not proxied)
        pub source_url: String,
        /// Selected region label, if any
        pub region: Option<String>,
        /// Selected sub-region label, if any
        pub sub_region: Option<String>,
        /// Selected year, if any
        pub year: Option<i32>,
        /// Extracted holidays, in page order
        pub holidays: Vec<HolidayRecord>,
        /// Why the page could not be fetched, if it could not
        pub fetch_error: Option<String>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    impl LookupReport {
        /// Heading shown above the holiday list.
        pub fn heading(&self) -> String {
            let mut heading = String::from("Feriados");
            if let Some(sub_region) = &self.sub_region {
                heading.push(' ');
                heading.push_str(sub_region);
            }
            if let Some(year) = self.year {
                heading.push_str(&format!(" {}", year));
            }
            heading
        }
    }

    fn build_session(config: &Config) -> Result<HolidaySession> {
        let client = init_client(config).context("Failed to initialize HTTP client")?;
        let locator = HolidaySourceLocator::new(&config.site_url, &config.proxy_url)?;
        let services = SessionServices {
            directory: Arc::new(HttpDirectory::new(client.clone(), &config.directory_url)),
            pages: Arc::new(ProxyPageSource::new(client)),
            opener: Arc::new(LogOpener),
        };
        Ok(HolidaySession::new(
            services,
            locator,
            upcoming_years(),
            Arc::new(ProcessingStats::new()),
        ))
    }

    async fn select_region(session: &mut HolidaySession, code: &str) -> Result<Region> {
        let regions = session.load_regions().await;
        if regions.is_empty() {
            bail!("Region list is unavailable (see log for the directory service error)");
        }
        let region = match session.regions().find(code) {
            Some(region) => region.clone(),
            None => {
                let known: Vec<_> = session
                    .regions()
                    .regions()
                    .iter()
                    .map(|r| r.label.as_str())
                    .collect();
                bail!("Unknown UF '{}' (expected one of: {})", code, known.join(", "));
            }
        };
        session.select_region(Some(region.clone())).await;
        Ok(region)
    }

    fn select_sub_region(
        session: &mut HolidaySession,
        region: &Region,
        name: &str,
    ) -> Result<SubRegion> {
        if session.sub_regions().is_empty() {
            bail!(
                "Sub-region list of {} is unavailable (see log for the directory service error)",
                region.label
            );
        }
        let sub_region = find_sub_region(session.sub_regions(), name)
            .cloned()
            .with_context(|| format!("Unknown city '{}' in {}", name, region.label))?;
        session.select_sub_region(Some(sub_region.clone()));
        Ok(sub_region)
    }

    /// Lists the regions offered by the directory service.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built or the region list is unavailable.
    pub async fn list_regions(config: Config) -> Result<Vec<Region>> {
        let mut session = build_session(&config)?;
        let regions = session.load_regions().await.to_vec();
        if regions.is_empty() {
            bail!("Region list is unavailable (see log for the directory service error)");
        }
        Ok(regions)
    }

    /// Lists the sub-regions of `config.region`.
    ///
    /// # Errors
    ///
    /// Fails if no region is configured, the region is unknown, or the list is unavailable.
    pub async fn list_sub_regions(config: Config) -> Result<Vec<SubRegion>> {
        let code = config
            .region
            .clone()
            .context("A UF is required to list its cities")?;
        let mut session = build_session(&config)?;
        let region = select_region(&mut session, &code).await?;
        if session.sub_regions().is_empty() {
            bail!("Sub-region list of {} is unavailable", region.label);
        }
        Ok(session.sub_regions().to_vec())
    }

    /// Resolves the configured selection and looks up its holidays.
    ///
    /// Choices left out of the configuration stay unselected, and the page URL
    /// uses the corresponding placeholders. A failed page fetch does not fail
    /// the run: it is reported in [`LookupReport::fetch_error`].
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built, or a configured region, city or
    /// year cannot be matched against the available options.
    pub async fn run_lookup(config: Config) -> Result<LookupReport> {
        let start = Instant::now();
        let mut session = build_session(&config)?;

        if let Some(code) = &config.region {
            let region = select_region(&mut session, code).await?;
            if let Some(name) = &config.sub_region {
                select_sub_region(&mut session, &region, name)?;
            }
        } else if config.sub_region.is_some() {
            bail!("A UF is required to select a city");
        }

        if let Some(value) = config.year {
            let year = session
                .years()
                .iter()
                .find(|y| y.value == value)
                .cloned()
                .with_context(|| {
                    let years: Vec<_> = session.years().iter().map(|y| y.label.as_str()).collect();
                    format!("Year {} is not offered (expected one of: {})", value, years.join(", "))
                })?;
            session.select_year(Some(year));
        }

        let lookup = session.submit().await;
        let fetch_error = match lookup.outcome {
            LookupOutcome::Replaced { count } => {
                info!("Found {} holidays", count);
                None
            }
            LookupOutcome::Retained { error } => Some(error.to_string()),
        };
        session.stats().log_summary();

        let selection = session.selection();
        Ok(LookupReport {
            source_url: lookup.url,
            region: selection.region().map(|r| r.label.clone()),
            sub_region: selection.sub_region().map(|s| s.label.clone()),
            year: selection.year().map(|y| y.value),
            holidays: session.holidays().to_vec(),
            fetch_error,
            elapsed_seconds: start.elapsed().as_secs_f64(),
        })
    }

}

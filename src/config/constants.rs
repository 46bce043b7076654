//! Configuration constants.
//!
//! This module defines the endpoints, the HTML selector contract of the holiday
//! site and the fallback values used throughout the application.

use std::time::Duration;

// Remote endpoints (used as defaults)
/// Base URL of the directory service listing states and their districts
pub const DEFAULT_DIRECTORY_URL: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";
/// Base URL of the site publishing the holiday pages
pub const DEFAULT_SITE_URL: &str = "https://www.feriados.com.br";
/// Fetch proxy returning the target page inside a JSON envelope (`contents` field)
pub const DEFAULT_PROXY_URL: &str = "https://api.allorigins.win/get";

/// Path of the region listing, relative to the directory base URL
pub const REGIONS_PATH: &str = "estados";
/// Path segment appended after `estados/{code}/` to list the sub-regions of a region
pub const SUB_REGIONS_SEGMENT: &str = "distritos";
/// Query parameter of the proxy carrying the URL-encoded target page
pub const PROXY_TARGET_PARAM: &str = "url";

// Network operation timeouts
/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;
/// Logged when a request takes longer than this
pub const SLOW_REQUEST_THRESHOLD: Duration = Duration::from_secs(5);

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Holiday page selector contract
/// Class of the list(s) holding the holiday items
pub const MULTI_COLUMN_CLASS: &str = "multi-column";
/// Inline element inside each list item holding the "date - description" text
pub const MARKER_ELEMENT: &str = "span";
/// Class set on the marker element of optional (discretionary) holidays
pub const DISCRETIONARY_CLASS: &str = "style_lista_facultativos";
/// Separator between the date and the description in the marker text
pub const DATE_SEPARATOR: &str = " - ";

// Placeholders interpolated into the page URL when a choice is missing
/// Used when no sub-region (city) is selected
pub const SUB_REGION_PLACEHOLDER: &str = "Cidade não selecionada";
/// Used when no region (UF) is selected
pub const REGION_PLACEHOLDER: &str = "UF não selecionada";
/// Used when no year is selected
pub const YEAR_PLACEHOLDER: &str = "Ano não selecionado";

/// Number of selectable years, starting with the current one
pub const YEAR_OPTION_COUNT: i32 = 6;

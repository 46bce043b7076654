//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_DIRECTORY_URL, DEFAULT_PROXY_URL, DEFAULT_SITE_URL, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How the holiday list is printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Two color-coded columns
    Plain,
    /// JSON array of records
    Json,
}

/// Application configuration.
///
/// Parsed from the command line by the binary, or built programmatically
/// (see [`Config::default`]) when the crate is used as a library.
///
/// # Examples
///
/// ```no_run
/// use city_holidays::Config;
///
/// let config = Config {
///     region: Some("sp".to_string()),
///     sub_region: Some("São Paulo".to_string()),
///     year: Some(2026),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "city_holidays",
    about = "Lists the public holidays of a Brazilian city for a given year"
)]
pub struct Config {
    /// Region (UF) code, e.g. `SP`
    #[arg(long = "uf")]
    pub region: Option<String>,

    /// Sub-region (city or district) name, e.g. `São Paulo`
    #[arg(long = "city")]
    pub sub_region: Option<String>,

    /// Year to look up (current year up to five years ahead)
    #[arg(long)]
    pub year: Option<i32>,

    /// Print the available regions and exit
    #[arg(long)]
    pub list_regions: bool,

    /// Print the sub-regions of `--uf` and exit
    #[arg(long = "list-cities", requires = "region")]
    pub list_sub_regions: bool,

    /// Directory service base URL
    #[arg(long, env = "HOLIDAYS_DIRECTORY_URL", default_value = DEFAULT_DIRECTORY_URL)]
    pub directory_url: String,

    /// Holiday site base URL
    #[arg(long, env = "HOLIDAYS_SITE_URL", default_value = DEFAULT_SITE_URL)]
    pub site_url: String,

    /// Fetch proxy URL
    #[arg(long, env = "HOLIDAYS_PROXY_URL", default_value = DEFAULT_PROXY_URL)]
    pub proxy_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Output format of the holiday list
    #[arg(long, value_enum, default_value = "plain")]
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: None,
            sub_region: None,
            year: None,
            list_regions: false,
            list_sub_regions: false,
            directory_url: DEFAULT_DIRECTORY_URL.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            proxy_url: DEFAULT_PROXY_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            output: OutputFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.region.is_none());
        assert!(config.sub_region.is_none());
        assert!(config.year.is_none());
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.directory_url, DEFAULT_DIRECTORY_URL);
        assert_eq!(config.proxy_url, DEFAULT_PROXY_URL);
        assert_eq!(config.output, OutputFormat::Plain);
    }

    #[test]
    fn test_default_matches_cli_defaults() {
        // Defaults of the parser and of the programmatic config must not drift apart
        let parsed = Config::try_parse_from(["city_holidays"]).unwrap();
        let default = Config::default();
        assert_eq!(parsed.site_url, default.site_url);
        assert_eq!(parsed.timeout_seconds, default.timeout_seconds);
        assert_eq!(parsed.user_agent, default.user_agent);
        assert_eq!(parsed.output, default.output);
    }
}

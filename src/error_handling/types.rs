//! Error type definitions.
//!
//! This module defines all error, warning, and info types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// A configured endpoint is not a valid absolute URL.
    #[error("Invalid endpoint URL '{url}': {source}")]
    EndpointError {
        /// The offending value
        url: String,
        /// Parse failure reported by the `url` crate
        source: url::ParseError,
    },
}

/// Failure of any remote call (directory service, proxy, holiday page).
///
/// Callers never propagate it past the component that issued the request: the
/// error is logged, counted, and the affected collection degrades to empty (or,
/// for the holiday list, to its previous value).
#[derive(Error, Debug)]
pub enum NetworkError {
    /// Transport-level failure (DNS, connect, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] ReqwestError),

    /// The server answered with a non-success status.
    #[error("Unexpected HTTP status {status} from {url}")]
    Status {
        /// Status returned by the server
        status: reqwest::StatusCode,
        /// Requested URL
        url: String,
    },

    /// The body was not the JSON shape we expected.
    #[error("Malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The proxy envelope carried no page body.
    #[error("Proxy response has no page contents")]
    MissingContents,
}

/// Types of errors that can occur while talking to remote services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    HttpRequestTooManyRequests,
    // Status code errors
    HttpRequestNotFound,            // 404 Not Found
    HttpRequestClientError,         // other 4xx
    HttpRequestServerError,         // 5xx
    HttpRequestStatusError,         // anything else that is not 2xx
    // Payload errors
    JsonDecodeError,
    ProxyMissingContents,
}

/// Types of warnings that can occur while processing results.
///
/// Warnings indicate degraded but non-fatal outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    MissingHolidayMarker, // List item without the inline date/description element (skipped)
    EmptyHolidayList,     // No holiday list on the page
    RegionListUnavailable,
}

/// Types of informational metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    StaleSubRegionResponse, // Response for a superseded region selection was dropped
    HolidayListRetained,    // Fetch failed, previous list kept on display
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Human-readable label used in logs and summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestTooManyRequests => "Too many requests",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestClientError => "Client error (4xx)",
            ErrorType::HttpRequestServerError => "Server error (5xx)",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::JsonDecodeError => "Malformed JSON payload",
            ErrorType::ProxyMissingContents => "Proxy returned no page contents",
        }
    }
}

impl std::fmt::Display for WarningType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl WarningType {
    /// Human-readable label used in logs and summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::MissingHolidayMarker => "Holiday item without marker",
            WarningType::EmptyHolidayList => "No holidays found on page",
            WarningType::RegionListUnavailable => "Region list unavailable",
        }
    }
}

impl std::fmt::Display for InfoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl InfoType {
    /// Human-readable label used in logs and summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::StaleSubRegionResponse => "Stale sub-region response discarded",
            InfoType::HolidayListRetained => "Previous holiday list retained",
        }
    }
}

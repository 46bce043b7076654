//! Error categorization.
//!
//! Maps network failures onto the [`ErrorType`] counters.

use super::stats::ProcessingStats;
use super::types::{ErrorType, NetworkError};

/// Categorizes a `reqwest::Error` into an `ErrorType`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if let Some(status) = error.status() {
        return categorize_status(status);
    }

    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Categorizes a non-success HTTP status.
pub fn categorize_status(status: reqwest::StatusCode) -> ErrorType {
    match status.as_u16() {
        404 => ErrorType::HttpRequestNotFound,
        429 => ErrorType::HttpRequestTooManyRequests,
        _ if status.is_client_error() => ErrorType::HttpRequestClientError,
        _ if status.is_server_error() => ErrorType::HttpRequestServerError,
        _ => ErrorType::HttpRequestStatusError,
    }
}

/// Categorizes any [`NetworkError`].
pub fn categorize_network_error(error: &NetworkError) -> ErrorType {
    match error {
        NetworkError::Http(e) => categorize_reqwest_error(e),
        NetworkError::Status { status, .. } => categorize_status(*status),
        NetworkError::Json(_) => ErrorType::JsonDecodeError,
        NetworkError::MissingContents => ErrorType::ProxyMissingContents,
    }
}

/// Records a network failure in the processing statistics.
pub fn update_error_stats(stats: &ProcessingStats, error: &NetworkError) {
    stats.increment_error(categorize_network_error(error));
}

//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions and categorization
//! - Processing statistics tracking (errors, warnings, info metrics)
//!
//! Error types are categorized into:
//! - **Errors**: Remote calls that failed
//! - **Warnings**: Results that came back degraded (skipped items, empty lists)
//! - **Info**: Informational metrics (stale responses dropped, lists retained)

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{
    categorize_network_error, categorize_reqwest_error, categorize_status, update_error_stats,
};
pub use stats::ProcessingStats;
pub use types::{ErrorType, InfoType, InitializationError, NetworkError, WarningType};

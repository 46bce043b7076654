//! Main application modules.
//!
//! This module provides the session orchestrator driving the selection cascade
//! and the holiday lookup, plus the terminal presenter used by the binary.

pub mod render;
pub mod session;

// Re-export public API
pub use render::{render_columns, split_columns};
pub use session::{
    HolidaySession, Lookup, LookupOutcome, SessionServices, SubRegionResponse,
};

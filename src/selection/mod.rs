//! User selection: region, sub-region and year.

mod state;
mod year;

pub use state::{RegionTransition, SelectionState, SubRegionRequest};
pub use year::{upcoming_years, year_options};

//! Selectable years.

use chrono::Datelike;

use crate::config::YEAR_OPTION_COUNT;
use crate::models::YearOption;

/// The `YEAR_OPTION_COUNT` years starting at `first_year`, ascending.
pub fn year_options(first_year: i32) -> Vec<YearOption> {
    (0..YEAR_OPTION_COUNT)
        .map(|offset| YearOption::new(first_year + offset))
        .collect()
}

/// Year options starting at the current local calendar year.
pub fn upcoming_years() -> Vec<YearOption> {
    year_options(chrono::Local::now().year())
}

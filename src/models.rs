//! Domain records shared by the catalogs, the selection state and the extractor.

use serde::Serialize;

/// Top-level administrative division (state, "UF").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    /// Lowercase two-letter code, used in directory-service paths
    pub code: String,
    /// Uppercase two-letter code shown to the user
    pub label: String,
}

/// Opaque identifier of a sub-region, as handed out by the directory service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SubRegionId(pub String);

/// Second-level division (city or district) scoped to one [`Region`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubRegion {
    /// Directory-service identifier
    pub id: SubRegionId,
    /// Display name, interpolated into the holiday page URL
    pub label: String,
}

/// A selectable year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearOption {
    /// Calendar year
    pub value: i32,
    /// Text shown to the user
    pub label: String,
}

impl YearOption {
    /// Builds the option for `value`, labelled with its decimal form.
    pub fn new(value: i32) -> Self {
        Self {
            value,
            label: value.to_string(),
        }
    }
}

/// One holiday as published on the holiday page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayRecord {
    /// Free-form date text, e.g. `25/12`
    pub date: String,
    /// Holiday name, possibly containing `" - "` itself
    pub description: String,
    /// Optional (discretionary) holiday rather than a mandatory one
    pub is_discretionary: bool,
}

//! The region / sub-region / year selection and its cascade rules.

use crate::models::{Region, SubRegion, YearOption};

/// Sub-region fetch issued by a region change.
///
/// Carries the generation of the selection that caused it, so the response can
/// be matched against the selection current when it arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubRegionRequest {
    /// Region whose sub-regions must be fetched
    pub region: Region,
    /// Selection generation at the time of the change
    pub generation: u64,
}

/// What a region change asks the caller to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionTransition {
    /// A region is selected: fetch its sub-regions.
    Fetch(SubRegionRequest),
    /// The region was cleared: the sub-region list must be emptied, no fetch.
    Clear,
}

/// Holds the user's three choices.
///
/// Invariants:
/// - a sub-region is only ever set while a region is set;
/// - every region change clears the sub-region and bumps the generation;
/// - the year is independent of the other two.
#[derive(Debug, Default)]
pub struct SelectionState {
    region: Option<Region>,
    sub_region: Option<SubRegion>,
    year: Option<YearOption>,
    generation: u64,
}

impl SelectionState {
    /// Empty selection at generation zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Changes the region and resets the sub-region.
    ///
    /// Always bumps the generation, even when the same region is selected again,
    /// so any in-flight sub-region fetch becomes stale.
    pub fn set_region(&mut self, region: Option<Region>) -> RegionTransition {
        self.generation += 1;
        self.sub_region = None;
        self.region = region;

        match &self.region {
            Some(region) => RegionTransition::Fetch(SubRegionRequest {
                region: region.clone(),
                generation: self.generation,
            }),
            None => RegionTransition::Clear,
        }
    }

    /// Sets the sub-region. Rejected (returns `false`) while no region is selected.
    pub fn set_sub_region(&mut self, sub_region: Option<SubRegion>) -> bool {
        if self.region.is_none() {
            log::debug!("Ignoring sub-region selection: no region selected");
            return false;
        }
        self.sub_region = sub_region;
        true
    }

    /// Sets the year. Never touches the other fields.
    pub fn set_year(&mut self, year: Option<YearOption>) {
        self.year = year;
    }

    /// Clears the sub-region without changing the region or the generation.
    pub fn clear_sub_region(&mut self) {
        self.sub_region = None;
    }

    /// Currently selected region.
    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// Currently selected sub-region.
    pub fn sub_region(&self) -> Option<&SubRegion> {
        self.sub_region.as_ref()
    }

    /// Currently selected year.
    pub fn year(&self) -> Option<&YearOption> {
        self.year.as_ref()
    }

    /// Whether sub-region selection is enabled.
    pub fn sub_region_enabled(&self) -> bool {
        self.region.is_some()
    }

    /// Generation of the latest region change.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a request issued at `generation` still reflects the latest region change.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

//! Region and sub-region catalogs.
//!
//! This module provides:
//! - The directory-service abstraction and its HTTP implementation
//! - The cached region catalog
//! - The per-region sub-region catalog
//! - Locale-aware name comparison used to order sub-regions

mod collation;
mod directory;
mod region;
mod sub_region;

// Re-export public API
pub use collation::{locale_cmp, same_name};
pub use directory::{DirectoryService, HttpDirectory, RawRegion, RawSubRegion};
pub use region::{build_regions, RegionCatalog};
pub use sub_region::{build_sub_regions, find_sub_region, SubRegionCatalog};

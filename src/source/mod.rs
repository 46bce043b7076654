//! Where the holiday page lives and how it is retrieved.
//!
//! This module provides:
//! - URL construction for the holiday page and its proxied form
//! - The page-source abstraction and its proxy implementation
//! - The page-opener seam through which the resolved URL is handed to the user

mod locator;
mod proxy;

pub use locator::{normalize_sub_region, HolidaySourceLocator};
pub use proxy::{HolidayPageSource, LogOpener, PageOpener, ProxyPageSource};

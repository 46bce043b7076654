//! HTML parsing and holiday extraction.
//!
//! All parsing is done using CSS selectors via the `scraper` crate, behind the
//! [`DocumentParser`] seam so fixtures can be fed in directly.

mod extractor;

// Re-export public API
pub use extractor::{
    split_marker_text, DocumentParser, HolidayExtractor, HtmlDocumentParser, HtmlFragmentParser,
};

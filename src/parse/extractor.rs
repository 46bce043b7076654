//! Holiday list extraction.
//!
//! The holiday page lists each holiday as
//! `<ul class="multi-column"><li><span [class="style_lista_facultativos"]>DATE - DESCRIPTION</span></li></ul>`.
//! Extraction is a single pass over the matching list items in document order.

use std::sync::{Arc, LazyLock};

use scraper::{ElementRef, Html, Selector};

use crate::config::{DATE_SEPARATOR, DISCRETIONARY_CLASS, MARKER_ELEMENT, MULTI_COLUMN_CLASS};
use crate::error_handling::{ProcessingStats, WarningType};
use crate::models::HolidayRecord;
use crate::utils::parse_selector_with_fallback;

static HOLIDAY_ITEM_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_with_fallback(&format!(".{} li", MULTI_COLUMN_CLASS), "holiday items")
});

static MARKER_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(MARKER_ELEMENT, "holiday marker"));

/// Turns raw HTML into a navigable document.
pub trait DocumentParser: Send + Sync {
    /// Parses `html`. Must not fail: malformed input yields a best-effort tree.
    fn parse(&self, html: &str) -> Html;
}

/// Parses input as a complete HTML document (the production parser).
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlDocumentParser;

impl DocumentParser for HtmlDocumentParser {
    fn parse(&self, html: &str) -> Html {
        Html::parse_document(html)
    }
}

/// Parses input as a body fragment, convenient for small fixtures.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlFragmentParser;

impl DocumentParser for HtmlFragmentParser {
    fn parse(&self, html: &str) -> Html {
        Html::parse_fragment(html)
    }
}

/// Splits marker text on the first separator into trimmed `(date, description)`.
///
/// Later separators stay in the description. Without a separator the whole
/// text is the date and the description is empty.
pub fn split_marker_text(text: &str) -> (String, String) {
    let text = text.trim();
    match text.split_once(DATE_SEPARATOR) {
        Some((date, description)) => (date.trim().to_string(), description.trim().to_string()),
        None => (text.to_string(), String::new()),
    }
}

/// Extracts [`HolidayRecord`]s from holiday page HTML.
pub struct HolidayExtractor<P: DocumentParser = HtmlDocumentParser> {
    parser: P,
    stats: Option<Arc<ProcessingStats>>,
}

impl Default for HolidayExtractor<HtmlDocumentParser> {
    fn default() -> Self {
        Self::new(HtmlDocumentParser)
    }
}

impl<P: DocumentParser> HolidayExtractor<P> {
    /// Creates an extractor using `parser`.
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            stats: None,
        }
    }

    /// Records skipped items and empty pages in `stats`.
    pub fn with_stats(mut self, stats: Arc<ProcessingStats>) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Extracts the holidays in document order.
    ///
    /// Never fails: a page without a holiday list yields an empty vector, and an
    /// item without its marker element is skipped without affecting its siblings.
    pub fn extract(&self, html: &str) -> Vec<HolidayRecord> {
        let document = self.parser.parse(html);

        let mut records = Vec::new();
        let mut items = 0usize;
        for item in document.select(&HOLIDAY_ITEM_SELECTOR) {
            items += 1;
            match extract_record(item) {
                Some(record) => records.push(record),
                None => {
                    log::debug!("Skipping holiday item without <{}>", MARKER_ELEMENT);
                    self.warn(WarningType::MissingHolidayMarker);
                }
            }
        }

        if items == 0 {
            log::warn!("No .{} holiday list found in page", MULTI_COLUMN_CLASS);
            self.warn(WarningType::EmptyHolidayList);
        } else {
            log::debug!("Extracted {} holidays from {} items", records.len(), items);
        }
        records
    }

    fn warn(&self, warning: WarningType) {
        if let Some(stats) = &self.stats {
            stats.increment_warning(warning);
        }
    }
}

fn extract_record(item: ElementRef<'_>) -> Option<HolidayRecord> {
    let marker = item.select(&MARKER_SELECTOR).next()?;
    let text: String = marker.text().collect();
    let (date, description) = split_marker_text(&text);
    let is_discretionary = marker
        .value()
        .classes()
        .any(|class| class == DISCRETIONARY_CLASS);

    Some(HolidayRecord {
        date,
        description,
        is_discretionary,
    })
}

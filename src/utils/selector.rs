//! CSS selector parsing utilities.

use scraper::Selector;

/// Parses a CSS selector with a safe fallback.
///
/// If parsing fails, logs an error and returns a selector that matches nothing
/// (`*:not(*)`), so extraction yields no results instead of panicking.
///
/// # Arguments
///
/// * `selector_str` - The CSS selector string to parse
/// * `context` - Context description for error logging (e.g., "holiday items")
pub fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse CSS selector '{}' in {}: {}. Using fallback selector.",
            selector_str,
            context,
            e
        );
        match_nothing()
    })
}

fn match_nothing() -> Selector {
    Selector::parse("*:not(*)").unwrap_or_else(|e| {
        panic!(
            "Fallback selector '*:not(*)' failed to parse: {}. This is a programming error.",
            e
        )
    })
}

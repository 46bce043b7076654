//! Locale-aware comparison of display names.
//!
//! Place names are compared the way a Portuguese reader expects: accents and
//! case only matter when the base letters are equal.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Primary collation key: base letters only, case folded.
pub(crate) fn collation_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compares two names by base letters first, then accents, then case.
///
/// Total and deterministic: two strings compare equal only if they are identical.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// True when both names share the same base letters, ignoring accents and case.
pub fn same_name(a: &str, b: &str) -> bool {
    collation_key(a.trim()) == collation_key(b.trim())
}

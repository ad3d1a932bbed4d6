//! Splitting of multi-value text fields.
//!
//! Studios and producers arrive as one string each:
//! `"Darren Doane, Raphi Henley, Amanda Rosser and David Shannon"`.
//! A separator is a comma or the whole word `and` (any case), together with
//! the whitespace around it.

use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s*(?:,|\band\b)\s*").expect("separator pattern is valid")
});

/// Split a delimited list into trimmed, non-empty names, in source order.
///
/// Example: "A, B and C" -> ["A", "B", "C"]
pub fn split_value_list(value: &str) -> Vec<String> {
    SEPARATOR
        .split(value)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

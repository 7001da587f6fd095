//! Whitespace cleanup applied to converted lines.

use once_cell::sync::Lazy;
use regex::Regex;

static MULTI_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("valid whitespace pattern"));

/// Collapse every run of two or more whitespace characters into a single
/// space and trim both ends.
///
/// Idempotent: a second pass finds no run of length two and nothing to trim.
pub fn collapse_whitespace(text: &str) -> String {
    MULTI_SPACE.replace_all(text, " ").trim().to_string()
}

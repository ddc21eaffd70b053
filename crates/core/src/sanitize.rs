//! Input scrubbing applied to free-text fields before persistence.
//!
//! Public forms accept arbitrary text; everything stored to the database
//! goes through [`strip_markup`] first so admin screens and outgoing
//! emails never replay submitted HTML.

use std::sync::OnceLock;

use regex::Regex;

/// Matches HTML/XML tags, including malformed open-ended ones.
fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<[^>]*>?").expect("static pattern compiles"))
}

/// Remove markup tags and collapse the result.
///
/// Tags are deleted (not escaped), control characters other than newline
/// are dropped, and leading/trailing whitespace is trimmed.
pub fn strip_markup(input: &str) -> String {
    let without_tags = tag_pattern().replace_all(input, "");
    without_tags
        .chars()
        .filter(|c| !c.is_control() || *c == '\n')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Scrub an optional field, mapping empty results to `None`.
pub fn strip_markup_opt(input: Option<&str>) -> Option<String> {
    input.map(strip_markup).filter(|s| !s.is_empty())
}

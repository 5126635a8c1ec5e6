use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Strips every markup tag (keeping text content) and collapses whitespace runs
/// to a single space.
pub fn normalize(raw: &str) -> String {
    let stripped = ammonia::Builder::empty().clean(raw).to_string();
    WHITESPACE_RUN.replace_all(&stripped, " ").trim().to_string()
}

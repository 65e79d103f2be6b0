//! Text normalization for business descriptions.
//!
//! - Lowercase conversion
//! - Punctuation stripped to spaces
//! - Whitespace collapsed

use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s-]+").unwrap());
static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize a description for keyword matching
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let stripped = NON_WORD.replace_all(&lower, " ");
    MULTI_SPACE.replace_all(stripped.trim(), " ").to_string()
}

/// Split a normalized description into words
pub fn words(normalized: &str) -> Vec<&str> {
    normalized
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|w| !w.is_empty())
        .collect()
}

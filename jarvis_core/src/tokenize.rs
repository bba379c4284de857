//! Query normalization and word tokenization.

use regex::Regex;
use std::sync::OnceLock;

/// Maximal runs of Unicode word characters (letters, digits, underscore).
static WORD_PATTERN: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn word_pattern() -> &'static Regex {
    WORD_PATTERN
        .get_or_init(|| Regex::new(r"\w+").expect("Static regex pattern is guaranteed to be valid"))
}

/// Lower-case and trim a query or prompt for exact comparison.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}

/// Split text into lower-cased word tokens, in order, keeping duplicates.
///
/// Punctuation separates tokens, so `"what's"` yields `["what", "s"]`.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    word_pattern()
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

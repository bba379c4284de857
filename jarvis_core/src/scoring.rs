//! Word-overlap similarity between a query and a corpus prompt.
//!
//! Score formula: `|Q ∩ C| / |Q ∪ C| + 0.1 * hits`, where `hits` counts the
//! query tokens (with repetition) that appear in the prompt's token set.
//! The bonus is additive, so scores routinely exceed 1.0.
//!
//! Scores are kept as exact fractions so that threshold and tie comparisons
//! do not depend on floating-point rounding (`0.2 + 0.1` is exactly `0.3`).

use std::cmp::Ordering;
use std::collections::HashSet;

/// Bonus per matching query token, in tenths (0.1).
pub const TERM_BONUS_TENTHS: u64 = 1;

/// A fuzzy match must score strictly above this many tenths (0.3).
pub const THRESHOLD_TENTHS: u64 = 3;

/// Similarity of one candidate prompt against a query.
#[derive(Debug, Clone, Copy)]
pub struct Score {
    overlap: u64,
    union: u64,
    term_hits: u64,
}

impl Score {
    /// Score a candidate token set against the query tokens.
    ///
    /// `query_tokens` is the full query token sequence and `query_set` its
    /// distinct tokens. Returns `None` when either set is empty.
    #[must_use]
    pub fn compute(
        query_tokens: &[String],
        query_set: &HashSet<&str>,
        candidate: &HashSet<&str>,
    ) -> Option<Self> {
        if query_set.is_empty() || candidate.is_empty() {
            return None;
        }

        let overlap = query_set.intersection(candidate).count();
        let union = query_set.len() + candidate.len() - overlap;
        let term_hits = query_tokens
            .iter()
            .filter(|token| candidate.contains(token.as_str()))
            .count();

        Some(Self {
            overlap: overlap as u64,
            union: union as u64,
            term_hits: term_hits as u64,
        })
    }

    // score = overlap / union + hits / 10 = (10 * overlap + hits * union) / (10 * union)
    fn numerator(self) -> u128 {
        10 * u128::from(self.overlap)
            + u128::from(TERM_BONUS_TENTHS) * u128::from(self.term_hits) * u128::from(self.union)
    }

    fn denominator(self) -> u128 {
        10 * u128::from(self.union)
    }

    /// Whether this score is strictly above the fuzzy-match threshold.
    #[must_use]
    pub fn clears_threshold(self) -> bool {
        10 * self.numerator() > u128::from(THRESHOLD_TENTHS) * self.denominator()
    }

    /// Number of distinct tokens shared by query and prompt.
    #[must_use]
    pub const fn overlap(self) -> u64 {
        self.overlap
    }

    /// Number of query tokens, counted with repetition, found in the prompt.
    #[must_use]
    pub const fn term_hits(self) -> u64 {
        self.term_hits
    }

    /// The combined score as a float.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn value(self) -> f64 {
        self.numerator() as f64 / self.denominator() as f64
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Score {}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.numerator() * other.denominator()).cmp(&(other.numerator() * self.denominator()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::tokenize;

    fn score(query: &str, prompt: &str) -> Option<Score> {
        let query_tokens = tokenize(query);
        let query_set: HashSet<&str> = query_tokens.iter().map(String::as_str).collect();
        let prompt_tokens = tokenize(prompt);
        let candidate: HashSet<&str> = prompt_tokens.iter().map(String::as_str).collect();
        Score::compute(&query_tokens, &query_set, &candidate)
    }

    #[test]
    fn jaccard_plus_bonus() {
        let s = score("what's the weather", "what is the weather").unwrap();
        assert_eq!(s.overlap(), 3);
        assert_eq!(s.term_hits(), 3);
        assert!((s.value() - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_sets_are_not_scored() {
        assert!(score("", "hello").is_none());
        assert!(score("hello", "?!").is_none());
    }

    #[test]
    fn disjoint_sets_score_zero() {
        let s = score("alpha beta", "gamma delta").unwrap();
        assert!(s.value().abs() < f64::EPSILON);
        assert!(!s.clears_threshold());
    }

    #[test]
    fn repeated_query_tokens_inflate_bonus() {
        let once = score("hello world", "hello").unwrap();
        let twice = score("hello hello world", "hello").unwrap();
        assert_eq!(once.term_hits(), 1);
        assert_eq!(twice.term_hits(), 2);
        assert!(twice > once);
        assert!((twice.value() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn bonus_counts_query_tokens_not_prompt_tokens() {
        let forward = score("hello hello world", "hello").unwrap();
        let reverse = score("hello", "hello hello world").unwrap();
        // same Jaccard (1/2), different bonus
        assert!((forward.value() - 0.7).abs() < 1e-12);
        assert!((reverse.value() - 0.6).abs() < 1e-12);
        assert_ne!(forward, reverse);
    }

    #[test]
    fn exactly_threshold_is_rejected() {
        // 1/5 + 0.1 == 0.3
        let s = score("a", "a b c d e").unwrap();
        assert!((s.value() - 0.3).abs() < 1e-12);
        assert!(!s.clears_threshold());
    }

    #[test]
    fn just_above_threshold_is_accepted() {
        // 1/4 + 0.1 == 0.35
        let s = score("a", "a b c d").unwrap();
        assert!(s.clears_threshold());
    }

    #[test]
    fn equal_fractions_compare_equal() {
        // 1/2 + 0.1 and 2/5 + 0.2 are both 0.6; as floats they differ
        let a = score("a", "a b").unwrap();
        let b = score("a b", "a b c d e").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }
}

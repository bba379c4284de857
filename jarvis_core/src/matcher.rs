//! Query → response matching.
//!
//! Two passes over the corpus, in document order:
//! 1. exact pass: the first exchange whose normalized prompt equals the
//!    normalized query wins outright;
//! 2. similarity pass: every exchange with a non-empty prompt and response is
//!    scored with [`Score`]; the strictly best one is returned if it clears
//!    the threshold. Earlier exchanges keep the lead on ties.

use crate::corpus::{Corpus, Exchange};
use crate::scoring::Score;
use crate::tokenize::{normalize, tokenize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Outcome of matching one query against the corpus.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult {
    /// A prompt equal to the query, after normalization.
    Exact(String),
    /// The best similarity match and its score.
    Fuzzy(String, f64),
    /// Nothing matched; the caller should fall back.
    NoMatch,
}

impl MatchResult {
    /// The matched response, if any.
    #[must_use]
    pub fn response(&self) -> Option<&str> {
        match self {
            Self::Exact(response) | Self::Fuzzy(response, _) => Some(response),
            Self::NoMatch => None,
        }
    }

    #[must_use]
    pub const fn is_match(&self) -> bool {
        !matches!(self, Self::NoMatch)
    }
}

/// Match a query against a corpus. Pure; safe to call concurrently.
#[must_use]
pub fn match_query(query: &str, corpus: &Corpus) -> MatchResult {
    let query = normalize(query);
    if query.is_empty() {
        return MatchResult::NoMatch;
    }

    if let Some(exchange) = corpus
        .exchanges()
        .iter()
        .find(|exchange| normalize(&exchange.prompt) == query)
    {
        debug!("Exact match for '{query}'");
        return MatchResult::Exact(exchange.response.clone());
    }

    match best_similar(&query, corpus.exchanges()) {
        Some((exchange, score)) if score.clears_threshold() => {
            debug!(
                "Fuzzy match for '{query}' -> '{}' (score {:.3})",
                exchange.prompt,
                score.value()
            );
            MatchResult::Fuzzy(exchange.response.clone(), score.value())
        }
        Some((exchange, score)) => {
            debug!(
                "Best candidate for '{query}' -> '{}' below threshold (score {:.3})",
                exchange.prompt,
                score.value()
            );
            MatchResult::NoMatch
        }
        None => MatchResult::NoMatch,
    }
}

/// Highest-scoring exchange, first one wins on ties.
fn best_similar<'a>(query: &str, exchanges: &'a [Exchange]) -> Option<(&'a Exchange, Score)> {
    let query_tokens = tokenize(query);
    let query_set: HashSet<&str> = query_tokens.iter().map(String::as_str).collect();
    if query_set.is_empty() {
        return None;
    }

    let mut best: Option<(&Exchange, Score)> = None;

    for exchange in exchanges {
        if exchange.prompt.is_empty() || exchange.response.is_empty() {
            continue;
        }

        let prompt_tokens = tokenize(&exchange.prompt);
        let candidate: HashSet<&str> = prompt_tokens.iter().map(String::as_str).collect();

        let Some(score) = Score::compute(&query_tokens, &query_set, &candidate) else {
            continue;
        };

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((exchange, score));
        }
    }

    best
}

/// Read-only matcher over a shared corpus.
///
/// Cloning is cheap; clones share the same corpus.
#[derive(Debug, Clone)]
pub struct Matcher {
    corpus: Arc<Corpus>,
}

impl Matcher {
    #[must_use]
    pub const fn new(corpus: Arc<Corpus>) -> Self {
        Self { corpus }
    }

    #[must_use]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Match a query; see [`match_query`].
    #[must_use]
    pub fn find(&self, query: &str) -> MatchResult {
        match_query(query, &self.corpus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(pairs: &[(&str, &str)]) -> Corpus {
        Corpus::from_exchanges(
            pairs
                .iter()
                .map(|(prompt, response)| Exchange::new(*prompt, *response))
                .collect(),
        )
    }

    #[test]
    fn empty_query_is_no_match() {
        let c = corpus(&[("", "empty prompt response")]);
        assert_eq!(match_query("", &c), MatchResult::NoMatch);
        assert_eq!(match_query("   \t", &c), MatchResult::NoMatch);
    }

    #[test]
    fn exact_match_ignores_case_and_whitespace() {
        let c = corpus(&[("Good Morning ", "Morning!")]);
        assert_eq!(
            match_query("  good MORNING", &c),
            MatchResult::Exact("Morning!".to_string())
        );
    }

    #[test]
    fn exact_match_first_wins() {
        let c = corpus(&[("hi", "first"), ("hi", "second")]);
        assert_eq!(match_query("hi", &c), MatchResult::Exact("first".to_string()));
    }

    #[test]
    fn exact_beats_better_fuzzy_candidate_earlier_in_corpus() {
        let c = corpus(&[("how are you doing", "fuzzy"), ("how are you", "exact")]);
        assert_eq!(
            match_query("how are you", &c),
            MatchResult::Exact("exact".to_string())
        );
    }

    #[test]
    fn exact_match_returns_empty_response_verbatim() {
        let c = corpus(&[("ping", "")]);
        assert_eq!(match_query("ping", &c), MatchResult::Exact(String::new()));
    }

    #[test]
    fn fuzzy_skips_empty_prompt_or_response() {
        let c = corpus(&[("tell me a joke", ""), ("", "orphan")]);
        assert_eq!(match_query("tell me a joke please", &c), MatchResult::NoMatch);
    }

    #[test]
    fn symbols_only_query_is_no_match() {
        let c = corpus(&[("hello", "hi")]);
        assert_eq!(match_query("?!", &c), MatchResult::NoMatch);
    }

    #[test]
    fn matcher_shares_corpus() {
        let matcher = Matcher::new(Arc::new(corpus(&[("hello", "Hi there!")])));
        let clone = matcher.clone();
        assert_eq!(clone.find("HELLO"), MatchResult::Exact("Hi there!".to_string()));
        assert_eq!(matcher.corpus().len(), 1);
    }

    #[test]
    fn match_result_accessors() {
        assert_eq!(MatchResult::Fuzzy("r".into(), 0.5).response(), Some("r"));
        assert!(MatchResult::Exact("r".into()).is_match());
        assert!(!MatchResult::NoMatch.is_match());
        assert_eq!(MatchResult::NoMatch.response(), None);
    }
}

#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Response matching for the canned-dialogue assistant.
//!
//! A [`Corpus`] of prompt/response [`Exchange`]s is loaded once and shared
//! read-only with a [`Matcher`]. Each query is resolved to an exact match, a
//! similarity match above the threshold, or [`MatchResult::NoMatch`], in which
//! case the caller builds a [`SearchRequest`] from the raw input.

pub mod corpus;
pub mod error;
pub mod fallback;
pub mod matcher;
pub mod scoring;
pub mod tokenize;

pub use corpus::{Corpus, Exchange};
pub use error::CorpusError;
pub use fallback::SearchRequest;
pub use matcher::{MatchResult, Matcher, match_query};
pub use scoring::Score;
pub use tokenize::{normalize, tokenize};

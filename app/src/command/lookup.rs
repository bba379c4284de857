use jarvis_core::{MatchResult, SearchRequest};

use super::init_common_components;
use crate::GlobalArgs;

/// Input for the Match command.
#[derive(Debug, Clone)]
pub struct LookupInput {
    pub global: GlobalArgs,
    pub query: String,
}

/// Strategy for showing how a query resolves against the corpus.
///
/// Prints the match kind and score. On no match it prints the fallback
/// search terms without opening anything.
#[derive(Debug, Clone, Copy)]
pub struct LookupStrategy;

impl super::CommandStrategy for LookupStrategy {
    type Input = LookupInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let common = init_common_components(&input.global)?;

        match common.matcher.find(&input.query) {
            MatchResult::Exact(response) => {
                println!("exact");
                println!("  response: {response}");
            }
            MatchResult::Fuzzy(response, score) => {
                println!("fuzzy (score {score:.3})");
                println!("  response: {response}");
            }
            MatchResult::NoMatch => {
                println!("no match");
                match SearchRequest::new(&input.query) {
                    Some(request) => println!("  fallback search: {}", request.encoded_query()),
                    None => println!("  (empty query)"),
                }
            }
        }

        Ok(())
    }
}

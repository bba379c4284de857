use super::init_common_components;
use crate::GlobalArgs;

/// Strategy for displaying configuration and corpus information.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = GlobalArgs;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let common = init_common_components(&input)?;
        let config = &common.config;
        let corpus = common.matcher.corpus();

        println!("=== jarvis Configuration ===\n");

        println!("Assistant:");
        println!("  Name: {}", config.assistant.name);
        println!();

        println!("Features:");
        println!("  Web Search: {}", config.features.web_search);
        println!("  Built-in Commands: {}", config.features.builtin_commands);
        println!();

        println!("Search:");
        println!("  Engine URL: {}", config.search.engine_url);
        println!("  Query Param: {}", config.search.query_param);
        println!("  Open Browser: {}", config.search.open_browser);
        println!();

        println!("Corpus:");
        println!("  Path: {}", common.data_path.display());
        if corpus.is_empty() {
            println!("  Status: empty (all queries fall back to web search)");
        } else {
            println!("  Categories: {}", corpus.category_count());
            println!("  Exchanges: {}", corpus.len());
            println!("  Names: {}", corpus.categories().join(", "));
        }

        Ok(())
    }
}

//! Text conversation with the assistant.
//!
//! Every turn is answered independently: built-in commands first, then the
//! dialogue corpus, then a web search.

use jarvis_conversation::{Assistant, SystemLauncher};
use tracing::info;

use super::{build_assistant_settings, init_common_components};
use crate::GlobalArgs;

/// Input parameters for the Chat command strategy.
#[derive(Debug, Clone)]
pub struct ChatInput {
    pub global: GlobalArgs,
    /// Optional single message to answer (non-interactive mode)
    pub message: Option<String>,
    /// Show search URLs instead of opening the browser
    pub no_browser: bool,
}

/// Strategy for executing the Chat command.
#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl super::CommandStrategy for ChatStrategy {
    type Input = ChatInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let common = init_common_components(&input.global)?;
        let settings = build_assistant_settings(&common.config, input.no_browser);

        info!(
            "Starting chat with {} exchanges from {}",
            common.matcher.corpus().len(),
            common.data_path.display()
        );

        let assistant = Assistant::new(common.matcher, SystemLauncher, settings);

        if let Some(msg) = input.message {
            let reply = assistant.respond(&msg).await?;
            println!("{}", reply.text());
        } else {
            let turns = assistant.run_interactive().await?;
            info!("Conversation ended: {turns} turns");
        }

        Ok(())
    }
}

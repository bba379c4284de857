//! Static strategy pattern for CLI commands.
//!
//! Each subcommand is a separate zero-sized strategy with its own input type,
//! dispatched statically from `main`.

use crate::GlobalArgs;
use jarvis_config::Config;
use jarvis_conversation::AssistantSettings;
use jarvis_core::{Corpus, Matcher};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

mod chat;
mod info;
mod init;
mod lookup;
mod version;

pub use chat::{ChatInput, ChatStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use lookup::{LookupInput, LookupStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         // Command logic here
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Configuration and corpus shared by the commands that answer queries.
struct CommonComponents {
    config: Config,
    data_path: PathBuf,
    matcher: Matcher,
}

/// Load the config, resolve the corpus path and load the corpus.
///
/// A missing or invalid corpus is logged and replaced by an empty one, so
/// every query falls through to the web-search fallback.
fn init_common_components(global: &GlobalArgs) -> anyhow::Result<CommonComponents> {
    let config = Config::load(global.config.as_deref())?;

    let config_dir = match &global.config {
        Some(path) => path.parent().map(PathBuf::from),
        None => Config::config_dir().ok(),
    };

    let data_path = global
        .data
        .clone()
        .unwrap_or_else(|| config.data_path(config_dir.as_deref()));

    info!("Loading dialogue corpus from {}", data_path.display());
    let corpus = Corpus::load_or_empty(&data_path);

    Ok(CommonComponents {
        config,
        data_path,
        matcher: Matcher::new(Arc::new(corpus)),
    })
}

/// Map the user configuration onto assistant settings.
fn build_assistant_settings(config: &Config, no_browser: bool) -> AssistantSettings {
    AssistantSettings::default()
        .with_name(config.assistant.name.clone())
        .with_web_search(config.features.web_search)
        .with_builtin_commands(config.features.builtin_commands)
        .with_engine(
            config.search.engine_url.clone(),
            config.search.query_param.clone(),
        )
        .with_open_browser(config.search.open_browser && !no_browser)
}

use jarvis_config::Config;

use crate::GlobalArgs;

/// Strategy for initializing the configuration.
///
/// Writes the template to `--config` if given, else `~/jarvis/config.json`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = GlobalArgs;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        Config::create_config(input.config.as_deref()).map(|_| ())
    }
}

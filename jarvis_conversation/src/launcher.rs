use anyhow::Context;
use async_trait::async_trait;
use std::process::Stdio;
use tracing::debug;
use url::Url;

/// Opens URLs for the user, typically in a browser.
#[async_trait]
pub trait Launcher: Send + Sync {
    async fn open(&self, url: &Url) -> anyhow::Result<()>;
}

struct CommandSpec {
    program: String,
    args: Vec<String>,
}

fn opener_command(url: &str) -> CommandSpec {
    if cfg!(target_os = "windows") {
        CommandSpec {
            program: "cmd".to_string(),
            // empty string is the window title expected by `start`
            args: vec![
                "/C".to_string(),
                "start".to_string(),
                String::new(),
                url.to_string(),
            ],
        }
    } else if cfg!(target_os = "macos") {
        CommandSpec {
            program: "open".to_string(),
            args: vec![url.to_string()],
        }
    } else {
        CommandSpec {
            program: "xdg-open".to_string(),
            args: vec![url.to_string()],
        }
    }
}

/// Launcher that hands the URL to the platform's default opener.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

#[async_trait]
impl Launcher for SystemLauncher {
    async fn open(&self, url: &Url) -> anyhow::Result<()> {
        let spec = opener_command(url.as_str());
        debug!("Opening {url} with {}", spec.program);

        let status = tokio::process::Command::new(&spec.program)
            .args(&spec.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .with_context(|| format!("Failed to run {}", spec.program))?;

        if !status.success() {
            anyhow::bail!("{} exited with {status}", spec.program);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opener_command_shape() {
        let spec = opener_command("https://example.com/?q=a+b");
        assert!(!spec.program.is_empty());
        assert_eq!(
            spec.args.last().map(String::as_str),
            Some("https://example.com/?q=a+b")
        );
    }
}

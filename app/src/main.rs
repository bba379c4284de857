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

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod command;

use command::{
    ChatInput, ChatStrategy, CommandStrategy, InfoStrategy, InitStrategy, LookupInput,
    LookupStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "jarvis")]
#[command(about = "jarvis canned-dialogue assistant", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Config file (default: ~/jarvis/config.json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Dialogue corpus, overriding `data_file` from the config
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also append logs to this file (e.g. jarvis.log)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Talk to the assistant interactively
    Chat {
        /// Single message to answer, then exit
        #[arg(short = 'm', long)]
        message: Option<String>,

        /// Print search URLs instead of opening a browser
        #[arg(long)]
        no_browser: bool,
    },
    /// Show how a query matches the corpus, without side effects
    Match {
        /// Query text
        query: String,
    },
    /// Show configuration and corpus statistics
    Info,
    /// Create the default configuration file
    Init,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose, cli.global.log_file.as_deref())?;

    match cli.command {
        Commands::Chat {
            message,
            no_browser,
        } => {
            ChatStrategy
                .execute(ChatInput {
                    global: cli.global,
                    message,
                    no_browser,
                })
                .await
        }
        Commands::Match { query } => {
            LookupStrategy
                .execute(LookupInput {
                    global: cli.global,
                    query,
                })
                .await
        }
        Commands::Info => InfoStrategy.execute(cli.global).await,
        Commands::Init => InitStrategy.execute(cli.global).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}

fn init_tracing(verbose: bool, log_file: Option<&Path>) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(file_layer)
        .init();

    Ok(())
}

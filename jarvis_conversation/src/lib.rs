#![warn(
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

//! Turn handling for the canned-dialogue assistant.
//!
//! Each line of input goes through the same pipeline:
//! built-in commands, then the corpus [`Matcher`](jarvis_core::Matcher),
//! then the web-search fallback. No state is carried between turns.

mod assistant;
mod command;
mod launcher;

pub use assistant::{Assistant, AssistantError, AssistantSettings, Launch, Reply, SearchOutcome};
pub use command::Command;
pub use launcher::{Launcher, SystemLauncher};

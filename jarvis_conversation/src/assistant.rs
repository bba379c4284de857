//! The assistant turn pipeline.
//!
//! `respond` resolves one utterance to a [`Reply`]; `run_session` drives a
//! line-based dialogue over any reader/writer pair.

use crate::command::Command;
use crate::launcher::Launcher;
use jarvis_core::{MatchResult, Matcher, SearchRequest, normalize};
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::{debug, error, info};
use url::Url;

/// Words that end an interactive session.
const EXIT_WORDS: [&str; 3] = ["exit", "quit", "q"];

/// Settings for one assistant instance.
#[derive(Debug, Clone)]
pub struct AssistantSettings {
    /// Label printed before each reply
    pub name: String,
    /// Fall back to a web search when nothing matches
    pub web_search: bool,
    /// Answer `help`, `time` and `search for ...` unless a prompt matches exactly
    pub builtin_commands: bool,
    /// Search engine base URL
    pub engine_url: String,
    /// Query-string parameter carrying the search terms
    pub query_param: String,
    /// Hand search URLs to the launcher; when false the URL is only shown
    pub open_browser: bool,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            name: "Jarvis".to_string(),
            web_search: true,
            builtin_commands: true,
            engine_url: "https://www.google.com/search".to_string(),
            query_param: "q".to_string(),
            open_browser: true,
        }
    }
}

impl AssistantSettings {
    #[must_use]
    pub fn with_name(mut self, name: String) -> Self {
        self.name = name;
        self
    }

    #[must_use]
    pub const fn with_web_search(mut self, enabled: bool) -> Self {
        self.web_search = enabled;
        self
    }

    #[must_use]
    pub const fn with_builtin_commands(mut self, enabled: bool) -> Self {
        self.builtin_commands = enabled;
        self
    }

    #[must_use]
    pub fn with_engine(mut self, engine_url: String, query_param: String) -> Self {
        self.engine_url = engine_url;
        self.query_param = query_param;
        self
    }

    #[must_use]
    pub const fn with_open_browser(mut self, open: bool) -> Self {
        self.open_browser = open;
        self
    }
}

/// Errors that can occur while handling a turn.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("Invalid search engine URL '{url}': {source}")]
    SearchUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What happened to a search URL after it was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launch {
    /// The launcher opened it.
    Opened,
    /// `open_browser` is off; the URL is only shown.
    Disabled,
    /// The launcher returned an error.
    Failed,
}

/// A web search issued for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Search terms as typed
    pub query: String,
    pub url: Url,
    pub launch: Launch,
    /// Asked for with `search for ...`, rather than a fallback
    pub explicit: bool,
}

impl SearchOutcome {
    #[must_use]
    pub const fn opened(&self) -> bool {
        matches!(self.launch, Launch::Opened)
    }

    fn text(&self) -> String {
        let Self {
            query,
            url,
            launch,
            explicit,
        } = self;
        match (*explicit, *launch) {
            (true, Launch::Opened) => format!("I've opened a web search for {query}."),
            (true, Launch::Disabled) => format!("Here's a web search for {query}: {url}"),
            (true, Launch::Failed) => {
                format!("I couldn't open your browser. Here's a web search for {query}: {url}")
            }
            (false, Launch::Opened) => format!(
                "I don't have that information in my database, but I've opened a web search for '{query}'."
            ),
            (false, Launch::Disabled) => format!(
                "I don't have that information in my database. You can search for '{query}' here: {url}"
            ),
            (false, Launch::Failed) => format!(
                "I don't have that information in my database, and I couldn't open your browser. You can search for '{query}' here: {url}"
            ),
        }
    }
}

/// What the assistant says back for one utterance.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Blank input; nothing to say.
    Empty,
    /// A corpus response (never `MatchResult::NoMatch`).
    Matched(MatchResult),
    /// Output of a built-in command.
    Builtin(String),
    /// `search for` with no terms.
    SearchPrompt,
    WebSearch(SearchOutcome),
    /// Nothing matched and web search is disabled.
    Unanswered,
}

impl Reply {
    /// The text shown to the user.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Matched(result) => result.response().unwrap_or_default().to_string(),
            Self::Builtin(text) => text.clone(),
            Self::SearchPrompt => "What would you like me to search for?".to_string(),
            Self::WebSearch(outcome) => outcome.text(),
            Self::Unanswered => "I don't have an answer for that yet.".to_string(),
        }
    }
}

/// Single-turn command/response assistant.
pub struct Assistant<L>
where
    L: Launcher,
{
    matcher: Matcher,
    launcher: L,
    settings: AssistantSettings,
}

impl<L> Assistant<L>
where
    L: Launcher,
{
    #[must_use]
    pub const fn new(matcher: Matcher, launcher: L, settings: AssistantSettings) -> Self {
        Self {
            matcher,
            launcher,
            settings,
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &AssistantSettings {
        &self.settings
    }

    /// Resolve one utterance: exact corpus prompt, then built-in command,
    /// then similar corpus prompt, then fallback.
    ///
    /// A scripted prompt always wins, even when it spells a command.
    pub async fn respond(&self, input: &str) -> Result<Reply, AssistantError> {
        if normalize(input).is_empty() {
            return Ok(Reply::Empty);
        }

        let result = self.matcher.find(input);
        if matches!(result, MatchResult::Exact(_)) {
            return Ok(Reply::Matched(result));
        }

        if self.settings.builtin_commands {
            if let Some(command) = Command::parse(input) {
                if let Some(reply) = self.run_command(command).await? {
                    return Ok(reply);
                }
            }
        }

        if result.is_match() {
            return Ok(Reply::Matched(result));
        }

        if !self.settings.web_search {
            debug!("No match for '{input}' and web search disabled");
            return Ok(Reply::Unanswered);
        }

        match SearchRequest::new(input) {
            Some(request) => Ok(Reply::WebSearch(self.search(&request, false).await?)),
            None => Ok(Reply::Empty),
        }
    }

    /// `None` means the command is unavailable and the input should be
    /// treated as ordinary dialogue.
    async fn run_command(&self, command: Command) -> Result<Option<Reply>, AssistantError> {
        match command {
            Command::Help => Ok(Some(Reply::Builtin(Command::help_text().to_string()))),
            Command::Time => {
                let now = chrono::Local::now();
                Ok(Some(Reply::Builtin(format!(
                    "It's {}.",
                    now.format("%-I:%M %p")
                ))))
            }
            Command::Search(_) if !self.settings.web_search => Ok(None),
            Command::Search(terms) => match SearchRequest::new(&terms) {
                Some(request) => Ok(Some(Reply::WebSearch(self.search(&request, true).await?))),
                None => Ok(Some(Reply::SearchPrompt)),
            },
        }
    }

    async fn search(
        &self,
        request: &SearchRequest,
        explicit: bool,
    ) -> Result<SearchOutcome, AssistantError> {
        let url = request
            .url(&self.settings.engine_url, &self.settings.query_param)
            .map_err(|source| AssistantError::SearchUrl {
                url: self.settings.engine_url.clone(),
                source,
            })?;

        let launch = if self.settings.open_browser {
            match self.launcher.open(&url).await {
                Ok(()) => {
                    info!("Opened web search: {url}");
                    Launch::Opened
                }
                Err(e) => {
                    error!("Error opening web search {url}: {e}");
                    Launch::Failed
                }
            }
        } else {
            debug!("Browser disabled, showing {url}");
            Launch::Disabled
        };

        Ok(SearchOutcome {
            query: request.query().to_string(),
            url,
            launch,
            explicit,
        })
    }

    /// Run a line-based dialogue until EOF or an exit word.
    ///
    /// Returns the number of answered turns.
    pub async fn run_session<R, W>(&self, mut input: R, mut output: W) -> Result<usize, AssistantError>
    where
        R: BufRead,
        W: Write,
    {
        let name = &self.settings.name;
        writeln!(output, "=== {name} ===")?;
        writeln!(output, "Type 'exit' or 'quit' to end the session.\n")?;

        let mut turns = 0;

        loop {
            write!(output, "You: ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            if EXIT_WORDS.contains(&normalize(line).as_str()) {
                writeln!(output, "{name}: Goodbye!")?;
                break;
            }

            match self.respond(line).await {
                Ok(reply) => {
                    writeln!(output, "{name}: {}", reply.text())?;
                    turns += 1;
                }
                Err(e) => {
                    error!("Error handling '{line}': {e}");
                    writeln!(output, "{name}: Sorry, something went wrong: {e}")?;
                }
            }
        }

        info!("Session ended after {turns} turns");
        Ok(turns)
    }

    /// Interactive session on stdin/stdout.
    pub async fn run_interactive(&self) -> Result<usize, AssistantError> {
        let stdin = std::io::stdin();
        self.run_session(stdin.lock(), std::io::stdout()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = AssistantSettings::default();
        assert!(settings.web_search);
        assert!(settings.builtin_commands);
        assert!(!settings.engine_url.is_empty());
    }

    #[test]
    fn test_settings_builders() {
        let settings = AssistantSettings::default()
            .with_name("Friday".to_string())
            .with_web_search(false)
            .with_builtin_commands(false)
            .with_open_browser(false)
            .with_engine("https://duckduckgo.com/".to_string(), "q".to_string());

        assert_eq!(settings.name, "Friday");
        assert!(!settings.web_search);
        assert!(!settings.builtin_commands);
        assert!(!settings.open_browser);
        assert_eq!(settings.engine_url, "https://duckduckgo.com/");
    }

    #[test]
    fn test_reply_text_for_fallback() {
        let url = Url::parse("https://www.google.com/search?q=Who+Wrote+Dune").unwrap();
        let outcome = SearchOutcome {
            query: "Who Wrote Dune".to_string(),
            url,
            launch: Launch::Opened,
            explicit: false,
        };
        assert_eq!(
            Reply::WebSearch(outcome.clone()).text(),
            "I don't have that information in my database, but I've opened a web search for 'Who Wrote Dune'."
        );

        let shown = SearchOutcome {
            launch: Launch::Disabled,
            ..outcome.clone()
        };
        let shown_text = Reply::WebSearch(shown).text();
        assert!(shown_text.ends_with("?q=Who+Wrote+Dune"));
        assert!(!shown_text.contains("couldn't open"));

        let failed = SearchOutcome {
            launch: Launch::Failed,
            ..outcome
        };
        let failed_text = Reply::WebSearch(failed).text();
        assert!(failed_text.contains("couldn't open your browser"));
        assert!(failed_text.ends_with("?q=Who+Wrote+Dune"));
    }

    #[test]
    fn test_reply_text_for_match() {
        let reply = Reply::Matched(MatchResult::Fuzzy("Sunny.".to_string(), 0.9));
        assert_eq!(reply.text(), "Sunny.");
        assert_eq!(Reply::Empty.text(), "");
    }
}

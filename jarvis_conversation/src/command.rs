use jarvis_core::normalize;

/// Phrases that trigger an explicit web search. ASCII only.
const SEARCH_PREFIXES: [&str; 2] = ["search for", "look up"];

/// Built-in commands answered without consulting the corpus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Time,
    /// Explicit web search; holds the terms in their original case, possibly empty.
    Search(String),
}

impl Command {
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        match normalize(text).as_str() {
            "help" | "what can you do" => Some(Self::Help),
            "time" | "what time is it" | "current time" => Some(Self::Time),
            _ => Self::parse_search(text.trim()),
        }
    }

    fn parse_search(text: &str) -> Option<Self> {
        SEARCH_PREFIXES.iter().find_map(|prefix| {
            let head = text.get(..prefix.len())?;
            if !head.eq_ignore_ascii_case(prefix) {
                return None;
            }
            // "search forever" is not a search command
            let rest = &text[prefix.len()..];
            if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
                return None;
            }
            Some(Self::Search(rest.trim().to_string()))
        })
    }

    #[must_use]
    pub const fn help_text() -> &'static str {
        "I answer from my dialogue database. You can also say:\n\
         • help - show this message\n\
         • time - tell the current time\n\
         • search for <terms> / look up <terms> - open a web search\n\
         • exit / quit - end the session\n\
         Anything I don't know, I'll look up on the web."
    }
}

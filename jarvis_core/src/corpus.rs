//! Canned dialogue corpus.
//!
//! The source document maps category names to objects holding a
//! `conversations` list of `{"user": ..., "bot": ...}` entries:
//!
//! ```json
//! {
//!   "greetings": {
//!     "conversations": [
//!       { "user": "hello", "bot": "Hi there!" }
//!     ]
//!   }
//! }
//! ```
//!
//! Categories are flattened into a single ordered list of [`Exchange`]s at
//! load time. Document order is preserved because first-match and tie-break
//! rules depend on it.

use crate::error::CorpusError;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, error, info};

/// A single prompt/response pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exchange {
    /// The matchable user utterance (`"user"` in the source document).
    pub prompt: String,
    /// The reply returned verbatim (`"bot"` in the source document).
    pub response: String,
}

impl Exchange {
    #[must_use]
    pub fn new(prompt: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            response: response.into(),
        }
    }

    /// Read one conversation entry. Missing or non-string fields become empty
    /// strings; a non-object entry yields `None`.
    fn from_value(value: &Value) -> Option<Self> {
        let entry = value.as_object()?;
        let field = |key: &str| {
            entry
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        Some(Self {
            prompt: field("user"),
            response: field("bot"),
        })
    }
}

/// Immutable, flattened collection of exchanges.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    categories: Vec<String>,
    exchanges: Vec<Exchange>,
}

impl Corpus {
    /// Build a corpus directly from exchanges, without category names.
    #[must_use]
    pub fn from_exchanges(exchanges: Vec<Exchange>) -> Self {
        Self {
            categories: Vec::new(),
            exchanges,
        }
    }

    /// Flatten a decoded corpus document, skipping malformed entries.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let Some(root) = value.as_object() else {
            debug!("Corpus root is not an object, using empty corpus");
            return Self::default();
        };

        let mut categories = Vec::with_capacity(root.len());
        let mut exchanges = Vec::new();

        for (name, category) in root {
            let Some(conversations) = category.get("conversations").and_then(Value::as_array)
            else {
                debug!("Skipping category '{name}': no conversations list");
                continue;
            };

            categories.push(name.clone());
            exchanges.extend(conversations.iter().filter_map(Exchange::from_value));
        }

        Self {
            categories,
            exchanges,
        }
    }

    /// Parse a corpus from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(content)?;
        Ok(Self::from_value(&value))
    }

    /// Load a corpus file.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        if !path.exists() {
            return Err(CorpusError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let corpus = Self::from_json_str(&content).map_err(|source| CorpusError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            "Loaded {} exchanges in {} categories from {}",
            corpus.len(),
            corpus.category_count(),
            path.display()
        );

        Ok(corpus)
    }

    /// Load a corpus file, logging any failure and falling back to an empty
    /// corpus so the assistant can still run.
    #[must_use]
    pub fn load_or_empty(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            error!("{e}");
            Self::default()
        })
    }

    /// All exchanges in document order.
    #[must_use]
    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    /// Names of the categories that contributed exchanges, in document order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flattens_categories_in_document_order() {
        let corpus = Corpus::from_value(&json!({
            "zeta": { "conversations": [
                { "user": "z1", "bot": "Z1" },
                { "user": "z2", "bot": "Z2" }
            ]},
            "alpha": { "conversations": [
                { "user": "a1", "bot": "A1" }
            ]}
        }));

        assert_eq!(corpus.categories(), ["zeta", "alpha"]);
        let prompts: Vec<&str> = corpus
            .exchanges()
            .iter()
            .map(|e| e.prompt.as_str())
            .collect();
        assert_eq!(prompts, ["z1", "z2", "a1"]);
    }

    #[test]
    fn skips_malformed_categories_and_entries() {
        let corpus = Corpus::from_value(&json!({
            "not_an_object": "hello",
            "no_list": { "topics": [] },
            "list_is_string": { "conversations": "hello" },
            "mixed": { "conversations": [
                42,
                { "user": "only prompt" },
                { "bot": "only response" },
                { "user": 7, "bot": ["x"] },
                { "user": "ok", "bot": "fine" }
            ]}
        }));

        assert_eq!(corpus.categories(), ["mixed"]);
        assert_eq!(
            corpus.exchanges(),
            [
                Exchange::new("only prompt", ""),
                Exchange::new("", "only response"),
                Exchange::new("", ""),
                Exchange::new("ok", "fine"),
            ]
        );
    }

    #[test]
    fn non_object_root_is_empty() {
        assert!(Corpus::from_value(&json!([1, 2, 3])).is_empty());
        assert!(Corpus::from_value(&json!(null)).is_empty());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(Corpus::from_json_str("{ not json").is_err());
    }

    #[test]
    fn missing_file_loads_empty() {
        let path = std::env::temp_dir().join(format!("jarvis_missing_{}.json", uuid::Uuid::now_v7()));
        assert!(matches!(
            Corpus::load(&path),
            Err(CorpusError::NotFound { .. })
        ));
        assert!(Corpus::load_or_empty(&path).is_empty());
    }

    #[test]
    fn invalid_file_loads_empty() {
        let path = std::env::temp_dir().join(format!("jarvis_invalid_{}.json", uuid::Uuid::now_v7()));
        std::fs::write(&path, "{ \"greetings\": ").unwrap();

        assert!(matches!(
            Corpus::load(&path),
            Err(CorpusError::Decode { .. })
        ));
        assert!(Corpus::load_or_empty(&path).is_empty());

        let _ = std::fs::remove_file(&path);
    }
}

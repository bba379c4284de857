//! Web-search fallback for queries the corpus cannot answer.

use url::Url;
use url::form_urlencoded;

/// A search built from the user's raw (original-case) input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    query: String,
}

impl SearchRequest {
    /// Trim the raw input; `None` if nothing is left to search for.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let query = raw.trim();
        (!query.is_empty()).then(|| Self {
            query: query.to_string(),
        })
    }

    /// The search terms as the user typed them.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Form-encoded search terms: spaces become `+`, reserved bytes are
    /// percent-encoded.
    #[must_use]
    pub fn encoded_query(&self) -> String {
        form_urlencoded::byte_serialize(self.query.as_bytes()).collect()
    }

    /// Full search URL, appending `param=<terms>` to `engine_url`.
    pub fn url(&self, engine_url: &str, param: &str) -> Result<Url, url::ParseError> {
        Url::parse_with_params(engine_url, [(param, self.query.as_str())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_has_no_request() {
        assert!(SearchRequest::new("").is_none());
        assert!(SearchRequest::new("  \n").is_none());
    }

    #[test]
    fn keeps_original_case_and_trims() {
        let request = SearchRequest::new("  Who Wrote Dune  ").unwrap();
        assert_eq!(request.query(), "Who Wrote Dune");
        assert_eq!(request.encoded_query(), "Who+Wrote+Dune");
    }

    #[test]
    fn single_word_is_unchanged() {
        let request = SearchRequest::new("anything").unwrap();
        assert_eq!(request.encoded_query(), "anything");
    }

    #[test]
    fn reserved_characters_are_percent_encoded() {
        let request = SearchRequest::new("c++ & rust?").unwrap();
        assert_eq!(request.encoded_query(), "c%2B%2B+%26+rust%3F");
    }

    #[test]
    fn builds_search_url() {
        let request = SearchRequest::new("what is rust").unwrap();
        let url = request.url("https://www.google.com/search", "q").unwrap();
        assert_eq!(url.as_str(), "https://www.google.com/search?q=what+is+rust");
    }

    #[test]
    fn keeps_existing_engine_params() {
        let request = SearchRequest::new("rust").unwrap();
        let url = request
            .url("https://duckduckgo.com/?ia=web", "q")
            .unwrap();
        assert_eq!(url.as_str(), "https://duckduckgo.com/?ia=web&q=rust");
    }

    #[test]
    fn invalid_engine_url_is_an_error() {
        let request = SearchRequest::new("rust").unwrap();
        assert!(request.url("not a url", "q").is_err());
    }
}

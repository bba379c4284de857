use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a corpus document.
///
/// Malformed entries inside a well-formed document are never errors; they
/// are skipped by [`crate::Corpus::from_value`].
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Data file {} not found", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read data file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in data file {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

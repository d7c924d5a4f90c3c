//! Error types for the document store.

use thiserror::Error;

/// Errors from reading or writing document files.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Data directory could not be created.
    #[error("failed to create data directory {dir}: {source}")]
    CreateDir {
        dir: String,
        #[source]
        source: std::io::Error,
    },

    /// Document file could not be read.
    #[error("failed to read {document}: {source}")]
    Read {
        document: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// Document file could not be written.
    #[error("failed to write {document}: {source}")]
    Write {
        document: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// Document file exists but does not parse as JSON of the expected shape.
    #[error("malformed JSON in {document}: {source}")]
    Malformed {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Value could not be serialized for writing.
    #[error("failed to serialize {document}: {source}")]
    Serialize {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

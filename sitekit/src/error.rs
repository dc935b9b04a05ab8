//! Error types

use pagedom::DomError;

/// Errors surfaced by page setup and event handling.
///
/// Invalid user input is never an error; it is a [`crate::validation::Validity`]
/// state. These cover a document that does not have the structure the
/// behaviors expect, or configuration that cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A document operation failed.
    #[error("Document error: {0}")]
    Dom(#[from] DomError),

    /// Configuration could not be parsed.
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Reading a file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

use std::path::PathBuf;
use thiserror::Error;

/// Custom Result type for this crate.
pub type Result<T> = std::result::Result<T, VocabError>;

/// Enum representing all possible errors in the kindle_vocab library.
#[derive(Error, Debug)]
pub enum VocabError {
    #[error("store has not been opened; await open() before issuing queries")]
    NotInitialized,

    #[error("failed to open vocabulary database at {path}: {source}")]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Internal error: {0}")]
    Internal(String), // For unexpected situations (e.g. mutex poisoning)
}

//! Error types for rapid_lexrank
//!
//! Every failure the library can produce is surfaced as a [`LexRankError`].
//! Nothing in the core retries; callers decide what to do at the boundary.

use std::path::PathBuf;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, LexRankError>;

/// Errors produced while building, persisting, or ranking a corpus
#[derive(Debug, thiserror::Error)]
pub enum LexRankError {
    /// A term was looked up in the idf table but was never seen while the
    /// table was computed
    #[error("unknown term {term:?}: not present in the idf table")]
    UnknownTerm { term: String },

    /// Two source documents resolved to the same document id
    #[error("duplicate document id {id}")]
    DuplicateDocumentId { id: u64 },

    /// A file name does not start with a numeric document id
    #[error("cannot derive a document id from {}", path.display())]
    InvalidDocumentId { path: PathBuf },

    /// A line of a persisted idf table is not `<term> <score>`
    #[error("malformed idf record on line {line}: {content:?}")]
    MalformedIdfRecord { line: usize, content: String },

    /// A persisted idf table lists the same term twice
    #[error("duplicate idf term {term:?} on line {line}")]
    DuplicateIdfTerm { line: usize, term: String },

    /// Power iteration hit its iteration cap before converging
    #[error("power iteration did not converge after {iterations} iterations (last delta {delta:e})")]
    NonConvergence { iterations: usize, delta: f64 },

    /// Operand shapes do not line up
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// The corpus has no documents, so idf is undefined
    #[error("corpus is empty")]
    EmptyCorpus,

    /// Configuration values are out of range
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl LexRankError {
    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an unknown term error
    pub fn unknown_term(term: impl Into<String>) -> Self {
        Self::UnknownTerm { term: term.into() }
    }

    /// Wrap an I/O error together with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

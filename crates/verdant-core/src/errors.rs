use std::path::PathBuf;
use thiserror::Error;

/// Failure to load one artifact from the project tree.
#[derive(Debug, Error)]
pub enum EvidenceError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path} does not export `{export}`")]
    MissingExport { path: PathBuf, export: String },

    #[error("failed to tokenize {path}: {message}")]
    Syntax { path: PathBuf, message: String },

    #[error("failed to parse export `{export}` in {path}: {message}")]
    Parse {
        path: PathBuf,
        export: String,
        message: String,
    },
}

/// Failure that aborts a whole section. Always rendered as a single outcome.
#[derive(Debug, Error)]
pub enum SectionError {
    #[error(transparent)]
    Evidence(#[from] EvidenceError),

    #[error("`{0}` is neither an array nor an object")]
    NotACollection(String),

    #[error("`{0}` has no first record to sample")]
    NoSampleRecord(String),
}

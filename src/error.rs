//! Error types for the lineup store, repository and input parsing.

use std::path::{Path, PathBuf};

/// Coarse classification of a failure, for callers that branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A filesystem operation failed.
    Io,
    /// User-supplied text did not match the expected grammar.
    MalformedInput,
    /// The operation would violate a uniqueness invariant.
    Conflict,
    /// A bounded search ran out of candidates.
    Exhausted,
    /// A value was outside its allowed range.
    InvalidInput,
}

/// Error type for store, repository and parsing operations.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File or directory the operation touched
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The repository file is not valid JSON for the expected shape.
    #[error("Failed to parse {}: {source}", path.display())]
    Json {
        /// Repository file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// The pasted getpos output could not be parsed.
    #[error("{0}")]
    MalformedGetpos(String),

    /// A record with this id is already in the repository.
    #[error("Lineup id already exists: {0}")]
    DuplicateId(String),

    /// No free id was found within the retry bound.
    #[error("Could not generate a unique id after {attempts} attempts")]
    IdSpaceExhausted {
        /// Number of draws made
        attempts: usize,
    },

    /// Slot coordinates outside the radio wheel.
    #[error("Invalid slot tab={tab} text={text} (tab must be 0-2, text must be 1-8)")]
    InvalidSlot {
        /// Requested tab
        tab: u8,
        /// Requested text
        text: u8,
    },

    /// Settings failed validation.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

impl Error {
    /// Wraps an `io::Error` with the path it occurred on.
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns the failure class.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. } | Self::Json { .. } => ErrorKind::Io,
            Self::MalformedGetpos(_) => ErrorKind::MalformedInput,
            Self::DuplicateId(_) => ErrorKind::Conflict,
            Self::IdSpaceExhausted { .. } => ErrorKind::Exhausted,
            Self::InvalidSlot { .. } | Self::InvalidSettings(_) => ErrorKind::InvalidInput,
        }
    }
}

/// Result type for library operations.
pub type Result<T> = std::result::Result<T, Error>;

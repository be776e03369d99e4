//! Error types for nimbus-core.
//!
//! [`ElsError`] covers malformed caller input to the search and extraction
//! functions. A term that simply does not occur is **not** an error; it is
//! reported as [`MatchResult::NotFound`](crate::MatchResult::NotFound).

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, ElsError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ElsError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ElsError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        ElsError::InvalidArgument(msg.into())
    }
}

/// Failure to produce a [`TextBuffer`](crate::TextBuffer) from disk.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read corpus {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corpus {path} contains no letters after normalisation")]
    Empty { path: PathBuf },
}

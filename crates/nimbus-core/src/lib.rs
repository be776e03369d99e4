//! nimbus-core — equidistant letter sequence (ELS) search.
//!
//! Two pure stages over an immutable corpus, plus the plumbing callers need
//! around them:
//!
//! ```text
//! corpus file ──► TextBuffer ──► locate / scan ──► start index ──► extract_matrix ──► Matrix
//!   (corpus)                       (locate)                          (matrix)
//! ```
//!
//! [`query::run_query`] is the caller stage shared by the CLI, the HTTP API
//! and the TUI: it picks a skip (fixed or scanned), extracts the matrix and
//! packs the result into an [`ElsReport`].
//!
//! The search and extraction functions do no I/O and no logging, and hold no
//! shared state; a [`TextBuffer`] can be searched from any number of threads
//! at once.

pub mod config;
pub mod corpus;
pub mod error;
pub mod locate;
pub mod matrix;
pub mod query;
pub mod types;

pub use error::{CorpusError, ElsError, Result};
pub use locate::{locate, locate_term, occurrences, scan, ElsHit, Occurrences, SkipRange};
pub use matrix::{extract_matrix, Matrix, DEFAULT_MATRIX_SIZE};
pub use query::{run_query, ElsQuery, ElsReport, HitReport};
pub use types::{MatchResult, SearchTerm, SkipDistance, TextBuffer};

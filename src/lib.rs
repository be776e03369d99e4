//! nimbus — equidistant letter sequence search.
//!
//! The search core lives in `nimbus-core`; this crate adds the HTTP API and
//! re-exports the core so that integration tests and the binary share one
//! code path.
//!
//! # Architecture
//!
//! ```text
//! Corpus ──► TextBuffer ──► run_query ──► ElsReport ──┬──► CLI (text / JSON)
//!                              │                      ├──► server (HTTP JSON)
//!                     locate / scan / extract         └──► nimbus-tui
//! ```

pub mod server;

pub use nimbus_core::{
    config::Config, corpus, extract_matrix, locate, run_query, ElsError, ElsQuery, ElsReport,
    HitReport, MatchResult, Matrix, TextBuffer, DEFAULT_MATRIX_SIZE,
};

//! Core value types shared by the locator and the extractor.
//!
//! All of them are immutable once built. [`TextBuffer`] is reference-counted
//! so a single corpus can be handed to any number of concurrent callers
//! without copying.

use crate::error::{ElsError, Result};
use serde::Serialize;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// TextBuffer
// ---------------------------------------------------------------------------

/// The corpus being searched: a flat, zero-indexed run of characters.
///
/// One cell per Unicode scalar value, so multi-byte alphabets (Hebrew, Greek)
/// index the same way ASCII does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    chars: Arc<[char]>,
}

impl TextBuffer {
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect() }
    }

    pub fn from_chars(chars: Vec<char>) -> Self {
        Self { chars: chars.into() }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextBuffer {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

// ---------------------------------------------------------------------------
// SearchTerm
// ---------------------------------------------------------------------------

/// A non-empty sequence of characters to locate.
///
/// No case folding or diacritic stripping happens here; the caller supplies
/// the term already in the corpus alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    chars: Vec<char>,
}

impl SearchTerm {
    pub fn new(term: &str) -> Result<Self> {
        if term.is_empty() {
            return Err(ElsError::invalid("search term must not be empty"));
        }
        Ok(Self { chars: term.chars().collect() })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always `false`: construction rejects the empty term.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }
}

impl std::fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

// ---------------------------------------------------------------------------
// SkipDistance
// ---------------------------------------------------------------------------

/// Stride between consecutive term letters. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SkipDistance(pub(crate) usize);

impl SkipDistance {
    /// Accepts a signed value so that zero and negative skips coming from
    /// external input are rejected here rather than wrapping.
    pub fn new(skip: i64) -> Result<Self> {
        if skip <= 0 {
            return Err(ElsError::invalid(format!(
                "skip distance must be positive, got {skip}"
            )));
        }
        usize::try_from(skip)
            .map(Self)
            .map_err(|_| ElsError::invalid(format!("skip distance {skip} is too large")))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for SkipDistance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// MatchResult
// ---------------------------------------------------------------------------

/// Outcome of a single locate call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "status", content = "start_index", rename_all = "snake_case")]
pub enum MatchResult {
    NotFound,
    /// Zero-based offset of the first term letter.
    Found(usize),
}

impl MatchResult {
    pub fn is_found(self) -> bool {
        matches!(self, MatchResult::Found(_))
    }

    pub fn start_index(self) -> Option<usize> {
        match self {
            MatchResult::Found(i) => Some(i),
            MatchResult::NotFound => None,
        }
    }
}

impl From<Option<usize>> for MatchResult {
    fn from(index: Option<usize>) -> Self {
        index.map_or(MatchResult::NotFound, MatchResult::Found)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

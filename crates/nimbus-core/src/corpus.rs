//! Corpus loader — turns a text file into a [`TextBuffer`].
//!
//! Normalisation keeps Unicode letters only. Whitespace, punctuation, digits
//! and combining marks (vowel points, cantillation) are dropped so that the
//! buffer is a single unbroken run of letters. Case is left alone.

use crate::error::CorpusError;
use crate::types::TextBuffer;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static NON_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}]+").expect("letter class regex must compile"));

/// Strip everything that is not a Unicode letter.
pub fn normalize(raw: &str) -> String {
    NON_LETTERS.replace_all(raw, "").into_owned()
}

/// Read a UTF-8 corpus file, optionally normalising it.
///
/// A corpus that ends up empty is an error: nothing could ever be found in it.
pub fn load(path: &Path, normalise: bool) -> Result<TextBuffer, CorpusError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = if normalise { normalize(&raw) } else { raw };
    let buffer = TextBuffer::new(&text);
    if buffer.is_empty() {
        return Err(CorpusError::Empty { path: path.to_path_buf() });
    }

    tracing::info!(path = %path.display(), letters = buffer.len(), normalise, "corpus loaded");
    Ok(buffer)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Test builders: filler corpora with planted equidistant sequences.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use nimbus_core::TextBuffer;

/// Lowercase letters used as filler. Planted terms use uppercase letters so
/// the filler can never produce an accidental match.
pub const FILLER: &[char] = &['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j'];

// ---------------------------------------------------------------------------
// CorpusBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for corpora with known ELS occurrences.
///
/// # Example
///
/// ```rust
/// let text = CorpusBuilder::filler(200)
///     .plant("TORAH", 17, 5)
///     .plant("TORAH", 120, 5)
///     .build();
/// ```
pub struct CorpusBuilder {
    chars: Vec<char>,
}

impl CorpusBuilder {
    /// `len` filler letters in a fixed, non-periodic-looking pattern.
    pub fn filler(len: usize) -> Self {
        let chars = (0..len).map(|i| FILLER[(i * 7 + i / 10) % FILLER.len()]).collect();
        Self { chars }
    }

    /// Decimal digits `0123456789` repeated up to `len` characters.
    pub fn digits(len: usize) -> Self {
        let chars = (0..len)
            .map(|i| char::from_digit((i % 10) as u32, 10).unwrap())
            .collect();
        Self { chars }
    }

    /// Write `term` at `start`, `start + skip`, `start + 2*skip`, ...
    ///
    /// Panics if the sequence does not fit.
    pub fn plant(mut self, term: &str, start: usize, skip: usize) -> Self {
        for (j, c) in term.chars().enumerate() {
            let at = start + j * skip;
            assert!(at < self.chars.len(), "planted letter {c:?} at {at} is past the end");
            self.chars[at] = c;
        }
        self
    }

    /// Overwrite a single position.
    pub fn set(mut self, at: usize, c: char) -> Self {
        self.chars[at] = c;
        self
    }

    pub fn build_string(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn build(self) -> TextBuffer {
        TextBuffer::from_chars(self.chars)
    }
}

/// Buffer whose cell `i` is a distinct CJK ideograph, so that every matrix
/// cell identifies the linear offset it was read from.
pub fn indexed_text(len: usize) -> TextBuffer {
    TextBuffer::from_chars((0..len).map(indexed_char).collect())
}

pub fn indexed_char(i: usize) -> char {
    char::from_u32(0x4E00 + i as u32).unwrap()
}

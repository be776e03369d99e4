//! Pattern locator — finds a term as an equidistant letter sequence (ELS).
//!
//! The scan is the plain double loop: for every start index `i` in ascending
//! order, compare `text[i + j*skip]` against `term[j]`. The first start index
//! that matches is *the* match. Start indices whose last letter would fall
//! past the end of the buffer are never tested.

use crate::error::{ElsError, Result};
use crate::types::{MatchResult, SearchTerm, SkipDistance, TextBuffer};

/// Locate `term` in `text` at the given `skip`, validating raw inputs.
///
/// Returns `Err(InvalidArgument)` for an empty term or a skip `<= 0`. A term
/// that does not occur yields `Ok(MatchResult::NotFound)`.
pub fn locate(text: &TextBuffer, term: &str, skip: i64) -> Result<MatchResult> {
    let skip = SkipDistance::new(skip)?;
    let term = SearchTerm::new(term)?;
    Ok(locate_term(text, &term, skip))
}

/// Infallible locate over already-validated inputs.
pub fn locate_term(text: &TextBuffer, term: &SearchTerm, skip: SkipDistance) -> MatchResult {
    occurrences(text, term, skip).next().into()
}

/// Iterate every start index at which `term` occurs with stride `skip`, in
/// ascending order.
pub fn occurrences<'a>(
    text: &'a TextBuffer,
    term: &'a SearchTerm,
    skip: SkipDistance,
) -> Occurrences<'a> {
    // Distance from the first to the last letter. `None` on overflow means
    // the term cannot fit in any addressable buffer.
    let span = (term.len() - 1).checked_mul(skip.get());
    let end = span.and_then(|span| text.len().checked_sub(span));
    Occurrences {
        text: text.as_chars(),
        term: term.as_chars(),
        skip: skip.get(),
        next: 0,
        end: end.unwrap_or(0),
    }
}

/// Iterator returned by [`occurrences`].
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    text: &'a [char],
    term: &'a [char],
    skip: usize,
    next: usize,
    /// Exclusive upper bound on start indices: `len(text) - (len(term)-1)*skip`.
    end: usize,
}

impl Iterator for Occurrences<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.next < self.end {
            let i = self.next;
            self.next += 1;
            let hit = self
                .term
                .iter()
                .enumerate()
                .all(|(j, &c)| self.text[i + j * self.skip] == c);
            if hit {
                return Some(i);
            }
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Skip scanning
// ---------------------------------------------------------------------------

/// Inclusive range of skip distances to try, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipRange {
    min: SkipDistance,
    max: SkipDistance,
}

impl SkipRange {
    pub fn new(min: i64, max: i64) -> Result<Self> {
        let min = SkipDistance::new(min)?;
        let max = SkipDistance::new(max)?;
        if min > max {
            return Err(ElsError::invalid(format!(
                "skip range is empty: min {min} > max {max}"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> SkipDistance {
        self.min
    }

    pub fn max(&self) -> SkipDistance {
        self.max
    }

    fn iter(&self) -> impl Iterator<Item = SkipDistance> {
        (self.min.get()..=self.max.get()).map(SkipDistance)
    }
}

/// A located ELS: which skip matched and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ElsHit {
    pub skip: SkipDistance,
    pub start_index: usize,
    pub term_length: usize,
}

impl ElsHit {
    /// Linear offsets of every term letter in the corpus.
    pub fn letter_offsets(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.term_length).map(move |j| self.start_index + j * self.skip.get())
    }

    /// Extract the matrix centred on this hit.
    pub fn extract(&self, text: &TextBuffer, size: usize) -> Result<crate::Matrix> {
        let skip = i64::try_from(self.skip.get())
            .map_err(|_| ElsError::invalid("skip distance does not fit in i64"))?;
        crate::matrix::extract_matrix(text, self.start_index, skip, self.term_length, size)
    }
}

/// Try every skip in `range` in ascending order and return the first hit.
///
/// Among hits, the smallest skip wins; within a skip, the smallest start
/// index wins.
pub fn scan(text: &TextBuffer, term: &SearchTerm, range: SkipRange) -> Option<ElsHit> {
    let span = term.len() - 1;
    // Once the first and last letters are a buffer length apart, no larger
    // skip can fit either.
    let fits = |skip: &SkipDistance| span == 0 || span.saturating_mul(skip.get()) < text.len();
    range.iter().take_while(fits).find_map(|skip| {
        locate_term(text, term, skip).start_index().map(|start_index| ElsHit {
            skip,
            start_index,
            term_length: term.len(),
        })
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

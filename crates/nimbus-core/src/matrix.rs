//! Matrix extractor — reshapes a window of the flat corpus into a square grid.
//!
//! The grid is a pure row-major reading of `size * size` consecutive buffer
//! cells, positioned so that the middle letter of the located term lands on
//! the centre cell:
//!
//! ```text
//! center           = size / 2
//! center_of_word   = start + (term_length / 2) * skip
//! origin           = center_of_word - center * size - center
//! cell(row, col)   = text[origin + row * size + col]
//! ```
//!
//! Rows are fixed-width chunks of the buffer, not lines along the skip, so a
//! term with `skip != size` shows up as a diagonal or broken line. Offsets
//! outside the buffer become the empty sentinel (`None`).

use crate::error::{ElsError, Result};
use crate::types::{SkipDistance, TextBuffer};
use serde::{Serialize, Serializer};

/// Grid edge length used when the caller does not pick one.
pub const DEFAULT_MATRIX_SIZE: usize = 21;

/// A `size × size` snapshot of the corpus around a located term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    size: usize,
    /// Linear corpus offset of cell `(0, 0)`. Negative near the buffer start.
    origin: i64,
    cells: Vec<Option<char>>,
}

impl Matrix {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn origin(&self) -> i64 {
        self.origin
    }

    /// Character at `(row, col)`. `None` for the empty sentinel and for
    /// coordinates outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[row * self.size + col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.cells.chunks(self.size)
    }

    /// Grid position of a linear corpus offset, if the grid covers it.
    pub fn project(&self, offset: usize) -> Option<(usize, usize)> {
        let rel = i64::try_from(offset).ok()?.checked_sub(self.origin)?;
        let rel = usize::try_from(rel).ok()?;
        (rel < self.cells.len()).then(|| (rel / self.size, rel % self.size))
    }

    /// Rows of one-character strings; the sentinel becomes `""`.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.rows()
            .map(|row| row.iter().map(|c| c.map(String::from).unwrap_or_default()).collect())
            .collect()
    }

    /// Text form handed to downstream consumers: cells joined by a single
    /// space, rows joined by `\n`. Same as the `Display` output.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                f.write_str("\n")?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                if let Some(ch) = cell {
                    write!(f, "{ch}")?;
                }
            }
        }
        Ok(())
    }
}

impl Serialize for Matrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_rows().serialize(serializer)
    }
}

/// Extract a `size × size` matrix centred on the middle letter of a match.
///
/// `size` must be odd and at least 1; `skip` and `term_length` must be at
/// least 1. Out-of-range cells are filled with the sentinel rather than
/// failing.
pub fn extract_matrix(
    text: &TextBuffer,
    start_index: usize,
    skip: i64,
    term_length: usize,
    size: usize,
) -> Result<Matrix> {
    check_size(size)?;
    let skip = SkipDistance::new(skip)?;
    if term_length == 0 {
        return Err(ElsError::invalid("term length must be at least 1"));
    }

    let overflow = || ElsError::invalid("matrix offsets overflow");
    let origin = matrix_origin(start_index, skip.get(), term_length, size).ok_or_else(overflow)?;
    let area = size.checked_mul(size).ok_or_else(overflow)?;
    // The last cell offset must be representable too.
    i64::try_from(area)
        .ok()
        .and_then(|a| origin.checked_add(a))
        .ok_or_else(overflow)?;

    let cells = (0..area)
        .map(|k| {
            let index = origin + k as i64;
            usize::try_from(index).ok().and_then(|i| text.get(i))
        })
        .collect();

    Ok(Matrix { size, origin, cells })
}

/// Reject grid sizes that have no centre cell.
pub fn check_size(size: usize) -> Result<()> {
    if size == 0 || size % 2 == 0 {
        return Err(ElsError::invalid(format!(
            "matrix size must be a positive odd integer, got {size}"
        )));
    }
    Ok(())
}

fn matrix_origin(start: usize, skip: usize, term_length: usize, size: usize) -> Option<i64> {
    let center = i64::try_from(size / 2).ok()?;
    let size = i64::try_from(size).ok()?;
    let half = i64::try_from(term_length / 2).ok()?;
    let skip = i64::try_from(skip).ok()?;

    let center_of_word = i64::try_from(start).ok()?.checked_add(half.checked_mul(skip)?)?;
    center_of_word
        .checked_sub(center.checked_mul(size)?)?
        .checked_sub(center)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Domain-specific assertion macros for nimbus harnesses.
//!
//! These wrap plain comparisons with context-rich failure messages that name
//! the violated ELS or matrix invariant and the offending position.

// ---------------------------------------------------------------------------
// Locator assertions
// ---------------------------------------------------------------------------

/// Assert that `term` really is spelled at `start` with stride `skip`.
///
/// ```rust
/// assert_els_at!(text, "TORAH", 17, 5);
/// ```
#[macro_export]
macro_rules! assert_els_at {
    ($text:expr, $term:expr, $start:expr, $skip:expr) => {{
        let text: &nimbus_core::TextBuffer = &$text;
        let term: &str = $term;
        let start: usize = $start;
        let skip: usize = $skip;
        for (j, expected) in term.chars().enumerate() {
            let at = start + j * skip;
            match text.get(at) {
                Some(actual) if actual == expected => {}
                Some(actual) => panic!(
                    "assert_els_at! failed: letter {} of {:?}\n  text[{}] expected {:?}, got {:?}",
                    j, term, at, expected, actual
                ),
                None => panic!(
                    "assert_els_at! failed: letter {} of {:?} at {} is past the end (len {})",
                    j,
                    term,
                    at,
                    text.len()
                ),
            }
        }
    }};
}

/// Assert that `locate` returned `Found(expected)`.
#[macro_export]
macro_rules! assert_found {
    ($result:expr, $expected:expr) => {{
        match $result {
            nimbus_core::MatchResult::Found(i) if i == $expected => {}
            other => panic!(
                "assert_found! failed:\n  expected: Found({})\n  actual:   {:?}",
                $expected, other
            ),
        }
    }};
}

/// Assert that `locate` returned `NotFound`.
#[macro_export]
macro_rules! assert_not_found {
    ($result:expr) => {{
        match $result {
            nimbus_core::MatchResult::NotFound => {}
            other => panic!("assert_not_found! failed: got {:?}", other),
        }
    }};
}

/// Assert that a call failed with `ElsError::InvalidArgument`.
#[macro_export]
macro_rules! assert_invalid_argument {
    ($result:expr) => {{
        match $result {
            Err(nimbus_core::ElsError::InvalidArgument(_)) => {}
            Ok(v) => panic!("assert_invalid_argument! failed: call succeeded with {:?}", v),
        }
    }};
}

// ---------------------------------------------------------------------------
// Matrix assertions
// ---------------------------------------------------------------------------

/// Assert that a matrix is `size × size`.
#[macro_export]
macro_rules! assert_square {
    ($matrix:expr, $size:expr) => {{
        let matrix: &nimbus_core::Matrix = &$matrix;
        let size: usize = $size;
        assert_eq!(matrix.size(), size, "assert_square!: reported size");
        let rows: Vec<_> = matrix.rows().collect();
        assert_eq!(rows.len(), size, "assert_square!: row count");
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), size, "assert_square!: width of row {}", r);
        }
    }};
}

/// Assert that every cell holds `text[origin + row*size + col]`, or the empty
/// sentinel where that offset is outside the buffer.
#[macro_export]
macro_rules! assert_cells_follow_origin {
    ($matrix:expr, $text:expr) => {{
        let matrix: &nimbus_core::Matrix = &$matrix;
        let text: &nimbus_core::TextBuffer = &$text;
        let size = matrix.size() as i64;
        for row in 0..matrix.size() {
            for col in 0..matrix.size() {
                let offset = matrix.origin() + row as i64 * size + col as i64;
                let expected = usize::try_from(offset).ok().and_then(|o| text.get(o));
                let actual = matrix.cell(row, col);
                if actual != expected {
                    panic!(
                        "assert_cells_follow_origin! failed at ({}, {}), offset {}\n  expected: {:?}\n  actual:   {:?}",
                        row, col, offset, expected, actual
                    );
                }
            }
        }
    }};
}

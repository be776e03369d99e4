#![allow(unused)]
//! Pattern locator integration harness.
//!
//! # What this covers
//!
//! - **Match invariant**: every `Found(i)` spells the term at stride `skip`
//!   starting at `i`, and no smaller start index does.
//! - **Smallest-index tie-break**: two planted occurrences resolve to the
//!   earlier one.
//! - **Boundary exclusion**: a term whose tail would run past the buffer is
//!   `NotFound`, never a panic.
//! - **NotFound correctness**: letters outside the corpus alphabet are never
//!   found at any skip.
//! - **Determinism**: repeated calls agree.
//! - **Invalid arguments**: zero or negative skip and the empty term.
//! - **Property: agrees with a brute-force reference** (proptest) over random
//!   two-letter corpora, where hits are frequent.
//!
//! # What this does NOT cover
//!
//! - Skip scanning across a range (see scan_harness)
//! - Matrix extraction around a hit (see matrix_harness)
//!
//! # Running
//!
//! ```sh
//! cargo test --test locate_harness
//! ```

mod common;
use common::*;

use nimbus_core::{locate, locate_term, occurrences, MatchResult, SearchTerm, SkipDistance, TextBuffer};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

/// Reference implementation: every start index, checked letter by letter.
fn brute_force(text: &[char], term: &[char], skip: usize) -> Vec<usize> {
    (0..text.len())
        .filter(|&i| {
            term.iter()
                .enumerate()
                .all(|(j, &c)| text.get(i + j * skip) == Some(&c))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Planted occurrences
// ---------------------------------------------------------------------------

#[rstest]
#[case::contiguous(1, 3)]
#[case::small_skip(2, 40)]
#[case::wide_skip(37, 11)]
#[case::skip_longer_than_term(150, 0)]
fn planted_term_is_found(#[case] skip: usize, #[case] start: usize) {
    let text = CorpusBuilder::filler(1_000).plant("TORAH", start, skip).build();
    let result = locate(&text, "TORAH", skip as i64).unwrap();
    assert_found!(result, start);
    assert_els_at!(text, "TORAH", start, skip);
}

#[test]
fn two_occurrences_resolve_to_the_earlier() {
    let text = CorpusBuilder::filler(500)
        .plant("MOSES", 300, 9)
        .plant("MOSES", 12, 9)
        .build();
    assert_found!(locate(&text, "MOSES", 9).unwrap(), 12);

    let term = SearchTerm::new("MOSES").unwrap();
    let all: Vec<_> = occurrences(&text, &term, SkipDistance::new(9).unwrap()).collect();
    assert_eq!(all, vec![12, 300]);
}

#[test]
fn overlapping_occurrences_resolve_to_the_earlier() {
    // "AAA" at skip 2 starts at 0 and at 2.
    let text = TextBuffer::new("AxAxAxA");
    assert_found!(locate(&text, "AAA", 2).unwrap(), 0);
}

#[test]
fn only_the_given_skip_is_matched() {
    let text = CorpusBuilder::filler(200).plant("AARON", 10, 4).build();
    assert_not_found!(locate(&text, "AARON", 3).unwrap());
    assert_not_found!(locate(&text, "AARON", 5).unwrap());
    assert_found!(locate(&text, "AARON", 4).unwrap(), 10);
}

// ---------------------------------------------------------------------------
// Boundaries
// ---------------------------------------------------------------------------

#[test]
fn term_ending_on_last_letter_is_found() {
    // len 100, term of 3 at skip 7: last valid start is 100 - 1 - 14 = 85.
    let text = CorpusBuilder::filler(100).plant("XYZ", 85, 7).build();
    assert_found!(locate(&text, "XYZ", 7).unwrap(), 85);
}

#[test]
fn term_running_past_the_end_is_not_found() {
    // Two letters fit at skip 7 from 92, the third would be at 106.
    let text = CorpusBuilder::filler(100).plant("XY", 92, 7).build();
    assert_not_found!(locate(&text, "XYZ", 7).unwrap());
    // The same start with a larger skip does not fit either.
    assert_not_found!(locate(&text, "XY", 8).unwrap());
}

#[test]
fn term_longer_than_text() {
    let text = TextBuffer::new("ab");
    assert_not_found!(locate(&text, "abc", 1).unwrap());
    assert_not_found!(locate(&text, "ab", 2).unwrap());
}

#[test]
fn empty_text_is_not_found() {
    let text = TextBuffer::new("");
    assert_not_found!(locate(&text, "a", 1).unwrap());
}

#[test]
fn huge_skip_does_not_overflow() {
    let text = CorpusBuilder::filler(50).build();
    assert_not_found!(locate(&text, "ab", i64::MAX).unwrap());
    // A single letter ignores the skip entirely.
    assert_found!(locate(&text, "a", i64::MAX).unwrap(), 0);
}

// ---------------------------------------------------------------------------
// NotFound and invalid input
// ---------------------------------------------------------------------------

#[test]
fn letter_outside_alphabet_is_never_found() {
    let text = CorpusBuilder::filler(300).build();
    for skip in 1..=50 {
        assert_not_found!(locate(&text, "aQ", skip).unwrap());
    }
}

#[rstest]
#[case::zero_skip("abc", 0)]
#[case::negative_skip("abc", -3)]
#[case::empty_term("", 1)]
fn invalid_arguments_are_rejected(#[case] term: &str, #[case] skip: i64) {
    let text = genesis();
    assert_invalid_argument!(locate(&text, term, skip));
}

#[test]
fn repeated_calls_agree() {
    let text = genesis();
    let first = locate(&text, "eden", 78).unwrap();
    let second = locate(&text, "eden", 78).unwrap();
    assert_eq!(first, second);
    assert_found!(first, 28);
}

#[test]
fn unicode_letters_are_single_cells() {
    let text = TextBuffer::new(BERESHIT_LETTERS);
    // bet, resh, alef open the verse; the second "bara" starts at 6.
    assert_found!(locate(&text, "ברא", 1).unwrap(), 0);
    let term = SearchTerm::new("ברא").unwrap();
    let all: Vec<_> = occurrences(&text, &term, SkipDistance::new(1).unwrap()).collect();
    assert_eq!(all, vec![0, 6]);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn agrees_with_brute_force(
        text in "[ab]{0,60}",
        term in "[ab]{1,4}",
        skip in 1usize..8,
    ) {
        let buffer = TextBuffer::new(&text);
        let chars: Vec<char> = text.chars().collect();
        let term_chars: Vec<char> = term.chars().collect();
        let expected = brute_force(&chars, &term_chars, skip);

        let result = locate(&buffer, &term, skip as i64).unwrap();
        prop_assert_eq!(result.start_index(), expected.first().copied());
        if let MatchResult::Found(i) = result {
            for (j, c) in term_chars.iter().enumerate() {
                prop_assert_eq!(chars[i + j * skip], *c);
            }
        }

        let term = SearchTerm::new(&term).unwrap();
        let all: Vec<usize> = occurrences(&buffer, &term, SkipDistance::new(skip as i64).unwrap()).collect();
        prop_assert_eq!(all, expected);
    }

    #[test]
    fn skip_one_is_substring_search(text in "[abc]{0,40}", term in "[abc]{1,3}") {
        let buffer = TextBuffer::new(&text);
        // ASCII only, so byte offsets are char offsets.
        let expected = text.find(&term);
        prop_assert_eq!(locate(&buffer, &term, 1).unwrap().start_index(), expected);
    }
}

//! Query pipeline — the caller stage that sits on top of the core.
//!
//! An [`ElsQuery`] names a term and either a fixed skip or a skip range. The
//! pipeline locates the term, extracts the matrix around the hit and packs
//! everything a consumer needs into an [`ElsReport`]. The CLI, the HTTP API
//! and the TUI all go through [`run_query`].

use crate::{
    config::Config, locate_term, occurrences, scan, ElsError, ElsHit, Matrix,
    SearchTerm, SkipDistance, SkipRange, TextBuffer,
};
use serde::{Deserialize, Serialize};

/// A single search request.
///
/// Absent fields fall back to the `[matrix]` and `[search]` config sections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ElsQuery {
    pub term: String,
    /// Search at exactly this skip. When absent the skip range is scanned.
    #[serde(default)]
    pub skip: Option<i64>,
    #[serde(default)]
    pub min_skip: Option<i64>,
    #[serde(default)]
    pub max_skip: Option<i64>,
    #[serde(default)]
    pub size: Option<usize>,
    /// Also list every start index at the matching skip.
    #[serde(default)]
    pub all: bool,
}

impl ElsQuery {
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into(), ..Self::default() }
    }

    pub fn skip(mut self, skip: i64) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn skip_range(mut self, min: i64, max: i64) -> Self {
        self.min_skip = Some(min);
        self.max_skip = Some(max);
        self
    }

    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn all(mut self, all: bool) -> Self {
        self.all = all;
        self
    }
}

/// Result of [`run_query`]. `NotFound` is a normal report, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElsReport {
    pub found: bool,
    pub term: String,
    #[serde(flatten)]
    pub hit: Option<HitReport>,
}

/// Everything known about a located term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HitReport {
    pub skip: SkipDistance,
    pub start_index: usize,
    /// Grid coordinates `[row, col]` of each term letter that falls inside
    /// the matrix, in term order.
    pub positions: Vec<(usize, usize)>,
    pub matrix: Matrix,
    /// The matrix in its space-separated text form.
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrences: Option<Vec<usize>>,
}

/// Run a query against `text`.
///
/// Returns `Err(InvalidArgument)` for an empty term, a non-positive skip, an
/// empty skip range, an even matrix size or one above `[matrix] max_size`.
pub fn run_query(text: &TextBuffer, query: &ElsQuery, config: &Config) -> Result<ElsReport, ElsError> {
    let term = SearchTerm::new(&query.term)?;
    let size = query.size.unwrap_or(config.matrix.size);
    config.matrix.check(size)?;

    let hit = match query.skip {
        Some(skip) => {
            let skip = SkipDistance::new(skip)?;
            locate_term(text, &term, skip).start_index().map(|start_index| ElsHit {
                skip,
                start_index,
                term_length: term.len(),
            })
        }
        None => {
            let range = SkipRange::new(
                query.min_skip.unwrap_or(config.search.min_skip),
                query.max_skip.unwrap_or(config.search.max_skip),
            )?;
            scan(text, &term, range)
        }
    };

    let hit = match hit {
        Some(hit) => Some(hit_report(text, &term, &hit, size, query.all)?),
        None => None,
    };

    Ok(ElsReport { found: hit.is_some(), term: query.term.clone(), hit })
}

fn hit_report(
    text: &TextBuffer,
    term: &SearchTerm,
    hit: &ElsHit,
    size: usize,
    all: bool,
) -> Result<HitReport, ElsError> {
    let matrix = hit.extract(text, size)?;
    let positions = hit.letter_offsets().filter_map(|o| matrix.project(o)).collect();
    let occurrences = all.then(|| occurrences(text, term, hit.skip).collect());
    Ok(HitReport {
        skip: hit.skip,
        start_index: hit.start_index,
        positions,
        text: matrix.to_text(),
        matrix,
        occurrences,
    })
}

impl std::fmt::Display for ElsReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some(hit) = &self.hit else {
            return write!(f, "not found: {}", self.term);
        };
        writeln!(
            f,
            "found {} at index {} (skip {})",
            self.term, hit.start_index, hit.skip
        )?;
        writeln!(f)?;
        writeln!(f, "{}", hit.text)?;
        if let Some(all) = &hit.occurrences {
            let list: Vec<String> = all.iter().map(ToString::to_string).collect();
            writeln!(f)?;
            write!(f, "occurrences at skip {}: {}", hit.skip, list.join(", "))?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config() -> Config {
        Config::defaults()
    }

    #[test]
    fn fixed_skip_reports_hit() {
        let text = TextBuffer::new("0123456789");
        let report = run_query(&text, &ElsQuery::new("5").skip(1).size(3), &config()).unwrap();
        assert!(report.found);
        let hit = report.hit.unwrap();
        assert_eq!(hit.start_index, 5);
        assert_eq!(hit.positions, vec![(1, 1)]);
        assert_eq!(hit.text, "1 2 3\n4 5 6\n7 8 9");
        assert_eq!(hit.occurrences, None);
    }

    #[test]
    fn scan_uses_query_range() {
        // 'a' and 'b' three apart: only reachable with skip 3.
        let text = TextBuffer::new("axxbxx");
        let q = ElsQuery::new("ab").skip_range(1, 2).size(3);
        assert!(!run_query(&text, &q, &config()).unwrap().found);
        let q = ElsQuery::new("ab").skip_range(1, 3).size(3);
        let report = run_query(&text, &q, &config()).unwrap();
        assert_eq!(report.hit.unwrap().skip.get(), 3);
    }

    #[test]
    fn not_found_is_a_report() {
        let text = TextBuffer::new("abc");
        let report = run_query(&text, &ElsQuery::new("z").skip(1), &config()).unwrap();
        assert_eq!(report, ElsReport { found: false, term: "z".into(), hit: None });
        assert_eq!(report.to_string(), "not found: z");
    }

    #[test]
    fn invalid_inputs_are_errors() {
        let text = TextBuffer::new("abc");
        assert!(run_query(&text, &ElsQuery::new(""), &config()).is_err());
        assert!(run_query(&text, &ElsQuery::new("a").skip(0), &config()).is_err());
        assert!(run_query(&text, &ElsQuery::new("a").skip(1).size(4), &config()).is_err());
        assert!(run_query(&text, &ElsQuery::new("a").skip_range(5, 1), &config()).is_err());
    }

    #[test]
    fn even_size_rejected_even_when_absent() {
        let text = TextBuffer::new("abc");
        let err = run_query(&text, &ElsQuery::new("z").skip(1).size(2), &config()).unwrap_err();
        assert!(matches!(err, ElsError::InvalidArgument(_)));
    }

    #[test]
    fn oversized_matrix_rejected_before_extraction() {
        let text = TextBuffer::new("abc");
        let err = run_query(&text, &ElsQuery::new("a").skip(1).size(999_999_999), &config())
            .unwrap_err();
        assert!(matches!(err, ElsError::InvalidArgument(msg) if msg.contains("maximum")));
        // The limit itself is accepted.
        let report = run_query(&text, &ElsQuery::new("a").skip(1).size(201), &config()).unwrap();
        assert_eq!(report.hit.unwrap().matrix.size(), 201);
    }

    #[test]
    fn all_lists_every_occurrence() {
        let text = TextBuffer::new("abab");
        let report = run_query(&text, &ElsQuery::new("ab").skip(1).size(1).all(true), &config())
            .unwrap();
        assert_eq!(report.hit.unwrap().occurrences, Some(vec![0, 2]));
    }

    #[test]
    fn json_shape() {
        let text = TextBuffer::new("abc");
        let report = run_query(&text, &ElsQuery::new("b").skip(1).size(1), &config()).unwrap();
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({
                "found": true,
                "term": "b",
                "skip": 1,
                "start_index": 1,
                "positions": [[0, 0]],
                "matrix": [["b"]],
                "text": "b",
            })
        );
        let missing = run_query(&text, &ElsQuery::new("z").skip(1), &config()).unwrap();
        assert_eq!(
            serde_json::to_value(&missing).unwrap(),
            serde_json::json!({"found": false, "term": "z"})
        );
    }
}

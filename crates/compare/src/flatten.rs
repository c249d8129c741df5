//! Span flattening: merge overlapping spans within one file into the
//! minimal non-overlapping cover of the same point set (SPEC_FULL.md §4.4).

use std::collections::HashMap;

use submission::{FileId, Span};

/// Flattens `spans`, which must all reference the same file. Sorts by
/// `start`, then sweeps, extending the current open interval whenever the
/// next span starts at or before its end, and emitting otherwise.
pub fn flatten_spans(mut spans: Vec<Span>) -> Vec<Span> {
    if spans.is_empty() {
        return spans;
    }
    spans.sort_by_key(|s| (s.start, s.end));

    let mut out = Vec::with_capacity(spans.len());
    let mut current = spans[0];

    for span in spans.into_iter().skip(1) {
        if span.start <= current.end {
            if span.end > current.end {
                current.end = span.end;
            }
        } else {
            out.push(current);
            current = span;
        }
    }
    out.push(current);
    out
}

/// Flattens a mix of spans from any number of files by bucketing per
/// [`FileId`] first, since [`flatten_spans`] only holds its ordering
/// invariant within a single file's offset space.
pub fn flatten_grouped(spans: Vec<Span>) -> Vec<Span> {
    let mut by_file: HashMap<FileId, Vec<Span>> = HashMap::new();
    for span in spans {
        by_file.entry(span.file).or_default().push(span);
    }
    // `by_file`'s key order depends on `HashMap`'s randomly seeded hasher;
    // collect and sort by file id before flattening each bucket so this is
    // deterministic across runs, same concern as `group_span_matches`.
    let mut files: Vec<FileId> = by_file.keys().copied().collect();
    files.sort_by_key(|f| f.0);
    let mut out = Vec::new();
    for file in files {
        out.extend(flatten_spans(by_file.remove(&file).unwrap()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use submission::FileId;

    fn span(s: usize, e: usize) -> Span {
        Span::new(FileId(0), s, e)
    }

    #[test]
    fn merges_overlapping_spans() {
        let out = flatten_spans(vec![span(0, 5), span(3, 7), span(10, 12)]);
        assert_eq!(out, vec![span(0, 7), span(10, 12)]);
    }

    #[test]
    fn touching_spans_merge() {
        let out = flatten_spans(vec![span(0, 5), span(5, 9)]);
        assert_eq!(out, vec![span(0, 9)]);
    }

    #[test]
    fn disjoint_spans_remain_separate() {
        let out = flatten_spans(vec![span(0, 2), span(5, 7)]);
        assert_eq!(out, vec![span(0, 2), span(5, 7)]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(flatten_spans(vec![]).is_empty());
    }

    #[test]
    fn is_idempotent() {
        let once = flatten_spans(vec![span(0, 5), span(3, 7), span(10, 12)]);
        let twice = flatten_spans(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn nested_span_is_absorbed() {
        let out = flatten_spans(vec![span(0, 10), span(2, 4)]);
        assert_eq!(out, vec![span(0, 10)]);
    }
}

//! Missing-span recovery: ranges preprocessing dropped from a file's token
//! stream (SPEC_FULL.md §4.8). These are added to a comparison's
//! `ignored_spans` so the renderer can shade "not compared" regions.

use submission::{FileId, Span, Token};

/// Sweeps `preprocessed` (assumed sorted by `start`, a subsequence in
/// original-offset order of `unprocessed`) and emits a [`Span`] for every
/// gap in character coverage between `unprocessed[0].start` and
/// `unprocessed.last().end`.
pub fn missing_spans(file: FileId, unprocessed: &[Token], preprocessed: &[Token]) -> Vec<Span> {
    let (Some(first), Some(last)) = (unprocessed.first(), unprocessed.last()) else {
        return Vec::new();
    };

    let mut gaps = Vec::new();
    let mut cursor = first.start;

    for token in preprocessed {
        if token.start > cursor {
            gaps.push(Span::new(file, cursor, token.start));
        }
        cursor = cursor.max(token.end);
    }

    if cursor < last.end {
        gaps.push(Span::new(file, cursor, last.end));
    }

    gaps
}

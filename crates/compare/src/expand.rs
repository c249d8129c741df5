//! Span expansion: grow matched span pairs to maximal identical token runs
//! (SPEC_FULL.md §4.3).
//!
//! Subsumption against already-expanded intervals uses a sorted vector
//! probed with binary search rather than an interval tree, per
//! SPEC_FULL.md §9's design note — this spec's access pattern (insert, then
//! point-containment test) doesn't need a tree's overlap queries.

use submission::{Span, Token};

/// A side's sorted set of already-expanded spans, supporting
/// containment probes via binary search.
#[derive(Debug, Default)]
struct ExpandedSet {
    spans: Vec<Span>,
}

impl ExpandedSet {
    fn contains(&self, target: &Span) -> bool {
        // All spans with `start <= target.start` sit in the prefix found by
        // partition_point; scan that prefix for one whose `end` also
        // reaches `target.end`. Expanded spans rarely overlap in number
        // large enough to matter, so a linear scan over the prefix is fine.
        let upper = self.spans.partition_point(|s| s.start <= target.start);
        self.spans[..upper]
            .iter()
            .any(|s| s.contains(target))
    }

    fn insert(&mut self, span: Span) {
        let at = self.spans.partition_point(|s| s.start <= span.start);
        self.spans.insert(at, span);
    }
}

fn first_index_at_or_after(tokens: &[Token], offset: usize) -> usize {
    tokens.partition_point(|t| t.start < offset)
}

fn last_index_at_or_before(tokens: &[Token], offset: usize) -> Option<usize> {
    let upper = tokens.partition_point(|t| t.end <= offset);
    if upper == 0 {
        None
    } else {
        Some(upper - 1)
    }
}

/// Expands every span pair in `span_matches` to the maximal run of equal
/// tokens on both sides, sorted first by `(a.start, b.start)` so
/// contiguous runs expand from their leftmost member. Already-subsumed
/// matches (both sides contained in a previously produced expansion) are
/// skipped. Deduplicates identical output pairs.
pub fn expand(
    mut span_matches: Vec<(Span, Span)>,
    tokens_a: &[Token],
    tokens_b: &[Token],
) -> Vec<(Span, Span)> {
    span_matches.sort_by_key(|(a, b)| (a.start, b.start));

    let mut expanded_a = ExpandedSet::default();
    let mut expanded_b = ExpandedSet::default();
    let mut out = Vec::new();
    let mut seen = std::collections::HashSet::new();

    for (span_a, span_b) in span_matches {
        if expanded_a.contains(&span_a) && expanded_b.contains(&span_b) {
            continue;
        }

        let Some((new_a, new_b)) = expand_one(span_a, span_b, tokens_a, tokens_b) else {
            continue;
        };

        expanded_a.insert(new_a);
        expanded_b.insert(new_b);

        if seen.insert((new_a, new_b)) {
            out.push((new_a, new_b));
        }
    }

    out
}

fn expand_one(
    span_a: Span,
    span_b: Span,
    tokens_a: &[Token],
    tokens_b: &[Token],
) -> Option<(Span, Span)> {
    let mut idx_a = first_index_at_or_after(tokens_a, span_a.start);
    let mut idx_b = first_index_at_or_after(tokens_b, span_b.start);
    let mut end_a = last_index_at_or_before(tokens_a, span_a.end)?;
    let mut end_b = last_index_at_or_before(tokens_b, span_b.end)?;

    if idx_a > end_a || idx_b > end_b {
        return None;
    }

    // Step left in lockstep while the previous tokens on both sides match.
    while idx_a > 0 && idx_b > 0 && tokens_a[idx_a - 1] == tokens_b[idx_b - 1] {
        idx_a -= 1;
        idx_b -= 1;
    }

    // Step right in lockstep while the next tokens on both sides match.
    while end_a + 1 < tokens_a.len() && end_b + 1 < tokens_b.len() && tokens_a[end_a + 1] == tokens_b[end_b + 1] {
        end_a += 1;
        end_b += 1;
    }

    Some((
        Span::new(span_a.file, tokens_a[idx_a].start, tokens_a[end_a].end),
        Span::new(span_b.file, tokens_b[idx_b].start, tokens_b[end_b].end),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use submission::{FileId, TokenType};

    fn tokens(values: &[&str]) -> Vec<Token> {
        let mut out = Vec::new();
        let mut pos = 0;
        for v in values {
            out.push(Token::new(pos, pos + v.len(), TokenType::Name, *v));
            pos += v.len() + 1; // simulate a separator between tokens
        }
        out
    }

    #[test]
    fn expands_to_full_matching_run() {
        let values = ["def", "v", "(", ")", ":", "return", "v"];
        let tokens_a = tokens(&values);
        let tokens_b = tokens(&values);
        let seed = (
            Span::new(FileId(0), tokens_a[2].start, tokens_a[2].end),
            Span::new(FileId(1), tokens_b[2].start, tokens_b[2].end),
        );
        let out = expand(vec![seed], &tokens_a, &tokens_b);
        assert_eq!(out.len(), 1);
        let (a, b) = out[0];
        assert_eq!(a.start, tokens_a[0].start);
        assert_eq!(a.end, tokens_a[6].end);
        assert_eq!(b.start, tokens_b[0].start);
        assert_eq!(b.end, tokens_b[6].end);
    }

    #[test]
    fn stops_expansion_at_inequality() {
        let tokens_a = tokens(&["a", "b", "c", "d"]);
        let tokens_b = tokens(&["x", "b", "c", "y"]);
        let seed = (
            Span::new(FileId(0), tokens_a[1].start, tokens_a[2].end),
            Span::new(FileId(1), tokens_b[1].start, tokens_b[2].end),
        );
        let out = expand(vec![seed], &tokens_a, &tokens_b);
        assert_eq!(out.len(), 1);
        let (a, b) = out[0];
        assert_eq!(a.start, tokens_a[1].start);
        assert_eq!(a.end, tokens_a[2].end);
        assert_eq!(b.start, tokens_b[1].start);
        assert_eq!(b.end, tokens_b[2].end);
    }

    #[test]
    fn subsumed_matches_are_dropped() {
        let values = ["a", "b", "c", "d"];
        let tokens_a = tokens(&values);
        let tokens_b = tokens(&values);
        let seed1 = (
            Span::new(FileId(0), tokens_a[0].start, tokens_a[3].end),
            Span::new(FileId(1), tokens_b[0].start, tokens_b[3].end),
        );
        let seed2 = (
            Span::new(FileId(0), tokens_a[1].start, tokens_a[2].end),
            Span::new(FileId(1), tokens_b[1].start, tokens_b[2].end),
        );
        let out = expand(vec![seed1, seed2], &tokens_a, &tokens_b);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn expansion_is_idempotent() {
        let values = ["a", "b", "c"];
        let tokens_a = tokens(&values);
        let tokens_b = tokens(&values);
        let seed = (
            Span::new(FileId(0), tokens_a[1].start, tokens_a[1].end),
            Span::new(FileId(1), tokens_b[1].start, tokens_b[1].end),
        );
        let once = expand(vec![seed], &tokens_a, &tokens_b);
        let twice = expand(once.clone(), &tokens_a, &tokens_b);
        assert_eq!(once, twice);
    }
}

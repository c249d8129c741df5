//! IDF-weighted rarity annotation of matched spans (SPEC_FULL.md §4.7).
//!
//! Grounded on `compare50/explainers/_uniqueness.py::Uniqueness.explain` /
//! `compute_idf`. `N` (the denominator submissions count) is the number of
//! *regular* (non-archive) submissions, matching the original's
//! `n_submissions = len(submissions)`; `n_with_fp` counts distinct
//! submissions including archives, since archive content still makes a
//! fingerprint less surprising even though archives never appear as the
//! subject of a Result themselves.

use compare::{Explanation, PassResult};
use submission::Fingerprint;

use crate::index::UniquenessIndex;

/// `idf(n, N) = 1 + ln(N / n)` for `n, N > 0`, else `0`.
fn idf(n_with_fp: usize, n_submissions: usize) -> f64 {
    if n_with_fp == 0 || n_submissions == 0 {
        return 0.0;
    }
    1.0 + (n_submissions as f64 / n_with_fp as f64).ln()
}

/// Weight for a fingerprint shared by `n_with_fp` of `n_submissions` total
/// submissions, normalized against the maximum possible rarity (shared by
/// exactly 2 submissions) and clipped to `[0, 1]`.
fn weight(n_with_fp: usize, n_submissions: usize) -> f64 {
    let max_idf = idf(2, n_submissions);
    if max_idf == 0.0 {
        return 0.0;
    }
    (idf(n_with_fp, n_submissions) / max_idf).clamp(0.0, 1.0)
}

fn explanation_text(n_with_fp: usize, n_submissions: usize) -> String {
    let percentage = if n_submissions == 0 {
        0.0
    } else {
        n_with_fp as f64 / n_submissions as f64 * 100.0
    };
    format!(
        "{n_with_fp} submission{plural} contain a similar snippet of code. \
         That is {percentage:.1}% of all submissions for this assignment.",
        plural = if n_with_fp == 1 { "" } else { "s" },
    )
}

/// Attaches a rarity [`Explanation`] to every Group span in `result` for
/// each fingerprint, from `index`, whose source span lies inside it.
/// `n_submissions` is the population size the weight is normalized
/// against (non-archive submissions only).
///
/// A fingerprint can appear inside more than one span covering the same
/// file region only if the caller passed overlapping groups; the original
/// takes the first containing match per fingerprint. Groups are expected
/// to already be the output of [`compare::group_span_matches`], which
/// guarantees within-file spans from one Result don't overlap.
pub fn explain_pass_result(result: &mut PassResult, index: &UniquenessIndex, n_submissions: usize) {
    let explanations = compute_explanations(result, index, n_submissions);
    for explanation in explanations {
        result.add_explanation(explanation);
    }
}

fn compute_explanations(
    result: &PassResult,
    index: &UniquenessIndex,
    n_submissions: usize,
) -> Vec<Explanation> {
    let mut out = Vec::new();
    for group in &result.groups {
        for &matched_span in &group.spans {
            let fingerprints = index.fingerprints_in_file(matched_span.file);
            for fp in fingerprints {
                if !matched_span.contains(&fp.span) {
                    continue;
                }
                let n_with_fp = index.submission_count(fp.hash);
                out.push(Explanation {
                    span: matched_span,
                    text: explanation_text(n_with_fp, n_submissions),
                    weight: weight(n_with_fp, n_submissions),
                });
            }
        }
    }
    out
}

/// Exposed for callers that want the raw weight for a fingerprint without
/// going through a [`PassResult`] (e.g. the renderer's `/explain`-style
/// drill-down for a single span).
pub fn weight_for(index: &UniquenessIndex, hash: Fingerprint, n_submissions: usize) -> f64 {
    weight(index.submission_count(hash), n_submissions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use compare::{Group, Score};
    use std::collections::HashMap;
    use submission::{FileId, Span, SourcedFingerprint, SubmissionId};

    fn span(file: u32, s: usize, e: usize) -> Span {
        Span::new(FileId(file), s, e)
    }

    fn fp(hash: u64, file: u32, s: usize, e: usize) -> SourcedFingerprint {
        SourcedFingerprint::new(hash, span(file, s, e))
    }

    fn make_result(groups: Vec<Group>) -> PassResult {
        PassResult {
            pass_name: "structure".to_string(),
            score: Score::new(SubmissionId(0), SubmissionId(1), 1.0),
            groups,
            ignored_spans: Vec::new(),
            explanations: HashMap::new(),
        }
    }

    #[test]
    fn idf_is_zero_at_population_boundaries() {
        assert_eq!(idf(0, 10), 0.0);
        assert_eq!(idf(5, 0), 0.0);
    }

    #[test]
    fn weight_is_maximal_for_rarest_sharing_case() {
        let w = weight(2, 100);
        assert!((w - 1.0).abs() < 1e-9);
    }

    #[test]
    fn weight_decreases_as_sharing_increases() {
        let rare = weight(2, 100);
        let common = weight(50, 100);
        assert!(rare > common);
    }

    #[test]
    fn weight_stays_within_unit_interval() {
        for n in [1, 2, 5, 100, 1000] {
            let w = weight(n, 1000);
            assert!((0.0..=1.0).contains(&w), "weight {w} out of bounds for n={n}");
        }
    }

    #[test]
    fn explains_fingerprint_inside_matched_span() {
        let mut index = UniquenessIndex::new();
        index.include(SubmissionId(0), &[fp(1, 0, 0, 10)]);
        index.include(SubmissionId(1), &[fp(1, 1, 0, 10)]);

        let group = Group::new(vec![span(0, 0, 20), span(1, 0, 20)]);
        let mut result = make_result(vec![group]);

        explain_pass_result(&mut result, &index, 2);

        let explanations = result.explanations.get(&span(0, 0, 20)).unwrap();
        assert_eq!(explanations.len(), 1);
        assert!(explanations[0].text.contains("2 submissions"));
    }

    #[test]
    fn ignored_fingerprints_produce_no_explanation() {
        let mut index = UniquenessIndex::new();
        index.include(SubmissionId(0), &[fp(1, 0, 0, 10)]);
        index.ignore(&[fp(1, 9, 0, 0)]);

        let group = Group::new(vec![span(0, 0, 20)]);
        let mut result = make_result(vec![group]);
        explain_pass_result(&mut result, &index, 1);

        assert!(result.explanations.is_empty());
    }

    #[test]
    fn fingerprint_outside_matched_span_is_not_attached() {
        let mut index = UniquenessIndex::new();
        index.include(SubmissionId(0), &[fp(1, 0, 50, 60)]);
        index.include(SubmissionId(1), &[fp(1, 1, 50, 60)]);

        let group = Group::new(vec![span(0, 0, 20)]);
        let mut result = make_result(vec![group]);
        explain_pass_result(&mut result, &index, 2);

        assert!(result.explanations.is_empty());
    }
}

//! Result data model for a single Pass (SPEC_FULL.md §3, §4.9).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use submission::{Span, SubmissionId};

/// A submission pair and how similar they scored. Ordered ascending by
/// `score` so a min-heap of `Score` keeps the weakest of the current top-N
/// at its root — exactly what [`crate::rank::rank`] needs to evict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub sub_a: SubmissionId,
    pub sub_b: SubmissionId,
    pub score: f64,
}

impl Score {
    pub fn new(sub_a: SubmissionId, sub_b: SubmissionId, score: f64) -> Self {
        Score { sub_a, sub_b, score }
    }
}

/// One submission pair's matched span pairs plus the spans that were
/// excluded from matching (distro content, or content preprocessing
/// dropped outright).
#[derive(Debug, Clone)]
pub struct Comparison {
    pub sub_a: SubmissionId,
    pub sub_b: SubmissionId,
    pub span_matches: Vec<(Span, Span)>,
    pub ignored_spans: Vec<Span>,
}

/// An unordered set of spans believed to contain identical content across
/// two or more files. Stored sorted for deterministic iteration and
/// equality, rather than as a true hash-unordered set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub spans: Vec<Span>,
}

impl Group {
    pub fn new(mut spans: Vec<Span>) -> Self {
        spans.sort_by_key(|s| (s.file.0, s.start, s.end));
        spans.dedup();
        Group { spans }
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Whether every span in `self` is contained, in its own file, by some
    /// span in `other` — SPEC_FULL.md §4.5's subsumption test.
    pub fn is_subsumed_by(&self, other: &Group) -> bool {
        if other.len() < self.len() {
            return false;
        }
        self.spans
            .iter()
            .all(|s| other.spans.iter().any(|o| o.contains(s)))
    }
}

/// A rarity annotation attached to a span by the uniqueness explainer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explanation {
    pub span: Span,
    pub text: String,
    pub weight: f64,
}

/// Final output of one Pass: its score for a submission pair, the groups
/// of matching spans, the spans excluded from matching, and any
/// explanations attached by the Pass's explainers.
#[derive(Debug, Clone)]
pub struct PassResult {
    pub pass_name: String,
    pub score: Score,
    pub groups: Vec<Group>,
    pub ignored_spans: Vec<Span>,
    pub explanations: HashMap<Span, Vec<Explanation>>,
}

impl PassResult {
    pub fn add_explanation(&mut self, explanation: Explanation) {
        self.explanations
            .entry(explanation.span)
            .or_default()
            .push(explanation);
    }
}

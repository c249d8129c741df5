//! Top-N ranking with self-match exclusion and stable tie-breaking
//! (SPEC_FULL.md §4.9, Open Question (b) resolved in DESIGN.md).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use submission::{SubmissionId, SubmitterId};

use crate::types::Score;

#[derive(Debug)]
struct Ranked {
    score: f64,
    // Lower `seq` means earlier occurrence; used to break ties so the
    // first-seen pair of equal score wins, not an arbitrary heap order.
    seq: usize,
    item: Score,
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score && self.seq == other.seq
    }
}
impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    // A `BinaryHeap` is a max-heap; we want the *weakest* candidate at the
    // top so it's the one evicted when the heap exceeds `n`. So this
    // ordering is reversed relative to "more similar wins": lower score
    // compares greater, and among equal scores, the later occurrence
    // (larger `seq`) compares greater (evicted first, keeping the
    // earliest-seen pair for a tie at the cutoff).
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Returns the top `n` scores by `score` descending, excluding any pair
/// sharing a known, equal submitter identity. Ties are broken by first
/// occurrence in `scores`.
pub fn top_n(
    scores: Vec<Score>,
    n: usize,
    submitter_of: impl Fn(SubmissionId) -> Option<SubmitterId>,
) -> Vec<Score> {
    let mut heap: BinaryHeap<Ranked> = BinaryHeap::with_capacity(n + 1);

    for (seq, item) in scores.into_iter().enumerate() {
        if let (Some(sa), Some(sb)) = (submitter_of(item.sub_a), submitter_of(item.sub_b)) {
            if sa == sb {
                continue;
            }
        }

        heap.push(Ranked {
            score: item.score,
            seq,
            item,
        });
        if heap.len() > n {
            heap.pop();
        }
    }

    let mut out: Vec<Ranked> = heap.into_vec();
    out.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.seq.cmp(&b.seq)));
    out.into_iter().map(|r| r.item).collect()
}

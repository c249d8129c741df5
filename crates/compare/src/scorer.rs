//! Pairwise scoring over a [`ScoreIndex`] (SPEC_FULL.md §4.2 "Scoring").

use hashbrown::HashMap;

use index::ScoreIndex;
use submission::SubmissionId;

use crate::types::Score;

/// Scores every pair of distinct submissions that share at least one
/// fingerprint hash, after distro subtraction has already been applied to
/// `index` by the caller (via [`index::CompareIndex::ignore_all`] /
/// [`ScoreIndex::ignore`] on the regular, non-score index upstream).
///
/// For each hash, every pair among the submissions sharing it contributes
/// one point to that pair's score; a hash shared by k submissions
/// therefore contributes to `k choose 2` pairs.
pub fn score_all_pairs(index: &ScoreIndex) -> Vec<Score> {
    let mut pair_scores: HashMap<(SubmissionId, SubmissionId), f64> = HashMap::new();

    for hash in index.hashes() {
        let mut subs: Vec<SubmissionId> = index.submissions_for(*hash).collect();
        subs.sort_by_key(|s| s.0);
        for i in 0..subs.len() {
            for j in (i + 1)..subs.len() {
                *pair_scores.entry((subs[i], subs[j])).or_insert(0.0) += 1.0;
            }
        }
    }

    // `pair_scores` is keyed from a `HashMap` iteration over hashes, whose
    // order is not stable across runs (hashbrown's default hasher is
    // randomly seeded). Sort by submission id pair so callers — notably
    // `rank::top_n`'s first-occurrence tie-break — see a deterministic,
    // reproducible order rather than one that depends on hash-seed noise.
    let mut out: Vec<Score> = pair_scores
        .into_iter()
        .map(|((a, b), score)| Score::new(a, b, score))
        .collect();
    out.sort_by_key(|s| (s.sub_a.0, s.sub_b.0));
    out
}

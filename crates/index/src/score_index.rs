//! Cheap pairwise-scoring index: hash -> distinct submissions sharing it.

use hashbrown::{HashMap, HashSet};

use submission::{Fingerprint, SourcedFingerprint, SubmissionId};

/// A lighter-weight companion to [`crate::CompareIndex`] that only tracks
/// which submissions share a hash, not the spans involved — enough to
/// compute pairwise scores cheaply before running the expensive in-depth
/// comparison on the top candidates.
#[derive(Debug, Clone, Default)]
pub struct ScoreIndex {
    submissions_by_hash: HashMap<Fingerprint, HashSet<SubmissionId>>,
}

impl ScoreIndex {
    pub fn new() -> Self {
        ScoreIndex {
            submissions_by_hash: HashMap::new(),
        }
    }

    pub fn include(&mut self, submission: SubmissionId, fingerprints: &[SourcedFingerprint]) {
        for fp in fingerprints {
            self.submissions_by_hash
                .entry(fp.hash)
                .or_default()
                .insert(submission);
        }
    }

    pub fn ignore(&mut self, fingerprints: &[SourcedFingerprint]) {
        for fp in fingerprints {
            self.submissions_by_hash.remove(&fp.hash);
        }
    }

    pub fn submissions_for(&self, hash: Fingerprint) -> impl Iterator<Item = SubmissionId> + '_ {
        self.submissions_by_hash
            .get(&hash)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Number of distinct submissions sharing `hash` — used directly by the
    /// uniqueness explainer's IDF computation (SPEC_FULL.md §4.7).
    pub fn submission_count(&self, hash: Fingerprint) -> usize {
        self.submissions_by_hash
            .get(&hash)
            .map(HashSet::len)
            .unwrap_or(0)
    }

    pub fn hashes(&self) -> impl Iterator<Item = &Fingerprint> {
        self.submissions_by_hash.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use submission::{FileId, Span};

    fn fp(hash: u64) -> SourcedFingerprint {
        SourcedFingerprint::new(hash, Span::new(FileId(0), 0, 1))
    }

    #[test]
    fn tracks_distinct_submissions_per_hash() {
        let mut idx = ScoreIndex::new();
        idx.include(SubmissionId(0), &[fp(1)]);
        idx.include(SubmissionId(1), &[fp(1)]);
        idx.include(SubmissionId(0), &[fp(1)]); // duplicate, same submission
        assert_eq!(idx.submission_count(Fingerprint(1)), 2);
    }

    #[test]
    fn ignore_removes_hash_entirely() {
        let mut idx = ScoreIndex::new();
        idx.include(SubmissionId(0), &[fp(1)]);
        idx.ignore(&[fp(1)]);
        assert_eq!(idx.submission_count(Fingerprint(1)), 0);
    }

    #[test]
    fn missing_hash_has_zero_count() {
        let idx = ScoreIndex::new();
        assert_eq!(idx.submission_count(Fingerprint(99)), 0);
    }
}

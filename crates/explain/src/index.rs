//! The uniqueness index: tracks, per fingerprint hash, which distinct
//! submissions in the population contain it (SPEC_FULL.md §4.7).
//!
//! Grounded on `compare50/explainers/_uniqueness.py`'s `Index` class: that
//! class keys a dict by fingerprint and pops entries whose hash belongs to
//! an ignored file, then later re-derives "which file has which
//! fingerprints" by scanning the surviving entries — reproduced here as
//! `occurrences` (the single source of truth) plus [`UniquenessIndex::fingerprints_in_file`]
//! (the derived per-file view computed on demand rather than kept in sync).

use std::collections::{HashMap, HashSet};

use submission::{FileId, Fingerprint, Span, SourcedFingerprint, SubmissionId};

/// Maps each fingerprint hash to every `(span, submission)` occurrence
/// across the whole population (all regular submissions plus archives).
/// `ignore` removes a hash's bucket entirely, mirroring
/// `CompareIndex::ignore` (SPEC_FULL.md §4.2) — a distro-matched
/// fingerprint contributes no uniqueness signal at all, not just a
/// discounted one.
#[derive(Debug, Clone, Default)]
pub struct UniquenessIndex {
    occurrences: HashMap<Fingerprint, Vec<(Span, SubmissionId)>>,
}

impl UniquenessIndex {
    pub fn new() -> Self {
        UniquenessIndex {
            occurrences: HashMap::new(),
        }
    }

    /// Records every fingerprint `submission` produced.
    pub fn include(&mut self, submission: SubmissionId, fingerprints: &[SourcedFingerprint]) {
        for fp in fingerprints {
            self.occurrences
                .entry(fp.hash)
                .or_default()
                .push((fp.span, submission));
        }
    }

    /// Removes every hash present in `fingerprints` from the index — used
    /// for distro/ignored files, whose fingerprints must not count toward
    /// any submission's uniqueness signal.
    pub fn ignore(&mut self, fingerprints: &[SourcedFingerprint]) {
        for fp in fingerprints {
            self.occurrences.remove(&fp.hash);
        }
    }

    /// Number of distinct submissions (by id) that contain `hash`, or 0 if
    /// the hash is absent (including because it was ignored).
    pub fn submission_count(&self, hash: Fingerprint) -> usize {
        self.occurrences
            .get(&hash)
            .map(|occs| occs.iter().map(|(_, s)| *s).collect::<HashSet<_>>().len())
            .unwrap_or(0)
    }

    /// Every surviving fingerprint whose span lies in `file`, sorted by
    /// `(start, end, hash)` for deterministic downstream iteration —
    /// `occurrences` is a `HashMap` (randomly seeded hasher), so this is
    /// the index's one non-deterministic internal detail and must be
    /// resolved before anything observes the order.
    pub fn fingerprints_in_file(&self, file: FileId) -> Vec<SourcedFingerprint> {
        let mut out: Vec<SourcedFingerprint> = self
            .occurrences
            .iter()
            .flat_map(|(&hash, occs)| {
                occs.iter()
                    .filter(move |(span, _)| span.file == file)
                    .map(move |(span, _)| SourcedFingerprint { hash, span: *span })
            })
            .collect();
        out.sort_by_key(|fp| (fp.span.start, fp.span.end, fp.hash.0));
        out.dedup_by_key(|fp| (fp.span.start, fp.span.end, fp.hash.0));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use submission::FileId;

    fn fp(hash: u64, file: u32, s: usize, e: usize) -> SourcedFingerprint {
        SourcedFingerprint::new(hash, Span::new(FileId(file), s, e))
    }

    #[test]
    fn counts_distinct_submissions_sharing_a_hash() {
        let mut idx = UniquenessIndex::new();
        idx.include(SubmissionId(0), &[fp(1, 0, 0, 5)]);
        idx.include(SubmissionId(1), &[fp(1, 1, 0, 5)]);
        idx.include(SubmissionId(0), &[fp(1, 0, 10, 15)]); // same submission again
        assert_eq!(idx.submission_count(Fingerprint(1)), 2);
    }

    #[test]
    fn ignore_zeroes_out_submission_count() {
        let mut idx = UniquenessIndex::new();
        idx.include(SubmissionId(0), &[fp(1, 0, 0, 5)]);
        idx.ignore(&[fp(1, 9, 0, 0)]);
        assert_eq!(idx.submission_count(Fingerprint(1)), 0);
    }

    #[test]
    fn fingerprints_in_file_filters_by_file_and_is_sorted() {
        let mut idx = UniquenessIndex::new();
        idx.include(SubmissionId(0), &[fp(2, 0, 10, 20), fp(1, 0, 0, 5)]);
        idx.include(SubmissionId(1), &[fp(3, 1, 0, 5)]);
        let fps = idx.fingerprints_in_file(FileId(0));
        assert_eq!(fps.len(), 2);
        assert_eq!(fps[0].span.start, 0);
        assert_eq!(fps[1].span.start, 10);
    }

    #[test]
    fn missing_hash_has_zero_count() {
        let idx = UniquenessIndex::new();
        assert_eq!(idx.submission_count(Fingerprint(99)), 0);
    }
}

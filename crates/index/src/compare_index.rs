//! In-depth comparison index: hash -> occurrences, duplicates preserved.

use hashbrown::HashMap;

use submission::{Fingerprint, SourcedFingerprint};

/// Maps a fingerprint hash to every occurrence that produced it, in
/// insertion order. Used by the in-depth comparator (SPEC_FULL.md §4.2):
/// for a hash shared by two submissions, the cartesian product of their
/// occurrence lists becomes the candidate matching span pairs.
#[derive(Debug, Clone, Default)]
pub struct CompareIndex {
    occurrences: HashMap<Fingerprint, Vec<SourcedFingerprint>>,
}

impl CompareIndex {
    pub fn new() -> Self {
        CompareIndex {
            occurrences: HashMap::new(),
        }
    }

    /// Inserts every fingerprint from `fingerprints` into the index.
    pub fn include(&mut self, fingerprints: &[SourcedFingerprint]) {
        for fp in fingerprints {
            self.occurrences.entry(fp.hash).or_default().push(*fp);
        }
    }

    /// Removes every entry whose hash appears in `fingerprints`, regardless
    /// of how many occurrences were indexed under that hash.
    pub fn ignore(&mut self, fingerprints: &[SourcedFingerprint]) {
        for fp in fingerprints {
            self.occurrences.remove(&fp.hash);
        }
    }

    /// Removes every hash present in `other` from `self`.
    pub fn ignore_all(&mut self, other: &CompareIndex) {
        for hash in other.occurrences.keys() {
            self.occurrences.remove(hash);
        }
    }

    pub fn lookup(&self, hash: Fingerprint) -> &[SourcedFingerprint] {
        self.occurrences
            .get(&hash)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, hash: Fingerprint) -> bool {
        self.occurrences.contains_key(&hash)
    }

    pub fn hashes(&self) -> impl Iterator<Item = &Fingerprint> {
        self.occurrences.keys()
    }

    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }
}

//! In-depth comparison: turns shared fingerprints into matching span pairs
//! (SPEC_FULL.md §4.2 "In-depth comparison").

use index::CompareIndex;
use submission::{Fingerprint, SourcedFingerprint, Span};

/// For two submissions' fingerprints, enumerates every hash present in
/// both, cartesian-producting their occurrence spans into match pairs.
/// Fingerprints whose hash is present in `ignored` (the distro index)
/// contribute no matches; their spans are reported as `ignored_spans`
/// instead, for both submissions.
pub fn in_depth_compare(
    fps_a: &[SourcedFingerprint],
    fps_b: &[SourcedFingerprint],
    ignored: &CompareIndex,
) -> (Vec<(Span, Span)>, Vec<Span>) {
    let mut index_a = CompareIndex::new();
    index_a.include(fps_a);
    let mut index_b = CompareIndex::new();
    index_b.include(fps_b);

    let mut span_matches = Vec::new();
    let mut ignored_spans = Vec::new();

    let hashes_a: Vec<Fingerprint> = index_a.hashes().copied().collect();
    for hash in hashes_a {
        if ignored.contains(hash) {
            ignored_spans.extend(index_a.lookup(hash).iter().map(|fp| fp.span));
            ignored_spans.extend(index_b.lookup(hash).iter().map(|fp| fp.span));
            continue;
        }
        let occ_a = index_a.lookup(hash);
        let occ_b = index_b.lookup(hash);
        if occ_b.is_empty() {
            continue;
        }
        for a in occ_a {
            for b in occ_b {
                span_matches.push((a.span, b.span));
            }
        }
    }

    (span_matches, ignored_spans)
}

//! Fingerprint data types.
//!
//! These are plain data (SPEC_FULL.md §3's `Fingerprint`/`SourcedFingerprint`):
//! the algorithm that produces them lives in the `winnow` crate, which
//! depends on this crate rather than the other way around, so that the
//! fingerprint-only submission variant below can hold them without
//! `submission` depending on `winnow`.

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// A 64-bit hash of a k-gram of token values, with no positional
/// information. Equality and hashing are over the value alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(pub u64);

/// A [`Fingerprint`] together with the [`Span`] of the k-gram that produced
/// it. This is what the winnowing index actually stores: occurrences, not
/// bare hash values, since in-depth comparison needs the span to report a
/// match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcedFingerprint {
    pub hash: Fingerprint,
    pub span: Span,
}

impl SourcedFingerprint {
    pub fn new(hash: u64, span: Span) -> Self {
        SourcedFingerprint {
            hash: Fingerprint(hash),
            span,
        }
    }
}

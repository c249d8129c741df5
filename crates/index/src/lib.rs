//! In-memory fingerprint indexes (SPEC_FULL.md §4.2).
//!
//! Two indexes serve two different consumers: [`ScoreIndex`] is the cheap
//! structure the pairwise scorer sweeps over every submission pair,
//! [`CompareIndex`] is the heavier occurrence-preserving structure the
//! in-depth comparator and the uniqueness explainer need. Both are
//! in-memory only — SPEC_FULL.md §6 names no persisted state.

pub mod compare_index;
pub mod error;
pub mod score_index;

pub use compare_index::CompareIndex;
pub use error::IndexError;
pub use score_index::ScoreIndex;

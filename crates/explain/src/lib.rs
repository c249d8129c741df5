//! Uniqueness (IDF-weighted rarity) explainer (SPEC_FULL.md §4.7).
//!
//! Weights every matched span's fingerprints by how rare they are across
//! the whole population: a snippet only two submissions share is flagged
//! as much more suspicious than one every submission happens to contain
//! (boilerplate the distro-subtraction step didn't catch, or an idiom
//! every student reaches for). Per DESIGN.md's Open Question resolution,
//! this explainer is wired to the winnowing comparator (`compare` crate)
//! only — the names comparator never exposes fingerprint occurrences
//! capable of supporting it, matching the original's default pass table.

pub mod error;
pub mod explainer;
pub mod index;

pub use error::ExplainError;
pub use explainer::{explain_pass_result, weight_for};
pub use index::UniquenessIndex;

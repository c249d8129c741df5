//! Identifier context-fingerprint comparator (SPEC_FULL.md §4.6).
//!
//! Scores submissions by how many identifiers are used in matching
//! surrounding patterns, independent of spelling — catching the "renamed
//! every variable" case the winnowing comparator (`compare` crate) can
//! miss once enough text around a renamed identifier also changed.

pub mod comparator;
pub mod config;
pub mod error;
pub mod fingerprint;

pub use comparator::{compare, ignored_fingerprint_sets, score};
pub use config::NamesConfig;
pub use error::NamesError;
pub use fingerprint::{fingerprint_names, name_indices};

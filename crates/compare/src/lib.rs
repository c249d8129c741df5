//! Pairwise scoring, in-depth comparison, span expansion/flattening/grouping,
//! and top-N ranking (SPEC_FULL.md §4.2–§4.5, §4.8, §4.9).
//!
//! This crate is the winnowing-based comparator: it turns a population's
//! fingerprints into ranked submission pairs and, for each pair, maximal
//! matching span groups. The names comparator (`names` crate) and the
//! uniqueness explainer (`explain` crate) are separate crates that plug
//! into the same `Comparison`/`Group` shapes rather than extending this
//! one, since SPEC_FULL.md specifies them as distinct Pass components.

pub mod error;
pub mod expand;
pub mod flatten;
pub mod group;
pub mod in_depth;
pub mod missing;
pub mod rank;
pub mod scorer;
pub mod types;

pub use error::CompareError;
pub use expand::expand;
pub use flatten::{flatten_grouped, flatten_spans};
pub use group::group_span_matches;
pub use in_depth::in_depth_compare;
pub use missing::missing_spans;
pub use rank::top_n;
pub use scorer::score_all_pairs;
pub use types::{Comparison, Explanation, Group, PassResult, Score};

//! Error types for the uniqueness explainer.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ExplainError {
    /// SPEC_FULL.md §7's `ExplainerUnsupported`: raised before a Pass runs
    /// if its comparator cannot expose fingerprint occurrences (the names
    /// comparator, per DESIGN.md Open Question resolution #2).
    #[error("explainer requires a comparator that exposes fingerprint occurrences")]
    ComparatorUnsupported,
}

//! Error types for the names comparator.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NamesError {
    /// The names comparator requires the unprocessed token stream to
    /// recover identifier spans, which only a file-backed submission has.
    #[error("names comparator requires file-backed submissions")]
    RequiresFileBacked,
}

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CompareError {
    #[error("comparator requires file-backed submissions; got a fingerprint-only submission")]
    RequiresFileBacked,
}

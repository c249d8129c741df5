use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IndexError {
    #[error("comparator does not expose fingerprint occurrences required by this explainer")]
    ExplainerUnsupported,
}

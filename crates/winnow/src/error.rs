use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WinnowError {
    #[error("invalid k-gram length: k must be >= 1, got {k}")]
    InvalidK { k: usize },

    #[error("invalid noise threshold: t must be >= k ({k}), got {t}")]
    InvalidT { k: usize, t: usize },
}

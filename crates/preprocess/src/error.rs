use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PreprocessError {
    #[error("unknown preprocessing step `{0}`")]
    UnknownStep(String),
}

//! Composable, serializable token-stream preprocessing (SPEC_FULL.md §4.1).
//!
//! Each [`PreprocStep`] is a pure `Vec<Token> -> Vec<Token>` transform; a
//! [`Pipeline`] composes them left to right. Pipelines are plain
//! serializable data rather than closures, so a Pass's preprocessor can be
//! handed to a parallel worker instead of captured.

pub mod error;
pub mod pipeline;
pub mod steps;

pub use error::PreprocessError;
pub use pipeline::{Pipeline, PreprocStep};

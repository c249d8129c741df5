//! Error types for submission construction and file reading.
//!
//! ## Error philosophy
//!
//! Errors here are scoped to a single file, never to a whole run: a file
//! that cannot be decoded or lexed is recorded and skipped, not fatal.
//! Run-fatal configuration errors live in the crate root's `EngineError`,
//! not here — see SPEC_FULL.md §7.
//!
//! | Variant | Category | When |
//! |---|---|---|
//! | `ReadError` | file-scoped | file content could not be read/decoded |
//! | `LexError` | file-scoped, recoverable | external lexer failed; caller falls back to plain text |

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SubmissionError {
    #[error("failed to read file `{path}`: {reason}")]
    ReadError { path: String, reason: String },

    #[error("lexer failed for file `{path}`: {reason}")]
    LexError { path: String, reason: String },

    #[error("empty submission: no files at `{path}`")]
    EmptySubmission { path: String },
}

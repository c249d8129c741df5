//! Submission, file, token, span, and fingerprint data model.
//!
//! This is the leaf crate in the workspace: every other crate depends on
//! it, and it depends on nothing in the workspace. It owns the data model
//! described in SPEC_FULL.md §3 plus the adapter boundary to the external
//! lexer described in §6.
//!
//! # Scope
//!
//! File discovery, path globbing, and real per-language lexing are external
//! collaborators — see [`lexer`] for the seam they plug into. This crate
//! only defines the shapes that cross that boundary and the plain-text
//! fallback every submission works with even without a real lexer
//! registered.

pub mod error;
pub mod file;
pub mod fingerprint;
pub mod id_store;
pub mod lexer;
pub mod render;
pub mod span;
pub mod submission;
pub mod token;

pub use error::SubmissionError;
pub use file::{File, FileId};
pub use fingerprint::{Fingerprint, SourcedFingerprint};
pub use id_store::IdStore;
pub use lexer::{lex_to_tokens, Lexer, LexerRegistry, PlainTextLexer};
pub use render::{GroupId, RenderExplanation, RenderGroup, RenderSpan, SpanId};
pub use span::Span;
pub use submission::{
    FileBackedSubmission, FingerprintOnlySubmission, SubmissionId, SubmissionRef, SubmitterId,
};
pub use token::{Token, TokenType};

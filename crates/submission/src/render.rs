//! Renderer contract DTOs (SPEC_FULL.md §6).
//!
//! The renderer itself is out of scope; these are the shapes it is
//! contractually handed. Ids here are assigned from the same
//! [`crate::id_store::IdStore`] used internally so that two spans with
//! equal `(file, start, end)` receive the same id across a result set.

use serde::{Deserialize, Serialize};

use crate::file::FileId;
use crate::submission::SubmissionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct SpanId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct GroupId(pub u32);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSpan {
    pub id: SpanId,
    pub sub_id: SubmissionId,
    pub file_id: FileId,
    pub start: usize,
    pub end: usize,
    pub ignored: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderGroup {
    pub id: GroupId,
    pub spans: Vec<SpanId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderExplanation {
    pub span: SpanId,
    pub text: String,
    pub weight: f64,
}

//! The submission type: a population member compared against others.

use serde::{Deserialize, Serialize};

use crate::file::File;
use crate::fingerprint::SourcedFingerprint;

/// Dense, content-addressed identifier for a submission, assigned by an
/// [`crate::id_store::IdStore`] keyed on `(path, file list)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct SubmissionId(pub u32);

/// Identity used to exclude self-matches during top-N ranking
/// (SPEC_FULL.md §4.9): two submissions from the same submitter never rank
/// against each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmitterId(pub String);

/// A submission backed by real files on disk (discovered externally; this
/// crate never walks a filesystem itself).
#[derive(Debug)]
pub struct FileBackedSubmission {
    pub id: SubmissionId,
    pub path: String,
    pub files: Vec<File>,
    pub is_archive: bool,
    pub submitter: Option<SubmitterId>,
}

impl FileBackedSubmission {
    pub fn new(id: SubmissionId, path: impl Into<String>, files: Vec<File>) -> Self {
        FileBackedSubmission {
            id,
            path: path.into(),
            files,
            is_archive: false,
            submitter: None,
        }
    }

    pub fn archived(mut self) -> Self {
        self.is_archive = true;
        self
    }

    pub fn with_submitter(mut self, submitter: impl Into<String>) -> Self {
        self.submitter = Some(SubmitterId(submitter.into()));
        self
    }
}

/// A submission that ships pre-computed fingerprints instead of files —
/// used for server-side archives that were fingerprinted once and never
/// need re-tokenization. Accepted by the winnowing comparator and the
/// pairwise scorer in place of a [`FileBackedSubmission`]; the names
/// comparator and uniqueness explainer require file-backed submissions
/// (see SPEC_FULL.md §9 Open Question (a) and DESIGN.md).
#[derive(Debug, Clone)]
pub struct FingerprintOnlySubmission {
    pub id: SubmissionId,
    pub submitter: SubmitterId,
    pub slug: String,
    pub fingerprints: Vec<SourcedFingerprint>,
    pub is_archive: bool,
}

/// Either kind of submission, so comparators that only need fingerprint
/// occurrences can accept either without duplicating their algorithm.
#[derive(Debug)]
pub enum SubmissionRef<'a> {
    FileBacked(&'a FileBackedSubmission),
    FingerprintOnly(&'a FingerprintOnlySubmission),
}

impl<'a> SubmissionRef<'a> {
    pub fn id(&self) -> SubmissionId {
        match self {
            SubmissionRef::FileBacked(s) => s.id,
            SubmissionRef::FingerprintOnly(s) => s.id,
        }
    }

    pub fn is_archive(&self) -> bool {
        match self {
            SubmissionRef::FileBacked(s) => s.is_archive,
            SubmissionRef::FingerprintOnly(s) => s.is_archive,
        }
    }

    pub fn submitter(&self) -> Option<&SubmitterId> {
        match self {
            SubmissionRef::FileBacked(s) => s.submitter.as_ref(),
            SubmissionRef::FingerprintOnly(s) => Some(&s.submitter),
        }
    }
}

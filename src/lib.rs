//! Near-duplicate source code detection engine: winnowing fingerprints,
//! span expansion/grouping, and uniqueness explanation across a submission
//! corpus.
//!
//! This crate is the orchestration root over the workspace's leaf crates —
//! [`submission`] (data model), [`preprocess`] (token pipelines), [`winnow`]
//! (k-gram fingerprinting), [`index`] (fingerprint indexes), [`compare`]
//! (pairwise scoring, in-depth comparison, span expansion/grouping),
//! [`names`] (identifier-usage comparator), and [`explain`] (uniqueness
//! rarity annotation) — each grounded on a distinct file in `compare50`'s
//! original design; see DESIGN.md for the full ledger.
//!
//! # Quick start
//!
//! ```
//! use dupcheck::{run, EngineConfig, PassRegistry};
//! use submission::{File, FileBackedSubmission, FileId, PlainTextLexer, SubmissionId};
//!
//! let lexer = PlainTextLexer;
//! let registry = PassRegistry::default();
//! let cfg = EngineConfig::default();
//!
//! let alice = FileBackedSubmission::new(
//!     SubmissionId(0),
//!     "/subs/alice",
//!     vec![File::new(FileId(0), "main.py", "def f(x):\n    return x + 1\n")],
//! )
//! .with_submitter("alice");
//!
//! let bob = FileBackedSubmission::new(
//!     SubmissionId(1),
//!     "/subs/bob",
//!     vec![File::new(FileId(1), "main.py", "def f(y):\n    return y + 1\n")],
//! )
//! .with_submitter("bob");
//!
//! let results = run(&registry, &cfg, &[alice, bob], &[], &[], &lexer).unwrap();
//! assert!(!results.is_empty());
//! ```
//!
//! # Error handling
//!
//! Every fallible operation in this workspace returns a crate-specific
//! `thiserror`-derived enum (SPEC_FULL.md §7); this crate composes them
//! into one [`EngineError`] via `#[from]` conversions, the same shape as
//! the teacher's `matcher::MatchError` composing `index::IndexError`. No
//! function in this workspace returns `anyhow::Error`.
//!
//! # Logging
//!
//! Pass execution and explanation are traced with [`tracing`] spans/events
//! (`pass`, `n_pairs`, `explained`) rather than printed directly, matching
//! the teacher's instrumentation of `matcher`/`ingest` stage boundaries.

pub mod config;

use std::collections::HashMap;

use rayon::prelude::*;
use submission::{
    File, FileBackedSubmission, FileId, FingerprintOnlySubmission, Lexer, SourcedFingerprint,
    SubmissionId, SubmitterId, Token,
};
use thiserror::Error;
use tracing::{debug, info, instrument};

use compare::{CompareError, PassResult, Score};
use explain::{ExplainError, UniquenessIndex};
use index::{CompareIndex, IndexError, ScoreIndex};
use names::{NamesConfig, NamesError};
use preprocess::{Pipeline, PreprocStep, PreprocessError};
use submission::SubmissionError;
use winnow::{WinnowConfig, WinnowError};

pub use config::{ConfigError, EngineConfig, PassName};

/// Aggregates every per-crate error type in the workspace behind one type,
/// per SPEC_FULL.md §7's ambient error-handling requirement. Mirrors the
/// teacher's `matcher::MatchError` composing `index::IndexError` via
/// `#[from]`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("winnowing configuration error: {0}")]
    Winnow(#[from] WinnowError),
    #[error("submission error: {0}")]
    Submission(#[from] SubmissionError),
    #[error("preprocessing error: {0}")]
    Preprocess(#[from] PreprocessError),
    #[error("index error: {0}")]
    Index(#[from] IndexError),
    #[error("comparison error: {0}")]
    Compare(#[from] CompareError),
    #[error("names comparator error: {0}")]
    Names(#[from] NamesError),
    #[error("explainer error: {0}")]
    Explain(#[from] ExplainError),
}

/// Which comparator a [`Pass`] is built on. Determines both the scoring
/// algorithm and whether the Pass is eligible for a [`explain::UniquenessIndex`]
/// (winnowing only, per DESIGN.md's Open Question resolution #2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparatorKind {
    Winnow,
    Names,
}

/// One named, preconfigured comparison strategy (SPEC_FULL.md §6's pass
/// table), modeled on `compare50/_data.py`'s `Pass` abstract class:
/// a preprocessor pipeline, a comparator, whether it runs by default,
/// whether its per-submission work may run in parallel, and whether it
/// attaches a uniqueness explainer.
#[derive(Debug, Clone)]
pub struct Pass {
    pub name: PassName,
    pub preprocessor: Pipeline,
    pub comparator: ComparatorKind,
    pub default: bool,
    /// `false` only for `structure`: its uniqueness explainer needs one
    /// global token cache and is not safe to build from parallel workers
    /// (SPEC_FULL.md §5).
    pub parallel: bool,
    pub explain: bool,
}

/// The six passes this engine recognizes, exactly matching
/// `compare50/passes.py`'s default pass table and preprocessor chains.
///
/// Deviation for `names` (recorded in DESIGN.md's Open Question resolution
/// #5): the original's `names` pass reuses `structure`'s full preprocessor
/// chain verbatim, which includes `strip_whitespace`/`strip_comments` — both
/// token-dropping steps. The original can still map a processed identifier
/// back to its unprocessed span because it tracks a stable per-token id
/// rather than a positional index; this workspace's `names::comparator`
/// recovers spans by position (`unprocessed.get(idx)`, see its module
/// docs), which requires the handed-in pipeline to be position-preserving.
/// `strip_whitespace`/`strip_comments` violate that, so the `names` pass
/// here uses only the position-preserving subset of the original's chain:
/// `normalize_identifiers` and `normalize_builtin_types`.
pub struct PassRegistry {
    passes: Vec<Pass>,
}

impl Default for PassRegistry {
    fn default() -> Self {
        let structure_chain = Pipeline::new(vec![
            PreprocStep::StripWhitespace,
            PreprocStep::StripComments,
            PreprocStep::NormalizeIdentifiers,
            PreprocStep::NormalizeBuiltinTypes,
            PreprocStep::NormalizeStringLiterals,
            PreprocStep::NormalizeNumericLiterals,
        ]);

        PassRegistry {
            passes: vec![
                Pass {
                    name: PassName::Structure,
                    preprocessor: structure_chain,
                    comparator: ComparatorKind::Winnow,
                    default: true,
                    parallel: false,
                    explain: true,
                },
                Pass {
                    name: PassName::Text,
                    preprocessor: Pipeline::new(vec![
                        PreprocStep::SplitOnWhitespace,
                        PreprocStep::StripWhitespace,
                    ]),
                    comparator: ComparatorKind::Winnow,
                    default: true,
                    parallel: true,
                    explain: false,
                },
                Pass {
                    name: PassName::Exact,
                    preprocessor: Pipeline::empty(),
                    comparator: ComparatorKind::Winnow,
                    default: true,
                    parallel: true,
                    explain: false,
                },
                Pass {
                    name: PassName::Names,
                    preprocessor: Pipeline::new(vec![
                        PreprocStep::NormalizeIdentifiers,
                        PreprocStep::NormalizeBuiltinTypes,
                    ]),
                    comparator: ComparatorKind::Names,
                    default: true,
                    parallel: true,
                    explain: false,
                },
                Pass {
                    name: PassName::NoComments,
                    preprocessor: Pipeline::new(vec![
                        PreprocStep::StripComments,
                        PreprocStep::SplitOnWhitespace,
                    ]),
                    comparator: ComparatorKind::Winnow,
                    default: false,
                    parallel: true,
                    explain: false,
                },
                Pass {
                    name: PassName::Misspellings,
                    preprocessor: Pipeline::new(vec![
                        PreprocStep::Comments,
                        PreprocStep::NormalizeCase,
                        PreprocStep::Words,
                    ]),
                    comparator: ComparatorKind::Winnow,
                    default: false,
                    parallel: true,
                    explain: false,
                },
            ],
        }
    }
}

impl PassRegistry {
    pub fn get(&self, name: PassName) -> Option<&Pass> {
        self.passes.iter().find(|p| p.name.as_str() == name.as_str())
    }

    /// Selects passes by name, in `names`' order, skipping any name not
    /// present in the registry (there is none, in practice — every
    /// `PassName` variant has a table entry).
    pub fn select(&self, names: &[PassName]) -> Vec<&Pass> {
        names.iter().filter_map(|n| self.get(*n)).collect()
    }

    pub fn all(&self) -> &[Pass] {
        &self.passes
    }
}

/// Results of every enabled pass, keyed by pass name, in the order passes
/// were run. A plain `Vec` of pairs rather than a `HashMap`: SPEC_FULL.md
/// §8's determinism property extends to *this* return value too, and a
/// `HashMap`'s iteration order would silently reintroduce the same
/// per-process hash-seed nondeterminism this workspace's internals already
/// go out of their way to avoid (see `compare::group_span_matches` and
/// `compare::flatten_grouped`'s doc comments).
pub type EngineResults = Vec<(String, Vec<PassResult>)>;

struct FileTokens {
    unprocessed: Vec<Token>,
    processed: Vec<Token>,
}

fn tokenize_and_preprocess(file: &File, lexer: &dyn Lexer, pipeline: &Pipeline) -> FileTokens {
    let unprocessed = file.unprocessed_tokens(lexer).to_vec();
    let processed = pipeline.run(unprocessed.clone());
    FileTokens { unprocessed, processed }
}

fn build_file_cache<'a>(
    subs: impl IntoIterator<Item = &'a FileBackedSubmission>,
    distro_files: &[&'a File],
    lexer: &dyn Lexer,
    pipeline: &Pipeline,
) -> HashMap<FileId, FileTokens> {
    let mut cache = HashMap::new();
    for sub in subs {
        for file in &sub.files {
            cache
                .entry(file.id)
                .or_insert_with(|| tokenize_and_preprocess(file, lexer, pipeline));
        }
    }
    for &file in distro_files {
        cache
            .entry(file.id)
            .or_insert_with(|| tokenize_and_preprocess(file, lexer, pipeline));
    }
    cache
}

fn fingerprint_submission(
    sub: &FileBackedSubmission,
    cache: &HashMap<FileId, FileTokens>,
    winnow_cfg: &WinnowConfig,
) -> Vec<SourcedFingerprint> {
    let mut fps = Vec::new();
    for file in &sub.files {
        if let Some(ft) = cache.get(&file.id) {
            fps.extend(winnow::fingerprint_tokens(file.id, &ft.processed, winnow_cfg));
        }
    }
    fps
}

fn fingerprint_all<'a>(
    subs: &[&'a FileBackedSubmission],
    cache: &HashMap<FileId, FileTokens>,
    winnow_cfg: &WinnowConfig,
    parallel: bool,
) -> HashMap<SubmissionId, Vec<SourcedFingerprint>> {
    if parallel {
        subs.par_iter()
            .map(|s| (s.id, fingerprint_submission(s, cache, winnow_cfg)))
            .collect()
    } else {
        subs.iter()
            .map(|s| (s.id, fingerprint_submission(s, cache, winnow_cfg)))
            .collect()
    }
}

fn submitter_map<'a>(
    subs: impl IntoIterator<Item = &'a FileBackedSubmission>,
) -> HashMap<SubmissionId, SubmitterId> {
    subs.into_iter()
        .filter_map(|s| s.submitter.as_ref().map(|sub| (s.id, sub.clone())))
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn run_winnow_pass(
    pass: &Pass,
    cfg: &EngineConfig,
    winnow_cfg: &WinnowConfig,
    regular: &[FileBackedSubmission],
    archive: &[FileBackedSubmission],
    distro_files: &[&File],
    lexer: &dyn Lexer,
    subs_by_id: &HashMap<SubmissionId, &FileBackedSubmission>,
    submitters: &HashMap<SubmissionId, SubmitterId>,
) -> Vec<PassResult> {
    let cache = build_file_cache(
        regular.iter().chain(archive.iter()),
        distro_files,
        lexer,
        &pass.preprocessor,
    );

    let all_subs: Vec<&FileBackedSubmission> = regular.iter().chain(archive.iter()).collect();
    let fps_by_sub = fingerprint_all(&all_subs, &cache, winnow_cfg, pass.parallel);

    let ignored_fps: Vec<SourcedFingerprint> = distro_files
        .iter()
        .flat_map(|&f| {
            cache
                .get(&f.id)
                .map(|ft| winnow::fingerprint_tokens(f.id, &ft.processed, winnow_cfg))
                .unwrap_or_default()
        })
        .collect();

    let mut score_index = ScoreIndex::new();
    for sub in &all_subs {
        score_index.include(sub.id, &fps_by_sub[&sub.id]);
    }
    score_index.ignore(&ignored_fps);

    let mut scores = compare::score_all_pairs(&score_index);
    let archive_ids: std::collections::HashSet<SubmissionId> =
        archive.iter().map(|s| s.id).collect();
    scores.retain(|s| !(archive_ids.contains(&s.sub_a) && archive_ids.contains(&s.sub_b)));

    let top = compare::top_n(scores, cfg.n, |id| submitters.get(&id).cloned());

    let mut ignored_index = CompareIndex::new();
    ignored_index.include(&ignored_fps);

    let mut results: Vec<PassResult> = top
        .into_iter()
        .map(|score| {
            build_winnow_pass_result(pass.name.as_str(), score, &fps_by_sub, &ignored_index, &cache, subs_by_id)
        })
        .collect();

    if pass.explain {
        let mut uniqueness = UniquenessIndex::new();
        for sub in &all_subs {
            uniqueness.include(sub.id, &fps_by_sub[&sub.id]);
        }
        uniqueness.ignore(&ignored_fps);
        let n_submissions = regular.len();
        for result in &mut results {
            explain::explain_pass_result(result, &uniqueness, n_submissions);
        }
    }

    results
}

fn build_winnow_pass_result(
    pass_name: &str,
    score: Score,
    fps_by_sub: &HashMap<SubmissionId, Vec<SourcedFingerprint>>,
    ignored_index: &CompareIndex,
    cache: &HashMap<FileId, FileTokens>,
    subs_by_id: &HashMap<SubmissionId, &FileBackedSubmission>,
) -> PassResult {
    let fps_a = &fps_by_sub[&score.sub_a];
    let fps_b = &fps_by_sub[&score.sub_b];
    let (span_matches_raw, mut ignored_spans) = compare::in_depth_compare(fps_a, fps_b, ignored_index);

    // `expand` assumes both sides of every pair come from one fixed file
    // per side; group raw matches by (file_a, file_b) so multi-file
    // submissions expand correctly, one file pair at a time.
    let mut by_file_pair: HashMap<(FileId, FileId), Vec<(submission::Span, submission::Span)>> =
        HashMap::new();
    for (a, b) in span_matches_raw {
        by_file_pair.entry((a.file, b.file)).or_default().push((a, b));
    }
    let mut file_pairs: Vec<(FileId, FileId)> = by_file_pair.keys().copied().collect();
    file_pairs.sort_by_key(|&(a, b)| (a.0, b.0));

    let mut span_matches = Vec::new();
    for key in file_pairs {
        let matches = by_file_pair.remove(&key).unwrap();
        let (fa, fb) = key;
        let empty = Vec::new();
        let tokens_a = cache.get(&fa).map(|ft| &ft.processed).unwrap_or(&empty);
        let tokens_b = cache.get(&fb).map(|ft| &ft.processed).unwrap_or(&empty);
        span_matches.extend(compare::expand(matches, tokens_a, tokens_b));
    }
    span_matches.sort_by_key(|(a, b)| (a.file.0, a.start, a.end, b.file.0, b.start, b.end));
    span_matches.dedup();

    let groups = compare::group_span_matches(&span_matches);

    let sub_a = subs_by_id[&score.sub_a];
    let sub_b = subs_by_id[&score.sub_b];
    for sub in [sub_a, sub_b] {
        for file in &sub.files {
            if let Some(ft) = cache.get(&file.id) {
                ignored_spans.extend(compare::missing_spans(file.id, &ft.unprocessed, &ft.processed));
            }
        }
    }
    let ignored_spans = compare::flatten_grouped(ignored_spans);

    PassResult {
        pass_name: pass_name.to_string(),
        score,
        groups,
        ignored_spans,
        explanations: HashMap::new(),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_names_pass(
    pass: &Pass,
    cfg: &EngineConfig,
    regular: &[FileBackedSubmission],
    archive: &[FileBackedSubmission],
    distro_files: &[&File],
    lexer: &dyn Lexer,
    names_cfg: &NamesConfig,
    subs_by_id: &HashMap<SubmissionId, &FileBackedSubmission>,
    submitters: &HashMap<SubmissionId, SubmitterId>,
) -> Vec<PassResult> {
    let ignored_sets = names::ignored_fingerprint_sets(distro_files, lexer, &pass.preprocessor, names_cfg);

    let mut scores = Vec::new();
    for i in 0..regular.len() {
        for j in (i + 1)..regular.len() {
            let a = &regular[i];
            let b = &regular[j];
            let files_a: Vec<&File> = a.files.iter().collect();
            let files_b: Vec<&File> = b.files.iter().collect();
            scores.push(names::score(
                a.id,
                &files_a,
                b.id,
                &files_b,
                lexer,
                &pass.preprocessor,
                names_cfg,
                &ignored_sets,
            ));
        }
    }
    for archived in archive {
        for sub in regular {
            let files_a: Vec<&File> = sub.files.iter().collect();
            let files_b: Vec<&File> = archived.files.iter().collect();
            scores.push(names::score(
                sub.id,
                &files_a,
                archived.id,
                &files_b,
                lexer,
                &pass.preprocessor,
                names_cfg,
                &ignored_sets,
            ));
        }
    }

    let top = compare::top_n(scores, cfg.n, |id| submitters.get(&id).cloned());

    top.into_iter()
        .map(|score| {
            let sub_a = subs_by_id[&score.sub_a];
            let sub_b = subs_by_id[&score.sub_b];
            let files_a: Vec<&File> = sub_a.files.iter().collect();
            let files_b: Vec<&File> = sub_b.files.iter().collect();
            let comparison = names::compare(
                score.sub_a,
                &files_a,
                score.sub_b,
                &files_b,
                lexer,
                &pass.preprocessor,
                names_cfg,
                &ignored_sets,
            );

            let groups = compare::group_span_matches(&comparison.span_matches);

            let mut ignored_spans = comparison.ignored_spans;
            for sub in [sub_a, sub_b] {
                for file in &sub.files {
                    let unprocessed = file.unprocessed_tokens(lexer).to_vec();
                    let processed = pass.preprocessor.run(unprocessed.clone());
                    ignored_spans.extend(compare::missing_spans(file.id, &unprocessed, &processed));
                }
            }
            let ignored_spans = compare::flatten_grouped(ignored_spans);

            PassResult {
                pass_name: pass.name.as_str().to_string(),
                score,
                groups,
                ignored_spans,
                explanations: HashMap::new(),
            }
        })
        .collect()
}

/// Runs every pass named in `cfg.passes` over `submissions` (and, for
/// scoring purposes, `archive_submissions`), against `distro_files` (the
/// boilerplate/starter content to subtract), and returns each pass's
/// top-N results in pass order.
///
/// Implements the orchestration sequence `compare50/_api.py` drives from
/// its `rank`/`get_results` entry points: score -> top-N -> in-depth
/// compare (+ span expansion for the winnowing comparator) -> grouping ->
/// per-file ignored/missing-span recovery -> uniqueness explanation (only
/// for passes with `explain: true`).
#[instrument(skip_all, fields(n_passes = cfg.passes.len()))]
pub fn run(
    registry: &PassRegistry,
    cfg: &EngineConfig,
    submissions: &[FileBackedSubmission],
    archive_submissions: &[FileBackedSubmission],
    distro_files: &[&File],
    lexer: &dyn Lexer,
) -> Result<EngineResults, EngineError> {
    cfg.validate()?;
    let winnow_cfg = cfg.winnow_config();
    winnow_cfg.validate()?;
    let names_cfg = NamesConfig::default();

    let selected = registry.select(&cfg.passes);

    let subs_by_id: HashMap<SubmissionId, &FileBackedSubmission> = submissions
        .iter()
        .chain(archive_submissions.iter())
        .map(|s| (s.id, s))
        .collect();
    let submitters = submitter_map(submissions.iter().chain(archive_submissions.iter()));

    let mut out: EngineResults = Vec::with_capacity(selected.len());
    for pass in selected {
        debug!(pass = pass.name.as_str(), "running pass");
        let results = match pass.comparator {
            ComparatorKind::Winnow => run_winnow_pass(
                pass,
                cfg,
                &winnow_cfg,
                submissions,
                archive_submissions,
                distro_files,
                lexer,
                &subs_by_id,
                &submitters,
            ),
            ComparatorKind::Names => run_names_pass(
                pass,
                cfg,
                submissions,
                archive_submissions,
                distro_files,
                lexer,
                &names_cfg,
                &subs_by_id,
                &submitters,
            ),
        };
        info!(pass = pass.name.as_str(), n_pairs = results.len(), "pass complete");
        out.push((pass.name.as_str().to_string(), results));
    }

    Ok(out)
}

/// Scores and ranks pre-fingerprinted submissions directly, bypassing
/// tokenization entirely — the path a server-side archive comparator uses
/// for content fingerprinted once and never re-read (SPEC_FULL.md §3's
/// `FingerprintOnlySubmission` supplement; `names`/`explain` are not
/// reachable from this path since both require file-backed submissions,
/// per DESIGN.md).
pub fn score_fingerprint_submissions(
    submissions: &[FingerprintOnlySubmission],
    archive: &[FingerprintOnlySubmission],
    ignored_fps: &[SourcedFingerprint],
    n: usize,
) -> Vec<Score> {
    let mut score_index = ScoreIndex::new();
    for sub in submissions.iter().chain(archive.iter()) {
        score_index.include(sub.id, &sub.fingerprints);
    }
    score_index.ignore(ignored_fps);

    let mut scores = compare::score_all_pairs(&score_index);
    let archive_ids: std::collections::HashSet<SubmissionId> =
        archive.iter().map(|s| s.id).collect();
    scores.retain(|s| !(archive_ids.contains(&s.sub_a) && archive_ids.contains(&s.sub_b)));

    let submitters: HashMap<SubmissionId, SubmitterId> = submissions
        .iter()
        .chain(archive.iter())
        .map(|s| (s.id, s.submitter.clone()))
        .collect();

    compare::top_n(scores, n, |id| submitters.get(&id).cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use submission::{File, FileId, PlainTextLexer};

    fn sub(id: u32, path: &str, text: &str, submitter: &str) -> FileBackedSubmission {
        FileBackedSubmission::new(SubmissionId(id), path, vec![File::new(FileId(id), "a.txt", text)])
            .with_submitter(submitter)
    }

    /// Splits on whitespace, one `Name` token per word. `PlainTextLexer`
    /// collapses a whole file into a single `Text` token, which is below
    /// the default `k`-gram length for every winnowing pass and defeats
    /// the point of exercising them; tests that need more than one token
    /// per file use this instead.
    struct WordLexer;
    impl Lexer for WordLexer {
        fn lex(&self, _filename: &str, text: &str) -> Vec<(usize, submission::TokenType, String)> {
            let mut out = Vec::new();
            let mut start = None;
            for (i, c) in text.char_indices() {
                if c.is_whitespace() {
                    if let Some(s) = start.take() {
                        out.push((s, submission::TokenType::Name, text[s..i].to_string()));
                    }
                } else if start.is_none() {
                    start = Some(i);
                }
            }
            if let Some(s) = start {
                out.push((s, submission::TokenType::Name, text[s..].to_string()));
            }
            out
        }
    }

    #[test]
    fn default_registry_matches_passes_py_default_set() {
        let registry = PassRegistry::default();
        let defaulted: Vec<&str> = registry
            .all()
            .iter()
            .filter(|p| p.default)
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(defaulted.len(), 4);
        assert!(defaulted.contains(&"structure"));
        assert!(defaulted.contains(&"text"));
        assert!(defaulted.contains(&"exact"));
        assert!(defaulted.contains(&"names"));
    }

    #[test]
    fn only_structure_pass_explains() {
        let registry = PassRegistry::default();
        let explainers: Vec<&str> = registry
            .all()
            .iter()
            .filter(|p| p.explain)
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(explainers, vec!["structure"]);
    }

    #[test]
    fn structure_pass_is_not_parallel() {
        let registry = PassRegistry::default();
        assert!(!registry.get(PassName::Structure).unwrap().parallel);
        assert!(registry.get(PassName::Text).unwrap().parallel);
    }

    #[test]
    fn run_rejects_invalid_config_before_comparing() {
        let registry = PassRegistry::default();
        let cfg = EngineConfig::new().with_k(0);
        let lexer = PlainTextLexer;
        let err = run(&registry, &cfg, &[], &[], &[], &lexer).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn identical_submissions_rank_above_unrelated_ones() {
        let registry = PassRegistry::default();
        let cfg = EngineConfig::new().with_k(2).with_t(2).with_n(5);
        let lexer = WordLexer;

        let subs = vec![
            sub(0, "/subs/a", "identical shared content here", "alice"),
            sub(1, "/subs/b", "identical shared content here", "bob"),
            sub(2, "/subs/c", "completely different unrelated words", "carol"),
        ];

        let results = run(&registry, &cfg, &subs, &[], &[], &lexer).unwrap();
        assert_eq!(results.len(), 4);

        let (_, exact_results) = results.iter().find(|(name, _)| name == "exact").unwrap();
        assert!(!exact_results.is_empty());
        let top = &exact_results[0];
        assert_eq!(top.score.sub_a, SubmissionId(0));
        assert_eq!(top.score.sub_b, SubmissionId(1));
    }

    #[test]
    fn run_is_deterministic_across_invocations() {
        let registry = PassRegistry::default();
        let cfg = EngineConfig::new().with_k(2).with_t(2).with_n(5);
        let lexer = PlainTextLexer;

        let subs = vec![
            sub(0, "/subs/a", "def solve(n): return n * two", "alice"),
            sub(1, "/subs/b", "def solve(m): return m * two", "bob"),
            sub(2, "/subs/c", "totally unrelated text content", "carol"),
        ];

        let first = run(&registry, &cfg, &subs, &[], &[], &lexer).unwrap();
        let second = run(&registry, &cfg, &subs, &[], &[], &lexer).unwrap();

        for ((name_a, results_a), (name_b, results_b)) in first.iter().zip(second.iter()) {
            assert_eq!(name_a, name_b);
            assert_eq!(results_a.len(), results_b.len());
            for (a, b) in results_a.iter().zip(results_b.iter()) {
                assert_eq!(a.score.sub_a, b.score.sub_a);
                assert_eq!(a.score.sub_b, b.score.sub_b);
                assert_eq!(a.score.score, b.score.score);
                assert_eq!(a.groups, b.groups);
                assert_eq!(a.ignored_spans, b.ignored_spans);
            }
        }
    }

    #[test]
    fn distro_content_is_subtracted_from_scoring() {
        let registry = PassRegistry::default();
        let cfg = EngineConfig::new().with_k(2).with_t(2).with_n(5);
        let lexer = PlainTextLexer;

        let boilerplate = "common starter boilerplate text";
        let subs = vec![
            sub(0, "/subs/a", boilerplate, "alice"),
            sub(1, "/subs/b", boilerplate, "bob"),
        ];
        let distro_file = File::new(FileId(99), "starter.txt", boilerplate);
        let distro_files: Vec<&File> = vec![&distro_file];

        let results = run(&registry, &cfg, &subs, &[], &distro_files, &lexer).unwrap();
        let (_, exact_results) = results.iter().find(|(name, _)| name == "exact").unwrap();
        assert!(exact_results.is_empty(), "shared boilerplate should not rank");
    }

    #[test]
    fn same_submitter_pairs_never_rank() {
        let registry = PassRegistry::default();
        let cfg = EngineConfig::new().with_k(2).with_t(2).with_n(5);
        let lexer = PlainTextLexer;

        let subs = vec![
            sub(0, "/subs/a1", "identical shared content here", "alice"),
            sub(1, "/subs/a2", "identical shared content here", "alice"),
        ];

        let results = run(&registry, &cfg, &subs, &[], &[], &lexer).unwrap();
        let (_, exact_results) = results.iter().find(|(name, _)| name == "exact").unwrap();
        assert!(exact_results.is_empty());
    }
}

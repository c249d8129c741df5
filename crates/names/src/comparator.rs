//! The names comparator: identifier-usage-pattern similarity that is blind
//! to spelling (SPEC_FULL.md §4.6).
//!
//! Unlike the winnowing comparator, this one works over one kind of token
//! (`Name`) and groups every occurrence of the same spelling within a file
//! before fingerprinting, rather than fingerprinting token-by-token.
//!
//! The pipeline handed to [`score`]/[`compare`] must be position-preserving:
//! its output must have exactly one processed token per unprocessed token,
//! in the same order, so a processed Name's index can be used to recover
//! its original span and spelling. `Pipeline::empty()` and
//! position-preserving steps (`normalize_case`, `normalize_identifiers`,
//! `normalize_builtin_types`) satisfy this; `split_on_whitespace` or
//! `by_character` do not and must not be used here.

use std::collections::{BTreeSet, HashMap};

use compare::{Comparison, Score};
use preprocess::Pipeline;
use submission::{File, FileId, Lexer, Span, SubmissionId, Token};

use crate::config::NamesConfig;
use crate::fingerprint::{fingerprint_names, name_indices};

type FingerprintSet = BTreeSet<u64>;

/// One distinct identifier spelling within a file, with the set of
/// contexts (by hash) it was used in and the span of its last occurrence.
#[derive(Debug, Clone)]
struct NameEntry {
    span: Span,
    fingerprints: FingerprintSet,
}

/// Collects every identifier's fingerprint set across `files`, keyed by
/// `(file id, unprocessed spelling)` so repeated uses of the same name in
/// the same file accumulate into one entry.
fn collect_name_entries(
    files: &[&File],
    lexer: &dyn Lexer,
    pipeline: &Pipeline,
    cfg: &NamesConfig,
) -> HashMap<(FileId, String), NameEntry> {
    let mut entries: HashMap<(FileId, String), NameEntry> = HashMap::new();

    for file in files {
        let unprocessed: Vec<Token> = file.unprocessed_tokens(lexer).to_vec();
        let processed = pipeline.run(unprocessed.clone());
        debug_assert_eq!(
            processed.len(),
            unprocessed.len(),
            "names comparator requires a position-preserving pipeline"
        );

        let indices = name_indices(&processed);
        let hashes = fingerprint_names(&processed, &indices, cfg);

        for (&idx, hash) in indices.iter().zip(hashes) {
            let Some(unprocessed_tok) = unprocessed.get(idx) else {
                continue;
            };
            let key = (file.id, unprocessed_tok.value.clone());
            let span = Span::new(file.id, unprocessed_tok.start, unprocessed_tok.end);
            let entry = entries.entry(key).or_insert_with(|| NameEntry {
                span,
                fingerprints: FingerprintSet::new(),
            });
            // Last occurrence in stream order wins as the representative
            // span, matching the original's dict-overwrite semantics.
            entry.span = span;
            entry.fingerprints.insert(hash);
        }
    }

    entries
}

/// Keeps only identifiers that occur in more than one distinct context and
/// whose fingerprint set isn't one of `ignored`.
fn filter_entries(
    entries: HashMap<(FileId, String), NameEntry>,
    ignored: &[FingerprintSet],
) -> HashMap<(FileId, String), NameEntry> {
    entries
        .into_iter()
        .filter(|(_, e)| e.fingerprints.len() > 1 && !ignored.contains(&e.fingerprints))
        .collect()
}

/// Fingerprint sets belonging to names found in distro/boilerplate files —
/// any submission identifier whose set exactly matches one of these is
/// scrubbed before scoring.
pub fn ignored_fingerprint_sets(
    ignored_files: &[&File],
    lexer: &dyn Lexer,
    pipeline: &Pipeline,
    cfg: &NamesConfig,
) -> Vec<FingerprintSet> {
    let mut sets = Vec::new();
    for &file in ignored_files {
        let single = [file];
        let entries = collect_name_entries(&single, lexer, pipeline, cfg);
        for (_, e) in entries {
            if e.fingerprints.len() > 1 {
                sets.push(e.fingerprints);
            }
        }
    }
    sets
}

fn group_by_fingerprint_set(entries: &HashMap<(FileId, String), NameEntry>) -> HashMap<&FingerprintSet, Vec<Span>> {
    let mut grouped: HashMap<&FingerprintSet, Vec<Span>> = HashMap::new();
    for entry in entries.values() {
        grouped.entry(&entry.fingerprints).or_default().push(entry.span);
    }
    grouped
}

/// Scores a submission pair by the number of (identifier, identifier)
/// pairs across the two submissions that share an identical fingerprint
/// set — the cartesian product of each matching equivalence class, summed.
pub fn score(
    sub_a: SubmissionId,
    files_a: &[&File],
    sub_b: SubmissionId,
    files_b: &[&File],
    lexer: &dyn Lexer,
    pipeline: &Pipeline,
    cfg: &NamesConfig,
    ignored: &[FingerprintSet],
) -> Score {
    let entries_a = filter_entries(collect_name_entries(files_a, lexer, pipeline, cfg), ignored);
    let entries_b = filter_entries(collect_name_entries(files_b, lexer, pipeline, cfg), ignored);

    let grouped_a = group_by_fingerprint_set(&entries_a);
    let grouped_b = group_by_fingerprint_set(&entries_b);

    let mut points = 0.0;
    for (fpset, spans_a) in &grouped_a {
        if let Some(spans_b) = grouped_b.get(*fpset) {
            points += (spans_a.len() * spans_b.len()) as f64;
        }
    }

    Score::new(sub_a, sub_b, points)
}

/// Builds the full [`Comparison`] for a submission pair: every matching
/// identifier span pair, plus `ignored_spans` covering both distro-matched
/// identifiers and every non-identifier token (this comparator only ever
/// considers Name tokens, so everything else is outside its purview).
pub fn compare(
    sub_a: SubmissionId,
    files_a: &[&File],
    sub_b: SubmissionId,
    files_b: &[&File],
    lexer: &dyn Lexer,
    pipeline: &Pipeline,
    cfg: &NamesConfig,
    ignored: &[FingerprintSet],
) -> Comparison {
    let raw_a = collect_name_entries(files_a, lexer, pipeline, cfg);
    let raw_b = collect_name_entries(files_b, lexer, pipeline, cfg);

    let entries_a = filter_entries(raw_a.clone(), ignored);
    let entries_b = filter_entries(raw_b.clone(), ignored);

    let grouped_a = group_by_fingerprint_set(&entries_a);
    let grouped_b = group_by_fingerprint_set(&entries_b);

    let mut span_matches = Vec::new();
    for (fpset, spans_a) in &grouped_a {
        if let Some(spans_b) = grouped_b.get(*fpset) {
            for &a in spans_a.iter() {
                for &b in spans_b.iter() {
                    span_matches.push((a, b));
                }
            }
        }
    }
    // `grouped_a`/`grouped_b` are `HashMap`s keyed by fingerprint set, whose
    // iteration order depends on a randomly seeded hasher — sort the output
    // so two runs over the same input produce bit-identical span_matches.
    span_matches.sort_by_key(|(a, b)| (a.file.0, a.start, a.end, b.file.0, b.start, b.end));

    let mut ignored_spans = Vec::new();
    ignored_spans.extend(non_name_spans(files_a, lexer, pipeline));
    ignored_spans.extend(non_name_spans(files_b, lexer, pipeline));
    ignored_spans.extend(scrubbed_name_spans(&raw_a, &entries_a));
    ignored_spans.extend(scrubbed_name_spans(&raw_b, &entries_b));

    Comparison {
        sub_a,
        sub_b,
        span_matches,
        ignored_spans,
    }
}

/// Spans of every processed token that is not a Name — content this
/// comparator never looks at.
fn non_name_spans(files: &[&File], lexer: &dyn Lexer, pipeline: &Pipeline) -> Vec<Span> {
    let mut spans = Vec::new();
    for file in files {
        let unprocessed: Vec<Token> = file.unprocessed_tokens(lexer).to_vec();
        let processed = pipeline.run(unprocessed.clone());
        for (idx, tok) in processed.iter().enumerate() {
            if !tok.kind.is_name() {
                if let Some(original) = unprocessed.get(idx) {
                    spans.push(Span::new(file.id, original.start, original.end));
                }
            }
        }
    }
    spans
}

/// Spans of identifiers present before filtering but absent after it —
/// either single-context names or distro-matched ones.
fn scrubbed_name_spans(
    raw: &HashMap<(FileId, String), NameEntry>,
    kept: &HashMap<(FileId, String), NameEntry>,
) -> Vec<Span> {
    raw.iter()
        .filter(|(key, _)| !kept.contains_key(*key))
        .map(|(_, e)| e.span)
        .collect()
}

//! Context-window fingerprinting of identifier occurrences (SPEC_FULL.md §4.6).
//!
//! An identifier's *spelling* is deliberately not part of its fingerprint —
//! two differently-named variables used in the same surrounding pattern
//! hash identically. This is what lets the comparator catch "renamed all
//! the variables" plagiarism that exact-text matching misses entirely.

use submission::Token;
use xxhash_rust::xxh3::xxh3_64_with_seed;

use crate::config::NamesConfig;

/// Indices of every Name-kind token in `tokens`, in stream order.
pub fn name_indices(tokens: &[Token]) -> Vec<usize> {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| t.kind.is_name())
        .map(|(i, _)| i)
        .collect()
}

/// For each index in `indices`, hashes the concatenated text of the tokens
/// in `[max(0, i - radius), min(len(tokens) - 1, i + radius))` — a
/// half-open window, so the token exactly at the upper bound is excluded
/// when the window reaches the end of the stream. Returns one hash per
/// entry in `indices`, in the same order.
pub fn fingerprint_names(tokens: &[Token], indices: &[usize], cfg: &NamesConfig) -> Vec<u64> {
    if tokens.is_empty() {
        return Vec::new();
    }
    let last = tokens.len() - 1;

    indices
        .iter()
        .map(|&i| {
            let start = i.saturating_sub(cfg.radius);
            let end = last.min(i + cfg.radius);
            let mut text = String::new();
            for tok in &tokens[start..end] {
                text.push_str(&tok.value);
            }
            xxh3_64_with_seed(text.as_bytes(), cfg.seed)
        })
        .collect()
}

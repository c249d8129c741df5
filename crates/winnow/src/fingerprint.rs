//! Top-level fingerprinting entry point: tokens -> SourcedFingerprints.

use submission::{FileId, SourcedFingerprint, Span, Token};

use crate::config::WinnowConfig;
use crate::hashing::{hash_token_values, kgram_hashes};
use crate::winnowing::winnow_select;

/// Fingerprints `tokens` (already preprocessed by the active Pass) for
/// `file`, producing the winnowed [`SourcedFingerprint`]s per
/// SPEC_FULL.md §4.2. Returns an empty vector if fewer than `cfg.k` tokens
/// are available.
pub fn fingerprint_tokens(
    file: FileId,
    tokens: &[Token],
    cfg: &WinnowConfig,
) -> Vec<SourcedFingerprint> {
    if tokens.len() < cfg.k || cfg.k == 0 {
        return Vec::new();
    }

    let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();
    let token_hashes = hash_token_values(&values, cfg.seed);
    let kgrams = kgram_hashes(&token_hashes, cfg.k, cfg.seed);

    let selected = winnow_select(&kgrams, cfg.window());

    selected
        .into_iter()
        .map(|kgram_idx| {
            let last_token_idx = kgram_idx + cfg.k - 1;
            let span = Span::new(file, tokens[kgram_idx].start, tokens[last_token_idx].end);
            SourcedFingerprint::new(kgrams[kgram_idx], span)
        })
        .collect()
}

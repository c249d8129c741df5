//! Token hashing and rolling k-gram combination.
//!
//! Each token's value is hashed once with xxh3 (seeded), then k-gram
//! hashes are combined with a polynomial rolling hash so that sliding the
//! window by one token is O(1) rather than rehashing all `k` values —
//! the same construction used for shingling elsewhere in this workspace.

use xxhash_rust::xxh3::xxh3_64_with_seed;

const BASE: u64 = 1_000_003;

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Hashes a single token value with the given seed.
pub fn hash_token_value(value: &str, seed: u64) -> u64 {
    xxh3_64_with_seed(value.as_bytes(), seed)
}

/// Hashes every token value in `values`, in order.
pub fn hash_token_values(values: &[&str], seed: u64) -> Vec<u64> {
    values.iter().map(|v| hash_token_value(v, seed)).collect()
}

/// Computes one rolling hash per length-`k` window over `token_hashes`,
/// using a base mixed with the seed so that different seeds produce
/// unrelated k-gram hash sequences even over the same token stream.
///
/// Returns an empty vector if `token_hashes.len() < k` or `k == 0`.
pub fn kgram_hashes(token_hashes: &[u64], k: usize, seed: u64) -> Vec<u64> {
    let n = token_hashes.len();
    if k == 0 || n < k {
        return Vec::new();
    }

    let base = BASE ^ splitmix64(seed);
    let mut base_pow_k_minus_1: u64 = 1;
    for _ in 0..k.saturating_sub(1) {
        base_pow_k_minus_1 = base_pow_k_minus_1.wrapping_mul(base);
    }

    let mut out = Vec::with_capacity(n - k + 1);
    let mut window_hash: u64 = 0;
    for &h in &token_hashes[0..k] {
        window_hash = window_hash.wrapping_mul(base).wrapping_add(h);
    }
    out.push(window_hash);

    for i in k..n {
        let leaving = token_hashes[i - k];
        let entering = token_hashes[i];
        window_hash = window_hash
            .wrapping_sub(leaving.wrapping_mul(base_pow_k_minus_1))
            .wrapping_mul(base)
            .wrapping_add(entering);
        out.push(window_hash);
    }

    out
}

//! Winnowing parameters.

use serde::{Deserialize, Serialize};

use crate::error::WinnowError;

/// `k` (k-gram length) and `t` (noise threshold) as named in
/// SPEC_FULL.md §4.2; the window size `w = t - k + 1` is derived, not
/// stored, so it can never drift out of sync with `k`/`t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnowConfig {
    pub k: usize,
    pub t: usize,
    pub seed: u64,
}

impl Default for WinnowConfig {
    fn default() -> Self {
        WinnowConfig {
            k: 25,
            t: 35,
            seed: 0,
        }
    }
}

impl WinnowConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn with_t(mut self, t: usize) -> Self {
        self.t = t;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Window size over which winnowing guarantees at least one emitted
    /// fingerprint.
    pub fn window(&self) -> usize {
        self.t.saturating_sub(self.k) + 1
    }

    pub fn validate(&self) -> Result<(), WinnowError> {
        if self.k == 0 {
            return Err(WinnowError::InvalidK { k: self.k });
        }
        if self.t < self.k {
            return Err(WinnowError::InvalidT {
                k: self.k,
                t: self.t,
            });
        }
        Ok(())
    }
}

//! Names comparator parameters.

use serde::{Deserialize, Serialize};

/// Context-window radius and hash seed for [`crate::fingerprint::fingerprint_names`]
/// (SPEC_FULL.md §4.6). The radius is fixed at `5` in the original design
/// this comparator reproduces; it is still a field (not a constant) so a
/// caller can widen it without touching the algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamesConfig {
    pub radius: usize,
    pub seed: u64,
}

impl Default for NamesConfig {
    fn default() -> Self {
        NamesConfig {
            radius: 5,
            seed: 50,
        }
    }
}

impl NamesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_radius(mut self, radius: usize) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

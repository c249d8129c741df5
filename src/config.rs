//! Configuration recognized by the core (SPEC_FULL.md §6's table) plus the
//! typed validation §7 requires (`k <= 0`, `t < k`, or an unknown pass name
//! are all `ConfigError`, fatal before any comparison begins).
//!
//! Loading is JSON via `serde_json` rather than the teacher's YAML: the
//! teacher's `UcfpConfig::from_yaml` (previously in this file) depended on
//! `serde_yaml`, which its own `Cargo.toml` never actually declared, and its
//! per-stage nested structs (`IngestYamlConfig`, `CanonicalYamlConfig`, ...)
//! don't apply to this engine anyway. `serde_json` is already the
//! serialization crate every workspace member depends on, so `EngineConfig`
//! reuses it rather than adding a second format crate for one entry point —
//! see DESIGN.md's "Dependency stack" section.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use winnow::WinnowConfig;

/// One of the six pass names SPEC_FULL.md §6 lists as recognized by the
/// core's `passes` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassName {
    Structure,
    Text,
    Exact,
    Names,
    NoComments,
    Misspellings,
}

impl PassName {
    pub fn as_str(self) -> &'static str {
        match self {
            PassName::Structure => "structure",
            PassName::Text => "text",
            PassName::Exact => "exact",
            PassName::Names => "names",
            PassName::NoComments => "nocomments",
            PassName::Misspellings => "misspellings",
        }
    }

    /// The passes enabled by default, matching `compare50.passes`'s
    /// `default = True` set (`structure`, `text`, `exact`, `names`);
    /// `nocomments` and `misspellings` are opt-in only.
    pub fn defaults() -> Vec<PassName> {
        vec![
            PassName::Structure,
            PassName::Text,
            PassName::Exact,
            PassName::Names,
        ]
    }
}

impl fmt::Display for PassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PassName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "structure" => Ok(PassName::Structure),
            "text" => Ok(PassName::Text),
            "exact" => Ok(PassName::Exact),
            "names" => Ok(PassName::Names),
            "nocomments" => Ok(PassName::NoComments),
            "misspellings" => Ok(PassName::Misspellings),
            other => Err(ConfigError::UnknownPass {
                name: other.to_string(),
            }),
        }
    }
}

/// Configuration errors (SPEC_FULL.md §7): `k <= 0`, `t < k`, or an
/// unrecognized pass name. Fatal before any comparison begins, unlike
/// `SubmissionError`'s file-scoped variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid k-gram length: k must be >= 1, got {k}")]
    InvalidK { k: usize },

    #[error("invalid noise threshold: t must be >= k ({k}), got {t}")]
    InvalidT { k: usize, t: usize },

    #[error("unknown pass name `{name}`")]
    UnknownPass { name: String },
}

/// Configuration recognized by the core (SPEC_FULL.md §6):
///
/// | Option | Effect |
/// |---|---|
/// | `k` | k-gram length for winnowing (default 25) |
/// | `t` | noise threshold; window = `t - k + 1` (default 35) |
/// | `n` | number of top pairs returned (default 50) |
/// | `passes` | enabled passes |
/// | `ignore_files` | distro/ignored file paths |
///
/// `seed` is not in the distilled table but is carried through to every
/// `WinnowConfig` this produces, so a caller still gets bit-reproducible
/// hashes from an otherwise-default configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub k: usize,
    pub t: usize,
    pub seed: u64,
    pub n: usize,
    pub passes: Vec<PassName>,
    pub ignore_files: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            k: 25,
            t: 35,
            seed: 0,
            n: 50,
            passes: PassName::defaults(),
            ignore_files: Vec::new(),
        }
    }
}

impl EngineConfig {
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

    pub fn with_n(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    pub fn with_passes(mut self, passes: Vec<PassName>) -> Self {
        self.passes = passes;
        self
    }

    pub fn with_ignore_files(mut self, ignore_files: Vec<String>) -> Self {
        self.ignore_files = ignore_files;
        self
    }

    /// Validates `k`/`t` per SPEC_FULL.md §7. Pass names are already typed
    /// as `PassName` by the time a config reaches this struct — parsing raw
    /// strings is where `ConfigError::UnknownPass` is raised, via
    /// `PassName::from_str`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.k == 0 {
            return Err(ConfigError::InvalidK { k: self.k });
        }
        if self.t < self.k {
            return Err(ConfigError::InvalidT {
                k: self.k,
                t: self.t,
            });
        }
        Ok(())
    }

    pub fn winnow_config(&self) -> WinnowConfig {
        WinnowConfig::new()
            .with_k(self.k)
            .with_t(self.t)
            .with_seed(self.seed)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: EngineConfig = serde_json::from_str(json).map_err(|e| ConfigError::UnknownPass {
            name: format!("<malformed config: {e}>"),
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("EngineConfig is always serializable")
    }
}

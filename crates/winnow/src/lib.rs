//! Rolling k-gram hashing and winnowing fingerprint selection
//! (SPEC_FULL.md §4.2).
//!
//! # Contract
//!
//! [`fingerprint_tokens`] is pure and deterministic: the same tokens and
//! the same [`WinnowConfig`] always produce the same fingerprints,
//! independent of platform or call order. This is relied on by
//! SPEC_FULL.md §8's determinism property and by the pairwise scorer,
//! which must see identical fingerprints for identical content regardless
//! of which worker computed them.
//!
//! ```
//! use submission::{FileId, Token, TokenType};
//! use winnow::{fingerprint_tokens, WinnowConfig};
//!
//! let tokens = vec![
//!     Token::new(0, 1, TokenType::Name, "a"),
//!     Token::new(1, 2, TokenType::Name, "b"),
//!     Token::new(2, 3, TokenType::Name, "c"),
//! ];
//! let cfg = WinnowConfig::new().with_k(2).with_t(2);
//! let fps = fingerprint_tokens(FileId(0), &tokens, &cfg);
//! assert!(!fps.is_empty());
//! ```

pub mod config;
pub mod error;
pub mod fingerprint;
pub mod hashing;
pub mod winnowing;

pub use config::WinnowConfig;
pub use error::WinnowError;
pub use fingerprint::fingerprint_tokens;
pub use hashing::{hash_token_value, hash_token_values, kgram_hashes};
pub use winnowing::winnow_select;

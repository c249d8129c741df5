//! Token type and lexical category hierarchy.
//!
//! A [`Token`] is the atomic unit every comparator works over: a half-open
//! character range plus a lexical category and the literal text that range
//! covers. Equality is defined over `(kind, value)` only — two tokens at
//! different offsets in different files are equal if they carry the same
//! category and the same text, which is exactly what every comparator in
//! this workspace relies on when walking two token streams looking for
//! identical runs.

use serde::{Deserialize, Serialize};

/// Lexical category of a token, modeled as a small hierarchy rather than a
/// flat enum so that preprocessing steps can match on a whole family (e.g.
/// "any kind of Name") without enumerating every leaf variant.
///
/// This mirrors the category families an external highlighter typically
/// emits (Pygments-style token types): a token either belongs to one of
/// these named families or falls back to `Other` for anything a lexer
/// reports that this crate has no opinion about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Identifier occurrence (variable, function, field, type reference).
    Name,
    /// Reserved word describing a built-in type (`int`, `str`, `bool`, ...).
    KeywordType,
    /// Any other reserved word.
    Keyword,
    /// String literal content.
    String,
    /// Integer literal.
    NumberInteger,
    /// Floating point literal.
    NumberFloat,
    /// Any other numeric literal.
    NumberOther,
    /// Single-line comment.
    CommentSingle,
    /// Multi-line / block comment.
    CommentMultiline,
    /// Shebang line (`#!/usr/bin/env ...`).
    CommentHashbang,
    /// Plain text: whitespace, punctuation, or anything not otherwise
    /// classified. The plain-text lexer fallback emits only this kind.
    Text,
    /// Anything the lexer reports that doesn't fit the families above.
    Other,
}

impl TokenType {
    /// Whether this category is within the Name family.
    pub fn is_name(self) -> bool {
        matches!(self, TokenType::Name)
    }

    /// Whether this category is within the Comment family.
    pub fn is_comment(self) -> bool {
        matches!(
            self,
            TokenType::CommentSingle | TokenType::CommentMultiline | TokenType::CommentHashbang
        )
    }

    /// Whether this category is within the String family.
    pub fn is_string(self) -> bool {
        matches!(self, TokenType::String)
    }

    /// Whether this category is within the Number family.
    pub fn is_number(self) -> bool {
        matches!(
            self,
            TokenType::NumberInteger | TokenType::NumberFloat | TokenType::NumberOther
        )
    }

    /// Whether this category is within the Text family (used by
    /// `strip_whitespace`, which only touches plain text runs).
    pub fn is_text(self) -> bool {
        matches!(self, TokenType::Text)
    }

    /// Whether this category is within the Keyword.Type family.
    pub fn is_keyword_type(self) -> bool {
        matches!(self, TokenType::KeywordType)
    }
}

/// A single lexical token: a half-open character range `[start, end)` in
/// its file's text, a category, and the literal text of that range.
///
/// Positions are not part of equality — see the module docs. This matters
/// for preprocessing steps and comparators, which frequently compare tokens
/// produced by different runs (or synthesized tokens, such as a merged
/// string-literal run) and need value equality rather than identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub start: usize,
    pub end: usize,
    pub kind: TokenType,
    pub value: String,
}

impl Token {
    pub fn new(start: usize, end: usize, kind: TokenType, value: impl Into<String>) -> Self {
        Token {
            start,
            end,
            kind,
            value: value.into(),
        }
    }

    /// Length of this token's text in bytes (not its character span, which
    /// is `end - start` and may differ after normalization steps rewrite
    /// `value` without touching the offsets).
    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl Eq for Token {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_position() {
        let a = Token::new(0, 3, TokenType::Name, "foo");
        let b = Token::new(100, 103, TokenType::Name, "foo");
        assert_eq!(a, b);
    }

    #[test]
    fn equality_requires_same_kind() {
        let a = Token::new(0, 3, TokenType::Name, "foo");
        let b = Token::new(0, 3, TokenType::Keyword, "foo");
        assert_ne!(a, b);
    }

    #[test]
    fn equality_requires_same_value() {
        let a = Token::new(0, 3, TokenType::Name, "foo");
        let b = Token::new(0, 3, TokenType::Name, "bar");
        assert_ne!(a, b);
    }

    #[test]
    fn family_predicates() {
        assert!(TokenType::CommentSingle.is_comment());
        assert!(TokenType::CommentMultiline.is_comment());
        assert!(!TokenType::Name.is_comment());
        assert!(TokenType::NumberInteger.is_number());
        assert!(TokenType::NumberFloat.is_number());
    }
}

//! Adapter boundary to the external lexical analyzer.
//!
//! Real per-language highlighting is an external collaborator (SPEC_FULL.md
//! §6): this module only defines the seam a real lexer plugs into, plus the
//! plain-text fallback every submission can fall back to without one.

use crate::token::{Token, TokenType};

/// Given a file's name and full text, yields lexical triples
/// `(offset, kind, value)` in stream order. The caller (see
/// [`crate::file::File::unprocessed_tokens`]) is responsible for turning
/// consecutive triples into half-open [`Token`] ranges: `end` of token `i`
/// is `start` of token `i+1`, and the final token's `end` is `text.len()`.
pub trait Lexer: Send + Sync {
    fn lex(&self, filename: &str, text: &str) -> Vec<(usize, TokenType, String)>;
}

/// Fallback lexer: the entire input becomes a single `Text` token. Used
/// when no extension- or content-based lexer claims a file, and whenever a
/// real lexer reports a [`crate::error::SubmissionError::LexError`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextLexer;

impl Lexer for PlainTextLexer {
    fn lex(&self, _filename: &str, text: &str) -> Vec<(usize, TokenType, String)> {
        if text.is_empty() {
            return Vec::new();
        }
        vec![(0, TokenType::Text, text.to_string())]
    }
}

/// Dispatches to a registered lexer by filename extension, falling back to
/// content sniffing and finally to [`PlainTextLexer`].
///
/// Content sniffing here is intentionally shallow — a shebang line or a
/// high ratio of non-ASCII control bytes — since real language detection
/// belongs to the external highlighter this adapts to.
pub struct LexerRegistry {
    by_extension: Vec<(String, Box<dyn Lexer>)>,
    fallback: Box<dyn Lexer>,
}

impl Default for LexerRegistry {
    fn default() -> Self {
        LexerRegistry {
            by_extension: Vec::new(),
            fallback: Box::new(PlainTextLexer),
        }
    }
}

impl LexerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, extension: impl Into<String>, lexer: Box<dyn Lexer>) {
        self.by_extension.push((extension.into(), lexer));
    }

    /// Selects a lexer for `filename`: extension match first, then a
    /// shebang sniff, then the plain-text fallback.
    pub fn select(&self, filename: &str, text: &str) -> &dyn Lexer {
        if let Some(ext) = filename.rsplit('.').next() {
            for (registered_ext, lexer) in &self.by_extension {
                if registered_ext.eq_ignore_ascii_case(ext) {
                    return lexer.as_ref();
                }
            }
        }
        if text.starts_with("#!") {
            // A shebang without a registered extension still gets the
            // plain-text fallback: no bundled script lexer ships here.
        }
        self.fallback.as_ref()
    }
}

fn triples_to_tokens(text: &str, triples: Vec<(usize, TokenType, String)>) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(triples.len());
    for i in 0..triples.len() {
        let (start, kind, ref value) = triples[i];
        let end = triples
            .get(i + 1)
            .map(|(next_start, _, _)| *next_start)
            .unwrap_or(text.len());
        tokens.push(Token::new(start, end, kind, value.clone()));
    }
    tokens
}

/// Lexes `text` with `lexer` and converts the resulting triples into
/// half-open [`Token`]s. This is the conversion named in SPEC_FULL.md §6.
pub fn lex_to_tokens(lexer: &dyn Lexer, filename: &str, text: &str) -> Vec<Token> {
    let triples = lexer.lex(filename, text);
    triples_to_tokens(text, triples)
}

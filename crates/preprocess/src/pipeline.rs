//! Composable preprocessor pipelines.
//!
//! A Pass's preprocessor is represented as a value — `Vec<PreprocStep>` —
//! rather than a boxed closure or function pointer, so that a pipeline can
//! be serialized and handed to a parallel worker instead of captured by
//! reference (SPEC_FULL.md §9, "Dynamic preprocessor composition").

use serde::{Deserialize, Serialize};
use submission::Token;

use crate::steps;

/// One pure token-stream transform. Each variant corresponds exactly to a
/// function in [`crate::steps`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreprocStep {
    StripWhitespace,
    StripComments,
    Comments,
    NormalizeIdentifiers,
    NormalizeBuiltinTypes,
    NormalizeStringLiterals,
    NormalizeNumericLiterals,
    SplitOnWhitespace,
    NormalizeCase,
    Words,
    ExtractIdentifiers,
    ByCharacter,
}

impl PreprocStep {
    fn apply(self, tokens: Vec<Token>) -> Vec<Token> {
        match self {
            PreprocStep::StripWhitespace => steps::strip_whitespace(tokens),
            PreprocStep::StripComments => steps::strip_comments(tokens),
            PreprocStep::Comments => steps::comments(tokens),
            PreprocStep::NormalizeIdentifiers => steps::normalize_identifiers(tokens),
            PreprocStep::NormalizeBuiltinTypes => steps::normalize_builtin_types(tokens),
            PreprocStep::NormalizeStringLiterals => steps::normalize_string_literals(tokens),
            PreprocStep::NormalizeNumericLiterals => steps::normalize_numeric_literals(tokens),
            PreprocStep::SplitOnWhitespace => steps::split_on_whitespace(tokens),
            PreprocStep::NormalizeCase => steps::normalize_case(tokens),
            PreprocStep::Words => steps::words(tokens),
            PreprocStep::ExtractIdentifiers => steps::extract_identifiers(tokens),
            PreprocStep::ByCharacter => steps::by_character(tokens),
        }
    }
}

/// A named, ordered, serializable pipeline of [`PreprocStep`]s.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pipeline {
    pub steps: Vec<PreprocStep>,
}

impl Pipeline {
    pub fn new(steps: Vec<PreprocStep>) -> Self {
        Pipeline { steps }
    }

    pub fn empty() -> Self {
        Pipeline { steps: Vec::new() }
    }

    /// Runs every step in order, left to right.
    pub fn run(&self, tokens: Vec<Token>) -> Vec<Token> {
        self.steps.iter().fold(tokens, |acc, step| step.apply(acc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use submission::TokenType;

    #[test]
    fn empty_pipeline_is_identity() {
        let tokens = vec![Token::new(0, 3, TokenType::Name, "foo")];
        let out = Pipeline::empty().run(tokens.clone());
        assert_eq!(out, tokens);
    }

    #[test]
    fn steps_compose_left_to_right() {
        let pipeline = Pipeline::new(vec![
            PreprocStep::NormalizeCase,
            PreprocStep::NormalizeIdentifiers,
        ]);
        let tokens = vec![Token::new(0, 3, TokenType::Name, "FOO")];
        let out = pipeline.run(tokens);
        assert_eq!(out[0].value, "v");
    }

    #[test]
    fn pipeline_is_serializable() {
        let pipeline = Pipeline::new(vec![PreprocStep::StripWhitespace, PreprocStep::Words]);
        let json = serde_json::to_string(&pipeline).unwrap();
        let back: Pipeline = serde_json::from_str(&json).unwrap();
        assert_eq!(pipeline, back);
    }
}

//! Lexer error definitions.

use thiserror::Error;

/// A lexer error. Errors are reported alongside tokens; they never stop the scan.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LexError {
    #[error("Unexpected character")]
    UnexpectedChar {
        ch: char,
        line: usize,
        span: std::ops::Range<usize>,
    },

    #[error("Unterminated string")]
    UnterminatedString {
        line: usize,
        span: std::ops::Range<usize>,
    },
}

impl LexError {
    /// Get the line this error is reported on.
    pub fn line(&self) -> usize {
        match self {
            LexError::UnexpectedChar { line, .. } => *line,
            LexError::UnterminatedString { line, .. } => *line,
        }
    }

    /// Get the span of this error.
    pub fn span(&self) -> std::ops::Range<usize> {
        match self {
            LexError::UnexpectedChar { span, .. } => span.clone(),
            LexError::UnterminatedString { span, .. } => span.clone(),
        }
    }
}

//! # Lox Lexer
//!
//! Tokenizes Lox source code into a flat sequence of tokens.
//!
//! The scanner is a hand-written single pass over the source with one
//! character of lookahead (two for `*/` and fractional numbers). It never
//! aborts: malformed input is reported as [`LexError`]s next to the tokens.
//!
//! ## Example
//!
//! ```
//! use lox_lexer::{tokenize, TokenKind};
//!
//! let (tokens, errors) = tokenize("print 1 + 2;");
//! assert!(errors.is_empty());
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//!
//! for token in &tokens {
//!     println!("{}", token);
//! }
//! ```

mod error;
mod lexer;
mod token;

pub use error::LexError;
pub use lexer::Lexer;
pub use token::{keyword, Literal, Token, TokenKind};

/// Tokenize source code into a vector of tokens.
///
/// The token vector always ends with exactly one [`TokenKind::Eof`].
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<LexError>) {
    let lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    for result in lexer {
        match result {
            Ok(token) => tokens.push(token),
            Err(err) => errors.push(err),
        }
    }

    (tokens, errors)
}

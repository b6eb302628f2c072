//! Hand-written scanner over Lox source text.

use crate::error::LexError;
use crate::token::{keyword, Literal, Token, TokenKind};

/// A lexer for Lox source code.
///
/// Walks the source once, left to right, with at most two characters of
/// lookahead. Yields tokens and errors interleaved in source order and
/// finishes with a single EOF token.
pub struct Lexer<'source> {
    source: &'source str,
    /// Byte offset of the first character of the current token.
    start: usize,
    /// Byte offset of the next unread character.
    current: usize,
    line: usize,
    /// Line the current token started on.
    start_line: usize,
    peeked: Option<Result<Token, LexError>>,
    /// Track if we've emitted EOF
    done: bool,
}

impl<'source> Lexer<'source> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
            peeked: None,
            done: false,
        }
    }

    /// Peek at the next token without consuming it.
    pub fn peek(&mut self) -> Option<&Result<Token, LexError>> {
        if self.peeked.is_none() {
            self.peeked = self.next_inner();
        }
        self.peeked.as_ref()
    }

    /// Get the source text.
    pub fn source(&self) -> &'source str {
        self.source
    }

    fn next_inner(&mut self) -> Option<Result<Token, LexError>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            if let Some(result) = self.scan_token() {
                return Some(result);
            }
        }

        if self.done {
            return None;
        }
        self.done = true;
        let pos = self.current;
        Some(Ok(Token::new(TokenKind::Eof, "", None, self.line, pos..pos)))
    }

    /// Classify one character. `None` means the character was trivia.
    fn scan_token(&mut self) -> Option<Result<Token, LexError>> {
        let c = self.advance()?;
        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '-' => TokenKind::Minus,
            '+' => TokenKind::Plus,
            ';' => TokenKind::Semicolon,
            '*' => TokenKind::Star,

            '!' if self.match_next('=') => TokenKind::BangEqual,
            '!' => TokenKind::Bang,
            '=' if self.match_next('=') => TokenKind::EqualEqual,
            '=' => TokenKind::Equal,
            '<' if self.match_next('=') => TokenKind::LessEqual,
            '<' => TokenKind::Less,
            '>' if self.match_next('=') => TokenKind::GreaterEqual,
            '>' => TokenKind::Greater,

            '/' if self.match_next('/') => {
                self.skip_line_comment();
                return None;
            }
            '/' if self.match_next('*') => {
                self.skip_block_comment();
                return None;
            }
            '/' => TokenKind::Slash,

            ' ' | '\r' | '\t' => return None,
            '\n' => {
                self.line += 1;
                return None;
            }

            '"' => return Some(self.string()),
            c if is_digit(c) => return Some(Ok(self.number())),
            c if is_alpha(c) => return Some(Ok(self.identifier())),

            ch => {
                return Some(Err(LexError::UnexpectedChar {
                    ch,
                    line: self.line,
                    span: self.start..self.current,
                }))
            }
        };

        Some(Ok(self.make_token(kind, None)))
    }

    // ========================================================================
    // Cursor
    // ========================================================================

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.source[self.current..].chars().next()?;
        self.current += c.len_utf8();
        Some(c)
    }

    /// Consume the next character only if it is `expected`.
    fn match_next(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek_char() != expected {
            return false;
        }
        self.current += expected.len_utf8();
        true
    }

    /// The next unread character, or `'\0'` at end of input.
    fn peek_char(&self) -> char {
        self.source[self.current..].chars().next().unwrap_or('\0')
    }

    /// The character after [`Self::peek_char`], or `'\0'` past the end.
    fn peek_next_char(&self) -> char {
        self.source[self.current..].chars().nth(1).unwrap_or('\0')
    }

    fn lexeme(&self) -> &'source str {
        &self.source[self.start..self.current]
    }

    fn make_token(&self, kind: TokenKind, literal: Option<Literal>) -> Token {
        Token::new(
            kind,
            self.lexeme(),
            literal,
            self.start_line,
            self.start..self.current,
        )
    }

    // ========================================================================
    // Trivia
    // ========================================================================

    fn skip_line_comment(&mut self) {
        while self.peek_char() != '\n' && !self.is_at_end() {
            self.advance();
        }
    }

    /// Skip to just past the first `*/`. Comments do not nest.
    fn skip_block_comment(&mut self) {
        while !self.is_at_end() && !(self.peek_char() == '*' && self.peek_next_char() == '/') {
            if self.peek_char() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        // An unclosed comment simply runs to the end of input.
        if !self.is_at_end() {
            self.current += 2;
        }
    }

    // ========================================================================
    // Literals and identifiers
    // ========================================================================

    fn string(&mut self) -> Result<Token, LexError> {
        while self.peek_char() != '"' && !self.is_at_end() {
            if self.peek_char() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            return Err(LexError::UnterminatedString {
                line: self.line,
                span: self.start..self.current,
            });
        }

        // The closing quote.
        self.advance();

        let value = &self.source[self.start + 1..self.current - 1];
        Ok(self.make_token(TokenKind::String, Some(Literal::String(value.into()))))
    }

    fn number(&mut self) -> Token {
        while is_digit(self.peek_char()) {
            self.advance();
        }

        // A fractional part needs at least one digit after the dot.
        if self.peek_char() == '.' && is_digit(self.peek_next_char()) {
            self.advance();
            while is_digit(self.peek_char()) {
                self.advance();
            }
        }

        // Digit runs with an optional fraction always parse.
        let value = self.lexeme().parse::<f64>().unwrap_or_default();
        self.make_token(TokenKind::Number, Some(Literal::Number(value)))
    }

    fn identifier(&mut self) -> Token {
        while is_alpha_numeric(self.peek_char()) {
            self.advance();
        }

        let kind = keyword(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.make_token(kind, None)
    }
}

impl<'source> Iterator for Lexer<'source> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(peeked) = self.peeked.take() {
            return Some(peeked);
        }
        self.next_inner()
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alpha_numeric(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}

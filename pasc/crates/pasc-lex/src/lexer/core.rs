//! Core lexer implementation.
//!
//! This module contains the Lexer struct, its navigation primitives and the
//! `next_token` dispatch loop.

use std::iter::FusedIterator;

use pasc_util::Span;
use tracing::trace;

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

/// Lexer for Pascal-subset source text.
///
/// Each call to [`Lexer::next_token`] skips whitespace and comments and
/// returns the next token. Once the input is exhausted every further call
/// returns an EOF token.
///
/// # Example
///
/// ```
/// use pasc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("x := 1");
/// assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::Identifier);
/// assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::Assign);
/// assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::IntegerLiteral);
/// assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::Eof);
/// ```
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Byte offset where the last token starts.
    token_start: usize,

    /// Line where the last token starts (1-based).
    token_start_line: u32,

    /// Column where the last token starts (1-based).
    token_start_column: u32,

    /// Set once the iterator has yielded an error or reached EOF.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the start of `input`.
    ///
    /// Empty input is accepted; the first token is then EOF.
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            finished: false,
        }
    }

    /// Returns the text being scanned.
    pub fn input(&self) -> &'a str {
        self.cursor.source()
    }

    /// Returns the current byte offset.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the character at the current position, `None` past the end.
    pub fn current_char(&self) -> Option<char> {
        self.cursor.current_char()
    }

    /// Moves one character forward. Does nothing at end of input.
    pub fn advance(&mut self) {
        self.cursor.advance();
    }

    /// Returns the character after the current one without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.cursor.peek_char()
    }

    /// Returns the location of the most recently returned token.
    ///
    /// ```
    /// use pasc_lex::Lexer;
    ///
    /// let mut lexer = Lexer::new("BEGIN\n  total");
    /// lexer.next_token().unwrap();
    /// lexer.next_token().unwrap();
    /// let span = lexer.token_span();
    /// assert_eq!((span.line, span.column), (2, 3));
    /// assert_eq!(&lexer.input()[span.start..span.end], "total");
    /// ```
    pub fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    fn mark_token_start(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Returns the next token from the input.
    ///
    /// Whitespace and comments are skipped first. A character that starts
    /// no token produces [`LexError::UnexpectedCharacter`] and leaves the
    /// position on that character.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        while let Some(c) = self.cursor.current_char() {
            if c.is_whitespace() {
                self.skip_whitespace();
                continue;
            }

            if c == '{' {
                self.advance();
                self.skip_comment();
                continue;
            }

            self.mark_token_start();
            let token = if c.is_ascii_digit() {
                self.number()
            } else if c.is_ascii_alphabetic() {
                self.identifier()
            } else if c == ':' {
                self.colon()
            } else if let Some(kind) = punctuation_kind(c) {
                self.punctuation(kind)
            } else {
                return Err(LexError::UnexpectedCharacter {
                    character: c,
                    span: Span::new(
                        self.token_start,
                        self.token_start + c.len_utf8(),
                        self.token_start_line,
                        self.token_start_column,
                    ),
                });
            };

            trace!(
                kind = %token.kind(),
                line = self.token_start_line,
                column = self.token_start_column,
                "token"
            );
            return Ok(token);
        }

        self.mark_token_start();
        Ok(Token::eof())
    }
}

/// Maps a single-character token to its tag.
fn punctuation_kind(c: char) -> Option<TokenKind> {
    let kind = match c {
        ',' => TokenKind::Comma,
        ';' => TokenKind::Semicolon,
        '.' => TokenKind::Dot,
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '*' => TokenKind::Asterisk,
        '/' => TokenKind::Slash,
        '(' => TokenKind::LeftParenthesis,
        ')' => TokenKind::RightParenthesis,
        _ => return None,
    };
    Some(kind)
}

/// Yields tokens up to, but not including, EOF.
///
/// The first error is yielded once and ends the iteration.
impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_token() {
            Ok(token) if token.is(TokenKind::Eof) => {
                self.finished = true;
                None
            },
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            },
        }
    }
}

impl FusedIterator for Lexer<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenValue;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .map(|token| token.unwrap().kind())
            .collect()
    }

    #[test]
    fn test_empty_input_is_eof() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.next_token().unwrap(), Token::eof());
    }

    #[test]
    fn test_eof_repeats() {
        let mut lexer = Lexer::new("a");
        lexer.next_token().unwrap();
        for _ in 0..3 {
            assert!(lexer.next_token().unwrap().is(TokenKind::Eof));
        }
    }

    #[test]
    fn test_assignment_statement() {
        assert_eq!(
            kinds("a := 2;"),
            vec![
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::IntegerLiteral,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_single_character_tokens_carry_their_text() {
        let mut lexer = Lexer::new(",;.+-*/()");
        let expected = [",", ";", ".", "+", "-", "*", "/", "(", ")"];
        for text in expected {
            let token = lexer.next_token().unwrap();
            assert_eq!(token.value().and_then(TokenValue::as_str), Some(text));
        }
        assert!(lexer.next_token().unwrap().is(TokenKind::Eof));
    }

    #[test]
    fn test_unexpected_character_is_not_consumed() {
        let mut lexer = Lexer::new("a @ b");
        lexer.next_token().unwrap();
        let err = lexer.next_token().unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                character: '@',
                span: Span::new(2, 3, 1, 3),
            }
        );
        assert_eq!(lexer.current_char(), Some('@'));
    }

    #[test]
    fn test_backslash_is_rejected() {
        let err = Lexer::new("\\").next_token().unwrap_err();
        assert!(matches!(err, LexError::UnexpectedCharacter { character: '\\', .. }));
    }

    #[test]
    fn test_peek_and_advance() {
        let mut lexer = Lexer::new("ab");
        assert_eq!(lexer.peek(), Some('b'));
        lexer.advance();
        assert_eq!(lexer.current_char(), Some('b'));
        assert_eq!(lexer.peek(), None);
        lexer.advance();
        lexer.advance();
        assert_eq!(lexer.current_char(), None);
        assert_eq!(lexer.position(), 2);
    }

    #[test]
    fn test_token_span_tracks_lines() {
        let mut lexer = Lexer::new("VAR\n  a : REAL;");
        lexer.next_token().unwrap();
        assert_eq!(lexer.token_span(), Span::new(0, 3, 1, 1));
        lexer.next_token().unwrap();
        assert_eq!(lexer.token_span(), Span::new(6, 7, 2, 3));
    }

    #[test]
    fn test_iterator_stops_before_eof() {
        let tokens: Vec<_> = Lexer::new("BEGIN END").collect();
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_iterator_fuses_after_error() {
        let mut lexer = Lexer::new("a # b");
        assert!(lexer.next().unwrap().is_ok());
        assert!(lexer.next().unwrap().is_err());
        assert!(lexer.next().is_none());
        assert!(lexer.next().is_none());
    }
}

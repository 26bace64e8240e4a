//! Number literal lexing.

use tracing::debug;

use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an integer or real literal.
    ///
    /// Reads a run of decimal digits. If a `.` follows, it is consumed along
    /// with any further digits and the literal is real; `12.` is the real
    /// `12.0`. There is no exponent or sign syntax.
    ///
    /// Out-of-range literals saturate: integers to `i64::MAX`, reals to
    /// `f64::MAX`.
    pub fn number(&mut self) -> Token {
        let start = self.cursor.position();

        self.cursor.eat_while(|c| c.is_ascii_digit());

        if self.cursor.current_char() == Some('.') {
            self.advance();
            self.cursor.eat_while(|c| c.is_ascii_digit());

            // digits, a dot and optional digits always parse as f64
            let text = self.cursor.slice_from(start);
            let value: f64 = text.parse().unwrap_or_default();
            if value.is_finite() {
                return Token::real(value);
            }
            debug!(literal = text, "real literal saturated");
            return Token::real(f64::MAX);
        }

        let text = self.cursor.slice_from(start);
        match text.parse() {
            Ok(value) => Token::integer(value),
            Err(_) => {
                debug!(literal = text, "integer literal saturated");
                Token::integer(i64::MAX)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, Token, TokenKind};

    fn lex_number(source: &str) -> Token {
        Lexer::new(source).number()
    }

    #[test]
    fn test_integer() {
        assert_eq!(lex_number("42"), Token::integer(42));
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(lex_number("007"), Token::integer(7));
    }

    #[test]
    fn test_real() {
        assert_eq!(lex_number("2.75"), Token::real(2.75));
    }

    #[test]
    fn test_trailing_dot_is_real() {
        let token = lex_number("12.");
        assert_eq!(token, Token::real(12.0));
        assert_eq!(token.to_string(), "Token(REAL_LITERAL, 12.0)");
    }

    #[test]
    fn test_number_stops_at_letter() {
        let mut lexer = Lexer::new("5x");
        assert_eq!(lexer.number(), Token::integer(5));
        assert_eq!(lexer.current_char(), Some('x'));
    }

    #[test]
    fn test_second_dot_is_separate() {
        let mut lexer = Lexer::new("1.5.");
        assert_eq!(lexer.next_token().unwrap(), Token::real(1.5));
        assert!(lexer.next_token().unwrap().is(TokenKind::Dot));
    }

    #[test]
    fn test_no_exponent() {
        let mut lexer = Lexer::new("1e5");
        assert_eq!(lexer.next_token().unwrap(), Token::integer(1));
        assert_eq!(lexer.next_token().unwrap(), Token::identifier("e5"));
    }

    #[test]
    fn test_max_integer() {
        assert_eq!(lex_number("9223372036854775807"), Token::integer(i64::MAX));
    }

    #[test]
    fn test_oversized_integer_saturates() {
        let tokens: Vec<Token> = Lexer::new("x := 9223372036854775808;")
            .map(Result::unwrap)
            .collect();
        assert_eq!(tokens[2], Token::integer(i64::MAX));
        assert!(tokens[3].is(TokenKind::Semicolon));
    }

    #[test]
    fn test_long_real_is_not_overflow() {
        let token = lex_number("99999999999999999999.5");
        assert_eq!(token.kind(), TokenKind::RealLiteral);
    }

    #[test]
    fn test_huge_real_saturates() {
        let source = format!("{}.5", "9".repeat(400));
        let mut lexer = Lexer::new(&source);
        let token = lexer.number();
        assert_eq!(token, Token::real(f64::MAX));
        assert_eq!(token.to_string(), "Token(REAL_LITERAL, 1.7976931348623157e308)");
        assert_eq!(lexer.position(), source.len());

        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["value"], serde_json::json!(f64::MAX));
    }
}

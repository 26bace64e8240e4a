//! Punctuation lexing.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes colon or assignment.
    ///
    /// Handles: `:`, `:=`
    pub fn colon(&mut self) -> Token {
        if self.peek() == Some('=') {
            self.advance();
            self.advance();
            Token::text(TokenKind::Assign, ":=")
        } else {
            self.advance();
            Token::text(TokenKind::Colon, ":")
        }
    }

    /// Consumes one character and returns it as a token of `kind`.
    pub(crate) fn punctuation(&mut self, kind: TokenKind) -> Token {
        self.advance();
        match kind.symbol() {
            Some(symbol) => Token::text(kind, symbol),
            None => Token::new(kind, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, Token, TokenKind};

    #[test]
    fn test_assign() {
        let mut lexer = Lexer::new(":=");
        assert_eq!(lexer.colon(), Token::text(TokenKind::Assign, ":="));
        assert_eq!(lexer.current_char(), None);
    }

    #[test]
    fn test_colon() {
        let mut lexer = Lexer::new(": =");
        assert_eq!(lexer.colon(), Token::text(TokenKind::Colon, ":"));
        assert_eq!(lexer.current_char(), Some(' '));
    }

    #[test]
    fn test_colon_at_end() {
        let mut lexer = Lexer::new(":");
        assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::Colon);
        assert!(lexer.next_token().unwrap().is(TokenKind::Eof));
    }

    #[test]
    fn test_declaration_colon() {
        let kinds: Vec<_> = Lexer::new("a, b : INTEGER;")
            .map(|t| t.unwrap().kind())
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Comma,
                TokenKind::Identifier,
                TokenKind::Colon,
                TokenKind::IntegerType,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_slash_is_not_real_div() {
        let token = Lexer::new("/").next_token().unwrap();
        assert_eq!(token, Token::text(TokenKind::Slash, "/"));
    }
}

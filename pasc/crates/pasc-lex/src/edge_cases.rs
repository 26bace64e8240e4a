//! Edge case tests for pasc-lex

#[cfg(test)]
mod tests {
    use crate::{LexError, Lexer, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token().unwrap();
            if token.is(TokenKind::Eof) {
                break;
            }
            tokens.push(token);
        }
        tokens
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_whitespace_only() {
        assert!(lex_all(" \n\t\r\n ").is_empty());
    }

    #[test]
    fn test_edge_comment_only() {
        assert!(lex_all("{ nothing here }").is_empty());
    }

    #[test]
    fn test_edge_empty_comment() {
        assert_eq!(lex_all("{}x"), vec![Token::identifier("x")]);
    }

    #[test]
    fn test_edge_open_brace_at_end() {
        assert_eq!(lex_all("a {"), vec![Token::identifier("a")]);
    }

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(lex_all("x"), vec![Token::identifier("x")]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let tokens = lex_all(&format!("{} := 1", name));
        assert_eq!(tokens[0], Token::identifier(name));
    }

    #[test]
    fn test_edge_adjacent_tokens() {
        let kinds: Vec<_> = lex_all("a:=b*(c-1)").iter().map(Token::kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::Identifier,
                TokenKind::Asterisk,
                TokenKind::LeftParenthesis,
                TokenKind::Identifier,
                TokenKind::Minus,
                TokenKind::IntegerLiteral,
                TokenKind::RightParenthesis,
            ]
        );
    }

    #[test]
    fn test_edge_mixed_case_keywords() {
        let kinds: Vec<_> = lex_all("bEgIn EnD").iter().map(Token::kind).collect();
        assert_eq!(kinds, vec![TokenKind::Begin, TokenKind::End]);
    }

    #[test]
    fn test_edge_number_then_identifier() {
        assert_eq!(
            lex_all("10abc"),
            vec![Token::integer(10), Token::identifier("abc")]
        );
    }

    #[test]
    fn test_edge_zero() {
        assert_eq!(lex_all("0"), vec![Token::integer(0)]);
        assert_eq!(lex_all("0.0"), vec![Token::real(0.0)]);
    }

    #[test]
    fn test_edge_leading_dot_is_not_real() {
        assert_eq!(
            lex_all(".5"),
            vec![Token::text(TokenKind::Dot, "."), Token::integer(5)]
        );
    }

    #[test]
    fn test_edge_range_like() {
        assert_eq!(
            lex_all("1..2"),
            vec![
                Token::real(1.0),
                Token::text(TokenKind::Dot, "."),
                Token::integer(2),
            ]
        );
    }

    #[test]
    fn test_edge_negative_is_two_tokens() {
        assert_eq!(
            lex_all("-5"),
            vec![Token::text(TokenKind::Minus, "-"), Token::integer(5)]
        );
    }

    #[test]
    fn test_edge_unicode_whitespace() {
        assert_eq!(lex_all("a\u{2003}b").len(), 2);
    }

    #[test]
    fn test_edge_non_ascii_letter_rejected() {
        let err = Lexer::new("é").next_token().unwrap_err();
        assert!(matches!(err, LexError::UnexpectedCharacter { character: 'é', .. }));
        assert_eq!(err.span().end, 2);
    }

    #[test]
    fn test_edge_underscore_rejected() {
        let mut lexer = Lexer::new("_x");
        assert!(lexer.next_token().is_err());
    }

    #[test]
    fn test_edge_error_repeats_without_progress() {
        let mut lexer = Lexer::new("=");
        let first = lexer.next_token().unwrap_err();
        let second = lexer.next_token().unwrap_err();
        assert_eq!(first, second);
    }

    #[test]
    fn test_edge_error_after_newlines() {
        let err = Lexer::new("BEGIN\n\n  #").find_map(Result::err).unwrap();
        assert_eq!((err.span().line, err.span().column), (3, 3));
    }

    #[test]
    fn test_edge_crlf_lines() {
        let mut lexer = Lexer::new("a\r\nb");
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();
        assert_eq!(lexer.token_span().line, 2);
        assert_eq!(lexer.token_span().column, 1);
    }
}

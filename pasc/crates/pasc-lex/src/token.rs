//! Token definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] tag with an optional [`TokenValue`].
//! Only the end-of-file token has no value.

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use pasc_util::FxHashMap;
use serde::Serialize;

/// The closed set of token tags.
///
/// `Backslash` and `RealDiv` are part of the language's tag set but the
/// scanner never produces them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // Punctuation
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `\`
    Backslash,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `(`
    LeftParenthesis,
    /// `)`
    RightParenthesis,
    /// `:=`
    Assign,

    /// End of input
    Eof,

    // Reserved words
    /// `BEGIN`
    Begin,
    /// `END`
    End,
    /// `PROGRAM`
    Program,
    /// `VAR`
    Var,
    /// `INTEGER`
    IntegerType,
    /// `REAL`
    RealType,
    /// `DIV`
    IntegerDiv,
    /// Real division; reserved, never scanned
    RealDiv,
    /// `PROCEDURE`
    Procedure,

    // Names and literals
    /// A name that is not a reserved word
    Identifier,
    /// Decimal integer literal
    IntegerLiteral,
    /// Decimal literal with a fractional part
    RealLiteral,
}

impl TokenKind {
    /// Returns the tag name, e.g. `INTEGER_DIV`.
    pub const fn name(&self) -> &'static str {
        match self {
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::Backslash => "BACKSLASH",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Colon => "COLON",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LeftParenthesis => "LEFT_PARENTHESIS",
            TokenKind::RightParenthesis => "RIGHT_PARENTHESIS",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Eof => "EOF",
            TokenKind::Begin => "BEGIN",
            TokenKind::End => "END",
            TokenKind::Program => "PROGRAM",
            TokenKind::Var => "VAR",
            TokenKind::IntegerType => "INTEGER_TYPE",
            TokenKind::RealType => "REAL_TYPE",
            TokenKind::IntegerDiv => "INTEGER_DIV",
            TokenKind::RealDiv => "REAL_DIV",
            TokenKind::Procedure => "PROCEDURE",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::IntegerLiteral => "INTEGER_LITERAL",
            TokenKind::RealLiteral => "REAL_LITERAL",
        }
    }

    /// Returns the source spelling of a punctuation kind.
    pub const fn symbol(&self) -> Option<&'static str> {
        match self {
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Asterisk => Some("*"),
            TokenKind::Slash => Some("/"),
            TokenKind::Backslash => Some("\\"),
            TokenKind::Comma => Some(","),
            TokenKind::Dot => Some("."),
            TokenKind::Colon => Some(":"),
            TokenKind::Semicolon => Some(";"),
            TokenKind::LeftParenthesis => Some("("),
            TokenKind::RightParenthesis => Some(")"),
            TokenKind::Assign => Some(":="),
            _ => None,
        }
    }

    /// Returns true for kinds produced from the reserved-word table.
    pub const fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Begin
                | TokenKind::End
                | TokenKind::Program
                | TokenKind::Var
                | TokenKind::IntegerType
                | TokenKind::RealType
                | TokenKind::IntegerDiv
                | TokenKind::Procedure
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The payload carried by a token.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// Punctuation, keyword or identifier spelling
    Text(Cow<'static, str>),
    /// Value of an integer literal
    Integer(i64),
    /// Value of a real literal
    Real(f64),
}

impl TokenValue {
    /// Returns the text payload, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::Text(text) => Some(&**text),
            _ => None,
        }
    }

    /// Returns the integer payload, if any.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            TokenValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the real payload, if any.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            TokenValue::Real(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Text(text) => f.write_str(text),
            TokenValue::Integer(value) => write!(f, "{}", value),
            // Debug keeps the fractional part: 12.0 rather than 12
            TokenValue::Real(value) => write!(f, "{:?}", value),
        }
    }
}

/// One lexical unit.
///
/// # Example
///
/// ```
/// use pasc_lex::{Token, TokenKind};
///
/// let token = Token::integer(42);
/// assert!(token.is(TokenKind::IntegerLiteral));
/// assert_eq!(token.to_string(), "Token(INTEGER_LITERAL, 42)");
/// assert_eq!(Token::eof().to_string(), "Token(EOF, None)");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Token {
    #[serde(rename = "type")]
    kind: TokenKind,
    value: Option<TokenValue>,
}

impl Token {
    /// Creates a token. No validation is performed on the pair.
    pub const fn new(kind: TokenKind, value: Option<TokenValue>) -> Self {
        Self { kind, value }
    }

    /// The end-of-file token.
    pub const fn eof() -> Self {
        Self::new(TokenKind::Eof, None)
    }

    /// A token whose value is static text (punctuation and keywords).
    pub const fn text(kind: TokenKind, text: &'static str) -> Self {
        Self::new(kind, Some(TokenValue::Text(Cow::Borrowed(text))))
    }

    /// An identifier token holding `name` as written.
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::new(
            TokenKind::Identifier,
            Some(TokenValue::Text(Cow::Owned(name.into()))),
        )
    }

    /// An integer literal token.
    pub const fn integer(value: i64) -> Self {
        Self::new(TokenKind::IntegerLiteral, Some(TokenValue::Integer(value)))
    }

    /// A real literal token.
    pub const fn real(value: f64) -> Self {
        Self::new(TokenKind::RealLiteral, Some(TokenValue::Real(value)))
    }

    /// Returns the token's tag.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the token's value; `None` only for EOF.
    pub fn value(&self) -> Option<&TokenValue> {
        self.value.as_ref()
    }

    /// Returns true if the token has the given tag.
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "Token({}, {})", self.kind, value),
            None => write!(f, "Token({}, None)", self.kind),
        }
    }
}

/// Reserved words keyed by their uppercase spelling.
///
/// Built once per process and shared by every lexer. Entries hold borrowed
/// static text, so cloning one out of the table does not allocate.
pub static RESERVED_WORDS: LazyLock<FxHashMap<&'static str, Token>> = LazyLock::new(|| {
    [
        ("PROGRAM", TokenKind::Program),
        ("VAR", TokenKind::Var),
        ("DIV", TokenKind::IntegerDiv),
        ("INTEGER", TokenKind::IntegerType),
        ("REAL", TokenKind::RealType),
        ("BEGIN", TokenKind::Begin),
        ("END", TokenKind::End),
        ("PROCEDURE", TokenKind::Procedure),
    ]
    .into_iter()
    .map(|(word, kind)| (word, Token::text(kind, word)))
    .collect()
});

/// Looks up an identifier in the reserved-word table, ignoring case.
///
/// # Example
///
/// ```
/// use pasc_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("Begin").map(|t| t.kind()), Some(TokenKind::Begin));
/// assert!(keyword_from_ident("beginner").is_none());
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<Token> {
    RESERVED_WORDS.get(ident.to_ascii_uppercase().as_str()).cloned()
}

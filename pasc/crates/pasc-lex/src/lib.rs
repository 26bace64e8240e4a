//! pasc-lex - Lexical Analyzer for a Pascal subset
//!
//! This crate turns source text written in a small Pascal-like language into
//! a stream of tokens for a parser to consume.
//!
//! # Example Usage
//!
//! ```
//! use pasc_lex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("BEGIN a := 2 END.");
//!
//! // Pull tokens one at a time
//! let first = lexer.next_token().unwrap();
//! assert!(first.is(TokenKind::Begin));
//!
//! // Or iterate; iteration ends before EOF
//! for token in lexer {
//!     println!("{}", token.unwrap());
//! }
//!
//! // Or scan everything at once, EOF included
//! let tokens = pasc_lex::tokenize("x := 1").unwrap();
//! assert_eq!(tokens.len(), 4);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, values and the reserved-word table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`error`] - Lexical errors and their diagnostics
//!
//! # Token Categories
//!
//! ## Reserved words
//!
//! `PROGRAM`, `VAR`, `DIV`, `INTEGER`, `REAL`, `BEGIN`, `END`, `PROCEDURE`,
//! matched case-insensitively. Their token value is the uppercase spelling.
//!
//! ## Identifiers
//!
//! A letter followed by letters or digits. Pattern: `[a-zA-Z][a-zA-Z0-9]*`
//!
//! ## Literals
//!
//! - **Integer**: `42`, `007`
//! - **Real**: `3.5`, `12.`
//!
//! ## Punctuation
//!
//! `+` `-` `*` `/` `,` `;` `.` `:` `(` `)` and `:=`
//!
//! ## Comments
//!
//! `{ ... }`, not nested. A comment left open runs to the end of input.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::LexError;
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token, TokenKind, TokenValue, RESERVED_WORDS};

/// Scans all of `source`, returning every token including the final EOF.
///
/// Stops at the first lexical error.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.is(TokenKind::Eof);
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

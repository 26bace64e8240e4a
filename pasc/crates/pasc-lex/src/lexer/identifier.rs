//! Identifier and reserved-word lexing.

use crate::token::{keyword_from_ident, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or reserved word.
    ///
    /// Consumes a run of ASCII letters and digits. A run matching a reserved
    /// word in any case yields that keyword's token with its uppercase
    /// spelling; anything else is an identifier keeping its original case.
    pub fn identifier(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.eat_while(|c| c.is_ascii_alphanumeric());

        let text = self.cursor.slice_from(start);
        keyword_from_ident(text).unwrap_or_else(|| Token::identifier(text))
    }
}

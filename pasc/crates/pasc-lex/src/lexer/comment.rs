//! Whitespace and comment skipping.

use tracing::debug;

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips consecutive whitespace characters.
    pub fn skip_whitespace(&mut self) {
        self.cursor.eat_while(char::is_whitespace);
    }

    /// Skips the body of a `{ ... }` comment.
    ///
    /// Expects the opening `{` to have been consumed already and consumes
    /// through the closing `}`. Comments do not nest. A comment left open
    /// at end of input ends the scan quietly.
    pub fn skip_comment(&mut self) {
        let line = self.cursor.line();
        let column = self.cursor.column();

        self.cursor.eat_while(|c| c != '}');

        if self.cursor.is_at_end() {
            debug!(line, column, "comment runs to end of input");
            return;
        }
        self.advance();
    }
}

//! Character cursor for traversing source text.
//!
//! The `Cursor` owns the scan position and the line/column bookkeeping.
//! End of input is represented as `None` rather than a sentinel character.

/// A cursor over source text.
///
/// # Example
///
/// ```
/// use pasc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x := 1");
/// assert_eq!(cursor.current_char(), Some('x'));
/// cursor.advance();
/// assert_eq!(cursor.current_char(), Some(' '));
/// assert_eq!(cursor.peek_char(), Some(':'));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Character at `position`, `None` once the input is exhausted.
    current: Option<char>,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            current: source.chars().next(),
            line: 1,
            column: 1,
        }
    }

    /// Returns the character under the cursor, or `None` at end of input.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.current
    }

    /// Returns the character after the current one without moving.
    ///
    /// ```
    /// use pasc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("ab");
    /// assert_eq!(cursor.peek_char(), Some('b'));
    /// assert_eq!(Cursor::new("a").peek_char(), None);
    /// assert_eq!(Cursor::new("").peek_char(), None);
    /// ```
    #[inline]
    pub fn peek_char(&self) -> Option<char> {
        let mut rest = self.source[self.position..].chars();
        rest.next()?;
        rest.next()
    }

    /// Moves one character forward.
    ///
    /// Updates line and column tracking. Does nothing at end of input, so
    /// the position never exceeds the source length.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.current else {
            return;
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.current = self.source[self.position..].chars().next();
    }

    /// Advances while `predicate` holds for the current character.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.current {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// Returns true once every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source between `start` and the current position.
    ///
    /// ```
    /// use pasc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("VAR x");
    /// let start = cursor.position();
    /// cursor.eat_while(|c| c.is_ascii_alphabetic());
    /// assert_eq!(cursor.slice_from(start), "VAR");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}

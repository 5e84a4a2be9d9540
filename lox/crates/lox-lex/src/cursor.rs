//! Character cursor for traversing source code.
//!
//! The `Cursor` owns the scanner's position state: a byte offset into an
//! immutable source buffer and the 1-based line that offset lies on. It
//! steps over whole Unicode scalar values, so a multi-byte character is never
//! split, and it is the only place that counts lines.

/// A cursor for traversing source code character by character.
///
/// # Example
///
/// ```
/// use lox_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("a\nb");
/// assert_eq!(cursor.advance(), 'a');
/// assert_eq!(cursor.advance(), '\n');
/// assert_eq!(cursor.line(), 2);
/// assert_eq!(cursor.current_char(), 'b');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source (next unread character).
    position: usize,

    /// Current line number (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`, on line 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
        }
    }

    /// Returns the next unread character without consuming it.
    ///
    /// Returns `'\0'` at the end of the source.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters past the current one.
    ///
    /// Returns `'\0'` when that position is past the end of the source, so
    /// looking one past the last character is always safe.
    ///
    /// # Example
    ///
    /// ```
    /// use lox_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("1.5");
    /// assert_eq!(cursor.peek_char(0), '1');
    /// assert_eq!(cursor.peek_char(1), '.');
    /// assert_eq!(cursor.peek_char(2), '5');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        // Fast path for ASCII (most common case)
        let bytes = self.source.as_bytes();
        if let Some(&b) = bytes.get(self.position + offset) {
            if b < 128 && bytes[self.position..self.position + offset].is_ascii() {
                return b as char;
            }
        }

        self.remaining().chars().nth(offset).unwrap_or('\0')
    }

    /// Consumes and returns the next character.
    ///
    /// Increments the line count exactly once for every `'\n'` consumed.
    /// Returns `'\0'` and does nothing if already at the end.
    #[inline]
    pub fn advance(&mut self) -> char {
        let Some(c) = self.remaining().chars().next() else {
            return '\0';
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        c
    }

    /// Consumes the next character if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use lox_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=>");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.current_char(), '>');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds for the next one.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text from `start` up to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use lox_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("var x");
    /// let start = cursor.position();
    /// cursor.eat_while(|c| c.is_ascii_alphabetic());
    /// assert_eq!(cursor.slice_from(start), "var");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}

//! Comment skipping.

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips a `#` comment up to, but not including, the line end.
    pub(crate) fn skip_comment(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
    }
}

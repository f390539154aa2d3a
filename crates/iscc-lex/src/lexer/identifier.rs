//! Identifier and keyword lexing.

use crate::chars::is_ident_continue;
use crate::token::{is_reserved_word, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier, classifying reserved words as keywords.
    pub(crate) fn lex_identifier(&mut self) {
        let span = self.cursor.span();
        let start = self.cursor.position();
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(start);
        let kind = if is_reserved_word(text) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.push(kind, text, span);
    }
}

//! Operator, bracket, and punctuation lexing.
//!
//! Operators match longest-first against fixed tables. `.` and `?` are
//! punctuation on their own but participate in the two-character
//! operators `..` and `?.`, so the table scan runs before the
//! single-character classification.

use crate::chars::{is_operator_start, is_punctuation};
use crate::token::TokenKind;
use crate::Lexer;

/// Three-character operators.
const THREE_CHAR_OPS: &[&str] = &["===", "!==", "**=", "//=", ">>>", "<<=", ">>="];

/// Two-character operators.
const TWO_CHAR_OPS: &[&str] = &[
    "==", "!=", "<=", ">=", "&&", "||", "++", "--", "+=", "-=", "*=", "/=", "%=", "**", "//",
    "<<", ">>", "&=", "|=", "^=", "=>", "..", "?.",
];

impl<'a> Lexer<'a> {
    /// Lexes a single bracket character.
    pub(crate) fn lex_bracket(&mut self) {
        let span = self.cursor.span();
        let c = self.cursor.current_char();
        self.cursor.advance();
        self.push(TokenKind::Bracket, c.to_string(), span);
    }

    /// Lexes an operator or punctuation mark, longest match first.
    pub(crate) fn lex_operator_or_punctuation(&mut self) {
        let span = self.cursor.span();
        let rest = self.cursor.remaining();

        for op in THREE_CHAR_OPS {
            if rest.starts_with(op) {
                self.cursor.advance_n(3);
                self.push(TokenKind::Operator, *op, span);
                return;
            }
        }

        for op in TWO_CHAR_OPS {
            if rest.starts_with(op) {
                self.cursor.advance_n(2);
                self.push(TokenKind::Operator, *op, span);
                return;
            }
        }

        let c = self.cursor.current_char();
        self.cursor.advance();
        if is_operator_start(c) {
            self.push(TokenKind::Operator, c.to_string(), span);
        } else if is_punctuation(c) {
            self.push(TokenKind::Punctuation, c.to_string(), span);
        }
    }
}

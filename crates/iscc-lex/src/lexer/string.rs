//! String, f-string, and template literal lexing.
//!
//! Single-quoted strings, f-strings, and backtick templates share the
//! escape rules. Triple-quoted strings are read verbatim with no escape
//! processing. Unclosed literals consume to the end of the input.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a `'`- or `"`-quoted string, including the triple-quoted
    /// form.
    pub(crate) fn lex_string(&mut self) {
        let span = self.cursor.span();
        let quote = self.cursor.current_char();
        let value = if self.triple_follows(quote) {
            self.read_triple_quoted(quote)
        } else {
            self.cursor.advance();
            self.read_quoted(quote)
        };
        self.push(TokenKind::String, value, span);
    }

    /// Lexes an `f`-prefixed string. The `{…}` placeholders stay literal;
    /// the generator rewrites them to template interpolations.
    pub(crate) fn lex_fstring(&mut self) {
        let span = self.cursor.span();
        self.cursor.advance(); // the `f` prefix
        let quote = self.cursor.current_char();
        self.cursor.advance();
        let value = self.read_quoted(quote);
        self.push(TokenKind::FString, value, span);
    }

    /// Lexes a backtick template literal with string escape rules.
    pub(crate) fn lex_template(&mut self) {
        let span = self.cursor.span();
        self.cursor.advance();
        let value = self.read_quoted('`');
        self.push(TokenKind::Template, value, span);
    }

    fn triple_follows(&self, quote: char) -> bool {
        self.cursor.peek_char(1) == quote && self.cursor.peek_char(2) == quote
    }

    /// Reads to the matching unescaped `quote`, decoding escapes.
    fn read_quoted(&mut self, quote: char) -> String {
        let mut content = String::new();
        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            if c == quote {
                self.cursor.advance();
                break;
            }
            if c == '\\' {
                self.cursor.advance();
                if self.cursor.is_at_end() {
                    break;
                }
                let escaped = self.cursor.current_char();
                self.cursor.advance();
                content.push(decode_escape(escaped));
            } else {
                content.push(c);
                self.cursor.advance();
            }
        }
        content
    }

    /// Reads a triple-quoted literal verbatim until the closing triple.
    fn read_triple_quoted(&mut self, quote: char) -> String {
        self.cursor.advance_n(3);
        let mut content = String::new();
        while !self.cursor.is_at_end() {
            if self.cursor.current_char() == quote && self.triple_follows(quote) {
                self.cursor.advance_n(3);
                break;
            }
            content.push(self.cursor.current_char());
            self.cursor.advance();
        }
        content
    }
}

/// Decodes a single-character escape. Unrecognized escapes yield the
/// character itself, which also covers `\\`, `\"`, and `\'`.
fn decode_escape(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        other => other,
    }
}

//! Core lexer implementation.
//!
//! This module contains the `Lexer` struct, its token-buffer plumbing,
//! and the per-character dispatch loop. The individual token classes are
//! lexed by the sibling modules.

use iscc_util::Span;

use crate::chars::{is_bracket, is_ident_start, is_operator_start, is_punctuation, is_quote};
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for IndentScript source.
///
/// The lexer owns a character cursor, the token buffer, and the
/// indentation bookkeeping: a stack of open indent widths plus a flag
/// marking that the next significant character decides the current line's
/// indentation. One call to [`Lexer::tokenize`] materializes the whole
/// stream.
pub struct Lexer<'a> {
    /// Character cursor over the source.
    pub(crate) cursor: Cursor<'a>,

    /// Tokens emitted so far.
    pub(crate) tokens: Vec<Token>,

    /// Stack of open indentation widths; the bottom entry is always 0.
    pub(crate) indent_stack: Vec<usize>,

    /// True while leading whitespace of the current line is unconsumed.
    pub(crate) at_line_start: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over the given source.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
            indent_stack: vec![0],
            at_line_start: true,
        }
    }

    /// Runs the lexer to completion and returns the token stream.
    ///
    /// The stream always ends with one `Dedent` per still-open block,
    /// followed by a single `Eof`.
    pub fn tokenize(mut self) -> Vec<Token> {
        while !self.cursor.is_at_end() {
            if self.at_line_start {
                self.lex_line_start();
                continue;
            }

            match self.cursor.current_char() {
                '\n' => self.lex_newline(),
                ' ' | '\t' | '\r' => self.cursor.advance(),
                '#' => self.skip_comment(),
                'f' | 'F' if is_quote(self.cursor.peek_char(1)) => self.lex_fstring(),
                c if is_quote(c) => self.lex_string(),
                '`' => self.lex_template(),
                c if c.is_ascii_digit() => self.lex_number(),
                c if is_ident_start(c) => self.lex_identifier(),
                c if is_bracket(c) => self.lex_bracket(),
                c if is_operator_start(c) || is_punctuation(c) => {
                    self.lex_operator_or_punctuation()
                }
                // Unknown characters are silently skipped.
                _ => self.cursor.advance(),
            }
        }

        self.close_blocks();
        let span = self.cursor.span();
        self.push(TokenKind::Eof, "", span);
        self.tokens
    }

    /// Appends a token to the stream.
    pub(crate) fn push(&mut self, kind: TokenKind, value: impl Into<String>, span: Span) {
        self.tokens.push(Token::new(kind, value, span));
    }
}

//! Expression boundary scanning.
//!
//! Expressions are not parsed into a tree. The scanner greedily collects
//! the raw token run, tracking bracket depth over `()`, `[]`, and `{}`,
//! and stops at the first terminator seen at depth zero: NEWLINE, INDENT,
//! DEDENT, `:` or `,` punctuation, or a closing bracket that would take
//! the depth negative. Terminators are left unconsumed for the caller.

use crate::ast::Expr;
use crate::{ParseResult, Parser};
use iscc_lex::TokenKind;

impl Parser {
    /// Scans one expression.
    pub(crate) fn expression(&mut self) -> ParseResult<Expr> {
        self.scan_expression(None)
    }

    /// Scans one expression that additionally terminates at the given
    /// keyword (used by `with … as …`).
    pub(crate) fn expression_until_keyword(&mut self, stop: &str) -> ParseResult<Expr> {
        self.scan_expression(Some(stop))
    }

    fn scan_expression(&mut self, stop: Option<&str>) -> ParseResult<Expr> {
        let mut tokens = Vec::new();
        let mut depth = 0usize;

        loop {
            let kind = self.current().kind;
            let value = self.current().value.clone();

            match kind {
                TokenKind::Eof => break,
                TokenKind::Newline | TokenKind::Indent | TokenKind::Dedent if depth == 0 => {
                    break
                }
                TokenKind::Punctuation if depth == 0 && (value == ":" || value == ",") => break,
                TokenKind::Keyword if depth == 0 && stop == Some(value.as_str()) => break,
                TokenKind::Bracket => {
                    match value.as_str() {
                        "(" | "[" | "{" => depth += 1,
                        _ => {
                            if depth == 0 {
                                // A closer belonging to the caller.
                                break;
                            }
                            depth -= 1;
                        }
                    }
                    tokens.push(self.advance());
                }
                _ => {
                    tokens.push(self.advance());
                }
            }
        }

        if tokens.is_empty() {
            return Err(self.unexpected("expression", None));
        }
        Ok(Expr { tokens })
    }
}

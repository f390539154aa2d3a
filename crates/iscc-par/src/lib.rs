//! iscc-par - Recursive-descent parser for IndentScript.
//!
//! The parser consumes the lexer's token stream and produces a statement
//! tree. Statements are parsed by recursive descent. Expressions are not
//! given a grammar of their own: the parser delimits an expression by
//! scanning to a terminator and stores the raw token run for the
//! generator to translate (see [`ast::Expr`]).
//!
//! Parsing is fail-fast: the first unmet expectation aborts with a
//! [`ParseError`] carrying the offending token and its position. There is
//! no recovery and no second error.

pub mod ast;
mod edge_cases;
mod expr;
mod items;
mod stmt;

use iscc_lex::{Token, TokenKind};
use iscc_util::{ParseError, Span};

pub use ast::Program;

/// Result alias for parser productions.
pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser over a materialized token stream.
pub struct Parser {
    /// Token stream from the lexer.
    tokens: Vec<Token>,

    /// Current position in the token stream; statement parsers may
    /// checkpoint and restore it when looking past separators.
    pub(crate) position: usize,

    /// Fallback token handed out past the end of the stream.
    eof: Token,
}

impl Parser {
    /// Creates a parser for the given token stream.
    pub fn new(tokens: Vec<Token>) -> Self {
        let end = tokens.last().map(|t| t.span).unwrap_or(Span::DUMMY);
        Self {
            tokens,
            position: 0,
            eof: Token::new(TokenKind::Eof, "", end),
        }
    }

    /// Parses a complete program.
    pub fn parse(mut self) -> ParseResult<Program> {
        let mut body = Vec::new();
        loop {
            self.skip_layout();
            if self.check(TokenKind::Eof) || self.is_at_end() {
                break;
            }
            body.push(self.parse_statement()?);
        }
        Ok(Program { body })
    }

    // ------------------------------------------------------------------
    // Token-stream helpers
    // ------------------------------------------------------------------

    /// The current token; a synthetic EOF once the stream is exhausted.
    pub(crate) fn current(&self) -> &Token {
        self.tokens.get(self.position).unwrap_or(&self.eof)
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Consumes and returns the current token.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if !self.is_at_end() {
            self.position += 1;
        }
        token
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    pub(crate) fn check_keyword(&self, word: &str) -> bool {
        self.current().is_keyword(word)
    }

    pub(crate) fn check_operator(&self, op: &str) -> bool {
        self.current().is_operator(op)
    }

    pub(crate) fn check_punctuation(&self, punct: &str) -> bool {
        self.current().is_punctuation(punct)
    }

    pub(crate) fn check_bracket(&self, bracket: &str) -> bool {
        self.current().is_bracket(bracket)
    }

    /// True when the current token is a name: an identifier, or a
    /// reserved word used in name position (`def get(self):` is legal
    /// even though `get` is reserved for the target language).
    pub(crate) fn check_name(&self) -> bool {
        matches!(
            self.current().kind,
            TokenKind::Identifier | TokenKind::Keyword
        )
    }

    pub(crate) fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn match_keyword(&mut self, word: &str) -> bool {
        if self.check_keyword(word) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn match_operator(&mut self, op: &str) -> bool {
        if self.check_operator(op) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn match_punctuation(&mut self, punct: &str) -> bool {
        if self.check_punctuation(punct) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn match_bracket(&mut self, bracket: &str) -> bool {
        if self.check_bracket(bracket) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips any run of NEWLINE tokens.
    pub(crate) fn skip_newlines(&mut self) {
        while self.check(TokenKind::Newline) {
            self.advance();
        }
    }

    /// Skips newlines and dedent residue at the top level. A DEDENT can
    /// reach here when its matching INDENT was swallowed by a bracketed
    /// expression run spanning lines.
    fn skip_layout(&mut self) {
        while matches!(
            self.current().kind,
            TokenKind::Newline | TokenKind::Dedent
        ) {
            self.advance();
        }
    }

    /// True if the token at `offset` is an operator with this lexeme.
    pub(crate) fn peek_is_operator(&self, offset: usize, op: &str) -> bool {
        self.tokens
            .get(self.position + offset)
            .is_some_and(|t| t.is_operator(op))
    }

    // ------------------------------------------------------------------
    // Expectations
    // ------------------------------------------------------------------

    pub(crate) fn expect_keyword(&mut self, word: &str) -> ParseResult<Token> {
        if self.check_keyword(word) {
            Ok(self.advance())
        } else {
            Err(self.unexpected("KEYWORD", Some(word)))
        }
    }

    pub(crate) fn expect_bracket(&mut self, bracket: &str) -> ParseResult<Token> {
        if self.check_bracket(bracket) {
            Ok(self.advance())
        } else {
            Err(self.unexpected("BRACKET", Some(bracket)))
        }
    }

    pub(crate) fn expect_punctuation(&mut self, punct: &str) -> ParseResult<Token> {
        if self.check_punctuation(punct) {
            Ok(self.advance())
        } else {
            Err(self.unexpected("PUNCTUATION", Some(punct)))
        }
    }

    /// Consumes a name (identifier, or reserved word in name position).
    pub(crate) fn expect_name(&mut self) -> ParseResult<String> {
        if self.check_name() {
            Ok(self.advance().value)
        } else {
            Err(self.unexpected("IDENTIFIER", None))
        }
    }

    /// Builds the fail-fast error for the current token.
    pub(crate) fn unexpected(
        &self,
        expected_kind: &str,
        expected_value: Option<&str>,
    ) -> ParseError {
        let found = self.current();
        ParseError::new(
            expected_kind,
            expected_value,
            found.kind.as_str(),
            found.value.as_str(),
            found.span,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Stmt;

    fn parse(source: &str) -> ParseResult<Program> {
        Parser::new(iscc_lex::tokenize(source)).parse()
    }

    #[test]
    fn test_empty_program() {
        let program = parse("").unwrap();
        assert!(program.body.is_empty());

        let program = parse("\n\n# comments only\n").unwrap();
        assert!(program.body.is_empty());
    }

    #[test]
    fn test_statement_sequence() {
        let program = parse("x = 1\ny = 2\nz = 3\n").unwrap();
        assert_eq!(program.body.len(), 3);
        assert!(matches!(program.body[0], Stmt::Expr(_)));
    }

    #[test]
    fn test_error_carries_position() {
        let error = parse("def (:\n").unwrap_err();
        assert_eq!(error.span.line, 1);
        assert_eq!(error.expected_kind, "IDENTIFIER");
        assert_eq!(error.found_kind, "BRACKET");
        assert_eq!(error.found_value, "(");
    }

    #[test]
    fn test_first_failure_wins() {
        // Both lines are broken; only the first is reported.
        let error = parse("def (:\ndef )!\n").unwrap_err();
        assert_eq!(error.span.line, 1);
    }
}

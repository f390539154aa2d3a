//! iscc-lex - Lexical analysis for IndentScript source.
//!
//! The lexer turns raw characters into a token stream in which block
//! structure is explicit: changes in leading whitespace become synthetic
//! [`TokenKind::Indent`] / [`TokenKind::Dedent`] tokens, and line ends
//! become collapsed [`TokenKind::Newline`] tokens. The parser never looks
//! at whitespace itself.
//!
//! The lexer does not fail. Malformed input degrades to best-effort
//! tokens: unknown characters are skipped and unclosed strings consume to
//! the end of the input.

mod chars;
pub mod cursor;
mod edge_cases;
pub mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};

/// Tokenizes an entire source text.
///
/// Convenience entry point for the common case; equivalent to
/// `Lexer::new(source).tokenize()`. The returned stream always ends with
/// a single [`TokenKind::Eof`] token.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

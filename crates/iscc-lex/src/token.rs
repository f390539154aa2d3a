//! Token definitions.

use std::fmt;

use iscc_util::Span;

/// The closed set of token categories the lexer can emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Synthetic block-open marker derived from leading whitespace.
    Indent,
    /// Synthetic block-close marker derived from leading whitespace.
    Dedent,
    /// End of a logical line; consecutive line ends collapse to one.
    Newline,
    /// End of input; always present and always last.
    Eof,
    /// A name that is not reserved.
    Identifier,
    /// A reserved word.
    Keyword,
    /// A numeric literal, stored as its raw digit sequence.
    Number,
    /// A string literal, stored with escapes decoded.
    String,
    /// An `f`-prefixed string; `{…}` placeholders stay literal.
    FString,
    /// A backtick-delimited template literal.
    Template,
    /// An operator, matched longest-first.
    Operator,
    /// One of `( ) { } [ ]`.
    Bracket,
    /// One of `. , ; : ? @`.
    Punctuation,
}

impl TokenKind {
    /// The conventional upper-case name, used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Eof => "EOF",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::FString => "FSTRING",
            TokenKind::Template => "TEMPLATE",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Bracket => "BRACKET",
            TokenKind::Punctuation => "PUNCTUATION",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single lexical unit: category, lexeme, and source position.
///
/// Tokens are immutable once emitted. The lexer is their only producer
/// and the parser their only consumer; the generator sees them again only
/// inside the opaque expression runs the parser captured.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// Token category.
    pub kind: TokenKind,
    /// The lexeme. Strings carry their decoded contents; numbers carry
    /// their raw digit sequence; synthetic tokens carry an empty value.
    pub value: String,
    /// Position of the token's first character.
    pub span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            value: value.into(),
            span,
        }
    }

    /// Returns true if this token has the given kind.
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Returns true for a keyword token with exactly this lexeme.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.value == word
    }

    /// Returns true for an operator token with exactly this lexeme.
    pub fn is_operator(&self, op: &str) -> bool {
        self.kind == TokenKind::Operator && self.value == op
    }

    /// Returns true for a punctuation token with exactly this lexeme.
    pub fn is_punctuation(&self, punct: &str) -> bool {
        self.kind == TokenKind::Punctuation && self.value == punct
    }

    /// Returns true for a bracket token with exactly this lexeme.
    pub fn is_bracket(&self, bracket: &str) -> bool {
        self.kind == TokenKind::Bracket && self.value == bracket
    }
}

/// Returns true if `text` is a reserved word.
///
/// The set covers the source language's statement words and the target
/// language's reserved words, so the latter never lex as plain
/// identifiers.
pub fn is_reserved_word(text: &str) -> bool {
    matches!(
        text,
        "def" | "class"
            | "if"
            | "else"
            | "elif"
            | "for"
            | "while"
            | "return"
            | "import"
            | "from"
            | "in"
            | "as"
            | "with"
            | "pass"
            | "break"
            | "continue"
            | "print"
            | "len"
            | "range"
            | "enumerate"
            | "lambda"
            | "async"
            | "await"
            | "try"
            | "except"
            | "finally"
            | "raise"
            | "assert"
            | "del"
            | "global"
            | "nonlocal"
            | "yield"
            | "None"
            | "True"
            | "False"
            | "and"
            | "or"
            | "not"
            | "is"
            | "function"
            | "const"
            | "let"
            | "var"
            | "this"
            | "new"
            | "typeof"
            | "instanceof"
            | "delete"
            | "void"
            | "super"
            | "static"
            | "get"
            | "set"
            | "extends"
            | "implements"
            | "interface"
            | "package"
            | "private"
            | "protected"
            | "public"
            | "export"
            | "default"
            | "case"
            | "switch"
            | "do"
    )
}

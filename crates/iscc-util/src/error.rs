//! The pipeline's single typed failure.

use std::fmt;

use crate::Span;

/// A parse failure: a token did not meet the parser's expectation.
///
/// Parsing is fail-fast, so a run produces at most one of these. The
/// driver wraps it into the user-facing message; the fields stay separate
/// so embedders can inspect what was expected and what was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    /// The token kind the parser expected, e.g. `IDENTIFIER`.
    pub expected_kind: String,
    /// The specific lexeme expected, when the expectation was that narrow.
    pub expected_value: Option<String>,
    /// The token kind actually observed.
    pub found_kind: String,
    /// The lexeme actually observed.
    pub found_value: String,
    /// Position of the offending token.
    pub span: Span,
}

impl ParseError {
    /// Builds a parse error from an expectation and the offending token.
    pub fn new(
        expected_kind: impl Into<String>,
        expected_value: Option<&str>,
        found_kind: impl Into<String>,
        found_value: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            expected_kind: expected_kind.into(),
            expected_value: expected_value.map(str::to_owned),
            found_kind: found_kind.into(),
            found_value: found_value.into(),
            span,
        }
    }

    /// The message without position, used by the driver when it prefixes
    /// its own `IndentScript Error at line N:` form.
    pub fn detail(&self) -> String {
        let expected = match &self.expected_value {
            Some(value) => format!("{} '{}'", self.expected_kind, value),
            None => self.expected_kind.clone(),
        };
        format!(
            "expected {}, found {} '{}'",
            expected, self.found_kind, self.found_value
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.detail(), self.span)
    }
}

impl std::error::Error for ParseError {}

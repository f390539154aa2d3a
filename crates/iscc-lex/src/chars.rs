//! Character classification helpers.
//!
//! All comparisons are on individual code units with ASCII semantics.

/// Returns true if `c` can start an identifier.
pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

/// Returns true if `c` can continue an identifier.
pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Returns true if `c` can begin an operator.
pub(crate) fn is_operator_start(c: char) -> bool {
    "+-*/%=<>!&|^~".contains(c)
}

/// Returns true if `c` is a punctuation mark.
pub(crate) fn is_punctuation(c: char) -> bool {
    ".,;:?@".contains(c)
}

/// Returns true if `c` opens or closes a bracket group.
pub(crate) fn is_bracket(c: char) -> bool {
    matches!(c, '(' | ')' | '{' | '}' | '[' | ']')
}

/// Returns true if `c` is a string quote character.
pub(crate) fn is_quote(c: char) -> bool {
    c == '\'' || c == '"'
}

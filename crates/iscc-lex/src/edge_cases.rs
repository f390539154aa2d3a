//! Edge case tests for iscc-lex.

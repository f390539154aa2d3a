//! Edge case tests for iscc-par.

//! iscc-gen - ECMAScript code generation.
//!
//! The generator walks the statement tree and emits target-language text.
//! Statement structure maps directly; expressions are translated
//! lexically from the raw token runs the parser captured, applying the
//! keyword, operator, builtin-call, and member-name rewrites as the walk
//! goes.
//!
//! The generator never fails. Malformed expression runs degrade to
//! best-effort text rather than errors.

mod expr;
mod generator;
mod rewrite;
#[cfg(test)]
mod tests;

pub use generator::Generator;

use iscc_par::Program;

/// Generates ECMAScript source text for a parsed program.
pub fn generate(program: &Program) -> String {
    Generator::new().generate(program)
}

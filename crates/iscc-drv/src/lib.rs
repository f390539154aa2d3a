//! iscc-drv - Pipeline driver for the IndentScript transpiler.
//!
//! Ties the three stages together behind two embeddable operations:
//! [`transpile`], the pure source-to-source translation, and [`execute`],
//! which hands the translated text to the JavaScript evaluator. The
//! `iscc` binary is a thin command-line shell over this library.
//!
//! Each invocation builds a fresh lexer, parser, and generator; there is
//! no state shared between runs.

pub mod cli;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{bail, Context};
use thiserror::Error;
use tracing::debug;

use iscc_par::Parser;
use iscc_util::ParseError;

/// A pipeline failure, shaped for end users.
///
/// Wraps the parser's [`ParseError`] into the single user-facing message
/// form the tool reports on stderr.
#[derive(Debug, Error)]
#[error("IndentScript Error at line {line}: {detail}")]
pub struct TranspileError {
    line: u32,
    detail: String,
    #[source]
    source: ParseError,
}

impl From<ParseError> for TranspileError {
    fn from(error: ParseError) -> Self {
        Self {
            line: error.span.line,
            detail: error.detail(),
            source: error,
        }
    }
}

impl TranspileError {
    /// The underlying parse failure.
    pub fn parse_error(&self) -> &ParseError {
        &self.source
    }
}

/// Transpiles IndentScript source into ECMAScript text.
///
/// Pure: equal inputs produce equal outputs, and nothing outside the
/// arguments is read or written.
pub fn transpile(source: &str) -> Result<String, TranspileError> {
    let tokens = iscc_lex::tokenize(source);
    debug!(tokens = tokens.len(), "lexed source");

    let program = Parser::new(tokens).parse()?;
    debug!(statements = program.body.len(), "parsed program");

    let target = iscc_gen::generate(&program);
    debug!(bytes = target.len(), "generated target text");
    Ok(target)
}

/// Transpiles `input` and writes the result.
///
/// Returns the path written. The default output is the input's basename
/// with a `.js` extension, next to the input.
pub fn transpile_file(input: &Path, output: Option<&Path>) -> anyhow::Result<PathBuf> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let target = transpile(&source)?;

    let out_path = match output {
        Some(path) => path.to_path_buf(),
        None => input.with_extension("js"),
    };
    fs::write(&out_path, &target)
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    Ok(out_path)
}

/// Transpiles `source` and runs the result in the JavaScript evaluator.
pub fn execute(source: &str) -> anyhow::Result<()> {
    let target = transpile(source)?;
    run_script(&target)
}

/// Reads `input` and executes it.
pub fn execute_file(input: &Path) -> anyhow::Result<()> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    execute(&source)
}

/// Hands generated script text to the evaluator over stdin.
///
/// Generated imports need module semantics, so the evaluator runs in
/// module mode.
fn run_script(script: &str) -> anyhow::Result<()> {
    let mut child = Command::new("node")
        .arg("--input-type=module")
        .stdin(Stdio::piped())
        .spawn()
        .context("failed to launch the JavaScript evaluator (node)")?;

    {
        let mut stdin = child
            .stdin
            .take()
            .context("evaluator stdin unavailable")?;
        stdin
            .write_all(script.as_bytes())
            .context("failed to hand the script to the evaluator")?;
    }

    let status = child.wait().context("failed to wait for the evaluator")?;
    if !status.success() {
        bail!("evaluator exited with {}", status);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpile_hello() {
        let target = transpile("print(\"hi\")\n").unwrap();
        assert_eq!(target.trim(), "console.log(\"hi\");");
    }

    #[test]
    fn test_error_message_shape() {
        let error = transpile("def (:\n").unwrap_err();
        let message = error.to_string();
        assert!(message.starts_with("IndentScript Error at line 1:"), "{message}");
        assert!(message.contains("expected IDENTIFIER"));
    }

    #[test]
    fn test_error_exposes_position() {
        let error = transpile("x = 1\ndef (:\n").unwrap_err();
        assert_eq!(error.parse_error().span.line, 2);
    }
}

//! Command-line dispatch for the `iscc` binary.
//!
//! The surface is deliberately small: transpile, execute, version, help.
//! Failures are reported on stderr and become exit status 1; help and
//! version exit 0.

use std::path::Path;

/// Usage text printed by `--help` and on a bare invocation.
const USAGE: &str = "\
iscc - IndentScript to ECMAScript transpiler

Usage:
  iscc --transpile <input> [output]   Transpile a source file
  iscc --execute <input>              Transpile and run a source file
  iscc --version                      Print the version
  iscc --help                         Show this message

Short flags: -t, -e, -v, -h. The default output path is the input's
basename with a .js extension, next to the input.";

/// Runs the CLI over the given argument list and returns the exit code.
pub fn run<I>(mut args: I) -> i32
where
    I: Iterator<Item = String>,
{
    match args.next().as_deref() {
        None | Some("--help") | Some("-h") => {
            println!("{}", USAGE);
            0
        }
        Some("--version") | Some("-v") => {
            println!("iscc {}", env!("CARGO_PKG_VERSION"));
            0
        }
        Some("--transpile") | Some("-t") => {
            let Some(input) = args.next() else {
                eprintln!("error: --transpile requires an input file");
                return 1;
            };
            let output = args.next();
            match crate::transpile_file(Path::new(&input), output.as_deref().map(Path::new)) {
                Ok(path) => {
                    println!("{}", path.display());
                    0
                }
                Err(error) => {
                    eprintln!("{:#}", error);
                    1
                }
            }
        }
        Some("--execute") | Some("-e") => {
            let Some(input) = args.next() else {
                eprintln!("error: --execute requires an input file");
                return 1;
            };
            match crate::execute_file(Path::new(&input)) {
                Ok(()) => 0,
                Err(error) => {
                    eprintln!("{:#}", error);
                    1
                }
            }
        }
        Some(other) => {
            eprintln!("error: unknown command '{}'", other);
            eprintln!("{}", USAGE);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> i32 {
        run(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_help_and_version_exit_zero() {
        assert_eq!(run_args(&[]), 0);
        assert_eq!(run_args(&["--help"]), 0);
        assert_eq!(run_args(&["-v"]), 0);
    }

    #[test]
    fn test_unknown_command_exits_one() {
        assert_eq!(run_args(&["--frobnicate"]), 1);
    }

    #[test]
    fn test_missing_input_exits_one() {
        assert_eq!(run_args(&["--transpile"]), 1);
        assert_eq!(run_args(&["-e"]), 1);
    }

    #[test]
    fn test_unreadable_input_exits_one() {
        assert_eq!(run_args(&["-t", "/no/such/file.isc"]), 1);
    }
}

//! Expression translation.
//!
//! Expressions arrive as the raw token runs the parser captured. A single
//! moving index walks the run and appends target text. Word-shaped output
//! (identifiers, numbers, keyword pass-throughs) is separated by a space
//! when juxtaposed so token runs never fuse; everything else controls its
//! own spacing.

use iscc_lex::{Token, TokenKind};

use crate::rewrite::{escape_string, fstring_to_template, member_rewrite};

/// Translates one expression token run into target text.
pub(crate) fn emit_expression(tokens: &[Token]) -> String {
    let mut out = String::new();
    // Start of the operand run a `//` would wrap; advanced past every
    // operator, separator, and opening bracket.
    let mut anchor = 0usize;
    let mut i = 0usize;

    while i < tokens.len() {
        let token = &tokens[i];
        match token.kind {
            // Layout tokens only survive inside bracketed runs; they
            // carry no target text.
            TokenKind::Newline | TokenKind::Indent | TokenKind::Dedent | TokenKind::Eof => {}

            TokenKind::Number => push_word(&mut out, &token.value),

            TokenKind::Identifier => {
                let name = if token.value == "self" {
                    "this"
                } else {
                    token.value.as_str()
                };
                push_word(&mut out, name);
            }

            TokenKind::String => {
                out.push('"');
                out.push_str(&escape_string(&token.value));
                out.push('"');
            }

            TokenKind::FString => {
                out.push('`');
                out.push_str(&fstring_to_template(&token.value));
                out.push('`');
            }

            TokenKind::Template => {
                out.push('`');
                out.push_str(&token.value);
                out.push('`');
            }

            TokenKind::Bracket => {
                out.push_str(&token.value);
                if matches!(token.value.as_str(), "(" | "[" | "{") {
                    anchor = out.len();
                }
            }

            TokenKind::Punctuation => match token.value.as_str() {
                "." => {
                    out.push('.');
                    if let Some(next) = tokens.get(i + 1) {
                        if next.kind == TokenKind::Identifier {
                            if let Some(mapped) = member_rewrite(&next.value) {
                                out.push_str(mapped);
                                i += 2;
                                continue;
                            }
                        }
                    }
                }
                "," => {
                    out.push_str(", ");
                    anchor = out.len();
                }
                ":" => {
                    out.push_str(": ");
                    anchor = out.len();
                }
                ";" => out.push_str("; "),
                other => out.push_str(other), // `?`, `@`
            },

            TokenKind::Operator => match token.value.as_str() {
                // Floor division wraps the current operand run and the
                // entire remainder; emission of this run ends here.
                "//" => {
                    let left = out[anchor..].trim().to_string();
                    let right = emit_expression(&tokens[i + 1..]);
                    out.truncate(anchor);
                    out.push_str("Math.floor(");
                    out.push_str(&left);
                    out.push_str(" / ");
                    out.push_str(right.trim());
                    out.push(')');
                    return out.trim().to_string();
                }
                op => {
                    push_operator(&mut out, op);
                    anchor = out.len();
                }
            },

            TokenKind::Keyword => match token.value.as_str() {
                "None" => push_word(&mut out, "null"),
                "True" => push_word(&mut out, "true"),
                "False" => push_word(&mut out, "false"),
                "and" => {
                    push_operator(&mut out, "&&");
                    anchor = out.len();
                }
                "or" => {
                    push_operator(&mut out, "||");
                    anchor = out.len();
                }
                "is" => {
                    push_operator(&mut out, "===");
                    anchor = out.len();
                }
                "in" => {
                    push_operator(&mut out, "in");
                    anchor = out.len();
                }
                "not" => {
                    if out.ends_with(|c: char| is_word_char(c)) {
                        out.push(' ');
                    }
                    out.push('!');
                    anchor = out.len();
                }
                // The lambda keyword claims everything that remains.
                "lambda" => {
                    emit_lambda(&mut out, &tokens[i + 1..]);
                    return out.trim().to_string();
                }
                "len" | "range" | "enumerate" if opens_call(tokens, i) => {
                    let (arguments, next) = capture_call(tokens, i + 1);
                    emit_builtin(&mut out, &token.value, &arguments);
                    i = next;
                    continue;
                }
                word => push_word(&mut out, word),
            },
        }
        i += 1;
    }

    out.trim().to_string()
}

/// Appends word-shaped text, inserting a separating space when the
/// output already ends in a word character.
fn push_word(out: &mut String, text: &str) {
    if let (Some(last), Some(first)) = (out.chars().last(), text.chars().next()) {
        if is_word_char(last) && is_word_char(first) {
            out.push(' ');
        }
    }
    out.push_str(text);
}

/// Appends a binary-shaped operator with single spaces around it,
/// avoiding doubled spaces after a previous separator.
fn push_operator(out: &mut String, op: &str) {
    if !out.is_empty() && !out.ends_with(' ') {
        out.push(' ');
    }
    out.push_str(op);
    out.push(' ');
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// True when the token after `i` opens a call's argument list.
fn opens_call(tokens: &[Token], i: usize) -> bool {
    tokens.get(i + 1).is_some_and(|t| t.is_bracket("("))
}

/// Captures the balanced argument run after a builtin name. `open` is
/// the index of the opening parenthesis. Returns the top-level
/// comma-separated argument slices and the index just past the closing
/// parenthesis.
fn capture_call(tokens: &[Token], open: usize) -> (Vec<&[Token]>, usize) {
    let mut depth = 0usize;
    let mut args: Vec<&[Token]> = Vec::new();
    let mut start = open + 1;
    let mut i = open;

    while i < tokens.len() {
        let token = &tokens[i];
        if token.kind == TokenKind::Bracket {
            match token.value.as_str() {
                "(" | "[" | "{" => depth += 1,
                _ => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        if i > start {
                            args.push(&tokens[start..i]);
                        }
                        return (args, i + 1);
                    }
                }
            }
        } else if token.kind == TokenKind::Punctuation && token.value == "," && depth == 1 {
            args.push(&tokens[start..i]);
            start = i + 1;
        }
        i += 1;
    }

    // Unclosed call: everything to the end is the final argument.
    if start < tokens.len() {
        args.push(&tokens[start..]);
    }
    (args, tokens.len())
}

/// Splices a builtin call into its target idiom. Arities outside the
/// documented rewrites fall back to a plain call.
fn emit_builtin(out: &mut String, name: &str, arguments: &[&[Token]]) {
    let rendered: Vec<String> = arguments.iter().map(|arg| emit_expression(arg)).collect();
    match (name, rendered.as_slice()) {
        ("len", [value]) => {
            push_word(out, &format!("{}.length", value));
        }
        ("range", [stop]) => {
            push_word(
                out,
                &format!("Array.from({{length: {}}}, (_, i) => i)", stop),
            );
        }
        ("range", [start, stop]) => {
            push_word(
                out,
                &format!(
                    "Array.from({{length: {stop} - {start}}}, (_, i) => i + {start})"
                ),
            );
        }
        ("range", [start, stop, step]) => {
            push_word(
                out,
                &format!(
                    "Array.from({{length: Math.ceil(({stop} - {start}) / {step})}}, (_, i) => {start} + i * {step})"
                ),
            );
        }
        ("enumerate", [value]) => {
            push_word(
                out,
                &format!("{}.map((item, index) => [index, item])", value),
            );
        }
        _ => {
            push_word(out, name);
            out.push('(');
            out.push_str(&rendered.join(", "));
            out.push(')');
        }
    }
}

/// Translates an in-expression `lambda`: everything after the keyword
/// belongs to it. Identifier tokens before the first `:` are the
/// parameters; the rest is the body.
fn emit_lambda(out: &mut String, rest: &[Token]) {
    let colon = rest
        .iter()
        .position(|t| t.kind == TokenKind::Punctuation && t.value == ":");
    let (params, body) = match colon {
        Some(at) => (&rest[..at], &rest[at + 1..]),
        None => (&rest[..0], rest),
    };

    let names: Vec<&str> = params
        .iter()
        .filter(|t| t.kind == TokenKind::Identifier)
        .map(|t| t.value.as_str())
        .collect();

    if out.ends_with(|c: char| is_word_char(c)) {
        out.push(' ');
    }
    out.push('(');
    out.push_str(&names.join(", "));
    out.push_str(") => ");
    out.push_str(emit_expression(body).trim());
}

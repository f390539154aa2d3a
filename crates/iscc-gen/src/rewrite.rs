//! Lexical rewrite tables and literal re-encoding helpers.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// Method-name translations applied to the identifier after a `.`.
/// `keys` and `values` pass through unchanged but are listed so the
/// table documents the full mapped surface.
static MEMBER_REWRITES: LazyLock<FxHashMap<&'static str, &'static str>> = LazyLock::new(|| {
    FxHashMap::from_iter([
        ("append", "push"),
        ("extend", "push"),
        ("upper", "toUpperCase"),
        ("lower", "toLowerCase"),
        ("strip", "trim"),
        ("lstrip", "trimStart"),
        ("rstrip", "trimEnd"),
        ("startswith", "startsWith"),
        ("endswith", "endsWith"),
        ("find", "indexOf"),
        ("index", "indexOf"),
        ("items", "entries"),
        ("keys", "keys"),
        ("values", "values"),
    ])
});

/// Looks up the target-language name for a member access.
pub(crate) fn member_rewrite(name: &str) -> Option<&'static str> {
    MEMBER_REWRITES.get(name).copied()
}

/// Re-encodes decoded string contents as the body of a double-quoted
/// ECMAScript string literal.
pub(crate) fn escape_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Rewrites `{…}` placeholders to `${…}` for template-literal output.
pub(crate) fn fstring_to_template(value: &str) -> String {
    value.replace('{', "${")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_rewrites() {
        assert_eq!(member_rewrite("append"), Some("push"));
        assert_eq!(member_rewrite("startswith"), Some("startsWith"));
        assert_eq!(member_rewrite("keys"), Some("keys"));
        assert_eq!(member_rewrite("push"), None);
    }

    #[test]
    fn test_escape_string() {
        assert_eq!(escape_string("plain"), "plain");
        assert_eq!(escape_string("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_string("a\nb\tc"), "a\\nb\\tc");
        assert_eq!(escape_string("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn test_fstring_to_template() {
        assert_eq!(fstring_to_template("Hi {name}"), "Hi ${name}");
        assert_eq!(fstring_to_template("{a} and {b}"), "${a} and ${b}");
        assert_eq!(fstring_to_template("no placeholders"), "no placeholders");
    }
}

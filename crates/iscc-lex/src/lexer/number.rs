//! Number literal lexing.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// Digits with an optional single decimal point (consumed only when a
    /// digit follows it), underscore separators silently elided, and an
    /// optional `e`/`E` exponent with an optional sign. The token value is
    /// the raw digit sequence minus underscores; no numeric conversion
    /// happens here.
    pub(crate) fn lex_number(&mut self) {
        let span = self.cursor.span();
        let mut value = String::new();

        self.read_digits(&mut value);

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            value.push('.');
            self.cursor.advance();
            self.read_digits(&mut value);
        }

        let c = self.cursor.current_char();
        if (c == 'e' || c == 'E') && self.exponent_follows() {
            value.push(c);
            self.cursor.advance();
            let sign = self.cursor.current_char();
            if sign == '+' || sign == '-' {
                value.push(sign);
                self.cursor.advance();
            }
            self.read_digits(&mut value);
        }

        self.push(TokenKind::Number, value, span);
    }

    fn read_digits(&mut self, value: &mut String) {
        loop {
            let c = self.cursor.current_char();
            if c.is_ascii_digit() {
                value.push(c);
                self.cursor.advance();
            } else if c == '_' {
                self.cursor.advance();
            } else {
                break;
            }
        }
    }

    fn exponent_follows(&self) -> bool {
        let next = self.cursor.peek_char(1);
        next.is_ascii_digit()
            || ((next == '+' || next == '-') && self.cursor.peek_char(2).is_ascii_digit())
    }
}

#[cfg(test)]
mod tests {
    use crate::{tokenize, TokenKind};

    fn first_number(source: &str) -> String {
        tokenize(source)
            .into_iter()
            .find(|t| t.kind == TokenKind::Number)
            .map(|t| t.value)
            .unwrap()
    }

    #[test]
    fn test_integers() {
        assert_eq!(first_number("42"), "42");
        assert_eq!(first_number("0"), "0");
    }

    #[test]
    fn test_underscores_elided() {
        assert_eq!(first_number("1_000_000"), "1000000");
    }

    #[test]
    fn test_decimal_point_needs_digit() {
        assert_eq!(first_number("3.14"), "3.14");

        // `1.x` is a number, a dot, and an identifier.
        let tokens = tokenize("1.x");
        assert_eq!(tokens[0].value, "1");
        assert!(tokens[1].is_punctuation("."));
        assert_eq!(tokens[2].value, "x");
    }

    #[test]
    fn test_exponents() {
        assert_eq!(first_number("1e10"), "1e10");
        assert_eq!(first_number("2.5e-3"), "2.5e-3");
        assert_eq!(first_number("7E+2"), "7E+2");
    }

    #[test]
    fn test_bare_e_is_not_exponent() {
        // `3e` with no digits after: the `e` starts an identifier.
        let tokens = tokenize("3em");
        assert_eq!(tokens[0].value, "3");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].value, "em");
    }
}

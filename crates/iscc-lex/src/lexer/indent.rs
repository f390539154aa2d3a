//! Indentation accounting and newline collapsing.
//!
//! Leading whitespace is weighted space = 1, tab = 4. A width above the
//! stack top opens a block (`Indent`); a narrower width closes blocks
//! (`Dedent`) until the top no longer exceeds it. Blank and comment-only
//! lines leave the block structure untouched. Mixed tabs and spaces are
//! accounted by weight, not normalized.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Handles the start of a line: measures the indent width and emits
    /// the matching `Indent`/`Dedent` tokens.
    pub(crate) fn lex_line_start(&mut self) {
        let mut width = 0usize;
        loop {
            match self.cursor.current_char() {
                ' ' => {
                    width += 1;
                    self.cursor.advance();
                }
                '\t' => {
                    width += 4;
                    self.cursor.advance();
                }
                '\r' => self.cursor.advance(),
                _ => break,
            }
        }

        if self.cursor.is_at_end() {
            return;
        }

        // Blank and comment-only lines emit nothing and stay in
        // line-start mode.
        match self.cursor.current_char() {
            '\n' => {
                self.cursor.advance();
                return;
            }
            '#' => {
                self.skip_comment();
                if self.cursor.current_char() == '\n' {
                    self.cursor.advance();
                }
                return;
            }
            _ => {}
        }

        let span = self.cursor.span();
        if width > self.indent_top() {
            self.indent_stack.push(width);
            self.push(TokenKind::Indent, "", span);
        } else {
            while width < self.indent_top() {
                self.indent_stack.pop();
                self.push(TokenKind::Dedent, "", span);
            }
        }
        self.at_line_start = false;
    }

    /// Emits a `Newline` unless the previous token is already one, then
    /// re-arms line-start mode.
    pub(crate) fn lex_newline(&mut self) {
        let span = self.cursor.span();
        self.cursor.advance();
        match self.tokens.last() {
            Some(prev) if prev.kind != TokenKind::Newline => {
                self.push(TokenKind::Newline, "\n", span);
            }
            _ => {}
        }
        self.at_line_start = true;
    }

    /// Pops every still-open block at end of input, one `Dedent` per pop.
    pub(crate) fn close_blocks(&mut self) {
        let span = self.cursor.span();
        while self.indent_stack.len() > 1 {
            self.indent_stack.pop();
            self.push(TokenKind::Dedent, "", span);
        }
    }

    fn indent_top(&self) -> usize {
        self.indent_stack.last().copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use crate::{tokenize, TokenKind};

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_indent_dedent_pair() {
        assert_eq!(
            kinds("if x:\n    y\n"),
            vec![
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Punctuation,
                TokenKind::Newline,
                TokenKind::Indent,
                TokenKind::Identifier,
                TokenKind::Newline,
                TokenKind::Dedent,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_nested_blocks_dedent_in_order() {
        let tokens = tokenize("if a:\n  if b:\n    c\nd\n");
        let dedents = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Dedent)
            .count();
        let indents = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Indent)
            .count();
        assert_eq!(indents, 2);
        assert_eq!(dedents, 2);
    }

    #[test]
    fn test_dedents_flushed_at_eof() {
        let tokens = tokenize("if a:\n  if b:\n    c");
        let dedents = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Dedent)
            .count();
        assert_eq!(dedents, 2);
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn test_blank_lines_emit_nothing() {
        assert_eq!(kinds("x\n\n\n\ny\n"), kinds("x\ny\n"));
    }

    #[test]
    fn test_comment_only_lines_emit_nothing() {
        assert_eq!(kinds("x\n# note\ny\n"), kinds("x\ny\n"));
        assert_eq!(kinds("x\n    # indented note\ny\n"), kinds("x\ny\n"));
    }

    #[test]
    fn test_tab_weighs_four() {
        // One tab and four spaces are the same level; no dedent between.
        let tokens = tokenize("if a:\n\tb\n    c\n");
        let indents = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Indent)
            .count();
        let dedents = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Dedent)
            .count();
        assert_eq!(indents, 1);
        assert_eq!(dedents, 1);
    }

    #[test]
    fn test_partial_dedent_pops_past_level() {
        // 2 then 1: width 1 is below both open levels above 0... only the
        // levels greater than the new width pop.
        let tokens = tokenize("if a:\n    b\n  c\n");
        let dedents = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Dedent)
            .count();
        // Width 2 pops the 4-wide level; no level equals 2, so nothing
        // reopens. Documented behavior for mixed widths.
        assert_eq!(dedents, 1);
    }

    #[test]
    fn test_newlines_collapse() {
        let tokens = tokenize("a\n\nb\n");
        for pair in tokens.windows(2) {
            assert!(
                !(pair[0].kind == TokenKind::Newline && pair[1].kind == TokenKind::Newline),
                "adjacent NEWLINE tokens"
            );
        }
    }

    #[test]
    fn test_leading_blank_lines_produce_no_newline() {
        let tokens = tokenize("\n\nx\n");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
    }
}

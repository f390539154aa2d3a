//! Statement parsing.
//!
//! One method per statement family, dispatched from [`Parser::parse_statement`]
//! on the leading keyword. Anything that is not a statement keyword falls
//! through to an expression statement.

use crate::ast::*;
use crate::{ParseResult, Parser};
use iscc_lex::TokenKind;

impl Parser {
    /// Parses a single statement, dispatching on the leading token.
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Stmt> {
        self.skip_newlines();

        if self.check(TokenKind::Keyword) {
            let word = self.current().value.clone();
            match word.as_str() {
                "def" => return self.parse_function(false),
                "async" => return self.parse_async_function(),
                "class" => return self.parse_class(),
                "for" => return self.parse_for(),
                "if" => return self.parse_if().map(Stmt::If),
                "while" => return self.parse_while(),
                "try" => return self.parse_try(),
                "with" => return self.parse_with(),
                "return" => return self.parse_return(),
                "raise" => return self.parse_raise(),
                "assert" => return self.parse_assert(),
                "print" => return self.parse_print(),
                "import" => return self.parse_import(),
                "from" => return self.parse_from_import(),
                "del" => return self.parse_delete(),
                "global" => return self.parse_global(),
                "lambda" => return self.parse_lambda_statement(),
                "await" => return self.parse_await(),
                "yield" => return self.parse_yield(),
                "pass" => {
                    self.advance();
                    return Ok(Stmt::Pass);
                }
                "break" => {
                    self.advance();
                    return Ok(Stmt::Break);
                }
                "continue" => {
                    self.advance();
                    return Ok(Stmt::Continue);
                }
                _ => {}
            }
        }

        Ok(Stmt::Expr(self.expression()?))
    }

    /// Parses a statement block: an optional `:` and any newlines, then
    /// either an INDENT-delimited sequence or a single inline statement.
    pub(crate) fn parse_block(&mut self) -> ParseResult<Vec<Stmt>> {
        self.match_punctuation(":");
        self.skip_newlines();

        if self.match_kind(TokenKind::Indent) {
            let mut statements = Vec::new();
            loop {
                self.skip_newlines();
                if self.match_kind(TokenKind::Dedent) {
                    break;
                }
                if self.check(TokenKind::Eof) {
                    break;
                }
                statements.push(self.parse_statement()?);
            }
            Ok(statements)
        } else {
            Ok(vec![self.parse_statement()?])
        }
    }

    /// Parses `if`/`elif` (the caller has verified the keyword; both spell
    /// the same production).
    pub(crate) fn parse_if(&mut self) -> ParseResult<IfStmt> {
        self.advance(); // `if` or `elif`
        let condition = self.expression()?;
        let consequent = self.parse_block()?;
        let alternate = self.parse_alternate()?;
        Ok(IfStmt {
            condition,
            consequent,
            alternate,
        })
    }

    /// Looks past separators for an `elif`/`else` continuation; restores
    /// the position when neither follows.
    fn parse_alternate(&mut self) -> ParseResult<Option<Box<ElseBranch>>> {
        let checkpoint = self.position;
        self.skip_newlines();

        if self.check_keyword("elif") {
            let nested = self.parse_if()?;
            return Ok(Some(Box::new(ElseBranch::Elif(nested))));
        }
        if self.check_keyword("else") {
            self.advance();
            let body = self.parse_block()?;
            return Ok(Some(Box::new(ElseBranch::Else(body))));
        }

        self.position = checkpoint;
        Ok(None)
    }

    fn parse_while(&mut self) -> ParseResult<Stmt> {
        self.advance();
        let condition = self.expression()?;
        let body = self.parse_block()?;
        Ok(Stmt::While(WhileLoop { condition, body }))
    }

    fn parse_for(&mut self) -> ParseResult<Stmt> {
        self.advance();
        let mut variables = vec![self.expect_name()?];
        while self.match_punctuation(",") {
            variables.push(self.expect_name()?);
        }
        self.expect_keyword("in")?;
        let iterable = self.expression()?;
        let body = self.parse_block()?;
        Ok(Stmt::ForIn(ForInLoop {
            variables,
            iterable,
            body,
        }))
    }

    fn parse_try(&mut self) -> ParseResult<Stmt> {
        self.advance();
        let try_block = self.parse_block()?;

        let mut handlers = Vec::new();
        loop {
            let checkpoint = self.position;
            self.skip_newlines();
            if !self.check_keyword("except") {
                self.position = checkpoint;
                break;
            }
            self.advance();

            let mut error_type = None;
            let mut error_name = None;
            if !self.check_punctuation(":") && self.check_name() {
                error_type = Some(self.advance().value);
                if self.match_keyword("as") {
                    error_name = Some(self.expect_name()?);
                }
            }
            let body = self.parse_block()?;
            handlers.push(ExceptHandler {
                error_type,
                error_name,
                body,
            });
        }

        let checkpoint = self.position;
        self.skip_newlines();
        let finally_block = if self.check_keyword("finally") {
            self.advance();
            Some(self.parse_block()?)
        } else {
            self.position = checkpoint;
            None
        };

        Ok(Stmt::Try(TryStmt {
            try_block,
            handlers,
            finally_block,
        }))
    }

    fn parse_with(&mut self) -> ParseResult<Stmt> {
        self.advance();
        // The context expression stops early at `as` so the alias is not
        // swallowed by the opaque scan.
        let context = self.expression_until_keyword("as")?;
        let alias = if self.match_keyword("as") {
            Some(self.expect_name()?)
        } else {
            None
        };
        let body = self.parse_block()?;
        Ok(Stmt::With(WithStmt {
            context,
            alias,
            body,
        }))
    }

    fn parse_return(&mut self) -> ParseResult<Stmt> {
        self.advance();
        let value = if self.at_expression_end() {
            None
        } else {
            Some(self.expression()?)
        };
        Ok(Stmt::Return(value))
    }

    fn parse_raise(&mut self) -> ParseResult<Stmt> {
        self.advance();
        Ok(Stmt::Raise(self.expression()?))
    }

    fn parse_assert(&mut self) -> ParseResult<Stmt> {
        self.advance();
        let condition = self.expression()?;
        let message = if self.match_punctuation(",") {
            Some(self.expression()?)
        } else {
            None
        };
        Ok(Stmt::Assert { condition, message })
    }

    /// Parses `print`, with or without the surrounding parentheses.
    fn parse_print(&mut self) -> ParseResult<Stmt> {
        self.advance();
        let mut arguments = Vec::new();

        if self.match_bracket("(") {
            if !self.check_bracket(")") {
                arguments.push(self.expression()?);
                while self.match_punctuation(",") {
                    arguments.push(self.expression()?);
                }
            }
            self.expect_bracket(")")?;
        } else if !self.at_expression_end() && !self.check_punctuation(":") {
            arguments.push(self.expression()?);
            while self.match_punctuation(",") {
                arguments.push(self.expression()?);
            }
        }

        Ok(Stmt::Print(arguments))
    }

    fn parse_import(&mut self) -> ParseResult<Stmt> {
        self.advance();
        let mut modules = vec![self.parse_import_entry()?];
        while self.match_punctuation(",") {
            modules.push(self.parse_import_entry()?);
        }
        Ok(Stmt::Import(modules))
    }

    fn parse_from_import(&mut self) -> ParseResult<Stmt> {
        self.advance();
        let module = self.parse_dotted_name()?;
        self.expect_keyword("import")?;

        let mut imports = Vec::new();
        if self.match_operator("*") {
            imports.push(ImportEntry {
                name: "*".to_string(),
                alias: None,
            });
        } else {
            imports.push(self.parse_import_entry()?);
            while self.match_punctuation(",") {
                imports.push(self.parse_import_entry()?);
            }
        }

        Ok(Stmt::FromImport { module, imports })
    }

    fn parse_import_entry(&mut self) -> ParseResult<ImportEntry> {
        let name = self.parse_dotted_name()?;
        let alias = if self.match_keyword("as") {
            Some(self.expect_name()?)
        } else {
            None
        };
        Ok(ImportEntry { name, alias })
    }

    /// Parses `a.b.c` into one dotted name.
    fn parse_dotted_name(&mut self) -> ParseResult<String> {
        let mut name = self.expect_name()?;
        while self.check_punctuation(".") {
            self.advance();
            name.push('.');
            name.push_str(&self.expect_name()?);
        }
        Ok(name)
    }

    fn parse_delete(&mut self) -> ParseResult<Stmt> {
        self.advance();
        Ok(Stmt::Delete(self.expression()?))
    }

    fn parse_global(&mut self) -> ParseResult<Stmt> {
        self.advance();
        let mut variables = vec![self.expect_name()?];
        while self.match_punctuation(",") {
            variables.push(self.expect_name()?);
        }
        Ok(Stmt::Global(variables))
    }

    fn parse_lambda_statement(&mut self) -> ParseResult<Stmt> {
        Ok(Stmt::Lambda(self.parse_lambda()?))
    }

    /// Parses `lambda p, q: body`. Parameters are identifiers only; the
    /// body is a single expression.
    pub(crate) fn parse_lambda(&mut self) -> ParseResult<LambdaExpr> {
        self.advance(); // `lambda`
        let mut params = Vec::new();
        if !self.check_punctuation(":") {
            params.push(self.expect_name()?);
            while self.match_punctuation(",") {
                params.push(self.expect_name()?);
            }
        }
        self.expect_punctuation(":")?;
        let body = self.expression()?;
        Ok(LambdaExpr { params, body })
    }

    fn parse_await(&mut self) -> ParseResult<Stmt> {
        self.advance();
        Ok(Stmt::Await(self.expression()?))
    }

    fn parse_yield(&mut self) -> ParseResult<Stmt> {
        self.advance();
        let value = if self.at_expression_end() {
            None
        } else {
            Some(self.expression()?)
        };
        Ok(Stmt::Yield(value))
    }

    /// True when no expression can start here: end of line, end of an
    /// enclosing block, or end of input.
    fn at_expression_end(&self) -> bool {
        matches!(
            self.current().kind,
            TokenKind::Newline | TokenKind::Dedent | TokenKind::Eof
        )
    }
}

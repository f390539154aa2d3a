//! Declaration parsing: functions, classes, parameters, decorators.

use crate::ast::*;
use crate::{ParseResult, Parser};
use iscc_lex::TokenKind;

impl Parser {
    /// Parses `def name(params) [-> type]: block` as a statement.
    pub(crate) fn parse_function(&mut self, is_async: bool) -> ParseResult<Stmt> {
        Ok(Stmt::Function(self.parse_function_decl(is_async)?))
    }

    /// Parses `async def …`. Only the function form of `async` exists.
    pub(crate) fn parse_async_function(&mut self) -> ParseResult<Stmt> {
        self.advance(); // `async`
        self.parse_function(true)
    }

    pub(crate) fn parse_function_decl(&mut self, is_async: bool) -> ParseResult<FunctionDecl> {
        self.expect_keyword("def")?;
        let name = self.expect_name()?;
        let params = self.parse_params()?;
        let return_type = self.parse_return_type();
        let body = self.parse_block()?;
        Ok(FunctionDecl {
            name,
            params,
            return_type,
            body,
            is_async,
        })
    }

    /// Parses the parenthesized parameter list.
    pub(crate) fn parse_params(&mut self) -> ParseResult<Vec<Param>> {
        self.expect_bracket("(")?;
        let mut params = Vec::new();
        if !self.check_bracket(")") {
            params.push(self.parse_param()?);
            while self.match_punctuation(",") {
                params.push(self.parse_param()?);
            }
        }
        self.expect_bracket(")")?;
        Ok(params)
    }

    fn parse_param(&mut self) -> ParseResult<Param> {
        let spread = if self.match_operator("**") {
            Some(Spread::Dict)
        } else if self.match_operator("*") {
            Some(Spread::Array)
        } else {
            None
        };
        let name = self.expect_name()?;
        let default = if self.match_operator("=") {
            Some(self.expression()?)
        } else {
            None
        };
        Ok(Param {
            name,
            default,
            spread,
        })
    }

    /// Consumes `-> type` when present. The arrow arrives as two
    /// single-character operator tokens; the bare type name is recorded
    /// and otherwise ignored downstream.
    fn parse_return_type(&mut self) -> Option<String> {
        if self.check_operator("-") && self.peek_is_operator(1, ">") {
            self.advance();
            self.advance();
            if self.check_name() {
                return Some(self.advance().value);
            }
        }
        None
    }

    /// Parses `class Name [(Super)]: body`, separating the block into
    /// methods and properties.
    pub(crate) fn parse_class(&mut self) -> ParseResult<Stmt> {
        self.advance(); // `class`
        let name = self.expect_name()?;

        let super_class = if self.match_bracket("(") {
            let superclass = self.expect_name()?;
            self.expect_bracket(")")?;
            Some(superclass)
        } else {
            None
        };

        let mut methods = Vec::new();
        let mut properties = Vec::new();

        self.match_punctuation(":");
        self.skip_newlines();
        if self.match_kind(TokenKind::Indent) {
            loop {
                self.skip_newlines();
                if self.match_kind(TokenKind::Dedent) {
                    break;
                }
                if self.check(TokenKind::Eof) {
                    break;
                }
                self.parse_class_member(&mut methods, &mut properties)?;
            }
        } else {
            self.parse_class_member(&mut methods, &mut properties)?;
        }

        Ok(Stmt::Class(ClassDecl {
            name,
            super_class,
            methods,
            properties,
        }))
    }

    /// Parses one class-body entry: a possibly-decorated method, or any
    /// other statement as a property.
    fn parse_class_member(
        &mut self,
        methods: &mut Vec<Method>,
        properties: &mut Vec<Stmt>,
    ) -> ParseResult<()> {
        let mut decorator = None;
        if self.match_punctuation("@") {
            decorator = Some(self.expect_name()?);
            self.skip_newlines();
        }

        if self.check_keyword("def") {
            let func = self.parse_function_decl(false)?;
            methods.push(Method { decorator, func });
        } else if self.check_keyword("async") {
            self.advance();
            let func = self.parse_function_decl(true)?;
            methods.push(Method { decorator, func });
        } else {
            properties.push(self.parse_statement()?);
        }
        Ok(())
    }
}

//! Statement emission.

use iscc_par::ast::*;

use crate::expr::emit_expression;

/// Tree-walking code generator with indent tracking.
///
/// Output accumulates into an owned string, one statement per line,
/// indented two spaces per block level.
pub struct Generator {
    out: String,
    indent: usize,
}

impl Generator {
    /// Creates a generator with an empty output buffer.
    pub fn new() -> Self {
        Self {
            out: String::new(),
            indent: 0,
        }
    }

    /// Emits the whole program and returns the generated source.
    pub fn generate(mut self, program: &Program) -> String {
        for stmt in &program.body {
            self.emit_statement(stmt);
        }
        self.out
    }

    /// Writes one line at the current indent level.
    fn line(&mut self, text: &str) {
        for _ in 0..self.indent {
            self.out.push_str("  ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Emits a statement sequence one level deeper.
    fn emit_block(&mut self, statements: &[Stmt]) {
        self.indent += 1;
        for stmt in statements {
            self.emit_statement(stmt);
        }
        self.indent -= 1;
    }

    fn emit_statement(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Function(func) => self.emit_function(func),
            Stmt::Class(class) => self.emit_class(class),
            Stmt::ForIn(for_in) => self.emit_for_in(for_in),
            Stmt::If(if_stmt) => self.emit_if(if_stmt),
            Stmt::While(while_loop) => {
                self.line(&format!(
                    "while ({}) {{",
                    emit_expression(&while_loop.condition.tokens)
                ));
                self.emit_block(&while_loop.body);
                self.line("}");
            }
            Stmt::Try(try_stmt) => self.emit_try(try_stmt),
            Stmt::With(with_stmt) => self.emit_with(with_stmt),
            Stmt::Return(None) => self.line("return;"),
            Stmt::Return(Some(value)) => {
                self.line(&format!("return {};", emit_expression(&value.tokens)));
            }
            Stmt::Raise(error) => {
                self.line(&format!("throw {};", emit_expression(&error.tokens)));
            }
            Stmt::Assert { condition, message } => {
                let message = message
                    .as_ref()
                    .map(|m| emit_expression(&m.tokens))
                    .unwrap_or_else(|| "\"Assertion failed\"".to_string());
                self.line(&format!(
                    "if (!({})) throw new Error({});",
                    emit_expression(&condition.tokens),
                    message
                ));
            }
            Stmt::Print(arguments) => {
                let args: Vec<String> = arguments
                    .iter()
                    .map(|a| emit_expression(&a.tokens))
                    .collect();
                self.line(&format!("console.log({});", args.join(", ")));
            }
            Stmt::Import(modules) => {
                for entry in modules {
                    match &entry.alias {
                        Some(alias) => {
                            self.line(&format!("import * as {} from '{}';", alias, entry.name));
                        }
                        None => {
                            self.line(&format!("import {} from '{}';", entry.name, entry.name));
                        }
                    }
                }
            }
            Stmt::FromImport { module, imports } => self.emit_from_import(module, imports),
            // Declarative only; nothing to emit.
            Stmt::Pass | Stmt::Global(_) => {}
            Stmt::Break => self.line("break;"),
            Stmt::Continue => self.line("continue;"),
            Stmt::Delete(target) => {
                self.line(&format!("delete {};", emit_expression(&target.tokens)));
            }
            Stmt::Lambda(lambda) => {
                self.line(&format!(
                    "({}) => {};",
                    lambda.params.join(", "),
                    emit_expression(&lambda.body.tokens)
                ));
            }
            Stmt::Await(expression) => {
                self.line(&format!("await {};", emit_expression(&expression.tokens)));
            }
            Stmt::Yield(None) => self.line("yield;"),
            Stmt::Yield(Some(value)) => {
                self.line(&format!("yield {};", emit_expression(&value.tokens)));
            }
            Stmt::Expr(expression) => {
                let text = emit_expression(&expression.tokens);
                if !text.is_empty() {
                    self.line(&format!("{};", text));
                }
            }
        }
    }

    fn emit_function(&mut self, func: &FunctionDecl) {
        let qualifier = if func.is_async { "async " } else { "" };
        self.line(&format!(
            "{}function {}({}) {{",
            qualifier,
            func.name,
            emit_params(&func.params, false)
        ));
        self.emit_block(&func.body);
        self.line("}");
    }

    fn emit_class(&mut self, class: &ClassDecl) {
        match &class.super_class {
            Some(superclass) => {
                self.line(&format!("class {} extends {} {{", class.name, superclass));
            }
            None => self.line(&format!("class {} {{", class.name)),
        }
        self.indent += 1;
        for property in &class.properties {
            self.emit_statement(property);
        }
        for method in &class.methods {
            self.emit_method(method);
        }
        self.indent -= 1;
        self.line("}");
    }

    /// Emits one method. `__init__` becomes the constructor, a leading
    /// `self` parameter is dropped, and the recognized decorators map to
    /// `static` and `get`.
    fn emit_method(&mut self, method: &Method) {
        let func = &method.func;
        let mut head = String::new();
        match method.decorator.as_deref() {
            Some("staticmethod") => head.push_str("static "),
            Some("property") => head.push_str("get "),
            _ => {}
        }
        if func.is_async {
            head.push_str("async ");
        }
        let name = if func.name == "__init__" {
            "constructor"
        } else {
            func.name.as_str()
        };
        head.push_str(name);
        head.push('(');
        head.push_str(&emit_params(&func.params, true));
        head.push_str(") {");
        self.line(&head);
        self.emit_block(&func.body);
        self.line("}");
    }

    fn emit_for_in(&mut self, for_in: &ForInLoop) {
        let binding = if for_in.variables.len() == 1 {
            for_in.variables[0].clone()
        } else {
            format!("[{}]", for_in.variables.join(", "))
        };
        self.line(&format!(
            "for (const {} of {}) {{",
            binding,
            emit_expression(&for_in.iterable.tokens)
        ));
        self.emit_block(&for_in.body);
        self.line("}");
    }

    /// Emits an `if` chain, unwinding the recursive alternate into
    /// `else if` / `else` clauses.
    fn emit_if(&mut self, if_stmt: &IfStmt) {
        self.line(&format!(
            "if ({}) {{",
            emit_expression(&if_stmt.condition.tokens)
        ));
        self.emit_block(&if_stmt.consequent);

        let mut alternate = if_stmt.alternate.as_deref();
        while let Some(branch) = alternate {
            match branch {
                ElseBranch::Elif(elif) => {
                    self.line(&format!(
                        "}} else if ({}) {{",
                        emit_expression(&elif.condition.tokens)
                    ));
                    self.emit_block(&elif.consequent);
                    alternate = elif.alternate.as_deref();
                }
                ElseBranch::Else(body) => {
                    self.line("} else {");
                    self.emit_block(body);
                    alternate = None;
                }
            }
        }
        self.line("}");
    }

    /// Emits a `try` statement. ECMAScript has a single catch clause, so
    /// the first handler becomes the catch; its type is discarded and a
    /// missing name defaults to `error`.
    fn emit_try(&mut self, try_stmt: &TryStmt) {
        self.line("try {");
        self.emit_block(&try_stmt.try_block);
        if let Some(handler) = try_stmt.handlers.first() {
            let name = handler.error_name.as_deref().unwrap_or("error");
            self.line(&format!("}} catch ({}) {{", name));
            self.emit_block(&handler.body);
        }
        if let Some(finally_block) = &try_stmt.finally_block {
            self.line("} finally {");
            self.emit_block(finally_block);
        }
        self.line("}");
    }

    /// Emits a `with` statement as a lexically scoped block binding the
    /// context to the alias (default `ctx`).
    fn emit_with(&mut self, with_stmt: &WithStmt) {
        self.line("{");
        self.indent += 1;
        let alias = with_stmt.alias.as_deref().unwrap_or("ctx");
        self.line(&format!(
            "const {} = {};",
            alias,
            emit_expression(&with_stmt.context.tokens)
        ));
        for stmt in &with_stmt.body {
            self.emit_statement(stmt);
        }
        self.indent -= 1;
        self.line("}");
    }

    fn emit_from_import(&mut self, module: &str, imports: &[ImportEntry]) {
        if imports.iter().any(|entry| entry.name == "*") {
            self.line(&format!("import * from '{}';", module));
            return;
        }
        let list: Vec<String> = imports
            .iter()
            .map(|entry| match &entry.alias {
                Some(alias) => format!("{} as {}", entry.name, alias),
                None => entry.name.clone(),
            })
            .collect();
        self.line(&format!(
            "import {{ {} }} from '{}';",
            list.join(", "),
            module
        ));
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders a parameter list. In method position a leading `self`
/// parameter is dropped. Spreads of both flavors emit `...name`;
/// defaults emit `name = value`.
fn emit_params(params: &[Param], drop_self: bool) -> String {
    let mut rendered = Vec::new();
    for (index, param) in params.iter().enumerate() {
        if drop_self && index == 0 && param.name == "self" {
            continue;
        }
        let text = if param.spread.is_some() {
            format!("...{}", param.name)
        } else {
            match &param.default {
                Some(default) => format!("{} = {}", param.name, emit_expression(&default.tokens)),
                None => param.name.clone(),
            }
        };
        rendered.push(text);
    }
    rendered.join(", ")
}

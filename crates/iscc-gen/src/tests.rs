//! Generator integration tests.
//!
//! These run the whole pipeline (lex, parse, generate) and compare output
//! modulo insignificant whitespace, since emission is block-styled while
//! the expectations are written inline.

use crate::generate;
use iscc_par::Parser;

fn transpile(source: &str) -> String {
    let tokens = iscc_lex::tokenize(source);
    let program = Parser::new(tokens).parse().expect("source should parse");
    generate(&program)
}

/// Collapses all whitespace runs to single spaces.
fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn assert_output(source: &str, expected: &str) {
    assert_eq!(normalize(&transpile(source)), normalize(expected));
}

fn assert_contains(source: &str, expected: &str) {
    let output = normalize(&transpile(source));
    let needle = normalize(expected);
    assert!(
        output.contains(&needle),
        "expected {:?} in {:?}",
        needle,
        output
    );
}

// ---------------------------------------------------------------------
// The normative end-to-end scenarios
// ---------------------------------------------------------------------

#[test]
fn test_hello() {
    assert_output("print(\"hi\")\n", "console.log(\"hi\");");
}

#[test]
fn test_function_with_fstring() {
    let source = "def greet(name):\n    print(f\"Hi {name}\")\n";
    assert_contains(source, "function greet(name) {");
    assert_contains(source, "console.log(`Hi ${name}`);");
    assert_contains(source, "}");
}

#[test]
fn test_range_loop() {
    let source = "for i in range(3):\n    print(i)\n";
    assert_output(
        source,
        "for (const i of Array.from({length: 3}, (_, i) => i)) { console.log(i); }",
    );
}

#[test]
fn test_class_with_constructor_and_method() {
    let source = "\
class A:
    def __init__(self, x):
        self.x = x
    def get(self):
        return self.x
";
    assert_contains(source, "class A {");
    assert_contains(source, "constructor(x) {");
    assert_contains(source, "this.x = x;");
    assert_contains(source, "get() {");
    assert_contains(source, "return this.x;");
}

#[test]
fn test_floor_division() {
    assert_contains("y = 7 // 2\n", "Math.floor(7 / 2)");
}

#[test]
fn test_try_except() {
    let source = "\
try:
    f()
except Exception as e:
    print(e)
";
    assert_contains(source, "try { f(); } catch (e) { console.log(e); }");
}

// ---------------------------------------------------------------------
// Statement emission
// ---------------------------------------------------------------------

#[test]
fn test_elif_chain_unwinds_to_else_if() {
    let source = "\
if a:
    x()
elif b:
    y()
else:
    z()
";
    assert_output(
        source,
        "if (a) { x(); } else if (b) { y(); } else { z(); }",
    );
}

#[test]
fn test_while_loop() {
    assert_output("while n > 0:\n    n = n - 1\n", "while (n > 0) { n = n - 1; }");
}

#[test]
fn test_for_destructuring() {
    let source = "for k, v in pairs:\n    print(k)\n";
    assert_contains(source, "for (const [k, v] of pairs) {");
}

#[test]
fn test_with_statement_scoped_block() {
    assert_output(
        "with open(path) as fh:\n    read(fh)\n",
        "{ const fh = open(path); read(fh); }",
    );
    assert_output("with lock:\n    go()\n", "{ const ctx = lock; go(); }");
}

#[test]
fn test_assert_with_and_without_message() {
    assert_output(
        "assert x > 0\n",
        "if (!(x > 0)) throw new Error(\"Assertion failed\");",
    );
    assert_output(
        "assert ok, \"boom\"\n",
        "if (!(ok)) throw new Error(\"boom\");",
    );
}

#[test]
fn test_raise_and_return() {
    assert_output("raise Error(\"x\")\n", "throw Error(\"x\");");
    assert_output("def f():\n    return\n", "function f() { return; }");
}

#[test]
fn test_imports() {
    assert_output(
        "import os, sys as system\n",
        "import os from 'os'; import * as system from 'sys';",
    );
    assert_output(
        "from util import a, b as c\n",
        "import { a, b as c } from 'util';",
    );
    assert_output("from util import *\n", "import * from 'util';");
}

#[test]
fn test_pass_and_global_emit_nothing() {
    assert_output("pass\n", "");
    assert_output("global a, b\n", "");
}

#[test]
fn test_break_continue_delete() {
    assert_output(
        "while x:\n    break\n",
        "while (x) { break; }",
    );
    assert_output(
        "while x:\n    continue\n",
        "while (x) { continue; }",
    );
    assert_output("del cache[key]\n", "delete cache[key];");
}

#[test]
fn test_try_finally_without_handler() {
    assert_output(
        "try:\n    f()\nfinally:\n    g()\n",
        "try { f(); } finally { g(); }",
    );
}

#[test]
fn test_catch_name_defaults_to_error() {
    assert_output(
        "try:\n    f()\nexcept:\n    pass\n",
        "try { f(); } catch (error) { }",
    );
}

#[test]
fn test_async_function() {
    assert_contains(
        "async def go(url):\n    return url\n",
        "async function go(url) {",
    );
}

#[test]
fn test_statement_level_await_and_yield() {
    assert_output("async def f():\n    await g()\n", "async function f() { await g(); }");
    assert_output("def f():\n    yield 1\n", "function f() { yield 1; }");
}

#[test]
fn test_method_decorators() {
    let source = "\
class W:
    @staticmethod
    def make():
        return W()
    @property
    def size(self):
        return 1
";
    assert_contains(source, "static make() {");
    assert_contains(source, "get size() {");
}

#[test]
fn test_class_properties_emit_as_fields() {
    let source = "class C:\n    kind = \"basic\"\n    def get(self):\n        return 1\n";
    assert_contains(source, "class C { kind = \"basic\";");
}

// ---------------------------------------------------------------------
// Expression rewrites
// ---------------------------------------------------------------------

#[test]
fn test_keyword_literals() {
    assert_output("x = None\n", "x = null;");
    assert_output("x = True\n", "x = true;");
    assert_output("x = False\n", "x = false;");
}

#[test]
fn test_logical_keywords() {
    assert_output("r = a and b or not c\n", "r = a && b || !c;");
    assert_output("r = a is None\n", "r = a === null;");
    assert_output("r = k in d\n", "r = k in d;");
}

#[test]
fn test_self_becomes_this() {
    assert_output("self.count = self.count + 1\n", "this.count = this.count + 1;");
}

#[test]
fn test_builtin_len() {
    assert_output("n = len(items)\n", "n = items.length;");
    assert_output("n = len(items) + 1\n", "n = items.length + 1;");
}

#[test]
fn test_builtin_range_arities() {
    assert_contains(
        "for i in range(2, 8):\n    print(i)\n",
        "Array.from({length: 8 - 2}, (_, i) => i + 2)",
    );
    assert_contains(
        "for i in range(0, 10, 2):\n    print(i)\n",
        "Array.from({length: Math.ceil((10 - 0) / 2)}, (_, i) => 0 + i * 2)",
    );
}

#[test]
fn test_builtin_enumerate() {
    assert_contains(
        "for pair in enumerate(xs):\n    print(pair)\n",
        "xs.map((item, index) => [index, item])",
    );
}

#[test]
fn test_member_renames() {
    assert_output("xs.append(1)\n", "xs.push(1);");
    assert_output("s = name.upper()\n", "s = name.toUpperCase();");
    assert_output("ok = s.startswith(\"a\")\n", "ok = s.startsWith(\"a\");");
    assert_output("i = s.find(\"a\")\n", "i = s.indexOf(\"a\");");
    assert_output("es = d.items()\n", "es = d.entries();");
    assert_output("ks = d.keys()\n", "ks = d.keys();");
}

#[test]
fn test_member_rename_only_after_dot() {
    // A bare identifier named like a mapped method is untouched.
    assert_output("append(1)\n", "append(1);");
}

#[test]
fn test_inline_lambda_in_call() {
    assert_output(
        "xs.sort(lambda a: a.size)\n",
        "xs.sort((a) => a.size);",
    );
}

#[test]
fn test_template_passthrough() {
    assert_output("t = `a ${b}`\n", "t = `a ${b}`;");
}

#[test]
fn test_string_escaping() {
    assert_output("print(\"say \\\"hi\\\"\")\n", "console.log(\"say \\\"hi\\\"\");");
}

#[test]
fn test_power_operator() {
    assert_output("p = x ** 2\n", "p = x ** 2;");
}

#[test]
fn test_floor_division_greedy_remainder() {
    // Everything right of `//` is consumed into the wrap.
    assert_contains("q = a // b + c\n", "Math.floor(a / b + c)");
}

#[test]
fn test_spread_params() {
    assert_contains(
        "def f(a, *rest, **extra):\n    pass\n",
        "function f(a, ...rest, ...extra) {",
    );
}

#[test]
fn test_default_params() {
    assert_contains(
        "def f(a, b=2):\n    return a\n",
        "function f(a, b = 2) {",
    );
}

#[test]
fn test_dict_literal_spacing() {
    assert_output("d = {\"k\": 1}\n", "d = {\"k\": 1};");
}

#[test]
fn test_deeply_nested_blocks_indent() {
    let source = "\
def f():
    if a:
        while b:
            print(c)
";
    let output = transpile(source);
    assert!(output.contains("\n      console.log(c);\n"));
}

#[test]
fn test_determinism() {
    let source = "def f(x):\n    return x * 2\n\nprint(f(21))\n";
    assert_eq!(transpile(source), transpile(source));
}

//! Parser tests.
//!
//! Expressions are compared as S-expressions so tests don't depend on
//! positions; position tests check `pos` directly.

mod item;
mod recovery;

use pseudo_ir::{Expr, ExprKind, Item, KeywordForm, Stmt, StmtKind, Value};
use pseudo_lexer::TextSource;

use crate::{ParseError, Parser};

fn parser(text: &str) -> Parser<TextSource> {
    Parser::new(TextSource::new("test.pseudo", text))
}

/// Parse every unit in `text`, failing the test on the first error.
fn parse_all(text: &str) -> Vec<Item> {
    let mut p = parser(text);
    let mut items = Vec::new();
    loop {
        match p.parse_unit() {
            Ok(Some(item)) => items.push(item),
            Ok(None) => return items,
            Err(err) => panic!("unexpected parse error: {err}"),
        }
    }
}

fn parse_one(text: &str) -> Item {
    let mut items = parse_all(text);
    assert_eq!(items.len(), 1, "expected a single unit in {text:?}");
    items.remove(0)
}

fn parse_stmt(text: &str) -> Stmt {
    match parse_one(text) {
        Item::Statement(stmt) => stmt,
        other => panic!("expected a statement, got {other:?}"),
    }
}

/// First error produced while parsing `text`.
fn parse_err(text: &str) -> ParseError {
    let mut p = parser(text);
    loop {
        match p.parse_unit() {
            Ok(Some(_)) => {}
            Ok(None) => panic!("expected a parse error in {text:?}"),
            Err(err) => return err,
        }
    }
}

/// Parse `text` as a single expression statement and render it.
fn sexp_of(text: &str) -> String {
    match parse_stmt(text).kind {
        StmtKind::Expr(expr) => sexp(&expr),
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

fn sexp(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Literal(Value::Str(s)) => format!("{s:?}"),
        ExprKind::Literal(v) => v.to_string(),
        ExprKind::Variable(name) => name.clone(),
        ExprKind::ModuleCall { name, args } => call(name, args),
        ExprKind::Unary { op, operand } => format!("({op} {})", sexp(operand)),
        ExprKind::Binary { op, left, right } => {
            format!("({op} {} {})", sexp(left), sexp(right))
        }
        ExprKind::Keyword(KeywordForm::Output(args)) => call("OUTPUT", args),
        ExprKind::Keyword(KeywordForm::Input { ty, target }) => match ty {
            Some(ty) => format!("(INPUT {} {target})", ty.as_str()),
            None => format!("(INPUT {target})"),
        },
        ExprKind::Keyword(KeywordForm::Run(name)) => format!("(RUN {name})"),
    }
}

fn call(name: &str, args: &[Expr]) -> String {
    let mut out = format!("({name}");
    for arg in args {
        out.push(' ');
        out.push_str(&sexp(arg));
    }
    out.push(')');
    out
}

/// Compact rendering of a statement list, for block-structure tests.
fn outline(body: &[Stmt]) -> Vec<String> {
    body.iter().map(outline_stmt).collect()
}

fn outline_stmt(stmt: &Stmt) -> String {
    match &stmt.kind {
        StmtKind::Assign(a) => format!("{} <- {}", a.target, sexp(&a.value)),
        StmtKind::If {
            cond,
            then_branch,
            else_branch,
        } => format!(
            "IF {} [{}] ELSE [{}]",
            sexp(cond),
            outline(then_branch).join("; "),
            outline(else_branch).join("; ")
        ),
        StmtKind::For { init, bound, body } => format!(
            "FOR {} <- {} TO {} [{}]",
            init.target,
            sexp(&init.value),
            sexp(bound),
            outline(body).join("; ")
        ),
        StmtKind::While { cond, body } => {
            format!("WHILE {} [{}]", sexp(cond), outline(body).join("; "))
        }
        StmtKind::Break => "BREAK".to_string(),
        StmtKind::Continue => "CONTINUE".to_string(),
        StmtKind::Return(expr) => format!("RETURN {}", sexp(expr)),
        StmtKind::Expr(expr) => sexp(expr),
    }
}

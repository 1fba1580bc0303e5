//! Expression evaluation.

use pseudo_ir::{Expr, ExprKind, KeywordForm, Value};
use pseudo_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{undefined_program, EvalResult};
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::registry::Callable;

impl Interpreter {
    /// Evaluate an expression. Errors are positioned at the innermost node
    /// that raised them.
    pub(crate) fn eval(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr)).map_err(|e| e.or_at(expr.pos))
    }

    fn eval_inner(&mut self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Literal(value) => Ok(value.clone()),
            ExprKind::Variable(name) => self.env.lookup(name),
            ExprKind::Unary { op, operand } => {
                let value = self.eval(operand)?;
                evaluate_unary(&value, *op)
            }
            // Both operands are always evaluated, left first.
            ExprKind::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                evaluate_binary(&left, &right, *op)
            }
            ExprKind::ModuleCall { name, args } => self.call_module(name, args, expr.pos),
            ExprKind::Keyword(form) => self.eval_keyword(form, expr),
        }
    }

    fn eval_keyword(&mut self, form: &KeywordForm, expr: &Expr) -> EvalResult {
        match form {
            KeywordForm::Output(args) => {
                let mut parts = Vec::with_capacity(args.len());
                for arg in args {
                    parts.push(self.eval(arg)?.to_string());
                }
                self.console.println(&parts.join(" "));
                Ok(Value::Symbol)
            }
            KeywordForm::Input { ty, target } => {
                let value = self.console.read_value(target, *ty)?;
                self.assign_var(target, value.clone(), expr.pos)?;
                Ok(value)
            }
            KeywordForm::Run(name) => {
                let callable = self
                    .registry
                    .program(name)
                    .ok_or_else(|| undefined_program(name))?;
                let Callable::Program(program) = &*callable else {
                    return Err(undefined_program(name));
                };
                self.call_program(program, expr.pos)
            }
        }
    }
}

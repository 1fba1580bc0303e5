//! Statement execution.

use pseudo_ir::{Assignment, BinaryOp, Expr, Position, Stmt, StmtKind, Value};

use super::Interpreter;
use crate::errors::{condition_not_number, ControlAction, EvalError, EvalResult, ExecResult};
use crate::operators::{evaluate_binary, truthy};

/// What a loop does after its body finished or unwound.
enum LoopAction {
    /// Go on with the next iteration.
    Next,
    /// Leave the loop normally.
    Exit,
}

/// Sort a body's outcome into loop control, passing anything else up.
fn loop_action(result: ExecResult) -> Result<LoopAction, ControlAction> {
    match result {
        Ok(_) | Err(ControlAction::Continue(_)) => Ok(LoopAction::Next),
        Err(ControlAction::Break(_)) => Ok(LoopAction::Exit),
        Err(other) => Err(other),
    }
}

impl Interpreter {
    /// Run statements in order. The value is that of the last statement,
    /// or `Symbol` for an empty block.
    pub(crate) fn exec_block(&mut self, stmts: &[Stmt]) -> ExecResult {
        let mut last = Value::Symbol;
        for stmt in stmts {
            last = self.exec(stmt)?;
        }
        Ok(last)
    }

    pub(crate) fn exec(&mut self, stmt: &Stmt) -> ExecResult {
        self.exec_inner(stmt).map_err(|action| match action {
            ControlAction::Error(err) => ControlAction::Error(err.or_at(stmt.pos)),
            signal => signal,
        })
    }

    fn exec_inner(&mut self, stmt: &Stmt) -> ExecResult {
        match &stmt.kind {
            StmtKind::Assign(assign) => Ok(self.exec_assign(assign)?),
            StmtKind::Expr(expr) => Ok(self.eval(expr)?),
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.condition("IF", cond)? {
                    self.exec_block(then_branch)
                } else {
                    self.exec_block(else_branch)
                }
            }
            StmtKind::While { cond, body } => {
                while self.condition("WHILE", cond)? {
                    if let LoopAction::Exit = loop_action(self.exec_block(body))? {
                        break;
                    }
                }
                Ok(Value::Symbol)
            }
            StmtKind::For { init, bound, body } => self.exec_for(init, bound, body),
            StmtKind::Break => Err(ControlAction::Break(stmt.pos)),
            StmtKind::Continue => Err(ControlAction::Continue(stmt.pos)),
            StmtKind::Return(value) => {
                let value = self.eval(value)?;
                Err(ControlAction::Return(value, stmt.pos))
            }
        }
    }

    fn exec_assign(&mut self, assign: &Assignment) -> EvalResult {
        let value = self.eval(&assign.value)?;
        self.assign_var(&assign.target, value.clone(), assign.pos)?;
        Ok(value)
    }

    /// Bind `name` in the current scope and record it in the trace.
    pub(crate) fn assign_var(
        &mut self,
        name: &str,
        value: Value,
        pos: Position,
    ) -> Result<(), EvalError> {
        match &mut self.trace {
            Some(trace) => {
                self.env
                    .assign(name, value.clone())
                    .map_err(|e| e.or_at(pos))?;
                trace.record(pos, name, &value);
                Ok(())
            }
            None => self.env.assign(name, value).map_err(|e| e.or_at(pos)),
        }
    }

    /// Evaluate a loop or branch condition. Only numbers are conditions.
    fn condition(&mut self, construct: &'static str, cond: &Expr) -> Result<bool, EvalError> {
        match self.eval(cond)? {
            Value::Number(n) => Ok(truthy(n)),
            other => Err(condition_not_number(construct, &other).or_at(cond.pos)),
        }
    }

    /// `FOR v <- start TO bound ... NEXT`.
    ///
    /// The body always runs once. After each pass the loop variable's current
    /// value is compared against the bound, re-evaluated every time; while
    /// it is smaller the variable is incremented by one and the body runs
    /// again.
    fn exec_for(&mut self, init: &Assignment, bound: &Expr, body: &[Stmt]) -> ExecResult {
        self.exec_assign(init)?;
        let var = init.target.as_str();
        loop {
            if let LoopAction::Exit = loop_action(self.exec_block(body))? {
                break;
            }
            let end = self.eval(bound)?;
            let current = self.env.lookup(var).map_err(|e| e.or_at(init.pos))?;
            let more = evaluate_binary(&current, &end, BinaryOp::Lt).map_err(|e| e.or_at(bound.pos))?;
            if !matches!(more, Value::Number(n) if truthy(n)) {
                break;
            }
            let next = evaluate_binary(&current, &Value::Number(1.0), BinaryOp::Add)
                .map_err(|e| e.or_at(init.pos))?;
            self.assign_var(var, next, init.pos)?;
        }
        Ok(Value::Symbol)
    }
}

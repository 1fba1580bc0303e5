//! Program, module and native invocation.
//!
//! Every program or module invocation runs in a fresh scope that holds only
//! the built-in constants and, for modules, the parameters. Arguments are
//! evaluated in the caller's scope before that scope exists.

use pseudo_ir::{Expr, ModuleDef, Position, ProgramDef, Value};
use pseudo_stack::ensure_sufficient_stack;

use super::call_stack::CallFrame;
use super::Interpreter;
use crate::environment::Scope;
use crate::errors::{
    undefined_module, wrong_arg_count, ControlAction, EvalError, EvalResult, ExecResult,
};
use crate::native::call_native;
use crate::registry::Callable;

impl Interpreter {
    /// `name(args)`: a user module or a native binding.
    pub(crate) fn call_module(&mut self, name: &str, args: &[Expr], pos: Position) -> EvalResult {
        let callable = self
            .registry
            .module(name)
            .ok_or_else(|| undefined_module(name))?;

        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.eval(arg)?);
        }

        match &*callable {
            Callable::Module(module) => self.call_user_module(module, values, pos),
            Callable::Native(binding) => call_native(binding, &values).map_err(|e| e.or_at(pos)),
            Callable::Program(_) => Err(undefined_module(name)),
        }
    }

    /// Invoke a user module. A `RETURN` inside supplies the result; without
    /// one the result is the value of the last statement.
    #[tracing::instrument(level = "debug", skip_all, fields(name = %module.name))]
    fn call_user_module(&mut self, module: &ModuleDef, args: Vec<Value>, pos: Position) -> EvalResult {
        if args.len() != module.params.len() {
            return Err(wrong_arg_count(&module.name, module.params.len(), args.len()).or_at(pos));
        }

        let mut scope = Scope::new();
        for (param, value) in module.params.iter().zip(args) {
            if let Err(err) = scope.assign(param, value) {
                return Err(err.or_at(module.pos));
            }
        }

        match self.invoke(&module.name, pos, scope, |interp| interp.exec_block(&module.body)) {
            Ok(value) | Err(ControlAction::Return(value, _)) => Ok(value),
            Err(other) => Err(other.into_error()),
        }
    }

    /// Invoke a program. Programs cannot return; any signal reaching the
    /// program boundary is an error.
    #[tracing::instrument(level = "debug", skip_all, fields(name = %program.name))]
    pub(crate) fn call_program(&mut self, program: &ProgramDef, pos: Position) -> EvalResult {
        self.invoke(&program.name, pos, Scope::new(), |interp| {
            interp.exec_block(&program.body)
        })
        .map_err(ControlAction::into_error)
    }

    /// Run `body` in `scope` with a call frame and trace frame for `name`.
    ///
    /// The caller's scope is restored however `body` ends. Errors leaving
    /// the invocation carry the call stack as it was when they were raised.
    fn invoke(
        &mut self,
        name: &str,
        call_pos: Position,
        scope: Scope,
        body: impl FnOnce(&mut Self) -> ExecResult,
    ) -> ExecResult {
        self.call_stack
            .push(CallFrame {
                name: name.to_string(),
                call_pos,
            })
            .map_err(|e: EvalError| e.or_at(call_pos))?;
        if let Some(trace) = &mut self.trace {
            trace.enter(name);
        }
        self.env.push_scope(scope);

        let result = ensure_sufficient_stack(|| body(self));

        self.env.pop_scope();
        if let Some(trace) = &mut self.trace {
            trace.exit();
        }
        let result = result.map_err(|action| match action {
            ControlAction::Error(err) => ControlAction::Error(self.call_stack.attach_backtrace(err)),
            signal => signal,
        });
        self.call_stack.pop();
        result
    }
}

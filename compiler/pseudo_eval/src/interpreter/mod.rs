//! Tree-walking interpreter.
//!
//! One [`Interpreter`] lives for a whole session. It owns the top-level
//! scope, the registry of programs and modules, the console and the
//! optional trace.
//!
//! # Layout
//!
//! - `exec` - statements, loops and control-flow signals
//! - `expr` - expressions and keyword forms
//! - `call` - program, module and native invocation
//!
//! Statements return [`ExecResult`]: `BREAK`, `CONTINUE` and `RETURN` travel
//! as [`ControlAction`] variants up to the loop or invocation that handles
//! them. Whatever escapes the public entry points is turned into an error.
//!
//! [`ExecResult`]: crate::ExecResult
//! [`ControlAction`]: crate::ControlAction

mod builder;
mod call;
mod call_stack;
mod exec;
mod expr;

pub use builder::InterpreterBuilder;
pub use call_stack::{CallFrame, CallStack, MAX_CALL_DEPTH};

use pseudo_ir::{Item, Stmt, Value};

use crate::console::Console;
use crate::environment::Environment;
use crate::errors::{undefined_program, EvalResult};
use crate::registry::{Callable, Registry};
use crate::trace::TraceRecorder;

pub struct Interpreter {
    pub(crate) env: Environment,
    pub(crate) registry: Registry,
    pub(crate) console: Console,
    pub(crate) trace: Option<TraceRecorder>,
    pub(crate) call_stack: CallStack,
}

impl Interpreter {
    /// An interpreter on the standard streams, without a trace.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Handle one parsed unit.
    ///
    /// Definitions go into the registry and yield `Symbol`. Statements run
    /// in the top-level scope.
    pub fn eval_item(&mut self, item: Item) -> EvalResult {
        let pos = item.pos();
        match item {
            Item::Program(program) => {
                self.registry.def_program(program).map_err(|e| e.or_at(pos))?;
                Ok(Value::Symbol)
            }
            Item::Module(module) => {
                self.registry.def_module(module).map_err(|e| e.or_at(pos))?;
                Ok(Value::Symbol)
            }
            Item::Statement(stmt) => self.eval_statement(&stmt),
        }
    }

    /// Run a statement in the top-level scope.
    pub fn eval_statement(&mut self, stmt: &Stmt) -> EvalResult {
        self.exec(stmt).map_err(crate::ControlAction::into_error)
    }

    /// Run a registered program from the top level.
    pub fn run_program(&mut self, name: &str) -> EvalResult {
        let callable = self
            .registry
            .program(name)
            .ok_or_else(|| undefined_program(name))?;
        let Callable::Program(program) = &*callable else {
            return Err(undefined_program(name));
        };
        self.call_program(program, program.pos)
    }

    /// Names of the registered programs, in definition order.
    pub fn program_names(&self) -> &[String] {
        self.registry.program_names()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut Console {
        &mut self.console
    }

    /// The recorded trace, if tracing is enabled.
    pub fn trace(&self) -> Option<&TraceRecorder> {
        self.trace.as_ref()
    }

    /// Current invocation depth. Zero between units.
    pub fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

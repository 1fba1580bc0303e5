//! Pseudo Eval - tree-walking evaluator for the pseudo interpreter.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Environment`: the top-level scope plus a stack of per-invocation scopes
//! - `Registry`: write-once tables of programs, modules and native bindings
//! - `evaluate_binary` / `evaluate_unary`: direct enum-based operator dispatch
//! - `Console`: where `OUTPUT` writes and `INPUT` reads
//! - `TraceRecorder`: optional record of every assignment
//!
//! `Interpreter` ties them together; drivers feed it one parsed unit at a
//! time through [`Interpreter::eval_item`].

mod console;
mod environment;
pub mod errors;
pub mod interpreter;
pub mod native;
mod operators;
mod registry;
mod trace;

pub use console::{BufferConsole, Console, StdioConsole};
pub use environment::{is_constant, Environment, Mutability, Scope};
pub use errors::{
    BacktraceFrame, ControlAction, ControlKind, EvalError, EvalErrorKind, EvalResult, ExecResult,
};
pub use interpreter::{Interpreter, InterpreterBuilder, MAX_CALL_DEPTH};
pub use operators::{evaluate_binary, evaluate_unary};
pub use registry::{Callable, NativeBinding, NativeFn, Registry};
pub use trace::{FrameId, TraceEntry, TraceEvent, TraceFrame, TraceRecorder};

#[cfg(test)]
mod tests;

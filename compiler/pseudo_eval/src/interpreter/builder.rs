//! `InterpreterBuilder` for creating interpreters with various configurations.

use super::call_stack::{CallStack, MAX_CALL_DEPTH};
use super::Interpreter;
use crate::console::Console;
use crate::environment::Environment;
use crate::native;
use crate::registry::Registry;
use crate::trace::TraceRecorder;

/// Builder for [`Interpreter`].
///
/// Defaults: stdio console, no trace, [`MAX_CALL_DEPTH`] nested invocations.
pub struct InterpreterBuilder {
    console: Option<Console>,
    trace: bool,
    max_call_depth: usize,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            console: None,
            trace: false,
            max_call_depth: MAX_CALL_DEPTH,
        }
    }

    /// Where `OUTPUT` writes and `INPUT` reads.
    #[must_use]
    pub fn console(mut self, console: Console) -> Self {
        self.console = Some(console);
        self
    }

    /// Record every assignment into a trace tree.
    #[must_use]
    pub fn trace(mut self, enabled: bool) -> Self {
        self.trace = enabled;
        self
    }

    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Build the interpreter with the native library registered.
    pub fn build(self) -> Interpreter {
        let mut registry = Registry::new();
        for binding in native::stdlib() {
            if let Err(err) = registry.def_native(binding) {
                tracing::warn!(name = binding.name, %err, "native binding not registered");
            }
        }
        Interpreter {
            env: Environment::new(),
            registry,
            console: self.console.unwrap_or_default(),
            trace: self.trace.then(TraceRecorder::new),
            call_stack: CallStack::new(self.max_call_depth),
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

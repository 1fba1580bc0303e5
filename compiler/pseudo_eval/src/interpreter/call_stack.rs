//! Live call stack for program and module invocations.
//!
//! Each invocation pushes a frame and pops it on the way out. The depth
//! limit is checked in `push`, and errors leaving an invocation get a
//! snapshot of the stack as their backtrace.

use pseudo_ir::Position;

use crate::errors::{call_depth_exceeded, BacktraceFrame, EvalError};

/// Default limit on nested invocations.
pub const MAX_CALL_DEPTH: usize = 1000;

/// A single frame in the live call stack.
#[derive(Clone, Debug)]
pub struct CallFrame {
    pub name: String,
    /// Where the call was made, not where the callee is defined.
    pub call_pos: Position,
}

#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: usize,
}

impl CallStack {
    pub fn new(max_depth: usize) -> Self {
        CallStack {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a frame, checking the depth limit. The frame is not pushed on
    /// overflow.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if self.frames.len() >= self.max_depth {
            return Err(call_depth_exceeded(self.max_depth));
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(!self.frames.is_empty(), "CallStack::pop on empty stack");
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Snapshot of the stack, most recent call first.
    pub fn capture(&self) -> Vec<BacktraceFrame> {
        self.frames
            .iter()
            .rev()
            .map(|f| BacktraceFrame {
                name: f.name.clone(),
                call_pos: f.call_pos,
            })
            .collect()
    }

    /// Attach a backtrace to `err` unless it already carries one.
    pub fn attach_backtrace(&self, err: EvalError) -> EvalError {
        if self.frames.is_empty() || !err.backtrace.is_empty() {
            return err;
        }
        err.with_backtrace(self.capture())
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new(MAX_CALL_DEPTH)
    }
}

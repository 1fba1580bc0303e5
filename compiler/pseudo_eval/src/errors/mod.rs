//! Runtime errors and control-flow signals.
//!
//! `EvalErrorKind` carries the structured cause; factory functions are the
//! public way to build an [`EvalError`]. The evaluator attaches the source
//! position where the error originated, and the call stack at that point,
//! as the error unwinds.

use std::fmt;

use pseudo_diagnostic::ErrorCode;
use pseudo_ir::{BinaryOp, Position, UnaryOp, Value};

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// Result of executing a statement: a value, or something unwinding.
pub type ExecResult = Result<Value, ControlAction>;

/// A non-local transfer of control.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Break,
    Continue,
    Return,
}

impl ControlKind {
    pub const fn keyword(self) -> &'static str {
        match self {
            ControlKind::Break => "Break",
            ControlKind::Continue => "Continue",
            ControlKind::Return => "Return",
        }
    }

    /// The construct that is supposed to catch this signal.
    pub const fn boundary(self) -> &'static str {
        match self {
            ControlKind::Break | ControlKind::Continue => "loop",
            ControlKind::Return => "module",
        }
    }
}

/// Typed error category.
#[derive(Clone, Debug, PartialEq)]
pub enum EvalErrorKind {
    BinaryTypeMismatch {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },
    UnaryTypeMismatch {
        op: UnaryOp,
        operand: &'static str,
    },
    DivisionByZero,
    UndefinedVariable {
        name: String,
    },
    UndefinedModule {
        name: String,
    },
    UndefinedProgram {
        name: String,
    },
    WrongArgCount {
        name: String,
        expected: usize,
        got: usize,
    },
    AlreadyDefined {
        name: String,
    },
    AssignToConstant {
        name: String,
    },
    ControlOutside {
        kind: ControlKind,
    },
    NativeFailure {
        name: String,
        message: String,
    },
    CallDepthExceeded {
        limit: usize,
    },
    ConditionNotNumber {
        construct: &'static str,
        got: &'static str,
    },
    InputFailed {
        message: String,
    },
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::BinaryTypeMismatch { .. } | Self::UnaryTypeMismatch { .. } => ErrorCode::E6001,
            Self::UndefinedVariable { .. }
            | Self::UndefinedModule { .. }
            | Self::UndefinedProgram { .. } => ErrorCode::E6002,
            Self::DivisionByZero => ErrorCode::E6003,
            Self::WrongArgCount { .. } => ErrorCode::E6004,
            Self::AlreadyDefined { .. } => ErrorCode::E6005,
            Self::AssignToConstant { .. } => ErrorCode::E6006,
            Self::ControlOutside { .. } => ErrorCode::E6007,
            Self::NativeFailure { .. } => ErrorCode::E6008,
            Self::CallDepthExceeded { .. } => ErrorCode::E6009,
            Self::ConditionNotNumber { .. } => ErrorCode::E6010,
            Self::InputFailed { .. } => ErrorCode::E9001,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BinaryTypeMismatch { op, left, right } => {
                write!(f, "unsupported operand types for {op}: {left} and {right}")
            }
            Self::UnaryTypeMismatch { op, operand } => {
                write!(f, "unsupported operand type for unary {op}: {operand}")
            }
            Self::DivisionByZero => write!(f, "Cannot divide by zero"),
            Self::UndefinedVariable { name } => write!(f, "{name} is undefined"),
            Self::UndefinedModule { name } => {
                write!(f, "module {name} is undefined or is not a module")
            }
            Self::UndefinedProgram { name } => {
                write!(f, "program {name} is undefined or is not a program")
            }
            Self::WrongArgCount {
                name,
                expected,
                got,
            } => {
                let plural = if *expected == 1 { "" } else { "s" };
                write!(f, "{name} expects {expected} argument{plural}, got {got}")
            }
            Self::AlreadyDefined { name } => write!(f, "{name} is already defined"),
            Self::AssignToConstant { name } => write!(f, "cannot assign to constant {name}"),
            Self::ControlOutside { kind } => {
                write!(f, "{} outside of {}", kind.keyword(), kind.boundary())
            }
            Self::NativeFailure { name, message } => write!(f, "{name}: {message}"),
            Self::CallDepthExceeded { limit } => {
                write!(f, "maximum call depth exceeded (limit: {limit})")
            }
            Self::ConditionNotNumber { construct, got } => {
                write!(f, "{construct} condition must be a number, got {got}")
            }
            Self::InputFailed { message } => write!(f, "failed to read input: {message}"),
        }
    }
}

/// One frame of the call chain at the point an error was raised.
#[derive(Clone, Debug, PartialEq)]
pub struct BacktraceFrame {
    pub name: String,
    /// Where the call was made.
    pub call_pos: Position,
}

/// A runtime error.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Where the error originated. Set once, by the innermost node that sees it.
    pub pos: Option<Position>,
    /// Innermost call first. Empty for errors raised at top level.
    pub backtrace: Vec<BacktraceFrame>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            pos: None,
            backtrace: Vec::new(),
        }
    }

    /// Attach `pos` unless a more precise position is already known.
    #[must_use]
    pub fn or_at(mut self, pos: Position) -> Self {
        self.pos.get_or_insert(pos);
        self
    }

    #[must_use]
    pub fn with_backtrace(mut self, backtrace: Vec<BacktraceFrame>) -> Self {
        if self.backtrace.is_empty() {
            self.backtrace = backtrace;
        }
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for EvalError {}

/// Why statement execution stopped early.
///
/// Signals unwind to the construct that handles them: loops catch `Break`
/// and `Continue`, module invocations catch `Return`. Anything that reaches
/// a boundary unhandled becomes an error there.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlAction {
    Error(EvalError),
    Break(Position),
    Continue(Position),
    Return(Value, Position),
}

impl ControlAction {
    /// Convert an uncaught signal into the matching "outside of" error.
    pub fn into_error(self) -> EvalError {
        match self {
            ControlAction::Error(err) => err,
            ControlAction::Break(pos) => control_outside(ControlKind::Break).or_at(pos),
            ControlAction::Continue(pos) => control_outside(ControlKind::Continue).or_at(pos),
            ControlAction::Return(_, pos) => control_outside(ControlKind::Return).or_at(pos),
        }
    }
}

impl From<EvalError> for ControlAction {
    fn from(err: EvalError) -> Self {
        ControlAction::Error(err)
    }
}

// Factories

#[cold]
pub fn binary_type_mismatch(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::BinaryTypeMismatch {
        op,
        left: left.type_name(),
        right: right.type_name(),
    })
}

#[cold]
pub fn unary_type_mismatch(op: UnaryOp, operand: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::UnaryTypeMismatch {
        op,
        operand: operand.type_name(),
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::new(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_module(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UndefinedModule {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_program(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UndefinedProgram {
        name: name.to_string(),
    })
}

#[cold]
pub fn wrong_arg_count(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::new(EvalErrorKind::WrongArgCount {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn already_defined(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::AlreadyDefined {
        name: name.to_string(),
    })
}

#[cold]
pub fn assign_to_constant(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::AssignToConstant {
        name: name.to_string(),
    })
}

#[cold]
pub fn control_outside(kind: ControlKind) -> EvalError {
    EvalError::new(EvalErrorKind::ControlOutside { kind })
}

#[cold]
pub fn native_failure(name: &str, message: impl Into<String>) -> EvalError {
    EvalError::new(EvalErrorKind::NativeFailure {
        name: name.to_string(),
        message: message.into(),
    })
}

#[cold]
pub fn call_depth_exceeded(limit: usize) -> EvalError {
    EvalError::new(EvalErrorKind::CallDepthExceeded { limit })
}

#[cold]
pub fn condition_not_number(construct: &'static str, got: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::ConditionNotNumber {
        construct,
        got: got.type_name(),
    })
}

#[cold]
pub fn input_failed(message: impl Into<String>) -> EvalError {
    EvalError::new(EvalErrorKind::InputFailed {
        message: message.into(),
    })
}

//! Diagnostic system for parse and runtime errors.
//!
//! Every error the interpreter reports is turned into a [`Diagnostic`]: an
//! error code, a one-line message, and (when known) the source location with
//! the text of the offending line. Emitters decide how it is shown.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Severity, SourceLocation};
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use error_code::ErrorCode;

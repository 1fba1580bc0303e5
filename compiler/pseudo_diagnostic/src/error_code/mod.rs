//! Error codes for all interpreter diagnostics.
//!
//! The first digit names the phase that raised the error.

use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E6xxx: Runtime errors
/// - E9xxx: Host / I/O errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid escape sequence
    E0002,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,

    // Runtime Errors (E6xxx)
    /// Operand types not supported by operator
    E6001,
    /// Undefined variable, module or program
    E6002,
    /// Division by zero
    E6003,
    /// Wrong number of arguments
    E6004,
    /// Name already defined
    E6005,
    /// Assignment to a constant
    E6006,
    /// `BREAK`, `CONTINUE` or `RETURN` outside its construct
    E6007,
    /// Native binding failed
    E6008,
    /// Maximum call depth exceeded
    E6009,
    /// Condition is not a number
    E6010,

    // Host Errors (E9xxx)
    /// Reading input failed
    E9001,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6008 => "E6008",
            ErrorCode::E6009 => "E6009",
            ErrorCode::E6010 => "E6010",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// One-line summary for `--explain`-style listings.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "invalid escape sequence",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E6001 => "unsupported operand types",
            ErrorCode::E6002 => "undefined name",
            ErrorCode::E6003 => "division by zero",
            ErrorCode::E6004 => "wrong number of arguments",
            ErrorCode::E6005 => "name already defined",
            ErrorCode::E6006 => "assignment to constant",
            ErrorCode::E6007 => "control flow outside its construct",
            ErrorCode::E6008 => "native binding failed",
            ErrorCode::E6009 => "maximum call depth exceeded",
            ErrorCode::E6010 => "condition is not a number",
            ErrorCode::E9001 => "input failed",
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    pub fn is_runtime_error(&self) -> bool {
        self.as_str().starts_with("E6")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

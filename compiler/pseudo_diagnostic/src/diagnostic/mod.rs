//! Core diagnostic types.

use std::fmt;

use pseudo_ir::Position;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Where a diagnostic points.
///
/// `line` carries the text of the source line so an emitter can print it
/// with a caret under `pos.col`. It is `None` when the line is no longer
/// available (e.g. a runtime error raised after the REPL buffer was reset).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SourceLocation {
    pub source: String,
    pub pos: Position,
    pub line: Option<String>,
}

/// A diagnostic with all the context needed to render it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub location: Option<SourceLocation>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            severity: Severity::Error,
            message: String::new(),
            location: None,
            notes: Vec::new(),
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(code: ErrorCode) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            ..Self::error(code)
        }
    }

    #[must_use]
    pub fn with_message(mut self, msg: impl Into<String>) -> Self {
        self.message = msg.into();
        self
    }

    /// Point the diagnostic at `pos` in `source`.
    #[must_use]
    pub fn with_location(
        mut self,
        source: impl Into<String>,
        pos: Position,
        line: Option<String>,
    ) -> Self {
        self.location = Some(SourceLocation {
            source: source.into(),
            pos,
            line,
        });
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " at {}:{}", loc.source, loc.pos)?;
        }
        Ok(())
    }
}

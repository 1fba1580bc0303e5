//! Lexer and source errors.

use std::io;

use pseudo_diagnostic::ErrorCode;
use pseudo_ir::Position;
use thiserror::Error;

/// Failure to pull the next line from a [`LineSource`](crate::LineSource).
#[derive(Debug, Error)]
pub enum SourceError {
    /// The user pressed Ctrl-C while a line was being read.
    #[error("interrupted")]
    Interrupted,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A lexer error.
///
/// Lexing errors abandon the rest of the line they occur on; the next token
/// request continues with the following line.
#[derive(Debug, Error)]
pub enum LexError {
    #[error("unterminated string literal")]
    UnterminatedString { pos: Position },

    #[error("invalid escape sequence `{escape}`")]
    InvalidEscape { escape: String, pos: Position },

    #[error("interrupted")]
    Interrupted,

    #[error("failed to read input: {0}")]
    Io(io::Error),
}

impl LexError {
    /// Where the error occurred, if it came from source text.
    pub fn pos(&self) -> Option<Position> {
        match self {
            LexError::UnterminatedString { pos } | LexError::InvalidEscape { pos, .. } => {
                Some(*pos)
            }
            LexError::Interrupted | LexError::Io(_) => None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::UnterminatedString { .. } => ErrorCode::E0001,
            LexError::InvalidEscape { .. } => ErrorCode::E0002,
            LexError::Interrupted | LexError::Io(_) => ErrorCode::E9001,
        }
    }

    pub fn is_interrupt(&self) -> bool {
        matches!(self, LexError::Interrupted)
    }
}

impl From<SourceError> for LexError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Interrupted => LexError::Interrupted,
            SourceError::Io(e) => LexError::Io(e),
        }
    }
}

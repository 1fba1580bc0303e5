//! Parse error types.

use pseudo_diagnostic::ErrorCode;
use pseudo_ir::{Position, TokenKind};
use pseudo_lexer::LexError;
use thiserror::Error;

/// What was being parsed when an error occurred.
///
/// Rendered as a "while parsing X" note under the main message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    Program,
    Module,
    IfStatement,
    WhileLoop,
    ForLoop,
    ModuleCall,
}

impl ErrorContext {
    pub fn description(self) -> &'static str {
        match self {
            Self::Program => "a PROGRAM definition",
            Self::Module => "a MODULE definition",
            Self::IfStatement => "an IF statement",
            Self::WhileLoop => "a WHILE loop",
            Self::ForLoop => "a FOR loop",
            Self::ModuleCall => "a module call",
        }
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("expected {expected}, found {found}")]
    Expected {
        expected: String,
        found: TokenKind,
        pos: Position,
        context: Option<ErrorContext>,
    },

    #[error(transparent)]
    Lex(#[from] LexError),
}

impl ParseError {
    #[cold]
    pub(crate) fn expected(expected: impl Into<String>, found: TokenKind, pos: Position) -> Self {
        ParseError::Expected {
            expected: expected.into(),
            found,
            pos,
            context: None,
        }
    }

    /// Attach `ctx` unless an inner production already did.
    #[must_use]
    pub(crate) fn in_context(mut self, ctx: ErrorContext) -> Self {
        if let ParseError::Expected { context, .. } = &mut self {
            context.get_or_insert(ctx);
        }
        self
    }

    pub fn pos(&self) -> Option<Position> {
        match self {
            ParseError::Expected { pos, .. } => Some(*pos),
            ParseError::Lex(err) => err.pos(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::Expected { .. } => ErrorCode::E1001,
            ParseError::Lex(err) => err.code(),
        }
    }

    pub fn context(&self) -> Option<ErrorContext> {
        match self {
            ParseError::Expected { context, .. } => *context,
            ParseError::Lex(_) => None,
        }
    }

    /// True if the source reported Ctrl-C.
    pub fn is_interrupt(&self) -> bool {
        matches!(self, ParseError::Lex(err) if err.is_interrupt())
    }
}

//! Recursive descent parser for pseudo.
//!
//! The parser pulls tokens from a [`Lexer`] and produces one top-level
//! [`Item`] per call to [`Parser::parse_unit`]: a `PROGRAM`, a `MODULE`, or
//! a single statement. Callers loop until it returns `Ok(None)`. Because the
//! lexer only reads a new line when it runs out of tokens, the same loop
//! drives a file and an interactive session.
//!
//! # Error positions
//!
//! Productions push the position of their first token on a "ready" stack and
//! pop it on success. An error raised by a production reports the most
//! recent position still on the stack, i.e. where the failing production
//! began. Errors about a single expected token report that token.

mod error;
mod grammar;
mod recovery;

use pseudo_ir::{Item, Keyword, Position, Token, TokenKind};
use pseudo_lexer::{Lexer, LineSource};

pub use error::{ErrorContext, ParseError};

/// Parser state.
pub struct Parser<S> {
    lexer: Lexer<S>,
    /// Start positions of the productions currently being parsed.
    ready: Vec<Position>,
    /// Whether the unit being parsed began with `PROGRAM` or `MODULE`.
    in_definition: bool,
    /// An `IF`, `WHILE` or `FOR` keyword was read but its body not entered.
    open_header: bool,
}

impl<S: LineSource> Parser<S> {
    pub fn new(source: S) -> Self {
        Parser {
            lexer: Lexer::new(source),
            ready: Vec::new(),
            in_definition: false,
            open_header: false,
        }
    }

    pub fn lexer(&self) -> &Lexer<S> {
        &self.lexer
    }

    /// Give back the line source, e.g. to save interactive history.
    pub fn into_source(self) -> S {
        self.lexer.into_source()
    }

    /// Parse the next top-level unit. Returns `Ok(None)` at end of input.
    pub fn parse_unit(&mut self) -> Result<Option<Item>, ParseError> {
        self.ready.clear();
        self.in_definition = false;
        self.open_header = false;
        self.skip_eos()?;

        let item = match self.peek_kind()? {
            TokenKind::Eof => return Ok(None),
            TokenKind::Keyword(Keyword::Program) => {
                self.in_definition = true;
                Item::Program(self.parse_program()?)
            }
            TokenKind::Keyword(Keyword::Module) => {
                self.in_definition = true;
                Item::Module(self.parse_module()?)
            }
            _ => Item::Statement(self.parse_statement(false)?),
        };
        tracing::debug!(pos = %item.pos(), "parsed unit");
        Ok(Some(item))
    }

    // Token helpers

    #[inline]
    fn peek(&mut self) -> Result<&Token, ParseError> {
        Ok(self.lexer.peek()?)
    }

    #[inline]
    fn peek_kind(&mut self) -> Result<&TokenKind, ParseError> {
        Ok(&self.lexer.peek()?.kind)
    }

    #[inline]
    fn bump(&mut self) -> Result<Token, ParseError> {
        Ok(self.lexer.next_token()?)
    }

    fn check_keyword(&mut self, kw: Keyword) -> Result<bool, ParseError> {
        Ok(self.peek_kind()?.is_keyword(kw))
    }

    fn check_symbol(&mut self, c: char) -> Result<bool, ParseError> {
        Ok(self.peek_kind()?.is_symbol(c))
    }

    /// Consume `kw` if it is next.
    fn eat_keyword(&mut self, kw: Keyword) -> Result<bool, ParseError> {
        if self.check_keyword(kw)? {
            self.bump()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consume symbol `c` if it is next.
    fn eat_symbol(&mut self, c: char) -> Result<bool, ParseError> {
        if self.check_symbol(c)? {
            self.bump()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn skip_eos(&mut self) -> Result<(), ParseError> {
        while matches!(self.peek_kind()?, TokenKind::Eos) {
            self.bump()?;
        }
        Ok(())
    }

    fn expect_keyword(&mut self, kw: Keyword) -> Result<Token, ParseError> {
        let tok = self.bump()?;
        if tok.kind.is_keyword(kw) {
            Ok(tok)
        } else {
            Err(ParseError::expected(format!("`{kw}`"), tok.kind, tok.pos))
        }
    }

    fn expect_symbol(&mut self, c: char) -> Result<Token, ParseError> {
        let tok = self.bump()?;
        if tok.kind.is_symbol(c) {
            Ok(tok)
        } else {
            Err(ParseError::expected(format!("`{c}`"), tok.kind, tok.pos))
        }
    }

    /// Consume an identifier; `what` names it in the error message.
    fn expect_ident(&mut self, what: &str) -> Result<(String, Position), ParseError> {
        let tok = self.bump()?;
        match tok.kind {
            TokenKind::Ident(name) => Ok((name, tok.pos)),
            other => Err(ParseError::expected(what, other, tok.pos)),
        }
    }

    /// Error for a production that could not start, positioned at the
    /// innermost production still being parsed.
    #[cold]
    fn production_error(&self, expected: &str, found: TokenKind, found_pos: Position) -> ParseError {
        let pos = self.ready.last().copied().unwrap_or(found_pos);
        ParseError::expected(expected, found, pos)
    }

    /// Run `f` as a production starting at the next token.
    fn with_ready<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let start = self.peek()?.pos;
        self.with_ready_at(start, f)
    }

    /// Run `f` as a production that began at `start`.
    fn with_ready_at<T>(
        &mut self,
        start: Position,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let depth = self.ready.len();
        self.ready.push(start);
        let result = f(self);
        self.ready.truncate(depth);
        result
    }
}

#[cfg(test)]
mod tests;

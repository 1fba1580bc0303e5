//! Lexer for pseudo using logos.
//!
//! Source text arrives one line at a time through a [`LineSource`], so the
//! same lexer serves a whole file and an interactive session. Each line is
//! tokenized with logos, identifiers are classified into keywords and word
//! operators, and string escapes are resolved. Every line ends with an
//! [`TokenKind::Eos`] token; once the source is exhausted the lexer yields
//! [`TokenKind::Eof`] forever.

mod cook_escape;
mod lex_error;
mod raw_token;
mod source;

use std::collections::VecDeque;

use logos::Logos;
use pseudo_ir::{Keyword, Operator, Position, Token, TokenKind};

use cook_escape::unescape_string;
use raw_token::RawToken;

pub use lex_error::{LexError, SourceError};
pub use source::{prompt_for_depth, LineSource, TextSource};

/// Tokenize one source line. `row` is the line's 1-based number.
///
/// The returned tokens always end with an end-of-statement token positioned
/// just past the last character.
pub fn lex_line(text: &str, row: u32) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(text);
    let mut columns = ColumnCursor::default();

    while let Some(result) = logos.next() {
        let slice = logos.slice();
        let col = columns.column_at(text, logos.span().start);
        let pos = Position::new(row, col);

        match result {
            Ok(RawToken::Comment) => {}
            Ok(raw) => {
                let kind = convert_token(raw, slice, pos)?;
                tokens.push(Token::new(kind, pos));
            }
            Err(()) => {
                if slice.starts_with(['"', '\'']) {
                    return Err(LexError::UnterminatedString { pos });
                }
                for (i, c) in slice.chars().enumerate() {
                    let col = col.saturating_add(to_u32(i));
                    tokens.push(Token::new(TokenKind::Symbol(c), Position::new(row, col)));
                }
            }
        }
    }

    let end = columns.column_at(text, text.len());
    tokens.push(Token::new(TokenKind::Eos, Position::new(row, end)));
    Ok(tokens)
}

/// Convert a raw token to a `TokenKind`, cooking strings and classifying words.
fn convert_token(raw: RawToken, slice: &str, pos: Position) -> Result<TokenKind, LexError> {
    let kind = match raw {
        RawToken::Semi => TokenKind::Eos,
        RawToken::Number(n) => TokenKind::Number(n),
        RawToken::String => {
            let content = &slice[1..slice.len() - 1];
            let cooked = unescape_string(content).map_err(|bad| LexError::InvalidEscape {
                escape: bad.text,
                pos: Position::new(pos.row, pos.col.saturating_add(to_u32(bad.offset + 1))),
            })?;
            TokenKind::Str(cooked)
        }
        RawToken::Word => classify_word(slice),

        RawToken::EqEq => TokenKind::Operator(Operator::EqEq),
        RawToken::Arrow => TokenKind::Operator(Operator::Arrow),
        RawToken::LtEq => TokenKind::Operator(Operator::LtEq),
        RawToken::GtEq => TokenKind::Operator(Operator::GtEq),
        RawToken::NotEq => TokenKind::Operator(Operator::NotEq),
        RawToken::ColonEq => TokenKind::Operator(Operator::ColonEq),
        RawToken::AndAnd => TokenKind::Operator(Operator::AndAnd),
        RawToken::OrOr => TokenKind::Operator(Operator::OrOr),
        RawToken::Bang => TokenKind::Operator(Operator::Bang),
        RawToken::Plus => TokenKind::Operator(Operator::Plus),
        RawToken::Minus => TokenKind::Operator(Operator::Minus),
        RawToken::Star => TokenKind::Operator(Operator::Star),
        RawToken::Slash => TokenKind::Operator(Operator::Slash),
        RawToken::Lt => TokenKind::Operator(Operator::Lt),
        RawToken::Gt => TokenKind::Operator(Operator::Gt),
        RawToken::Eq => TokenKind::Operator(Operator::Eq),
        RawToken::Amp => TokenKind::Operator(Operator::Amp),
        RawToken::Pipe => TokenKind::Operator(Operator::Pipe),
        RawToken::Caret => TokenKind::Operator(Operator::Caret),

        RawToken::Colon => TokenKind::Symbol(':'),
        RawToken::Dot => TokenKind::Symbol('.'),

        // Filtered out by the caller.
        RawToken::Comment => TokenKind::Eos,
    };
    Ok(kind)
}

/// Word operators first, then keywords, then plain identifiers.
fn classify_word(word: &str) -> TokenKind {
    if let Some(op) = Operator::from_word(word) {
        TokenKind::Operator(op)
    } else if let Some(kw) = Keyword::lookup(word) {
        TokenKind::Keyword(kw)
    } else {
        TokenKind::Ident(word.to_string())
    }
}

#[inline]
fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Converts byte offsets to 1-based char columns, scanning forward only.
#[derive(Default)]
struct ColumnCursor {
    byte: usize,
    chars: usize,
}

impl ColumnCursor {
    fn column_at(&mut self, text: &str, byte: usize) -> u32 {
        if byte > self.byte {
            self.chars += text[self.byte..byte].chars().count();
            self.byte = byte;
        }
        to_u32(self.chars + 1)
    }
}

/// Pull-driven token stream over a [`LineSource`].
///
/// Lines are read lazily: a new line is requested only when every token of
/// the previous one has been consumed. All lines read so far are retained so
/// diagnostics can quote them.
pub struct Lexer<S> {
    source: S,
    lines: Vec<String>,
    pending: VecDeque<Token>,
    peeked: Option<Token>,
    depth: usize,
    eof: Option<Position>,
}

impl<S: LineSource> Lexer<S> {
    pub fn new(source: S) -> Self {
        Lexer {
            source,
            lines: Vec::new(),
            pending: VecDeque::new(),
            peeked: None,
            depth: 0,
            eof: None,
        }
    }

    /// Look at the next token without consuming it.
    pub fn peek(&mut self) -> Result<&Token, LexError> {
        let tok = match self.peeked.take() {
            Some(tok) => tok,
            None => self.pull()?,
        };
        Ok(self.peeked.insert(tok))
    }

    /// Consume and return the next token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        match self.peeked.take() {
            Some(tok) => Ok(tok),
            None => self.pull(),
        }
    }

    fn pull(&mut self) -> Result<Token, LexError> {
        loop {
            if let Some(tok) = self.pending.pop_front() {
                return Ok(tok);
            }
            if let Some(pos) = self.eof {
                return Ok(Token::new(TokenKind::Eof, pos));
            }
            match self.source.next_line(self.depth)? {
                Some(line) => {
                    let row = to_u32(self.lines.len() + 1);
                    tracing::trace!(row, depth = self.depth, "read source line");
                    let tokens = lex_line(&line, row);
                    self.lines.push(line);
                    self.pending.extend(tokens?);
                }
                None => {
                    let pos = self.end_position();
                    tracing::trace!(%pos, "source exhausted");
                    self.eof = Some(pos);
                }
            }
        }
    }

    /// Position just past the last character read.
    fn end_position(&self) -> Position {
        match self.lines.last() {
            Some(line) => Position::new(
                to_u32(self.lines.len()),
                to_u32(line.chars().count() + 1),
            ),
            None => Position::new(1, 1),
        }
    }

    /// Enter a nested block (affects interactive prompts).
    pub fn nest(&mut self) {
        self.depth += 1;
    }

    pub fn unnest(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Drop every buffered token of the current line.
    pub fn discard_line(&mut self) {
        self.peeked = None;
        self.pending.clear();
    }

    pub fn reset_depth(&mut self) {
        self.depth = 0;
    }

    /// Return to a clean top-level state after an aborted unit.
    pub fn reset(&mut self) {
        self.discard_line();
        self.reset_depth();
    }

    /// Text of the 1-based source line `row`, if it has been read.
    pub fn line(&self, row: u32) -> Option<&str> {
        let index = usize::try_from(row).ok()?.checked_sub(1)?;
        self.lines.get(index).map(String::as_str)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// True once only end-of-input remains.
    pub fn is_exhausted(&self) -> bool {
        self.eof.is_some()
            && self.pending.is_empty()
            && self
                .peeked
                .as_ref()
                .map_or(true, |tok| tok.kind == TokenKind::Eof)
    }
}

#[cfg(test)]
mod tests;

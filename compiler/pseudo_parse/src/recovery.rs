//! Resynchronization after a parse error.

use pseudo_ir::{Keyword, TokenKind};
use pseudo_lexer::{LexError, LineSource};

use crate::Parser;

impl<S: LineSource> Parser<S> {
    /// Skip past the unit that failed so parsing can resume.
    ///
    /// Interactively, and for plain top-level statements, the rest of the
    /// current line is dropped. A top-level `IF`, `WHILE` or `FOR` in a file
    /// is skipped up to the closer that balances it. Inside a file `PROGRAM`
    /// or `MODULE`, tokens are skipped until the next definition or end of
    /// input, leaving that token to be parsed.
    pub fn recover(&mut self, interactive: bool) {
        self.ready.clear();
        let open = self.lexer.depth() + usize::from(self.open_header);
        self.open_header = false;

        if interactive || (!self.in_definition && open == 0) {
            tracing::debug!(interactive, "discarding rest of line");
            self.lexer.reset();
            return;
        }

        self.lexer.reset_depth();
        if !self.in_definition {
            self.skip_open_blocks(open);
            return;
        }

        let mut skipped = 0usize;
        loop {
            let at_boundary = match self.lexer.peek() {
                Ok(tok) => matches!(
                    tok.kind,
                    TokenKind::Eof | TokenKind::Keyword(Keyword::Program | Keyword::Module)
                ),
                Err(LexError::Interrupted | LexError::Io(_)) => true,
                // The lexer already dropped the bad line.
                Err(_) => continue,
            };
            if at_boundary {
                break;
            }
            skipped += 1;
            // Already peeked, so this cannot fail.
            let _ = self.lexer.next_token();
        }
        tracing::debug!(skipped, "resynchronized at next definition");
    }

    /// Consume tokens until `open` blocks have been closed by `END`, `NEXT`
    /// or `REPEAT`. Stops early before a definition or at end of input.
    fn skip_open_blocks(&mut self, mut open: usize) {
        let mut previous = None;
        let mut skipped = 0usize;
        while open > 0 {
            let keyword = match self.lexer.peek() {
                Ok(tok) => match &tok.kind {
                    TokenKind::Eof
                    | TokenKind::Keyword(Keyword::Program | Keyword::Module) => break,
                    TokenKind::Keyword(kw) => Some(*kw),
                    _ => None,
                },
                Err(LexError::Interrupted | LexError::Io(_)) => break,
                Err(_) => continue,
            };
            skipped += 1;
            let _ = self.lexer.next_token();

            match keyword {
                // `END IF` qualifies; `ELSE IF` shares the outer closer.
                Some(Keyword::If | Keyword::While | Keyword::For)
                    if !matches!(previous, Some(Keyword::End | Keyword::Else)) =>
                {
                    open += 1;
                }
                Some(Keyword::End | Keyword::Next | Keyword::Repeat) => open -= 1,
                _ => {}
            }
            previous = keyword;
        }

        if open == 0 && previous == Some(Keyword::End) {
            let qualified = matches!(
                self.lexer.peek(),
                Ok(tok) if matches!(tok.kind, TokenKind::Keyword(kw) if kw.is_end_qualifier())
            );
            if qualified {
                let _ = self.lexer.next_token();
            }
        }
        tracing::debug!(skipped, open, "skipped unfinished block");
    }
}

//! Statements and statement blocks.

use pseudo_ir::{
    Assignment, Expr, ExprKind, InputType, Keyword, KeywordForm, Stmt, StmtKind, TokenKind,
};
use pseudo_lexer::LineSource;
use pseudo_stack::ensure_sufficient_stack;

use crate::{ErrorContext, ParseError, Parser};

/// Keywords that close a block. A statement directly before one of these
/// needs no end-of-statement marker.
const BLOCK_CLOSERS: [Keyword; 4] = [Keyword::End, Keyword::Else, Keyword::Next, Keyword::Repeat];

/// Keywords that start a statement. Inside a block they also end the
/// previous one, so `BEGIN x <- 1 OUTPUT(x) END` fits on one line.
const STATEMENT_STARTERS: [Keyword; 10] = [
    Keyword::If,
    Keyword::While,
    Keyword::For,
    Keyword::Break,
    Keyword::Continue,
    Keyword::Return,
    Keyword::Input,
    Keyword::Output,
    Keyword::Print,
    Keyword::Run,
];

impl<S: LineSource> Parser<S> {
    /// Parse one statement and its terminator.
    ///
    /// `in_block` allows the statement to end right before a keyword that
    /// closes the block or starts another statement, instead of at an
    /// end-of-statement marker.
    pub(crate) fn parse_statement(&mut self, in_block: bool) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| {
            self.with_ready(|p| {
                let stmt = p.parse_statement_inner()?;
                p.expect_statement_end(in_block)?;
                Ok(stmt)
            })
        })
    }

    fn parse_statement_inner(&mut self) -> Result<Stmt, ParseError> {
        let (is_ident, kw, pos) = {
            let tok = self.peek()?;
            let kw = match tok.kind {
                TokenKind::Keyword(kw) => Some(kw),
                _ => None,
            };
            // `not x` is a unary expression, not a statement about `not`.
            let is_ident = matches!(&tok.kind, TokenKind::Ident(word) if word != "not");
            (is_ident, kw, tok.pos)
        };
        if is_ident {
            return self.parse_ident_statement();
        }

        let kind = match kw {
            Some(Keyword::If) => return self.parse_if(),
            Some(Keyword::While) => return self.parse_while(),
            Some(Keyword::For) => return self.parse_for(),
            Some(Keyword::Break) => {
                self.bump()?;
                StmtKind::Break
            }
            Some(Keyword::Continue) => {
                self.bump()?;
                StmtKind::Continue
            }
            Some(Keyword::Return) => {
                self.bump()?;
                StmtKind::Return(self.with_ready(|p| p.parse_expression(None))?)
            }
            Some(Keyword::Input | Keyword::Output | Keyword::Print | Keyword::Run) => {
                StmtKind::Expr(self.parse_keyword_form()?)
            }
            _ => StmtKind::Expr(self.parse_expression(None)?),
        };
        Ok(Stmt::new(kind, pos))
    }

    /// A statement starting with an identifier: an assignment, or an
    /// expression whose leftmost operand is that identifier.
    fn parse_ident_statement(&mut self) -> Result<Stmt, ParseError> {
        let (name, pos) = self.expect_ident("identifier")?;

        let is_assign = matches!(self.peek_kind()?, TokenKind::Operator(op) if op.is_assignment());
        if is_assign {
            self.bump()?;
            let value = self.with_ready(|p| p.parse_expression(None))?;
            let assignment = Assignment {
                target: name,
                value,
                pos,
            };
            return Ok(Stmt::new(StmtKind::Assign(assignment), pos));
        }

        let seed = Expr::new(ExprKind::Variable(name), pos);
        let expr = self.parse_expression(Some(seed))?;
        Ok(Stmt::new(StmtKind::Expr(expr), pos))
    }

    /// `name (= | <- | :=) expression`, as required by `FOR`.
    fn parse_assignment(&mut self) -> Result<Assignment, ParseError> {
        let tok = self.bump()?;
        let target = match tok.kind {
            TokenKind::Ident(name) => name,
            other => return Err(self.production_error("assignment", other, tok.pos)),
        };
        let op = self.bump()?;
        if !matches!(op.kind, TokenKind::Operator(o) if o.is_assignment()) {
            return Err(ParseError::expected("assignment operator", op.kind, op.pos));
        }
        let value = self.with_ready(|p| p.parse_expression(None))?;
        Ok(Assignment {
            target,
            value,
            pos: tok.pos,
        })
    }

    fn expect_statement_end(&mut self, in_block: bool) -> Result<(), ParseError> {
        match self.peek_kind()? {
            TokenKind::Eos => {
                self.bump()?;
                Ok(())
            }
            TokenKind::Keyword(kw)
                if in_block && (BLOCK_CLOSERS.contains(kw) || STATEMENT_STARTERS.contains(kw)) =>
            {
                Ok(())
            }
            _ => {
                let tok = self.bump()?;
                Err(ParseError::expected("end of statement", tok.kind, tok.pos))
            }
        }
    }

    /// Parse statements until `END` (plus optional qualifier) or one of
    /// `closers`. Returns the statements and the keyword that closed them.
    pub(crate) fn parse_statements(
        &mut self,
        closers: &[Keyword],
    ) -> Result<(Vec<Stmt>, Keyword), ParseError> {
        let mut body = Vec::new();
        loop {
            self.skip_eos()?;
            let closer = match self.peek_kind()? {
                TokenKind::Keyword(Keyword::End) => Some(Keyword::End),
                TokenKind::Keyword(kw) if closers.contains(kw) => Some(*kw),
                TokenKind::Eof | TokenKind::Keyword(Keyword::Program | Keyword::Module) => {
                    let expected = match closers.first() {
                        Some(kw) => format!("`END` or `{kw}`"),
                        None => "`END`".to_string(),
                    };
                    let tok = self.peek()?.clone();
                    return Err(ParseError::expected(expected, tok.kind, tok.pos));
                }
                _ => None,
            };

            if let Some(kw) = closer {
                self.bump()?;
                if kw == Keyword::End {
                    self.eat_end_qualifier()?;
                }
                return Ok((body, kw));
            }

            body.push(self.parse_statement(true)?);
        }
    }

    /// Nested block for `IF`, `WHILE` and `FOR`.
    fn parse_block(&mut self, closers: &[Keyword]) -> Result<(Vec<Stmt>, Keyword), ParseError> {
        self.lexer.nest();
        self.open_header = false;
        let result = self.parse_statements(closers)?;
        self.lexer.unnest();
        Ok(result)
    }

    /// `END IF`, `END WHILE`, `END FOR`, `END PROGRAM`, `END MODULE`.
    fn eat_end_qualifier(&mut self) -> Result<(), ParseError> {
        if matches!(self.peek_kind()?, TokenKind::Keyword(kw) if kw.is_end_qualifier()) {
            self.bump()?;
        }
        Ok(())
    }

    /// Optional `THEN` or `DO` after a condition or loop header.
    fn eat_connective(&mut self) -> Result<(), ParseError> {
        if !self.eat_keyword(Keyword::Then)? {
            self.eat_keyword(Keyword::Do)?;
        }
        Ok(())
    }

    /// `IF cond [THEN] ... [ELSE ...] END`, with `ELSE IF` chaining.
    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        self.parse_if_inner()
            .map_err(|e| e.in_context(ErrorContext::IfStatement))
    }

    fn parse_if_inner(&mut self) -> Result<Stmt, ParseError> {
        let pos = self.expect_keyword(Keyword::If)?.pos;
        self.open_header = true;
        let cond = self.with_ready(|p| p.parse_expression(None))?;
        self.eat_connective()?;

        let (then_branch, closer) = self.parse_block(&[Keyword::Else])?;
        let else_branch = if closer == Keyword::Else {
            if self.check_keyword(Keyword::If)? {
                // The chained IF owns the single closing END.
                vec![ensure_sufficient_stack(|| self.parse_if())?]
            } else {
                self.parse_block(&[])?.0
            }
        } else {
            Vec::new()
        };

        Ok(Stmt::new(
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            },
            pos,
        ))
    }

    /// `WHILE cond [DO] ... REPEAT`
    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        self.parse_while_inner()
            .map_err(|e| e.in_context(ErrorContext::WhileLoop))
    }

    fn parse_while_inner(&mut self) -> Result<Stmt, ParseError> {
        let pos = self.expect_keyword(Keyword::While)?.pos;
        self.open_header = true;
        let cond = self.with_ready(|p| p.parse_expression(None))?;
        self.eat_connective()?;
        let (body, _) = self.parse_block(&[Keyword::Repeat])?;
        Ok(Stmt::new(StmtKind::While { cond, body }, pos))
    }

    /// `FOR var <- start TO bound [DO] ... NEXT`
    fn parse_for(&mut self) -> Result<Stmt, ParseError> {
        self.parse_for_inner()
            .map_err(|e| e.in_context(ErrorContext::ForLoop))
    }

    fn parse_for_inner(&mut self) -> Result<Stmt, ParseError> {
        let pos = self.expect_keyword(Keyword::For)?.pos;
        self.open_header = true;
        let init = self.with_ready(Self::parse_assignment)?;
        self.expect_keyword(Keyword::To)?;
        let bound = self.with_ready(|p| p.parse_expression(None))?;
        self.eat_connective()?;
        let (body, _) = self.parse_block(&[Keyword::Next])?;
        Ok(Stmt::new(StmtKind::For { init, bound, body }, pos))
    }

    /// `INPUT [type] name`, `OUTPUT args`, `PRINT args`, `RUN name`.
    fn parse_keyword_form(&mut self) -> Result<Expr, ParseError> {
        let tok = self.bump()?;
        let form = match tok.kind {
            TokenKind::Keyword(Keyword::Run) => {
                let (name, _) = self.expect_ident("program name")?;
                KeywordForm::Run(name)
            }
            TokenKind::Keyword(Keyword::Input) => self.parse_input()?,
            TokenKind::Keyword(Keyword::Output | Keyword::Print) => {
                if matches!(self.peek_kind()?, TokenKind::Eos) {
                    KeywordForm::Output(Vec::new())
                } else {
                    KeywordForm::Output(self.parse_output_args()?)
                }
            }
            other => return Err(self.production_error("statement", other, tok.pos)),
        };
        Ok(Expr::new(ExprKind::Keyword(form), tok.pos))
    }

    /// `INPUT [type] name`, where the name may be parenthesized.
    ///
    /// A type name followed by nothing is the variable: `INPUT number`.
    fn parse_input(&mut self) -> Result<KeywordForm, ParseError> {
        let open = self.eat_symbol('(')?;
        let (first, _) = self.expect_ident("variable name")?;

        let ty = InputType::lookup(&first);
        let typed = ty.is_some()
            && matches!(self.peek_kind()?, TokenKind::Ident(_) | TokenKind::Symbol('('));
        let form = if typed {
            let inner_open = self.eat_symbol('(')?;
            let (target, _) = self.expect_ident("variable name")?;
            if inner_open {
                self.expect_symbol(')')?;
            }
            KeywordForm::Input { ty, target }
        } else {
            KeywordForm::Input {
                ty: None,
                target: first,
            }
        };

        if open {
            self.expect_symbol(')')?;
        }
        Ok(form)
    }

    /// `OUTPUT` arguments, with or without surrounding parentheses.
    ///
    /// `OUTPUT (a, b)` lists two arguments; `OUTPUT (a) + 1` is one
    /// expression that happens to start with a parenthesis.
    fn parse_output_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        if !self.check_symbol('(')? {
            return self.parse_arguments();
        }

        let mut args = self.parse_call_args()?;
        if args.len() == 1 {
            if let Some(first) = args.pop() {
                args.push(self.parse_expression(Some(first))?);
            }
        }
        if self.check_symbol(',')? {
            self.bump()?;
            args.extend(self.parse_arguments()?);
        }
        Ok(args)
    }
}

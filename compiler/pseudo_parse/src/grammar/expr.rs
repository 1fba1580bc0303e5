//! Expression parsing.
//!
//! Precedence, loosest first:
//!
//! | level | operators |
//! |-------|-----------|
//! | 0 | `\|\|` `or` |
//! | 1 | `&&` `and` |
//! | 2 | `\|` |
//! | 3 | `^` |
//! | 4 | `&` |
//! | 5 | `==` `=` `eq` `equals` `!=` `neq` |
//! | 6 | `<` `>` `<=` `>=` `lt` `gt` `le` `ge` |
//! | 7 | `+` `-` |
//! | 8 | `*` `/` |
//!
//! then unary `-` `+` `!` `not`, postfix call `name(args)`, and primaries.
//!
//! Every binary level parses its right operand by recursing into itself, so
//! all binary operators associate to the right: `8 - 3 - 2` is `8 - (3 - 2)`.

use pseudo_ir::{BinaryOp, Expr, ExprKind, Operator, TokenKind, UnaryOp, Value};
use pseudo_lexer::LineSource;
use pseudo_stack::ensure_sufficient_stack;

use crate::{ErrorContext, ParseError, Parser};

const LEVELS: usize = 9;

/// The binary operator `kind` denotes at precedence `level`, if any.
///
/// Word forms (`lt`, `equals`, ...) arrive as identifiers and are only
/// operators here, in operator position.
fn binary_op_at(level: usize, kind: &TokenKind) -> Option<BinaryOp> {
    let op = match kind {
        TokenKind::Operator(op) => match op {
            Operator::OrOr | Operator::Or => BinaryOp::Or,
            Operator::AndAnd | Operator::And => BinaryOp::And,
            Operator::Pipe => BinaryOp::BitOr,
            Operator::Caret => BinaryOp::BitXor,
            Operator::Amp => BinaryOp::BitAnd,
            Operator::EqEq | Operator::Eq | Operator::EqWord => BinaryOp::Eq,
            Operator::NotEq | Operator::NeqWord => BinaryOp::NotEq,
            Operator::Lt => BinaryOp::Lt,
            Operator::Gt => BinaryOp::Gt,
            Operator::LtEq => BinaryOp::LtEq,
            Operator::GtEq => BinaryOp::GtEq,
            Operator::Plus => BinaryOp::Add,
            Operator::Minus => BinaryOp::Sub,
            Operator::Star => BinaryOp::Mul,
            Operator::Slash => BinaryOp::Div,
            Operator::Arrow | Operator::ColonEq | Operator::Bang => return None,
        },
        TokenKind::Ident(word) => match word.as_str() {
            "equals" => BinaryOp::Eq,
            "lt" => BinaryOp::Lt,
            "gt" => BinaryOp::Gt,
            "le" => BinaryOp::LtEq,
            "ge" => BinaryOp::GtEq,
            _ => return None,
        },
        _ => return None,
    };
    (level_of(op) == level).then_some(op)
}

fn level_of(op: BinaryOp) -> usize {
    match op {
        BinaryOp::Or => 0,
        BinaryOp::And => 1,
        BinaryOp::BitOr => 2,
        BinaryOp::BitXor => 3,
        BinaryOp::BitAnd => 4,
        BinaryOp::Eq | BinaryOp::NotEq => 5,
        BinaryOp::Lt | BinaryOp::Gt | BinaryOp::LtEq | BinaryOp::GtEq => 6,
        BinaryOp::Add | BinaryOp::Sub => 7,
        BinaryOp::Mul | BinaryOp::Div => 8,
    }
}

fn unary_op(kind: &TokenKind) -> Option<UnaryOp> {
    match kind {
        TokenKind::Operator(Operator::Minus) => Some(UnaryOp::Neg),
        TokenKind::Operator(Operator::Plus) => Some(UnaryOp::Plus),
        TokenKind::Operator(Operator::Bang) => Some(UnaryOp::Not),
        TokenKind::Ident(word) if word == "not" => Some(UnaryOp::Not),
        _ => None,
    }
}

impl<S: LineSource> Parser<S> {
    /// Parse a full expression.
    ///
    /// `seed` is an already-consumed leftmost primary: statement parsing
    /// reads an identifier to look for an assignment and hands it back here
    /// when there is none.
    pub(crate) fn parse_expression(&mut self, seed: Option<Expr>) -> Result<Expr, ParseError> {
        self.parse_binary(0, seed)
    }

    fn parse_binary(&mut self, level: usize, seed: Option<Expr>) -> Result<Expr, ParseError> {
        if level == LEVELS {
            return self.parse_unary(seed);
        }

        let start = match &seed {
            Some(expr) => expr.pos,
            None => self.peek()?.pos,
        };
        let left = self.with_ready_at(start, |p| p.parse_binary(level + 1, seed))?;
        let Some(op) = binary_op_at(level, self.peek_kind()?) else {
            return Ok(left);
        };
        self.bump()?;

        let right = ensure_sufficient_stack(|| self.with_ready(|p| p.parse_binary(level, None)))?;
        let pos = left.pos;
        Ok(Expr::new(
            ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            pos,
        ))
    }

    fn parse_unary(&mut self, seed: Option<Expr>) -> Result<Expr, ParseError> {
        if seed.is_some() {
            return self.parse_postfix(seed);
        }

        let (op, pos) = {
            let tok = self.peek()?;
            (unary_op(&tok.kind), tok.pos)
        };
        let Some(op) = op else {
            return self.parse_postfix(None);
        };
        self.bump()?;

        let operand = ensure_sufficient_stack(|| self.with_ready(|p| p.parse_unary(None)))?;
        Ok(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            pos,
        ))
    }

    /// A primary optionally followed by a call: `name(args)`.
    fn parse_postfix(&mut self, seed: Option<Expr>) -> Result<Expr, ParseError> {
        let primary = match seed {
            Some(expr) => expr,
            None => self.with_ready(Self::parse_primary)?,
        };
        if !self.check_symbol('(')? {
            return Ok(primary);
        }

        let ExprKind::Variable(name) = primary.kind else {
            let tok = self.bump()?;
            return Err(ParseError::expected("module name before `(`", tok.kind, primary.pos));
        };
        self.parse_call_args()
            .map(|args| Expr::new(ExprKind::ModuleCall { name, args }, primary.pos))
            .map_err(|e| e.in_context(ErrorContext::ModuleCall))
    }

    /// `( [expr (, expr)*] )`, opening parenthesis included.
    pub(crate) fn parse_call_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        self.expect_symbol('(')?;
        if self.check_symbol(')')? {
            self.bump()?;
            return Ok(Vec::new());
        }
        let args = self.parse_arguments()?;
        self.expect_symbol(')')?;
        Ok(args)
    }

    /// Comma-separated expressions.
    pub(crate) fn parse_arguments(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();
        loop {
            args.push(self.with_ready(|p| p.parse_expression(None))?);
            if !self.check_symbol(',')? {
                return Ok(args);
            }
            self.bump()?;
        }
    }

    /// Literal, variable, or parenthesized expression.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let tok = self.bump()?;
        let kind = match tok.kind {
            TokenKind::Number(n) => ExprKind::Literal(Value::Number(n)),
            TokenKind::Str(s) => ExprKind::Literal(Value::Str(s)),
            TokenKind::Ident(name) => ExprKind::Variable(name),
            TokenKind::Symbol('(') => {
                let inner = ensure_sufficient_stack(|| self.parse_expression(None))?;
                self.expect_symbol(')')?;
                return Ok(inner);
            }
            other => return Err(self.production_error("expression", other, tok.pos)),
        };
        Ok(Expr::new(kind, tok.pos))
    }
}

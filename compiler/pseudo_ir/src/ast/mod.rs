//! Syntax tree produced by the parser.
//!
//! Every node records the position where parsing of that node began, which is
//! what runtime diagnostics point at.

use std::fmt;

use crate::{Position, Value};

/// Binary operators, grouped by precedence level (lowest first).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    /// `||`, `or`
    Or,
    /// `&&`, `and`
    And,
    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `&`
    BitAnd,
    /// `==`, `=`, `eq`, `equals`
    Eq,
    /// `!=`, `neq`
    NotEq,
    /// `<`, `lt`
    Lt,
    /// `>`, `gt`
    Gt,
    /// `<=`, `le`
    LtEq,
    /// `>=`, `ge`
    GtEq,
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Canonical spelling, used in type error messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::BitAnd => "&",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::LtEq => "<=",
            BinaryOp::GtEq => ">=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }

    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOp::Lt | BinaryOp::Gt | BinaryOp::LtEq | BinaryOp::GtEq
        )
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// `-`
    Neg,
    /// `+`
    Plus,
    /// `!`, `not`
    Not,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Plus => "+",
            UnaryOp::Not => "!",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// An expression node.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub pos: Position,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, pos: Position) -> Self {
        Expr { kind, pos }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Literal(Value),
    Variable(String),
    /// `name(args)`: resolved through the module table at call time.
    ModuleCall {
        name: String,
        args: Vec<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Keyword(KeywordForm),
}

/// Keyword-introduced forms that produce a value.
#[derive(Clone, Debug, PartialEq)]
pub enum KeywordForm {
    /// `INPUT [type] name`
    Input {
        ty: Option<InputType>,
        target: String,
    },
    /// `OUTPUT a, b` / `PRINT a, b`
    Output(Vec<Expr>),
    /// `RUN name`
    Run(String),
}

/// Requested kind for `INPUT`. Without one, numeric text is read as a
/// number and anything else as a string.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum InputType {
    Number,
    Integer,
    String,
}

impl InputType {
    /// Case-insensitive lookup of a type name. `INT`, `FLOAT` and `REAL`
    /// are accepted as aliases.
    pub fn lookup(word: &str) -> Option<InputType> {
        const NAMES: [(&str, InputType); 6] = [
            ("number", InputType::Number),
            ("float", InputType::Number),
            ("real", InputType::Number),
            ("integer", InputType::Integer),
            ("int", InputType::Integer),
            ("string", InputType::String),
        ];
        NAMES
            .iter()
            .find(|(name, _)| word.eq_ignore_ascii_case(name))
            .map(|(_, ty)| *ty)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            InputType::Number => "number",
            InputType::Integer => "integer",
            InputType::String => "string",
        }
    }
}

/// `target <- value`. Also the initialiser of a `FOR` loop.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub target: String,
    pub value: Expr,
    pub pos: Position,
}

/// A statement node.
#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub pos: Position,
}

impl Stmt {
    #[inline]
    pub fn new(kind: StmtKind, pos: Position) -> Self {
        Stmt { kind, pos }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    Assign(Assignment),
    If {
        cond: Expr,
        then_branch: Vec<Stmt>,
        else_branch: Vec<Stmt>,
    },
    For {
        init: Assignment,
        bound: Expr,
        body: Vec<Stmt>,
    },
    While {
        cond: Expr,
        body: Vec<Stmt>,
    },
    Break,
    Continue,
    Return(Expr),
    Expr(Expr),
}

/// `PROGRAM name BEGIN ... END`
#[derive(Clone, Debug, PartialEq)]
pub struct ProgramDef {
    pub name: String,
    pub body: Vec<Stmt>,
    pub pos: Position,
}

/// `MODULE name PARAM a PARAM b BEGIN ... END`
#[derive(Clone, Debug, PartialEq)]
pub struct ModuleDef {
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
    pub pos: Position,
}

/// One top-level unit: the parser yields exactly one per call.
#[derive(Clone, Debug, PartialEq)]
pub enum Item {
    Program(ProgramDef),
    Module(ModuleDef),
    Statement(Stmt),
}

impl Item {
    pub fn pos(&self) -> Position {
        match self {
            Item::Program(p) => p.pos,
            Item::Module(m) => m.pos,
            Item::Statement(s) => s.pos,
        }
    }
}

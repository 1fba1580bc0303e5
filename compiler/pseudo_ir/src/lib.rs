//! Pseudo IR - shared data model for the pseudo interpreter.
//!
//! This crate contains the types every phase agrees on:
//! - [`Position`] for 1-based source locations
//! - [`Token`] and [`TokenKind`] produced by the lexer
//! - [`Value`], the runtime representation of every evaluated expression
//! - the syntax tree in [`ast`] produced by the parser
//!
//! Everything here is plain owned data. The syntax tree is boxed rather than
//! arena-allocated because programs and modules outlive the parse that built
//! them and are shared through the registry.

pub mod ast;
mod position;
mod token;
mod value;

pub use ast::{
    Assignment, BinaryOp, Expr, ExprKind, InputType, Item, KeywordForm, ModuleDef, ProgramDef,
    Stmt, StmtKind, UnaryOp,
};
pub use position::Position;
pub use token::{Keyword, Operator, Token, TokenKind};
pub use value::Value;

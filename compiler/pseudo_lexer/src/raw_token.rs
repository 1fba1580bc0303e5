//! Raw Token Definition
//!
//! The logos-derived tokenizer output for a single line, before keyword
//! classification and escape cooking.

use logos::Logos;

fn parse_number(lex: &mut logos::Lexer<'_, RawToken>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\x0B\x0C]+")]
pub(crate) enum RawToken {
    #[regex(r"#[^\n]*")]
    Comment,

    #[token(";")]
    Semi,

    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),

    #[regex(r#""([^"\\]|\\.)*""#)]
    #[regex(r"'([^'\\]|\\.)*'")]
    String,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Word,

    // Two-character operators
    #[token("==")]
    EqEq,
    #[token("<-")]
    Arrow,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("!=")]
    NotEq,
    #[token(":=")]
    ColonEq,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,

    // Single-character operators
    #[token("!")]
    Bang,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("=")]
    Eq,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,

    // Prefixes of longer tokens that are symbols on their own
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
}

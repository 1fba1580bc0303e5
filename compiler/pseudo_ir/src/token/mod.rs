//! Lexer output: positioned tokens.

use std::fmt;

use crate::Position;

/// A token together with the position of its first character.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: Position,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, pos: Position) -> Self {
        Token { kind, pos }
    }
}

/// Token kinds.
///
/// Keywords are stored canonically, so two keyword tokens compare equal
/// regardless of how they were spelled in the source. All other kinds compare
/// by exact value.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// End of statement: `;` or end of line.
    Eos,
    Ident(String),
    Keyword(Keyword),
    Operator(Operator),
    /// Any single character the lexer has no other rule for, e.g. `(` `)` `,`.
    Symbol(char),
    Number(f64),
    /// String literal with escapes already resolved.
    Str(String),
    /// The source is exhausted.
    Eof,
}

impl TokenKind {
    #[inline]
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == kw)
    }

    #[inline]
    pub fn is_operator(&self, op: Operator) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == op)
    }

    #[inline]
    pub fn is_symbol(&self, c: char) -> bool {
        matches!(self, TokenKind::Symbol(s) if *s == c)
    }

    /// The word this token was spelled with, if it is word-like.
    ///
    /// Word operators (`lt`, `not`, `equals`, ...) are lexed as identifiers
    /// and only recognised by the parser in operator position.
    pub fn word(&self) -> Option<&str> {
        match self {
            TokenKind::Ident(name) => Some(name),
            TokenKind::Keyword(kw) => Some(kw.as_str()),
            TokenKind::Operator(op) => Some(op.as_str()),
            _ => None,
        }
    }

    /// Short description used in "expected X, found Y" messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Eos => "end of statement".to_string(),
            TokenKind::Ident(name) => format!("identifier `{name}`"),
            TokenKind::Keyword(kw) => format!("keyword `{kw}`"),
            TokenKind::Operator(op) => format!("operator `{op}`"),
            TokenKind::Symbol(c) => format!("symbol `{c}`"),
            TokenKind::Number(n) => format!("number `{}`", crate::Value::Number(*n)),
            TokenKind::Str(s) => format!("string {s:?}"),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

macro_rules! define_keywords {
    ($($variant:ident => $text:literal,)*) => {
        /// Reserved words. Matching is case-insensitive.
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
        pub enum Keyword {
            $($variant,)*
        }

        impl Keyword {
            /// Canonical upper-case spelling.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Keyword::$variant => $text,)*
                }
            }

            /// Look up a keyword by its upper-cased spelling.
            fn from_upper(text: &str) -> Option<Keyword> {
                match text {
                    $($text => Some(Keyword::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

define_keywords! {
    Begin => "BEGIN",
    End => "END",
    For => "FOR",
    To => "TO",
    While => "WHILE",
    Then => "THEN",
    Do => "DO",
    Module => "MODULE",
    Program => "PROGRAM",
    Param => "PARAM",
    If => "IF",
    Else => "ELSE",
    Next => "NEXT",
    Repeat => "REPEAT",
    Output => "OUTPUT",
    Input => "INPUT",
    Print => "PRINT",
    Run => "RUN",
    Break => "BREAK",
    Continue => "CONTINUE",
    Return => "RETURN",
}

impl Keyword {
    /// Classify an identifier-shaped word.
    pub fn lookup(word: &str) -> Option<Keyword> {
        // Longest keyword is 8 chars; skip the allocation for anything longer.
        if word.len() > 8 {
            return None;
        }
        Keyword::from_upper(&word.to_ascii_uppercase())
    }

    /// Keywords allowed after `END` as a qualifier (`END IF`, `END WHILE`, ...).
    pub fn is_end_qualifier(self) -> bool {
        matches!(
            self,
            Keyword::If | Keyword::While | Keyword::For | Keyword::Program | Keyword::Module
        )
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operators recognised by the lexer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operator {
    EqEq,
    /// `<-`
    Arrow,
    LtEq,
    GtEq,
    NotEq,
    /// `:=`
    ColonEq,
    AndAnd,
    OrOr,
    /// `and`
    And,
    /// `or`
    Or,
    /// `eq`
    EqWord,
    /// `neq`
    NeqWord,
    Bang,
    Plus,
    Minus,
    Star,
    Slash,
    Lt,
    Gt,
    Eq,
    Amp,
    Pipe,
    Caret,
}

impl Operator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Operator::EqEq => "==",
            Operator::Arrow => "<-",
            Operator::LtEq => "<=",
            Operator::GtEq => ">=",
            Operator::NotEq => "!=",
            Operator::ColonEq => ":=",
            Operator::AndAnd => "&&",
            Operator::OrOr => "||",
            Operator::And => "and",
            Operator::Or => "or",
            Operator::EqWord => "eq",
            Operator::NeqWord => "neq",
            Operator::Bang => "!",
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Star => "*",
            Operator::Slash => "/",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::Eq => "=",
            Operator::Amp => "&",
            Operator::Pipe => "|",
            Operator::Caret => "^",
        }
    }

    /// Operators spelled as words. These are lexed from identifier-shaped
    /// text and are case-sensitive.
    pub fn from_word(word: &str) -> Option<Operator> {
        match word {
            "and" => Some(Operator::And),
            "or" => Some(Operator::Or),
            "eq" => Some(Operator::EqWord),
            "neq" => Some(Operator::NeqWord),
            _ => None,
        }
    }

    /// `=`, `<-` and `:=` introduce an assignment in statement position.
    pub fn is_assignment(self) -> bool {
        matches!(self, Operator::Eq | Operator::Arrow | Operator::ColonEq)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;

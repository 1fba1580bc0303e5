//! Runtime values.

use std::fmt;

/// The result of evaluating any expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Str(String),
    /// The null/void value. Produced by `NULL`, by statements with nothing
    /// to yield, and by native bindings that return nothing.
    Symbol,
}

impl Value {
    /// Comparison and logical results are numbers: 1 for true, 0 for false.
    #[inline]
    pub fn from_bool(b: bool) -> Value {
        Value::Number(if b { 1.0 } else { 0.0 })
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Symbol => "symbol",
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn is_symbol(&self) -> bool {
        matches!(self, Value::Symbol)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

/// Largest magnitude printed as an integer. Beyond this `f64` loses integer
/// precision and the float form is clearer.
const INTEGRAL_DISPLAY_LIMIT: f64 = 1e15;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => {
                if n.is_nan() {
                    f.write_str("nan")
                } else if n.is_infinite() {
                    f.write_str(if *n > 0.0 { "inf" } else { "-inf" })
                } else if n.fract() == 0.0 && n.abs() < INTEGRAL_DISPLAY_LIMIT {
                    #[expect(
                        clippy::cast_possible_truncation,
                        reason = "integral and bounded by INTEGRAL_DISPLAY_LIMIT"
                    )]
                    let int = *n as i64;
                    write!(f, "{int}")
                } else {
                    write!(f, "{n}")
                }
            }
            Value::Str(s) => f.write_str(s),
            Value::Symbol => f.write_str("NULL"),
        }
    }
}

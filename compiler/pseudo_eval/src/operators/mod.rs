//! Binary and unary operator implementations.
//!
//! Direct enum-based dispatch: the value set is closed, so each operator is a
//! pattern match over operand kinds. Anything not matched is a type error
//! naming the operator and both operand types.

use pseudo_ir::{BinaryOp, UnaryOp, Value};

use crate::errors::{binary_type_mismatch, division_by_zero, unary_type_mismatch, EvalResult};

/// Evaluate a binary operation. Both operands are already evaluated.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => eval_number_binary(*a, *b, op),
        (Value::Str(a), Value::Str(b)) => match op {
            BinaryOp::Add => {
                let mut joined = String::with_capacity(a.len() + b.len());
                joined.push_str(a);
                joined.push_str(b);
                Ok(Value::Str(joined))
            }
            BinaryOp::Eq => Ok(Value::from_bool(a == b)),
            BinaryOp::NotEq => Ok(Value::from_bool(a != b)),
            _ => Err(binary_type_mismatch(op, left, right)),
        },
        (Value::Symbol, Value::Symbol) => match op {
            BinaryOp::Eq => Ok(Value::from_bool(true)),
            BinaryOp::NotEq => Ok(Value::from_bool(false)),
            _ => Err(binary_type_mismatch(op, left, right)),
        },
        _ => Err(binary_type_mismatch(op, left, right)),
    }
}

#[expect(
    clippy::float_cmp,
    reason = "language equality is exact numeric equality"
)]
fn eval_number_binary(a: f64, b: f64, op: BinaryOp) -> EvalResult {
    let value = match op {
        BinaryOp::Add => Value::Number(a + b),
        BinaryOp::Sub => Value::Number(a - b),
        BinaryOp::Mul => Value::Number(a * b),
        BinaryOp::Div => {
            if b == 0.0 {
                return Err(division_by_zero());
            }
            Value::Number(a / b)
        }
        BinaryOp::Lt => Value::from_bool(a < b),
        BinaryOp::Gt => Value::from_bool(a > b),
        BinaryOp::LtEq => Value::from_bool(a <= b),
        BinaryOp::GtEq => Value::from_bool(a >= b),
        BinaryOp::Eq => Value::from_bool(a == b),
        BinaryOp::NotEq => Value::from_bool(a != b),
        BinaryOp::And => Value::from_bool(truthy(a) && truthy(b)),
        BinaryOp::Or => Value::from_bool(truthy(a) || truthy(b)),
        BinaryOp::BitAnd => bitwise(a, b, |x, y| x & y),
        BinaryOp::BitOr => bitwise(a, b, |x, y| x | y),
        BinaryOp::BitXor => bitwise(a, b, |x, y| x ^ y),
    };
    Ok(value)
}

/// Nonzero is true. NaN counts as true, like any other nonzero value.
#[inline]
pub fn truthy(n: f64) -> bool {
    n != 0.0
}

/// Apply an integer operation to both operands truncated toward zero.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "bitwise operators are defined on the truncated 64-bit integer"
)]
fn bitwise(a: f64, b: f64, f: impl FnOnce(i64, i64) -> i64) -> Value {
    Value::Number(f(a as i64, b as i64) as f64)
}

/// Evaluate a unary operation.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> EvalResult {
    match (value, op) {
        (Value::Number(n), UnaryOp::Neg) => Ok(Value::Number(-n)),
        (Value::Number(n), UnaryOp::Plus) => Ok(Value::Number(*n)),
        (Value::Number(n), UnaryOp::Not) => Ok(Value::from_bool(!truthy(*n))),
        _ => Err(unary_type_mismatch(op, value)),
    }
}

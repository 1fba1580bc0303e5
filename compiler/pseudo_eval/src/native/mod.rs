//! Native bindings: host functions callable like user modules.
//!
//! Arguments are coerced leniently. Where a number is wanted, numeric text is
//! accepted; where text is wanted, a number is rendered the way `OUTPUT`
//! would print it. Host failures (an `Err` or a panic) surface as runtime
//! errors naming the binding.

use std::panic::{catch_unwind, AssertUnwindSafe};

use pseudo_ir::Value;

use crate::errors::{native_failure, wrong_arg_count, EvalResult};
use crate::registry::NativeBinding;

/// Every binding registered when an interpreter starts.
pub fn stdlib() -> [NativeBinding; 15] {
    [
        NativeBinding::new("abs", 1, |a| Ok(Value::Number(num(&a[0])?.abs()))),
        NativeBinding::new("sqrt", 1, native_sqrt),
        NativeBinding::new("floor", 1, |a| Ok(Value::Number(num(&a[0])?.floor()))),
        NativeBinding::new("ceil", 1, |a| Ok(Value::Number(num(&a[0])?.ceil()))),
        NativeBinding::new("round", 1, |a| Ok(Value::Number(num(&a[0])?.round()))),
        NativeBinding::new("trunc", 1, |a| Ok(Value::Number(num(&a[0])?.trunc()))),
        NativeBinding::new("pow", 2, |a| {
            Ok(Value::Number(num(&a[0])?.powf(num(&a[1])?)))
        }),
        NativeBinding::new("min", 2, |a| Ok(Value::Number(num(&a[0])?.min(num(&a[1])?)))),
        NativeBinding::new("max", 2, |a| Ok(Value::Number(num(&a[0])?.max(num(&a[1])?)))),
        NativeBinding::new("len", 1, native_len),
        NativeBinding::new("upper", 1, |a| Ok(Value::Str(text(&a[0]).to_uppercase()))),
        NativeBinding::new("lower", 1, |a| Ok(Value::Str(text(&a[0]).to_lowercase()))),
        NativeBinding::new("str", 1, |a| Ok(Value::Str(text(&a[0])))),
        NativeBinding::new("num", 1, |a| Ok(Value::Number(num(&a[0])?))),
        NativeBinding::new("substr", 3, native_substr),
    ]
}

/// Invoke a binding with already-evaluated arguments.
pub fn call_native(binding: &NativeBinding, args: &[Value]) -> EvalResult {
    if args.len() != binding.arity {
        return Err(wrong_arg_count(binding.name, binding.arity, args.len()));
    }
    tracing::trace!(name = binding.name, "calling native");
    match catch_unwind(AssertUnwindSafe(|| (binding.func)(args))) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(message)) => Err(native_failure(binding.name, message)),
        Err(_) => Err(native_failure(binding.name, "host function panicked")),
    }
}

/// Numeric view of an argument.
pub fn num(value: &Value) -> Result<f64, String> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::Str(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("expected a number, got {s:?}")),
        Value::Symbol => Err("expected a number, got NULL".to_string()),
    }
}

/// Text view of an argument.
pub fn text(value: &Value) -> String {
    match value {
        Value::Str(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Non-negative integer view of a number, for indices and lengths.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "clamped to zero and truncated toward zero first"
)]
fn index(n: f64) -> usize {
    if n.is_nan() {
        0
    } else {
        n.max(0.0).trunc() as usize
    }
}

fn native_sqrt(args: &[Value]) -> Result<Value, String> {
    let n = num(&args[0])?;
    if n < 0.0 {
        return Err("math domain error".to_string());
    }
    Ok(Value::Number(n.sqrt()))
}

#[expect(
    clippy::cast_precision_loss,
    reason = "string lengths are far below 2^52"
)]
fn native_len(args: &[Value]) -> Result<Value, String> {
    Ok(Value::Number(text(&args[0]).chars().count() as f64))
}

/// `substr(s, start, count)`: 0-based, counted in characters, clamped to the
/// end of the string.
fn native_substr(args: &[Value]) -> Result<Value, String> {
    let s = text(&args[0]);
    let start = index(num(&args[1])?);
    let count = index(num(&args[2])?);
    Ok(Value::Str(s.chars().skip(start).take(count).collect()))
}

#[cfg(test)]
mod tests;

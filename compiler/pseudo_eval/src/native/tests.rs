use pretty_assertions::assert_eq;

use super::*;
use crate::errors::EvalErrorKind;

fn binding(name: &str) -> NativeBinding {
    match stdlib().into_iter().find(|b| b.name == name) {
        Some(b) => b,
        None => panic!("no native named {name}"),
    }
}

fn call(name: &str, args: &[Value]) -> EvalResult {
    call_native(&binding(name), args)
}

fn n(v: f64) -> Value {
    Value::Number(v)
}

#[test]
fn test_names_are_unique() {
    let natives = stdlib();
    for (i, a) in natives.iter().enumerate() {
        assert!(
            natives[i + 1..].iter().all(|b| b.name != a.name),
            "{} registered twice",
            a.name
        );
    }
}

#[test]
fn test_math() {
    assert_eq!(call("abs", &[n(-3.5)]), Ok(n(3.5)));
    assert_eq!(call("sqrt", &[n(16.0)]), Ok(n(4.0)));
    assert_eq!(call("floor", &[n(2.7)]), Ok(n(2.0)));
    assert_eq!(call("ceil", &[n(2.1)]), Ok(n(3.0)));
    assert_eq!(call("round", &[n(2.5)]), Ok(n(3.0)));
    assert_eq!(call("round", &[n(-2.5)]), Ok(n(-3.0)));
    assert_eq!(call("trunc", &[n(-2.7)]), Ok(n(-2.0)));
    assert_eq!(call("pow", &[n(2.0), n(10.0)]), Ok(n(1024.0)));
    assert_eq!(call("min", &[n(2.0), n(-1.0)]), Ok(n(-1.0)));
    assert_eq!(call("max", &[n(2.0), n(-1.0)]), Ok(n(2.0)));
}

#[test]
fn test_numeric_text_is_coerced() {
    assert_eq!(call("abs", &[Value::from(" -4 ")]), Ok(n(4.0)));
    assert_eq!(call("pow", &[Value::from("3"), n(2.0)]), Ok(n(9.0)));
    assert_eq!(call("num", &[Value::from("2.5")]), Ok(n(2.5)));
}

#[test]
fn test_text() {
    assert_eq!(call("len", &[Value::from("héllo")]), Ok(n(5.0)));
    assert_eq!(call("len", &[n(123.0)]), Ok(n(3.0)));
    assert_eq!(call("upper", &[Value::from("abc")]), Ok(Value::from("ABC")));
    assert_eq!(call("lower", &[Value::from("AbC")]), Ok(Value::from("abc")));
    assert_eq!(call("str", &[n(3.0)]), Ok(Value::from("3")));
    assert_eq!(call("str", &[Value::Symbol]), Ok(Value::from("NULL")));
}

#[test]
fn test_substr_is_zero_based_and_clamped() {
    let s = Value::from("pseudo");
    assert_eq!(call("substr", &[s.clone(), n(0.0), n(3.0)]), Ok(Value::from("pse")));
    assert_eq!(call("substr", &[s.clone(), n(3.0), n(99.0)]), Ok(Value::from("udo")));
    assert_eq!(call("substr", &[s.clone(), n(10.0), n(2.0)]), Ok(Value::from("")));
    assert_eq!(call("substr", &[s, n(-2.0), n(2.0)]), Ok(Value::from("ps")));
}

#[test]
fn test_host_failures_name_the_binding() {
    let err = match call("sqrt", &[n(-1.0)]) {
        Err(err) => err,
        Ok(v) => panic!("expected error, got {v}"),
    };
    assert_eq!(err.to_string(), "sqrt: math domain error");

    let err = match call("num", &[Value::from("abc")]) {
        Err(err) => err,
        Ok(v) => panic!("expected error, got {v}"),
    };
    assert_eq!(err.to_string(), "num: expected a number, got \"abc\"");

    assert!(call("abs", &[Value::Symbol]).is_err());
}

#[test]
fn test_panics_are_contained() {
    fn boom(_: &[Value]) -> Result<Value, String> {
        panic!("boom")
    }
    let err = match call_native(&NativeBinding::new("boom", 0, boom), &[]) {
        Err(err) => err,
        Ok(v) => panic!("expected error, got {v}"),
    };
    assert!(matches!(err.kind, EvalErrorKind::NativeFailure { ref name, .. } if name == "boom"));
}

#[test]
fn test_arity_is_checked() {
    let err = match call("pow", &[n(1.0)]) {
        Err(err) => err,
        Ok(v) => panic!("expected error, got {v}"),
    };
    assert_eq!(err.to_string(), "pow expects 2 arguments, got 1");
}

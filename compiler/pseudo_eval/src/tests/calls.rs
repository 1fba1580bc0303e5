use pretty_assertions::assert_eq;

use pseudo_ir::Value;

use super::{eval, eval_err, feed, run};
use crate::{BufferConsole, Console, EvalErrorKind, Interpreter};

#[test]
fn test_recursive_module() {
    let src = "\
MODULE fact PARAM n
BEGIN
    IF n <= 1 THEN RETURN 1 END
    RETURN n * fact(n - 1)
END
OUTPUT fact(10)
";
    assert_eq!(run(src), "3628800\n");
}

#[test]
fn test_module_without_return_yields_last_value() {
    assert_eq!(
        eval("MODULE last PARAM a BEGIN b <- a + 1 END\nlast(1)"),
        Value::Number(2.0)
    );
    assert_eq!(eval("MODULE empty BEGIN END\nempty()"), Value::Symbol);
}

#[test]
fn test_invocations_do_not_see_caller_variables() {
    let src = "\
secret <- 1
MODULE peek BEGIN RETURN secret END
peek()
";
    let err = eval_err(src);
    assert_eq!(err.to_string(), "secret is undefined");
}

#[test]
fn test_callee_assignments_do_not_leak() {
    let src = "\
x <- 1
MODULE clobber PARAM x BEGIN x <- 99; y <- 2; RETURN x END
OUTPUT clobber(5), x
";
    assert_eq!(run(src), "99 1\n");
    let err = eval_err("MODULE set BEGIN y <- 2 END\nset()\ny");
    assert_eq!(err.to_string(), "y is undefined");
}

#[test]
fn test_arguments_are_evaluated_in_caller_scope() {
    let src = "\
n <- 20
MODULE inc PARAM n BEGIN RETURN n + 1 END
OUTPUT inc(n + 1)
";
    assert_eq!(run(src), "22\n");
}

#[test]
fn test_wrong_argument_count() {
    let err = eval_err("MODULE two PARAM a PARAM b BEGIN RETURN a END\ntwo(1)");
    assert_eq!(
        err.kind,
        EvalErrorKind::WrongArgCount {
            name: "two".to_string(),
            expected: 2,
            got: 1
        }
    );
    assert_eq!(err.pos.map(|p| p.row), Some(2));
}

#[test]
fn test_undefined_module_and_program() {
    assert_eq!(
        eval_err("nothing(1)").to_string(),
        "module nothing is undefined or is not a module"
    );
    assert_eq!(
        eval_err("PROGRAM p BEGIN END\np(1)").to_string(),
        "module p is undefined or is not a module"
    );
    assert_eq!(
        eval_err("RUN nowhere").to_string(),
        "program nowhere is undefined or is not a program"
    );
    assert_eq!(
        eval_err("MODULE m BEGIN END\nRUN m").to_string(),
        "program m is undefined or is not a program"
    );
}

#[test]
fn test_run_from_another_program() {
    let src = "\
PROGRAM helper BEGIN OUTPUT \"helping\" END
PROGRAM main
BEGIN
    OUTPUT \"start\"
    RUN helper
    OUTPUT \"end\"
END
";
    let mut interp = Interpreter::builder()
        .console(Console::buffer(BufferConsole::new()))
        .build();
    for result in feed(&mut interp, src) {
        assert!(result.is_ok());
    }
    assert!(interp.run_program("main").is_ok());
    assert_eq!(interp.console().output(), "start\nhelping\nend\n");
}

#[test]
fn test_program_result_is_last_statement() {
    assert_eq!(eval("PROGRAM p BEGIN x <- 41; x + 1 END\nRUN p"), Value::Number(42.0));
}

#[test]
fn test_call_depth_is_bounded() {
    let mut interp = Interpreter::builder()
        .console(Console::buffer(BufferConsole::new()))
        .max_call_depth(50)
        .build();
    let results = feed(
        &mut interp,
        "MODULE forever PARAM n BEGIN RETURN forever(n + 1) END\nforever(0)",
    );
    let err = match &results[1] {
        Err(err) => err,
        Ok(v) => panic!("expected error, got {v}"),
    };
    assert_eq!(err.kind, EvalErrorKind::CallDepthExceeded { limit: 50 });
    assert_eq!(err.backtrace.len(), 50);
    assert_eq!(interp.call_depth(), 0);

    // The session is still usable afterwards.
    let results = feed(&mut interp, "OUTPUT 1");
    assert!(results[0].is_ok());
}

#[test]
fn test_errors_carry_backtrace() {
    let src = "\
MODULE inner PARAM x BEGIN RETURN x / 0 END
MODULE outer BEGIN RETURN inner(1) END
outer()
";
    let err = eval_err(src);
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    assert_eq!(err.pos.map(|p| (p.row, p.col)), Some((1, 35)));
    let names: Vec<&str> = err.backtrace.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["inner", "outer"]);
    assert_eq!(err.backtrace[0].call_pos.row, 2);
    assert_eq!(err.backtrace[1].call_pos.row, 3);
}

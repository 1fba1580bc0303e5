//! End-to-end evaluator tests: parse real source, run it, inspect the
//! console transcript and the values produced.

mod calls;

use pseudo_ir::Value;
use pseudo_lexer::TextSource;
use pseudo_parse::Parser;

use crate::{BufferConsole, Console, EvalError, Interpreter};

fn interpreter(input: &[&str]) -> Interpreter {
    Interpreter::builder()
        .console(Console::buffer(BufferConsole::with_input(input.iter().copied())))
        .trace(true)
        .build()
}

/// Feed every unit of `text` to `interp`, collecting each unit's outcome.
fn feed(interp: &mut Interpreter, text: &str) -> Vec<Result<Value, EvalError>> {
    let mut parser = Parser::new(TextSource::new("test.pseudo", text));
    let mut results = Vec::new();
    loop {
        match parser.parse_unit() {
            Ok(Some(item)) => results.push(interp.eval_item(item)),
            Ok(None) => return results,
            Err(err) => panic!("unexpected parse error: {err}"),
        }
    }
}

/// Run `text` and return the value of its last unit, failing on any error.
fn eval(text: &str) -> Value {
    let mut interp = interpreter(&[]);
    let results = feed(&mut interp, text);
    let mut last = Value::Symbol;
    for result in results {
        match result {
            Ok(value) => last = value,
            Err(err) => panic!("unexpected runtime error in {text:?}: {err}"),
        }
    }
    last
}

/// Run `text` and return the first runtime error.
fn eval_err(text: &str) -> EvalError {
    let mut interp = interpreter(&[]);
    for result in feed(&mut interp, text) {
        if let Err(err) = result {
            return err;
        }
    }
    panic!("expected a runtime error in {text:?}")
}

/// Run `text`, then every program it defines in order, and return the
/// console transcript.
fn run_with_input(text: &str, input: &[&str]) -> String {
    let mut interp = interpreter(input);
    for result in feed(&mut interp, text) {
        if let Err(err) = result {
            panic!("unexpected runtime error: {err}");
        }
    }
    let programs = interp.program_names().to_vec();
    for name in programs {
        if let Err(err) = interp.run_program(&name) {
            panic!("program {name} failed: {err}");
        }
    }
    interp.console().output().to_string()
}

fn run(text: &str) -> String {
    run_with_input(text, &[])
}

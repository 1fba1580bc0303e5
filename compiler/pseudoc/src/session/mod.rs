//! The read-eval loop shared by file runs and the interactive session.
//!
//! A [`Session`] pulls one unit at a time from a [`Parser`], registers
//! definitions, evaluates statements in the interpreter's top-level scope,
//! and turns every parse or runtime error into a [`Diagnostic`]. Errors are
//! never fatal: the parser resynchronizes and the loop carries on.

use pseudo_diagnostic::{Diagnostic, DiagnosticEmitter, ErrorCode};
use pseudo_eval::{EvalError, Interpreter};
use pseudo_ir::{Item, Position};
use pseudo_lexer::{LexError, Lexer, LineSource};
use pseudo_parse::{ParseError, Parser};

/// Prompt used when several programs are defined and none is `main`.
pub const SELECT_PROMPT: &str = "program to run: ";

/// How a call to [`Session::run_source`] ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The source was exhausted.
    Finished,
    /// Ctrl-C at top level, or the source could not be read.
    Interrupted,
}

pub struct Session<E> {
    interpreter: Interpreter,
    emitter: E,
    interactive: bool,
    errors: usize,
}

impl<E: DiagnosticEmitter> Session<E> {
    /// `interactive` selects line-level recovery after parse errors.
    pub fn new(interpreter: Interpreter, emitter: E, interactive: bool) -> Self {
        Session {
            interpreter,
            emitter,
            interactive,
            errors: 0,
        }
    }

    /// Parse and evaluate units until the source runs out.
    pub fn run_source<S: LineSource>(&mut self, parser: &mut Parser<S>) -> Outcome {
        loop {
            match parser.parse_unit() {
                Ok(Some(item)) => self.eval_unit(item, parser.lexer()),
                Ok(None) => return Outcome::Finished,
                Err(err) if err.is_interrupt() => {
                    if parser.lexer().depth() == 0 {
                        tracing::debug!("interrupted at top level");
                        return Outcome::Interrupted;
                    }
                    tracing::debug!(depth = parser.lexer().depth(), "unit cancelled");
                    parser.recover(true);
                }
                Err(ParseError::Lex(LexError::Io(err))) => {
                    let source = parser.lexer().source_name();
                    self.emit(
                        &Diagnostic::error(ErrorCode::E9001)
                            .with_message(format!("failed to read {source}: {err}")),
                    );
                    return Outcome::Interrupted;
                }
                Err(err) => {
                    let diagnostic = parse_diagnostic(&err, parser.lexer());
                    self.emit(&diagnostic);
                    parser.recover(self.interactive);
                }
            }
        }
    }

    /// Evaluate one parsed unit. Statements echo their value unless it is a
    /// symbol.
    fn eval_unit<S: LineSource>(&mut self, item: Item, lexer: &Lexer<S>) {
        let echo = matches!(item, Item::Statement(_));
        match self.interpreter.eval_item(item) {
            Ok(value) => {
                if echo && !value.is_symbol() {
                    self.interpreter.console_mut().println(&value.to_string());
                }
            }
            Err(err) => {
                let diagnostic = runtime_diagnostic(&err, lexer);
                self.emit(&diagnostic);
            }
        }
    }

    /// After a whole file: run its only program, or `main`, or ask which.
    pub fn run_programs<S: LineSource>(&mut self, lexer: &Lexer<S>) {
        let names = self.interpreter.program_names().to_vec();
        match names.as_slice() {
            [] => {}
            [only] => self.run_program(only, lexer),
            _ if names.iter().any(|name| name == "main") => self.run_program("main", lexer),
            _ => self.select_programs(&names, lexer),
        }
    }

    /// Ask for program names until empty input or end of input.
    fn select_programs<S: LineSource>(&mut self, names: &[String], lexer: &Lexer<S>) {
        self.interpreter
            .console_mut()
            .println(&format!("Programs: {}", names.join(", ")));
        loop {
            let reply = match self.interpreter.console_mut().read_line(SELECT_PROMPT) {
                Ok(Some(reply)) => reply,
                Ok(None) => return,
                Err(err) => {
                    let diagnostic = runtime_diagnostic(&err, lexer);
                    self.emit(&diagnostic);
                    return;
                }
            };
            let choice = reply.trim();
            if choice.is_empty() {
                return;
            }
            if names.iter().any(|name| name == choice) {
                self.run_program(choice, lexer);
            } else {
                self.emit(
                    &Diagnostic::warning(ErrorCode::E6002)
                        .with_message(format!("no program named {choice}"))
                        .with_note(format!("available: {}", names.join(", "))),
                );
            }
        }
    }

    fn run_program<S: LineSource>(&mut self, name: &str, lexer: &Lexer<S>) {
        tracing::debug!(name, "running program");
        if let Err(err) = self.interpreter.run_program(name) {
            let diagnostic = runtime_diagnostic(&err, lexer);
            self.emit(&diagnostic);
        }
    }

    fn emit(&mut self, diagnostic: &Diagnostic) {
        if diagnostic.is_error() {
            self.errors += 1;
        }
        self.emitter.emit(diagnostic);
        self.emitter.flush();
    }

    /// Number of error diagnostics reported so far.
    pub fn error_count(&self) -> usize {
        self.errors
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// The assignment trace, rendered, if tracing is enabled.
    pub fn trace_report(&self) -> Option<String> {
        self.interpreter.trace().map(|trace| trace.render())
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    pub fn into_emitter(self) -> E {
        self.emitter
    }
}

fn located<S: LineSource>(
    diagnostic: Diagnostic,
    pos: Option<Position>,
    lexer: &Lexer<S>,
) -> Diagnostic {
    match pos {
        Some(pos) => {
            let line = lexer.line(pos.row).map(str::to_string);
            diagnostic.with_location(lexer.source_name(), pos, line)
        }
        None => diagnostic,
    }
}

/// Convert a parse error, adding what was being parsed as a note.
pub fn parse_diagnostic<S: LineSource>(err: &ParseError, lexer: &Lexer<S>) -> Diagnostic {
    let diagnostic = Diagnostic::error(err.code()).with_message(err.to_string());
    let diagnostic = match err.context() {
        Some(context) => diagnostic.with_note(format!("while parsing {}", context.description())),
        None => diagnostic,
    };
    located(diagnostic, err.pos(), lexer)
}

/// Convert a runtime error, adding one note per active invocation.
pub fn runtime_diagnostic<S: LineSource>(err: &EvalError, lexer: &Lexer<S>) -> Diagnostic {
    let mut diagnostic = Diagnostic::error(err.code()).with_message(err.to_string());
    for frame in &err.backtrace {
        diagnostic = diagnostic.with_note(format!("in {} called at {}", frame.name, frame.call_pos));
    }
    located(diagnostic, err.pos, lexer)
}

//! The file command: evaluate a source file, then run its program.

use std::path::Path;

use pseudo_eval::Interpreter;
use pseudo_lexer::TextSource;
use pseudo_parse::Parser;
use pseudoc::{RunOptions, Session};

use super::{report_trace, stderr_emitter};

/// Run `path` and return the process exit code.
///
/// Every unit is parsed and evaluated even after errors; the exit code is
/// nonzero if any error was reported.
pub fn run_file(path: &Path, options: &RunOptions) -> i32 {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error: cannot read '{}': {err}", path.display());
            return 1;
        }
    };
    tracing::debug!(path = %path.display(), bytes = text.len(), "running file");

    let interpreter = Interpreter::builder().trace(options.trace).build();
    let mut session = Session::new(interpreter, stderr_emitter(options), false);
    let mut parser = Parser::new(TextSource::new(path.display().to_string(), &text));

    session.run_source(&mut parser);
    session.run_programs(parser.lexer());
    report_trace(&session, options);

    tracing::debug!(errors = session.error_count(), "file finished");
    i32::from(session.has_errors())
}

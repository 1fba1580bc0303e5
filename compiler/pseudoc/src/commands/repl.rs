//! The interactive session.

use pseudo_eval::Interpreter;
use pseudo_parse::Parser;
use pseudoc::{banner, Outcome, ReplSource, RunOptions, Session};

use super::{report_trace, stderr_emitter};

/// Read-evaluate until Ctrl-D, or Ctrl-C at top level.
pub fn run_repl(options: &RunOptions) -> i32 {
    let source = match ReplSource::new() {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: cannot start interactive session: {err}");
            return 1;
        }
    };
    println!("{}", banner());

    let interpreter = Interpreter::builder().trace(options.trace).build();
    let mut session = Session::new(interpreter, stderr_emitter(options), true);
    let mut parser = Parser::new(source);

    let outcome = session.run_source(&mut parser);
    if outcome == Outcome::Finished {
        // Leave the shell prompt on its own line after Ctrl-D.
        println!();
    }
    report_trace(&session, options);

    parser.into_source().save_history();
    0
}

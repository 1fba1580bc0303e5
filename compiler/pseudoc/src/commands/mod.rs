//! Command handlers for the `pseudo` CLI.

mod repl;
mod run;

pub use repl::run_repl;
pub use run::run_file;

use std::io::IsTerminal;

use pseudo_diagnostic::TerminalEmitter;
use pseudoc::RunOptions;

/// Diagnostics go to stderr, colored per `--color`.
fn stderr_emitter(options: &RunOptions) -> TerminalEmitter<std::io::Stderr> {
    let is_tty = std::io::stderr().is_terminal();
    TerminalEmitter::stderr(options.color, is_tty)
}

/// Print the recorded trace, if `--trace` asked for one.
fn report_trace<E>(session: &pseudoc::Session<E>, options: &RunOptions)
where
    E: pseudo_diagnostic::DiagnosticEmitter,
{
    if !options.trace {
        return;
    }
    if let Some(report) = session.trace_report() {
        eprint!("{report}");
    }
}

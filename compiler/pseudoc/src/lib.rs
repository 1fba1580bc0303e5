//! Pseudo driver library.
//!
//! Ties the lexer, parser and evaluator together for the `pseudo` binary:
//! - [`Session`]: the parse-evaluate loop with diagnostic reporting
//! - [`ReplSource`]: rustyline-backed interactive input
//! - [`options`]: hand-parsed command-line options
//! - [`init_tracing`]: `PSEUDO_LOG`-gated logging

pub mod options;
pub mod repl;
pub mod session;
mod tracing_setup;

pub use options::{parse_args, usage, Command, RunOptions};
pub use repl::{banner, ReplSource, REPL_NAME};
pub use session::{Outcome, Session};
pub use tracing_setup::{init_tracing, LOG_ENV};

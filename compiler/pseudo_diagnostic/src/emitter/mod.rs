//! Diagnostic emitters.
//!
//! - [`TerminalEmitter`]: human-readable output with optional ANSI colors
//! - `Vec<Diagnostic>`: collects diagnostics unchanged, for tests and tools

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Flush any buffered output.
    fn flush(&mut self) {}
}

impl DiagnosticEmitter for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.push(diagnostic.clone());
    }
}

impl<E: DiagnosticEmitter + ?Sized> DiagnosticEmitter for &mut E {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        (**self).emit(diagnostic);
    }

    fn flush(&mut self) {
        (**self).flush();
    }
}

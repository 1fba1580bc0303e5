//! Terminal Emitter
//!
//! Renders a diagnostic as a header, a location arrow, the offending source
//! line and a caret under the column:
//!
//! ```text
//! error[E6003]: Cannot divide by zero
//!   --> demo.pseudo:3:10
//!   |
//! 3 | x <- 1 / 0
//!   |          ^
//! ```

use std::io::{self, Write};

use crate::{Diagnostic, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Use colors when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of a `--color=` flag.
    pub fn parse(text: &str) -> Option<ColorMode> {
        match text {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Consume the emitter and return its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_header(&mut self, diagnostic: &Diagnostic) {
        let color = match diagnostic.severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
        };
        let head = format!("{}[{}]", diagnostic.severity, diagnostic.code);
        self.write_colored(&head, color);
        if self.colors {
            let _ = writeln!(
                self.writer,
                "{}: {}{}",
                colors::BOLD,
                diagnostic.message,
                colors::RESET
            );
        } else {
            let _ = writeln!(self.writer, ": {}", diagnostic.message);
        }
    }

    fn write_snippet(&mut self, row: u32, col: u32, line: &str) {
        let number = row.to_string();
        let pad = " ".repeat(number.len());

        let _ = write!(self.writer, "{pad} ");
        self.write_colored("|", colors::GUTTER);
        let _ = writeln!(self.writer);

        self.write_colored(&format!("{number} |"), colors::GUTTER);
        let _ = writeln!(self.writer, " {line}");

        // Tabs in the line are echoed verbatim so the caret stays aligned.
        let lead: String = line
            .chars()
            .take(col.saturating_sub(1) as usize)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        let _ = write!(self.writer, "{pad} ");
        self.write_colored("|", colors::GUTTER);
        let _ = write!(self.writer, " {lead}");
        self.write_colored("^", colors::ERROR);
        let _ = writeln!(self.writer);
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_header(diagnostic);

        if let Some(loc) = &diagnostic.location {
            let _ = write!(self.writer, "  ");
            self.write_colored("-->", colors::GUTTER);
            let _ = writeln!(self.writer, " {}:{}", loc.source, loc.pos);
            if let Some(line) = &loc.line {
                self.write_snippet(loc.pos.row, loc.pos.col, line);
            }
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::NOTE);
            let _ = writeln!(self.writer, ": {note}");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

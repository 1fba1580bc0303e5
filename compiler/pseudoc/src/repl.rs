//! Interactive line source backed by rustyline.

use std::env;
use std::io;
use std::path::PathBuf;

use pseudo_lexer::{prompt_for_depth, LineSource, SourceError};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

/// Source name used in diagnostics for interactive input.
pub const REPL_NAME: &str = "<repl>";

/// Printed when an interactive session starts.
pub fn banner() -> String {
    format!(
        "pseudo {}\nPress Ctrl-D to exit.",
        env!("CARGO_PKG_VERSION")
    )
}

/// Reads lines from the terminal, prompting by nesting depth.
///
/// Ctrl-C surfaces as [`SourceError::Interrupted`] and Ctrl-D as end of
/// input. History persists in `~/.pseudo_history` when `HOME` is set.
pub struct ReplSource {
    editor: Editor<(), DefaultHistory>,
    history: Option<PathBuf>,
}

impl ReplSource {
    pub fn new() -> rustyline::Result<Self> {
        let mut editor = Editor::<(), DefaultHistory>::new()?;
        let history = history_path();
        if let Some(path) = &history {
            // Missing on first run.
            let _ = editor.load_history(path);
        }
        Ok(ReplSource { editor, history })
    }

    pub fn save_history(&mut self) {
        if let Some(path) = &self.history {
            if let Err(err) = self.editor.save_history(path) {
                tracing::debug!(%err, path = %path.display(), "history not saved");
            }
        }
    }
}

impl LineSource for ReplSource {
    fn next_line(&mut self, depth: usize) -> Result<Option<String>, SourceError> {
        match self.editor.readline(&prompt_for_depth(depth)) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) => Err(SourceError::Interrupted),
            Err(ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Io(err)) => Err(SourceError::Io(err)),
            Err(err) => Err(SourceError::Io(io::Error::other(err.to_string()))),
        }
    }

    fn name(&self) -> &str {
        REPL_NAME
    }
}

fn history_path() -> Option<PathBuf> {
    let home = env::var_os("HOME")?;
    Some(PathBuf::from(home).join(".pseudo_history"))
}

//! Where source lines come from.

use crate::SourceError;

/// A pull-based supplier of source lines.
///
/// The lexer asks for one line at a time, only when it needs more tokens.
/// `depth` is the current block nesting, which interactive sources use to
/// choose a continuation prompt.
pub trait LineSource {
    /// The next line without its terminator, or `None` once exhausted.
    fn next_line(&mut self, depth: usize) -> Result<Option<String>, SourceError>;

    /// Name shown in diagnostics (a file path, or `<repl>`).
    fn name(&self) -> &str;
}

impl<S: LineSource + ?Sized> LineSource for Box<S> {
    fn next_line(&mut self, depth: usize) -> Result<Option<String>, SourceError> {
        (**self).next_line(depth)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// A complete, already-read text split into lines up front.
pub struct TextSource {
    name: String,
    lines: std::vec::IntoIter<String>,
}

impl TextSource {
    pub fn new(name: impl Into<String>, text: &str) -> Self {
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        TextSource {
            name: name.into(),
            lines: lines.into_iter(),
        }
    }
}

impl LineSource for TextSource {
    fn next_line(&mut self, _depth: usize) -> Result<Option<String>, SourceError> {
        Ok(self.lines.next())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Prompt for an interactive source at the given nesting depth.
///
/// `>>> ` at top level, `... ` one level in, and four more dots per
/// additional level.
pub fn prompt_for_depth(depth: usize) -> String {
    if depth == 0 {
        ">>> ".to_string()
    } else {
        format!("{}... ", "....".repeat(depth - 1))
    }
}

//! Console for `OUTPUT` and `INPUT`.
//!
//! Output and input can be directed to different places:
//! - Stdio: the process's stdout and stdin (default)
//! - Buffer: an in-memory transcript fed from queued input lines, for tests
//!
//! Uses enum dispatch rather than a trait object; the set of consoles is
//! closed.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use pseudo_ir::{InputType, Value};

use crate::errors::{input_failed, EvalError};

/// Console backed by the process's standard streams.
#[derive(Default)]
pub struct StdioConsole;

impl StdioConsole {
    pub fn println(&mut self, msg: &str) {
        println!("{msg}");
    }

    /// Show `prompt` and read one line from stdin. `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;
        drop(stdout);

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Console that records a transcript and answers input from a queue.
///
/// Prompts are written to the transcript, so tests see exactly what a user
/// would see, minus the echo of their own typing.
#[derive(Default)]
pub struct BufferConsole {
    inputs: VecDeque<String>,
    output: String,
}

impl BufferConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// A console whose input is `lines`, consumed in order.
    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BufferConsole {
            inputs: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
        }
    }

    pub fn println(&mut self, msg: &str) {
        self.output.push_str(msg);
        self.output.push('\n');
    }

    pub fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.output.push_str(prompt);
        self.inputs.pop_front()
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn clear(&mut self) {
        self.output.clear();
    }
}

/// Console implementation using enum dispatch.
pub enum Console {
    /// Standard streams (default).
    Stdio(StdioConsole),
    /// In-memory transcript (testing).
    Buffer(BufferConsole),
}

impl Default for Console {
    fn default() -> Self {
        Console::Stdio(StdioConsole)
    }
}

impl Console {
    pub fn stdio() -> Self {
        Self::default()
    }

    pub fn buffer(console: BufferConsole) -> Self {
        Console::Buffer(console)
    }

    /// Print a line (with newline).
    pub fn println(&mut self, msg: &str) {
        match self {
            Self::Stdio(c) => c.println(msg),
            Self::Buffer(c) => c.println(msg),
        }
    }

    /// Read one line after showing `prompt`.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>, EvalError> {
        match self {
            Self::Stdio(c) => c.read_line(prompt).map_err(|e| input_failed(e.to_string())),
            Self::Buffer(c) => Ok(c.read_line(prompt)),
        }
    }

    /// Captured output. Empty for consoles that don't capture.
    pub fn output(&self) -> &str {
        match self {
            Self::Stdio(_) => "",
            Self::Buffer(c) => c.output(),
        }
    }

    /// Clear captured output.
    pub fn clear(&mut self) {
        match self {
            Self::Stdio(_) => {}
            Self::Buffer(c) => c.clear(),
        }
    }

    /// Prompt for `name` until the reply fits `ty`.
    ///
    /// Without a type, numeric text becomes a number and anything else a
    /// string. End of input while waiting is an error.
    pub fn read_value(&mut self, name: &str, ty: Option<InputType>) -> Result<Value, EvalError> {
        let prompt = match ty {
            Some(ty) => format!("{name} ({}): ", ty.as_str()),
            None => format!("{name}: "),
        };
        loop {
            let Some(line) = self.read_line(&prompt)? else {
                return Err(input_failed(format!("end of input while reading {name}")));
            };
            match ty {
                None => return Ok(parse_number(&line).map_or(Value::Str(line), Value::Number)),
                Some(InputType::String) => return Ok(Value::Str(line)),
                Some(InputType::Number) => match parse_number(&line) {
                    Some(n) => return Ok(Value::Number(n)),
                    None => self.println("Please enter a number."),
                },
                Some(InputType::Integer) => match parse_integer(&line) {
                    Some(n) => return Ok(Value::Number(n)),
                    None => self.println("Please enter an integer."),
                },
            }
        }
    }
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

#[expect(
    clippy::cast_precision_loss,
    reason = "values are stored as f64 like every other number"
)]
fn parse_integer(text: &str) -> Option<f64> {
    text.trim().parse::<i64>().ok().map(|n| n as f64)
}

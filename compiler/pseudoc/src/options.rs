//! Command-line options.
//!
//! Parsed by hand: the interface is one optional file plus a few flags.

use std::path::PathBuf;

use pseudo_diagnostic::ColorMode;

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run a file, or start an interactive session when no file is given.
    Run(RunOptions),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub path: Option<PathBuf>,
    /// Print the assignment trace to stderr after a file run.
    pub trace: bool,
    pub color: ColorMode,
}

/// Parse arguments (without the program name).
pub fn parse_args<I, S>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = RunOptions::default();
    for arg in args {
        let arg = arg.as_ref();
        match arg {
            "help" | "--help" | "-h" => return Ok(Command::Help),
            "version" | "--version" | "-V" => return Ok(Command::Version),
            "--trace" => options.trace = true,
            "--no-color" => options.color = ColorMode::Never,
            _ => {
                if let Some(value) = arg.strip_prefix("--color=") {
                    options.color = ColorMode::parse(value).ok_or_else(|| {
                        format!("invalid value '{value}' for --color (expected auto, always or never)")
                    })?;
                } else if arg.starts_with('-') {
                    return Err(format!("unknown option '{arg}'"));
                } else if options.path.is_some() {
                    return Err(format!("unexpected argument '{arg}'"));
                } else {
                    options.path = Some(PathBuf::from(arg));
                }
            }
        }
    }
    Ok(Command::Run(options))
}

pub fn usage() -> String {
    let name = env!("CARGO_PKG_NAME");
    format!(
        "\
An interpreter for simple Pascal-like pseudocode.

Usage: pseudo [options] [FILE]

Without FILE, starts an interactive session.

Options:
  --trace             Print every assignment, grouped by call, after a file run
  --color=<when>      Color diagnostics: auto, always, never (default: auto)
  --no-color          Same as --color=never
  -h, --help          Show this help message
  -V, --version       Show version information

Environment:
  PSEUDO_LOG          Log filter, e.g. PSEUDO_LOG=debug or PSEUDO_LOG=pseudo_parse=trace

({name} {})",
        env!("CARGO_PKG_VERSION")
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn no_arguments_starts_a_session() {
        assert_eq!(
            parse_args(Vec::<String>::new()),
            Ok(Command::Run(RunOptions::default()))
        );
    }

    #[test]
    fn file_and_flags() {
        let parsed = parse_args(["--trace", "demo.pseudo", "--color=always"]);
        assert_eq!(
            parsed,
            Ok(Command::Run(RunOptions {
                path: Some(PathBuf::from("demo.pseudo")),
                trace: true,
                color: ColorMode::Always,
            }))
        );
        let parsed = parse_args(["--no-color", "x"]);
        assert!(matches!(parsed, Ok(Command::Run(RunOptions { color: ColorMode::Never, .. }))));
    }

    #[test]
    fn help_and_version_win() {
        assert_eq!(parse_args(["demo.pseudo", "-h"]), Ok(Command::Help));
        assert_eq!(parse_args(["--version"]), Ok(Command::Version));
        assert_eq!(parse_args(["-V"]), Ok(Command::Version));
    }

    #[test]
    fn bad_arguments() {
        assert!(parse_args(["--colour"]).is_err());
        assert!(parse_args(["--color=sometimes"]).is_err());
        assert!(parse_args(["a.pseudo", "b.pseudo"]).is_err());
    }
}

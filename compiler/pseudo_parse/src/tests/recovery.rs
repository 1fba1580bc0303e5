use pretty_assertions::assert_eq;

use pseudo_ir::Item;
use pseudo_lexer::{LineSource, SourceError};

use super::{outline_stmt, parser};
use crate::Parser;

/// Interactive-style source that records the depth of every request.
struct Scripted {
    lines: Vec<Result<Option<String>, SourceError>>,
    depths: Vec<usize>,
}

impl Scripted {
    fn new(lines: Vec<Result<Option<String>, SourceError>>) -> Self {
        Scripted {
            lines: lines.into_iter().rev().collect(),
            depths: Vec::new(),
        }
    }
}

impl LineSource for Scripted {
    fn next_line(&mut self, depth: usize) -> Result<Option<String>, SourceError> {
        self.depths.push(depth);
        self.lines.pop().unwrap_or(Ok(None))
    }

    fn name(&self) -> &str {
        "<scripted>"
    }
}

fn line(text: &str) -> Result<Option<String>, SourceError> {
    Ok(Some(text.to_string()))
}

fn describe(item: &Item) -> String {
    match item {
        Item::Program(p) => format!("PROGRAM {}", p.name),
        Item::Module(m) => format!("MODULE {}", m.name),
        Item::Statement(s) => outline_stmt(s),
    }
}

/// Parse everything, recovering after each error. Errors show as `!`.
fn parse_recovering<S: LineSource>(p: &mut Parser<S>, interactive: bool) -> Vec<String> {
    let mut out = Vec::new();
    loop {
        match p.parse_unit() {
            Ok(Some(item)) => out.push(describe(&item)),
            Ok(None) => return out,
            Err(_) => {
                out.push("!".to_string());
                p.recover(interactive);
            }
        }
    }
}

#[test]
fn test_file_error_in_program_skips_to_next_definition() {
    let text = "PROGRAM a\nBEGIN\n  x <- )\n  y <- 2\nEND\nPROGRAM b\nBEGIN\nEND";
    let mut p = parser(text);
    assert_eq!(parse_recovering(&mut p, false), vec!["!", "PROGRAM b"]);
    assert_eq!(p.lexer().depth(), 0);
}

#[test]
fn test_file_error_in_statement_drops_the_line() {
    let mut p = parser("x <- )\ny <- 2");
    assert_eq!(parse_recovering(&mut p, false), vec!["!", "y <- 2"]);
}

#[test]
fn test_file_error_in_block_skips_to_its_end() {
    let text = "IF 0 THEN\n  x <- )\n  OUTPUT 1\nEND\ny <- 2";
    let mut p = parser(text);
    assert_eq!(parse_recovering(&mut p, false), vec!["!", "y <- 2"]);
    assert_eq!(p.lexer().depth(), 0);
}

#[test]
fn test_file_error_in_nested_block_balances_closers() {
    let text = "\
WHILE 1
  IF x THEN
    y <- )
  END IF
  FOR i <- 1 TO 3
  NEXT
REPEAT
z <- 3";
    let mut p = parser(text);
    assert_eq!(parse_recovering(&mut p, false), vec!["!", "z <- 3"]);
}

#[test]
fn test_file_error_in_block_header_skips_else_if_chain() {
    let text = "\
IF ) THEN
  OUTPUT 1
ELSE IF x THEN
  OUTPUT 2
END
w <- 4";
    let mut p = parser(text);
    assert_eq!(parse_recovering(&mut p, false), vec!["!", "w <- 4"]);
}

#[test]
fn test_file_error_in_unclosed_block_stops_at_definition() {
    let text = "IF 1 THEN\n  x <- )\nPROGRAM p BEGIN END";
    let mut p = parser(text);
    assert_eq!(parse_recovering(&mut p, false), vec!["!", "PROGRAM p"]);
}

#[test]
fn test_file_recovery_stops_before_module() {
    let text = "MODULE m\nPARAM\nBEGIN\nEND\nMODULE n BEGIN RETURN 1 END";
    let mut p = parser(text);
    assert_eq!(parse_recovering(&mut p, false), vec!["!", "MODULE n"]);
}

#[test]
fn test_lex_error_in_program_skips_rest_of_file() {
    let text = "PROGRAM a\nBEGIN\n  s <- \"oops\n  y <- 1\nEND\nx <- 5";
    let mut p = parser(text);
    assert_eq!(parse_recovering(&mut p, false), vec!["!"]);
}

#[test]
fn test_interactive_error_discards_line_and_depth() {
    let mut p = Parser::new(Scripted::new(vec![
        line("IF x THEN"),
        line("  y <- )"),
        line("z <- 1"),
    ]));
    assert_eq!(parse_recovering(&mut p, true), vec!["!", "z <- 1"]);
    assert_eq!(p.lexer().source().depths, vec![0, 1, 0, 0]);
}

#[test]
fn test_interactive_error_in_program_does_not_skip_ahead() {
    let mut p = Parser::new(Scripted::new(vec![
        line("PROGRAM p"),
        line("BEGIN"),
        line("  1 +"),
        line("x <- 2"),
    ]));
    assert_eq!(parse_recovering(&mut p, true), vec!["!", "x <- 2"]);
}

#[test]
fn test_interrupt_cancels_pending_block() {
    let mut p = Parser::new(Scripted::new(vec![
        line("WHILE 1"),
        Err(SourceError::Interrupted),
        line("OUTPUT(1)"),
    ]));

    let err = match p.parse_unit() {
        Err(err) => err,
        Ok(item) => panic!("expected an interrupt, got {item:?}"),
    };
    assert!(err.is_interrupt());
    assert_eq!(err.pos(), None);

    p.recover(true);
    assert_eq!(p.lexer().depth(), 0);
    assert_eq!(parse_recovering(&mut p, true), vec!["(OUTPUT 1)"]);
}

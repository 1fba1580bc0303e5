use pretty_assertions::assert_eq;

use pseudo_ir::{Item, Position};

use super::{outline, parse_all, parse_err, parse_one};
use crate::ErrorContext;

#[test]
fn test_program_definition() {
    let Item::Program(program) = parse_one("PROGRAM hello\nBEGIN\n  OUTPUT(\"hi\")\nEND") else {
        panic!("expected a program");
    };
    assert_eq!(program.name, "hello");
    assert_eq!(program.pos, Position::new(1, 1));
    assert_eq!(outline(&program.body), vec!["(OUTPUT \"hi\")"]);
}

#[test]
fn test_program_on_one_line() {
    let Item::Program(program) = parse_one("PROGRAM p BEGIN x <- 1 + 2; OUTPUT (x) END") else {
        panic!("expected a program");
    };
    assert_eq!(outline(&program.body), vec!["x <- (+ 1 2)", "(OUTPUT x)"]);
}

#[test]
fn test_keyword_statement_ends_previous_one_inside_block() {
    let Item::Program(program) = parse_one("PROGRAM p BEGIN x <- 1 + 2 OUTPUT (x) END") else {
        panic!("expected a program");
    };
    assert_eq!(outline(&program.body), vec!["x <- (+ 1 2)", "(OUTPUT x)"]);
}

#[test]
fn test_top_level_statements_still_need_a_separator() {
    let err = parse_err("x <- 1 OUTPUT(x)");
    assert_eq!(err.to_string(), "expected end of statement, found keyword `OUTPUT`");
}

#[test]
fn test_end_program_qualifier() {
    let items = parse_all("PROGRAM a\nBEGIN\nEND PROGRAM\nPROGRAM b\nBEGIN\nEND");
    let names: Vec<_> = items
        .iter()
        .map(|item| match item {
            Item::Program(p) => p.name.as_str(),
            other => panic!("expected a program, got {other:?}"),
        })
        .collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn test_module_with_params() {
    let text = "MODULE add\n  PARAM a\n  PARAM b\nBEGIN\n  RETURN a + b\nEND MODULE";
    let Item::Module(module) = parse_one(text) else {
        panic!("expected a module");
    };
    assert_eq!(module.name, "add");
    assert_eq!(module.params, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(outline(&module.body), vec!["RETURN (+ a b)"]);
}

#[test]
fn test_module_on_one_line() {
    let Item::Module(module) = parse_one("MODULE double PARAM n BEGIN RETURN n * 2 END") else {
        panic!("expected a module");
    };
    assert_eq!(module.params, vec!["n".to_string()]);
    assert_eq!(outline(&module.body), vec!["RETURN (* n 2)"]);
}

#[test]
fn test_module_without_params() {
    let Item::Module(module) = parse_one("MODULE noop BEGIN END") else {
        panic!("expected a module");
    };
    assert!(module.params.is_empty());
    assert!(module.body.is_empty());
}

#[test]
fn test_definitions_and_statements_interleave() {
    let items = parse_all("MODULE f BEGIN RETURN 1 END\nOUTPUT(f())\nPROGRAM main\nBEGIN\nEND");
    assert!(matches!(items[0], Item::Module(_)));
    assert!(matches!(items[1], Item::Statement(_)));
    assert!(matches!(items[2], Item::Program(_)));
}

#[test]
fn test_blank_lines_between_units() {
    assert_eq!(parse_all("\n\nx <- 1\n\n\ny <- 2\n").len(), 2);
}

#[test]
fn test_program_requires_begin() {
    let err = parse_err("PROGRAM p\n  x <- 1\nEND");
    assert_eq!(err.context(), Some(ErrorContext::Program));
    assert_eq!(err.to_string(), "expected `BEGIN`, found identifier `x`");
    assert_eq!(err.pos(), Some(Position::new(2, 3)));
}

#[test]
fn test_module_rejects_junk_before_begin() {
    let err = parse_err("MODULE m\n  x <- 1\nBEGIN\nEND");
    assert_eq!(err.context(), Some(ErrorContext::Module));
    assert_eq!(err.to_string(), "expected `PARAM` or `BEGIN`, found identifier `x`");
}

#[test]
fn test_program_name_must_be_identifier() {
    let err = parse_err("PROGRAM 1\nBEGIN\nEND");
    assert_eq!(err.to_string(), "expected program name, found number `1`");
}

#[test]
fn test_unterminated_program_stops_at_next_definition() {
    let err = parse_err("PROGRAM a\nBEGIN\n  x <- 1\nPROGRAM b\nBEGIN\nEND");
    assert_eq!(err.context(), Some(ErrorContext::Program));
    assert_eq!(err.pos(), Some(Position::new(4, 1)));
}

use pretty_assertions::assert_eq;

use super::*;

fn kinds(text: &str) -> Vec<TokenKind> {
    match lex_line(text, 1) {
        Ok(tokens) => tokens.into_iter().map(|t| t.kind).collect(),
        Err(err) => panic!("unexpected lex error: {err}"),
    }
}

fn ident(name: &str) -> TokenKind {
    TokenKind::Ident(name.to_string())
}

#[test]
fn test_lex_assignment() {
    assert_eq!(
        kinds("x <- 42"),
        vec![
            ident("x"),
            TokenKind::Operator(Operator::Arrow),
            TokenKind::Number(42.0),
            TokenKind::Eos,
        ]
    );
}

#[test]
fn test_lex_numbers() {
    assert_eq!(
        kinds("1 2.5 .25"),
        vec![
            TokenKind::Number(1.0),
            TokenKind::Number(2.5),
            TokenKind::Number(0.25),
            TokenKind::Eos,
        ]
    );
}

#[test]
fn test_trailing_dot_is_a_symbol() {
    assert_eq!(
        kinds("3."),
        vec![TokenKind::Number(3.0), TokenKind::Symbol('.'), TokenKind::Eos]
    );
}

#[test]
fn test_keywords_are_canonicalised() {
    assert_eq!(
        kinds("begin End PROGRAM"),
        vec![
            TokenKind::Keyword(Keyword::Begin),
            TokenKind::Keyword(Keyword::End),
            TokenKind::Keyword(Keyword::Program),
            TokenKind::Eos,
        ]
    );
}

#[test]
fn test_word_operators() {
    assert_eq!(
        kinds("a and b or c neq d eq e"),
        vec![
            ident("a"),
            TokenKind::Operator(Operator::And),
            ident("b"),
            TokenKind::Operator(Operator::Or),
            ident("c"),
            TokenKind::Operator(Operator::NeqWord),
            ident("d"),
            TokenKind::Operator(Operator::EqWord),
            ident("e"),
            TokenKind::Eos,
        ]
    );
}

#[test]
fn test_word_operator_prefix_stays_identifier() {
    assert_eq!(kinds("android orbit"), vec![ident("android"), ident("orbit"), TokenKind::Eos]);
}

#[test]
fn test_longest_match_operators() {
    assert_eq!(
        kinds("<= < - <- := == = !="),
        vec![
            TokenKind::Operator(Operator::LtEq),
            TokenKind::Operator(Operator::Lt),
            TokenKind::Operator(Operator::Minus),
            TokenKind::Operator(Operator::Arrow),
            TokenKind::Operator(Operator::ColonEq),
            TokenKind::Operator(Operator::EqEq),
            TokenKind::Operator(Operator::Eq),
            TokenKind::Operator(Operator::NotEq),
            TokenKind::Eos,
        ]
    );
}

#[test]
fn test_semicolon_and_comment() {
    assert_eq!(
        kinds("a; b # trailing comment"),
        vec![ident("a"), TokenKind::Eos, ident("b"), TokenKind::Eos]
    );
}

#[test]
fn test_symbols() {
    assert_eq!(
        kinds("f(1, 2) @"),
        vec![
            ident("f"),
            TokenKind::Symbol('('),
            TokenKind::Number(1.0),
            TokenKind::Symbol(','),
            TokenKind::Number(2.0),
            TokenKind::Symbol(')'),
            TokenKind::Symbol('@'),
            TokenKind::Eos,
        ]
    );
}

#[test]
fn test_strings_both_quotes() {
    assert_eq!(
        kinds(r#""say \"hi\"" 'it\'s'"#),
        vec![
            TokenKind::Str("say \"hi\"".into()),
            TokenKind::Str("it's".into()),
            TokenKind::Eos,
        ]
    );
}

#[test]
fn test_unterminated_string() {
    let err = lex_line(r#"x <- "abc"#, 4);
    assert!(matches!(
        err,
        Err(LexError::UnterminatedString { pos }) if pos == Position::new(4, 6)
    ));
}

#[test]
fn test_invalid_escape_position() {
    let err = lex_line(r#"s <- "ab\x4""#, 1);
    match err {
        Err(LexError::InvalidEscape { escape, pos }) => {
            assert_eq!(escape, r"\x4");
            assert_eq!(pos, Position::new(1, 9));
        }
        other => panic!("expected invalid escape, got {other:?}"),
    }
}

#[test]
fn test_columns_count_chars() {
    let tokens = match lex_line("s <- 'héllo' + x", 2) {
        Ok(tokens) => tokens,
        Err(err) => panic!("{err}"),
    };
    let positions: Vec<Position> = tokens.iter().map(|t| t.pos).collect();
    assert_eq!(
        positions,
        vec![
            Position::new(2, 1),
            Position::new(2, 3),
            Position::new(2, 6),
            Position::new(2, 14),
            Position::new(2, 16),
            Position::new(2, 17),
        ]
    );
}

#[test]
fn test_empty_line_is_just_eos() {
    assert_eq!(kinds("   "), vec![TokenKind::Eos]);
}

/// A source that hands out scripted results and records the depth it was
/// asked at.
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

fn next_kind<S: LineSource>(lexer: &mut Lexer<S>) -> TokenKind {
    match lexer.next_token() {
        Ok(tok) => tok.kind,
        Err(err) => panic!("unexpected error: {err}"),
    }
}

#[test]
fn test_lexer_pulls_lines_lazily() {
    let mut lexer = Lexer::new(Scripted::new(vec![
        Ok(Some("a".into())),
        Ok(Some("b".into())),
    ]));

    assert_eq!(next_kind(&mut lexer), ident("a"));
    assert_eq!(next_kind(&mut lexer), TokenKind::Eos);
    assert_eq!(lexer.line(2), None);

    lexer.nest();
    assert_eq!(next_kind(&mut lexer), ident("b"));
    assert_eq!(lexer.line(2), Some("b"));
    assert_eq!(lexer.source.depths, vec![0, 1]);
}

#[test]
fn test_eof_repeats_after_exhaustion() {
    let mut lexer = Lexer::new(TextSource::new("t", "x"));
    assert_eq!(next_kind(&mut lexer), ident("x"));
    assert_eq!(next_kind(&mut lexer), TokenKind::Eos);
    assert!(!lexer.is_exhausted());
    assert_eq!(next_kind(&mut lexer), TokenKind::Eof);
    assert_eq!(next_kind(&mut lexer), TokenKind::Eof);
    assert!(lexer.is_exhausted());
}

#[test]
fn test_peek_does_not_consume() {
    let mut lexer = Lexer::new(TextSource::new("t", "x y"));
    let first = lexer.peek().map(|t| t.kind.clone()).ok();
    assert_eq!(first, Some(ident("x")));
    assert_eq!(next_kind(&mut lexer), ident("x"));
    assert_eq!(next_kind(&mut lexer), ident("y"));
}

#[test]
fn test_interrupt_surfaces_and_lexing_continues() {
    let mut lexer = Lexer::new(Scripted::new(vec![
        Err(SourceError::Interrupted),
        Ok(Some("z".into())),
    ]));
    assert!(matches!(lexer.next_token(), Err(LexError::Interrupted)));
    assert_eq!(next_kind(&mut lexer), ident("z"));
}

#[test]
fn test_lex_error_drops_only_its_line() {
    let mut lexer = Lexer::new(TextSource::new("t", "a <- \"open\nb"));
    assert!(matches!(
        lexer.next_token(),
        Err(LexError::UnterminatedString { .. })
    ));
    assert_eq!(next_kind(&mut lexer), ident("b"));
    assert_eq!(lexer.line(1), Some("a <- \"open"));
}

#[test]
fn test_discard_line_and_reset() {
    let mut lexer = Lexer::new(TextSource::new("t", "a b c\nd"));
    assert_eq!(next_kind(&mut lexer), ident("a"));
    lexer.nest();
    lexer.discard_line();
    assert_eq!(lexer.depth(), 1);
    assert_eq!(next_kind(&mut lexer), ident("d"));
    lexer.reset();
    assert_eq!(lexer.depth(), 0);
}

#[test]
fn test_prompts() {
    assert_eq!(prompt_for_depth(0), ">>> ");
    assert_eq!(prompt_for_depth(1), "... ");
    assert_eq!(prompt_for_depth(3), "........... ");
}

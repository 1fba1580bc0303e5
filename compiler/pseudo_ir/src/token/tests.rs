use super::*;

#[test]
fn keyword_lookup_is_case_insensitive() {
    assert_eq!(Keyword::lookup("begin"), Some(Keyword::Begin));
    assert_eq!(Keyword::lookup("Begin"), Some(Keyword::Begin));
    assert_eq!(Keyword::lookup("BEGIN"), Some(Keyword::Begin));
    assert_eq!(Keyword::lookup("beginning"), None);
    assert_eq!(Keyword::lookup("continue"), Some(Keyword::Continue));
}

#[test]
fn keyword_tokens_compare_canonically() {
    let a = TokenKind::Keyword(Keyword::lookup("end").unwrap_or(Keyword::Begin));
    let b = TokenKind::Keyword(Keyword::lookup("END").unwrap_or(Keyword::Begin));
    assert_eq!(a, b);
    assert!(a.is_keyword(Keyword::End));
}

#[test]
fn word_operators_are_case_sensitive() {
    assert_eq!(Operator::from_word("and"), Some(Operator::And));
    assert_eq!(Operator::from_word("neq"), Some(Operator::NeqWord));
    assert_eq!(Operator::from_word("AND"), None);
    assert_eq!(Operator::from_word("lt"), None);
}

#[test]
fn assignment_operators() {
    assert!(Operator::Eq.is_assignment());
    assert!(Operator::Arrow.is_assignment());
    assert!(Operator::ColonEq.is_assignment());
    assert!(!Operator::EqEq.is_assignment());
}

#[test]
fn end_qualifiers() {
    assert!(Keyword::If.is_end_qualifier());
    assert!(Keyword::Module.is_end_qualifier());
    assert!(!Keyword::Else.is_end_qualifier());
    assert!(!Keyword::Next.is_end_qualifier());
}

#[test]
fn describe_tokens() {
    assert_eq!(TokenKind::Eos.describe(), "end of statement");
    assert_eq!(TokenKind::Symbol(')').describe(), "symbol `)`");
    assert_eq!(TokenKind::Number(3.0).describe(), "number `3`");
    assert_eq!(
        TokenKind::Keyword(Keyword::Begin).describe(),
        "keyword `BEGIN`"
    );
}

#[test]
fn word_covers_identifier_shaped_tokens() {
    assert_eq!(TokenKind::Ident("lt".into()).word(), Some("lt"));
    assert_eq!(TokenKind::Operator(Operator::Or).word(), Some("or"));
    assert_eq!(TokenKind::Symbol('(').word(), None);
}

//! Lexer tests: classification, literals and positions.

use liby::parser::{Literal, TokenKind, tokenize};
use liby::{Position, SyntaxErrorKind};
use rstest::rstest;

fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input)
        .unwrap_or_else(|e| panic!("{input:?} should lex: {e}"))
        .iter()
        .map(|t| t.kind)
        .collect()
}

// =============================================================================
// Classification
// =============================================================================

#[rstest]
#[case("name", vec![TokenKind::Text])]
#[case("_private", vec![TokenKind::Text])]
#[case("a1_b2", vec![TokenKind::Text])]
#[case("42", vec![TokenKind::Number])]
#[case("4.2", vec![TokenKind::Number])]
#[case("\"text\"", vec![TokenKind::String])]
#[case("{ }", vec![TokenKind::LBrace, TokenKind::RBrace])]
#[case("@tag", vec![TokenKind::At, TokenKind::Text])]
#[case("a.b", vec![TokenKind::Text, TokenKind::Dot, TokenKind::Text])]
#[case("", vec![])]
#[case("   \t\r\n  ", vec![])]
#[case("// only a comment", vec![])]
fn test_token_kinds(#[case] input: &str, #[case] expected: Vec<TokenKind>) {
    assert_eq!(kinds(input), expected, "input: {input:?}");
}

#[test]
fn test_identifier_followed_by_number() {
    // Digits continue an identifier but a leading digit starts a number.
    assert_eq!(kinds("a1 1a"), vec![TokenKind::Text, TokenKind::Number, TokenKind::Text]);
}

#[test]
fn test_comment_runs_to_end_of_line() {
    let tokens = tokenize("a // b { c\nd").unwrap();
    let texts: Vec<_> = tokens.iter().map(|t| t.text).collect();
    assert_eq!(texts, vec!["a", "d"]);
}

// =============================================================================
// Literals
// =============================================================================

#[rstest]
#[case("0", Literal::Integer(0))]
#[case("1_000_000", Literal::Integer(1_000_000))]
#[case("18446744073709551615", Literal::Integer(u64::MAX))]
#[case("0.5", Literal::Decimal(0.5))]
#[case("1_0.2_5", Literal::Decimal(10.25))]
#[case("7.", Literal::Decimal(7.0))]
fn test_number_literals(#[case] input: &str, #[case] expected: Literal) {
    let tokens = tokenize(input).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].literal, Some(expected));
}

#[test]
fn test_string_has_no_escapes() {
    let tokens = tokenize(r#""a\tb""#).unwrap();
    assert_eq!(tokens[0].text, r"a\tb");
}

// =============================================================================
// Positions
// =============================================================================

#[test]
fn test_positions_across_lines() {
    let source = "settings {\n    graphics 1\n}";
    let tokens = tokenize(source).unwrap();
    let positions: Vec<_> = tokens.iter().map(|t| t.span.position()).collect();
    assert_eq!(
        positions,
        vec![
            Position::new(0, 0),
            Position::new(0, 9),
            Position::new(1, 4),
            Position::new(1, 13),
            Position::new(2, 0),
        ]
    );
}

#[test]
fn test_comment_lines_still_count() {
    let tokens = tokenize("// one\n// two\nname").unwrap();
    assert_eq!(tokens[0].span.line, 2);
    assert_eq!(tokens[0].span.column(), 0);
}

// =============================================================================
// Errors
// =============================================================================

#[rstest]
#[case("1.2.3", SyntaxErrorKind::DuplicateDecimal)]
#[case("a \"b\nc\"", SyntaxErrorKind::NewlineInString)]
#[case("a \"b", SyntaxErrorKind::UnterminatedString)]
#[case("a = 1", SyntaxErrorKind::UnknownCharacter { ch: '=' })]
#[case("-1", SyntaxErrorKind::UnknownCharacter { ch: '-' })]
#[case("18446744073709551616", SyntaxErrorKind::IntegerOutOfRange)]
fn test_lex_errors(#[case] input: &str, #[case] expected: SyntaxErrorKind) {
    let err = tokenize(input).expect_err("input should not lex");
    assert_eq!(err.kind, expected, "input: {input:?}");
}

#[test]
fn test_non_ascii_is_unknown() {
    let err = tokenize("caf\u{e9}").expect_err("non-ASCII letters are not identifiers");
    assert_eq!(err.kind, SyntaxErrorKind::UnknownCharacter { ch: '\u{e9}' });
    assert_eq!(err.span.column(), 3);
    assert_eq!(err.span.len(), 2);
}

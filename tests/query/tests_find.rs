//! Path query tests.

use crate::helpers::context_from;
use crate::helpers::source_fixtures::*;
use liby::parser::TokenKind;
use liby::{Context, QueryError, QueryPath, ValueKind};
use rstest::rstest;

#[rstest]
#[case("settings graphics", Some("graphics: {..}"))]
#[case("settings graphics refresh", Some("refresh: 60"))]
#[case("settings graphics vsync", Some("vsync: none"))]
#[case("settings graphics scale", Some("scale: 1.5"))]
#[case("settings title", Some("title: main menu"))]
#[case("settings difficulty", Some("difficulty: 2"))]
#[case("settings audio", None)]
#[case("settings graphics refresh rate", None)]
#[case("graphics", None)]
fn test_find_in_settings(#[case] path: &str, #[case] expected: Option<&str>) {
    let ctx = context_from(&[SETTINGS]);
    let found = ctx.find(path).unwrap().map(|n| n.to_string());
    assert_eq!(found.as_deref(), expected, "path: {path:?}");
}

#[rstest]
#[case("settings.graphics.refresh")]
#[case("settings graphics.refresh")]
#[case("  settings\tgraphics   refresh  ")]
fn test_separators_are_equivalent(#[case] path: &str) {
    let ctx = context_from(&[SETTINGS]);
    let expected = ctx.find("settings graphics refresh").unwrap();
    assert!(expected.is_some());
    assert_eq!(ctx.find(path).unwrap(), expected);
}

#[test]
fn test_find_on_later_root() {
    let ctx = context_from(&[SETTINGS, KEYBINDS]);
    let jump = ctx.find("keybinds jump").unwrap().unwrap();
    assert_eq!(jump.value().as_str(), Some("space"));
    assert_eq!(jump.source_unit().path().to_str(), Some("unit1.y"));
}

#[test]
fn test_first_root_wins_on_duplicate_names() {
    let ctx = context_from(&["cfg { v 1 }", "cfg { v 2 }"]);
    let v = ctx.find("cfg v").unwrap().unwrap();
    assert_eq!(v.value().as_integer(), Some(1));
}

#[test]
fn test_missing_segment_stops_the_walk() {
    let ctx = context_from(&[DEEPLY_NESTED]);
    assert!(ctx.find("a b c d e").unwrap().is_some());
    assert_eq!(ctx.find("a b x d e").unwrap(), None);
    assert_eq!(ctx.find("a b c d e f").unwrap(), None);
}

#[rstest]
#[case("missing x 42")]
#[case("missing.x.")]
#[case("missing @note")]
#[case("settings audio 1.2.3")]
#[case("settings graphics vsync x {")]
fn test_tail_after_a_miss_is_never_read(#[case] path: &str) {
    let ctx = context_from(&[SETTINGS]);
    assert_eq!(ctx.find(path), Ok(None), "path: {path:?}");
}

#[test]
fn test_empty_container_has_nothing_to_find() {
    let ctx = context_from(&["a { b { } }"]);
    let b = ctx.find("a b").unwrap().unwrap();
    assert_eq!(b.kind(), ValueKind::Node);
    assert_eq!(ctx.find("a b c").unwrap(), None);
}

#[test]
fn test_find_in_empty_context() {
    let ctx = Context::new();
    assert_eq!(ctx.find("settings").unwrap(), None);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("// only a comment")]
fn test_empty_path(#[case] path: &str) {
    let ctx = context_from(&[SETTINGS]);
    assert_eq!(ctx.find(path), Err(QueryError::Empty));
}

#[rstest]
#[case("settings 60", TokenKind::Number)]
#[case("settings \"title\"", TokenKind::String)]
#[case("settings { graphics }", TokenKind::LBrace)]
#[case("settings @mutable", TokenKind::At)]
#[case("settings..graphics", TokenKind::Dot)]
#[case("settings.", TokenKind::Eof)]
fn test_invalid_path(#[case] path: &str, #[case] found: TokenKind) {
    let ctx = context_from(&[SETTINGS]);
    match ctx.find(path) {
        Err(QueryError::UnexpectedToken {
            expected,
            found: actual,
            ..
        }) => {
            assert_eq!(expected, TokenKind::Text);
            assert_eq!(actual, found);
        }
        other => panic!("expected an invalid path error for {path:?}, got {other:?}"),
    }
}

#[test]
fn test_path_lex_error() {
    let ctx = context_from(&[SETTINGS]);
    let err = ctx.find("settings/graphics").unwrap_err();
    assert!(matches!(err, QueryError::Lex(_)));
    assert!(err.to_string().starts_with("invalid query path: 1:9: unknown character"));
}

#[test]
fn test_query_path_is_reusable() {
    let ctx = context_from(&[SETTINGS, KEYBINDS]);
    let path = QueryPath::parse("keybinds crouch").unwrap();
    assert_eq!(path.segments(), ["keybinds", "crouch"]);

    let crouch = liby::query::resolve(ctx.first_root(), &path).unwrap();
    assert_eq!(crouch.value().as_str(), Some("ctrl"));
    assert_eq!(liby::query::resolve(ctx.first_root(), &path), Some(crouch));
}

//! The concrete parse-tree scenarios from §8.

use css_syntax::token::{NumberFlag, TokenKind};
use css_syntax::{parse_a_stylesheet, ComponentValue, Rule, Token};

fn only_rule(source: &str) -> Rule {
    let sheet = parse_a_stylesheet(source);
    assert_eq!(sheet.rules.len(), 1);
    sheet.rules.into_iter().next().unwrap()
}

fn token_kinds(values: &[ComponentValue]) -> Vec<TokenKind> {
    values
        .iter()
        .map(|v| match v {
            ComponentValue::Token(Token { kind, .. }) => kind.clone(),
            other => panic!("expected a bare token, got {other:?}"),
        })
        .collect()
}

#[test]
fn qualified_rule_structure() {
    let rule = only_rule("div { color: lime; }");
    let Rule::Qualified(rule) = rule else { panic!("expected a qualified rule") };

    assert_eq!(token_kinds(&rule.prelude), vec![TokenKind::Ident("div".into()), TokenKind::Whitespace]);
    assert_eq!(rule.block.opener, '{');
    // A simple block's contents are plain component values, not grouped into
    // declarations yet; that grouping happens when the body is re-parsed as
    // a declaration list (see the test below).
    assert_eq!(
        token_kinds(&rule.block.value),
        vec![
            TokenKind::Whitespace,
            TokenKind::Ident("color".into()),
            TokenKind::Colon,
            TokenKind::Whitespace,
            TokenKind::Ident("lime".into()),
            TokenKind::Semicolon,
            TokenKind::Whitespace,
        ]
    );
}

#[test]
fn qualified_rule_block_reparses_to_one_declaration() {
    let rule = only_rule("div { color: lime; }");
    let Rule::Qualified(rule) = rule else { panic!("expected a qualified rule") };
    let inner: String = rule.block.value.iter().map(ComponentValue::to_source).collect();
    let items = css_syntax::parse_a_list_of_declarations(inner.as_str());
    assert_eq!(items.len(), 1);
    let css_syntax::DeclarationListItem::Declaration(decl) = &items[0] else { panic!("expected a declaration") };
    assert_eq!(decl.name, "color");
    assert!(!decl.important);
    assert_eq!(token_kinds(&decl.value), vec![TokenKind::Whitespace, TokenKind::Ident("lime".into())]);
}

#[test]
fn at_rule_import_structure() {
    let rule = only_rule("@import \"a.css\";");
    let Rule::At(at_rule) = rule else { panic!("expected an at-rule") };
    assert_eq!(at_rule.name, "import");
    assert_eq!(token_kinds(&at_rule.prelude), vec![TokenKind::Whitespace, TokenKind::String("a.css".into())]);
    assert!(at_rule.block.is_none());
}

#[test]
fn important_dimension_declaration() {
    let decl = css_syntax::parse_a_declaration("width:10px !important").unwrap();
    assert_eq!(decl.name, "width");
    assert!(decl.important);
    assert_eq!(token_kinds(&decl.value), vec![TokenKind::Dimension { repr: "10".into(), value: 10.0, flag: NumberFlag::Integer, unit: "px".into() }]);
}

#[test]
fn percentage_with_exponent_declaration() {
    let decl = css_syntax::parse_a_declaration("b:1.5e2%").unwrap();
    assert_eq!(token_kinds(&decl.value), vec![TokenKind::Percentage { repr: "1.5e2".into(), value: 150.0 }]);
}

#[test]
fn custom_property_declaration() {
    let decl = css_syntax::parse_a_declaration("--b:1").unwrap();
    assert_eq!(decl.name, "--b");
    assert_eq!(token_kinds(&decl.value), vec![TokenKind::Number { repr: "1".into(), value: 1.0, flag: NumberFlag::Integer }]);
}

#[test]
fn important_text_inside_a_string_does_not_confuse_the_trailing_scan() {
    // the reverse scan only inspects raw token kinds, so a string value whose
    // *contents* happen to read "!important" is just one opaque String
    // token; only the real trailing `!`+`important` pair strips.
    let decl = css_syntax::parse_a_declaration("content:\"!important\" !important").unwrap();
    assert!(decl.important);
    assert_eq!(token_kinds(&decl.value), vec![TokenKind::String("!important".into())]);
}

//! Properties 2 and 3: parsing a stylesheet, serializing it, and
//! re-parsing the result yields a structurally identical tree, and
//! serializing twice gives the same text both times.

use css_syntax::{parse_a_stylesheet, Stylesheet};

fn roundtrip(source: &str) -> (Stylesheet, Stylesheet) {
    let first = parse_a_stylesheet(source);
    let serialized = first.to_source();
    let second = parse_a_stylesheet(&serialized);
    (first, second)
}

#[test]
fn simple_rule_round_trips_structurally() {
    let (first, second) = roundtrip("div { color: lime; }");
    assert_eq!(first, second);
}

#[test]
fn at_rule_round_trips_structurally() {
    let (first, second) = roundtrip("@import \"a.css\";");
    assert_eq!(first, second);
}

#[test]
fn nested_media_round_trips_structurally() {
    let (first, second) = roundtrip("@media screen and (min-width: 10px) { a { color: red; } }");
    assert_eq!(first, second);
}

#[test]
fn idempotent_serialization() {
    let source = "a, b.c[d=\"e\"] { width: calc(1px + 2%); }";
    let sheet = parse_a_stylesheet(source);
    let once = sheet.to_source();
    let reparsed = parse_a_stylesheet(&once);
    let twice = reparsed.to_source();
    assert_eq!(once, twice);
}

#[test]
fn important_declaration_round_trips() {
    let (first, second) = roundtrip("a { width: 10px !important; }");
    assert_eq!(first, second);
    assert!(first.to_source().contains("!important"));
}

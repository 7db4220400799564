//! Properties 4-8 plus the tokenizer-facing concrete scenarios from §8.

use css_syntax::stream::CodePointStream;
use css_syntax::token::{HashFlag, NumberFlag, TokenKind};
use css_syntax::{escape::escape_ident, tokenize};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).into_iter().map(|t| t.kind).collect()
}

#[test]
fn whitespace_run_collapses_to_one_token() {
    let tokens = kinds("a   \t\n\n  b");
    assert_eq!(tokens, vec![TokenKind::Ident("a".into()), TokenKind::Whitespace, TokenKind::Ident("b".into()), TokenKind::Eof]);
}

#[test]
fn escape_preservation_round_trips_through_tokenize() {
    for s in ["foo", "123abc", "-foo", "a b", "a\u{1F600}b"] {
        let escaped = escape_ident(s).unwrap();
        let tokens = tokenize(&escaped);
        assert_eq!(tokens.len(), 2, "expected one Ident + EOF for {s:?}, got {tokens:?}");
        assert_eq!(tokens[0].ident_value(), Some(s));
    }
}

#[test]
fn number_dispatch_does_not_consume_unit() {
    let tokens = kinds("10px");
    assert_eq!(tokens, vec![TokenKind::Dimension { repr: "10".into(), value: 10.0, flag: NumberFlag::Integer, unit: "px".into() }, TokenKind::Eof]);
}

#[test]
fn bare_exponent_letter_becomes_dimension_unit() {
    // "10E-" fails as an exponent (no digit after the sign), so consumeANumber
    // stops at "10"; the outer numeric dispatch then finds "E-"
    // would-start-an-identifier and folds it into the unit.
    let tokens = kinds("10E-");
    assert_eq!(
        tokens,
        vec![TokenKind::Dimension { repr: "10".into(), value: 10.0, flag: NumberFlag::Integer, unit: "E-".into() }, TokenKind::Eof]
    );
}

#[test]
fn hash_id_vs_unrestricted() {
    let tokens = kinds("#abc");
    assert_eq!(tokens[0], TokenKind::Hash { value: "abc".into(), flag: HashFlag::Id });

    let tokens = kinds("#0a");
    assert_eq!(tokens[0], TokenKind::Hash { value: "0a".into(), flag: HashFlag::Unrestricted });
}

#[test]
fn url_with_surrounding_whitespace() {
    let tokens = kinds("url( foo.png )");
    assert_eq!(tokens, vec![TokenKind::Url("foo.png".into()), TokenKind::Eof]);
}

#[test]
fn unterminated_comment_leaves_no_non_eof_tokens() {
    let tokens = tokenize("/* unterminated");
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is_eof());
}

#[test]
fn hex_escape_with_trailing_space_consumes_it() {
    let tokens = kinds("'\\0a foo'");
    assert_eq!(tokens, vec![TokenKind::String("\nfoo".into()), TokenKind::Eof]);
}

#[test]
fn custom_property_name_is_preserved() {
    let tokens = kinds("--b");
    assert_eq!(tokens, vec![TokenKind::Ident("--b".into()), TokenKind::Eof]);
}

#[test]
fn percentage_with_exponent_repr() {
    let tokens = kinds("1.5e2%");
    assert_eq!(tokens, vec![TokenKind::Percentage { repr: "1.5e2".into(), value: 150.0 }, TokenKind::Eof]);
}

#[test]
fn peek_past_three_code_points_is_rejected() {
    let stream = CodePointStream::new("abcdef".chars().collect());
    assert!(stream.peek(0).is_ok());
    assert!(stream.peek(3).is_ok());
    assert!(stream.peek(4).is_err());
}

#[test]
fn tokenizing_pathological_input_terminates_with_a_token_per_input_run() {
    // unterminated constructs (strings, urls, escapes at EOF) and long runs
    // of identical characters are exactly the shapes that would spin a
    // position that never advances; each of these must still produce a
    // small, bounded token count rather than loop forever.
    let n = 5_000;

    let unterminated_string: String = std::iter::once('"').chain(std::iter::repeat('a').take(n)).collect();
    assert_eq!(tokenize(&unterminated_string).len(), 2);

    let trailing_backslash = "a".repeat(n) + "\\";
    let tokens = tokenize(&trailing_backslash);
    assert_eq!(tokens.len(), 3);
    assert!(matches!(tokens[0].kind, TokenKind::Ident(_)));
    assert_eq!(tokens[1].kind, TokenKind::Delim('\\'));
    assert!(tokens[2].is_eof());

    let whitespace_run = " ".repeat(n);
    assert_eq!(kinds(&whitespace_run), vec![TokenKind::Whitespace, TokenKind::Eof]);
}

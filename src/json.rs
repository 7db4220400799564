//! The JSON projection of §6: tokens serialize to `{token: <type>,
//! ...payload}`, tree nodes to `{type: <TYPE>, ...}`. Kept separate from the
//! core token/tree types so their Rust field names stay idiomatic
//! (`flag`/`repr`) while the wire contract keeps its own naming
//! (`type`/`flag`/`mirror`).

use serde_json::{json, Value};

use crate::canonicalize::CanonicalRecord;
use crate::token::{HashFlag, NumberFlag, Token, TokenKind};
use crate::token::mirror_char;
use crate::tree::{AtRule, ComponentValue, Declaration, Function, QualifiedRule, Rule, SimpleBlock, Stylesheet};

fn hash_flag_name(flag: HashFlag) -> &'static str {
    match flag {
        HashFlag::Id => "id",
        HashFlag::Unrestricted => "unrestricted",
    }
}

fn number_flag_name(flag: NumberFlag) -> &'static str {
    match flag {
        NumberFlag::Integer => "integer",
        NumberFlag::Number => "number",
    }
}

/// The counterpart bracket character for either an opener or a closer, per
/// §3's "mirror: the matching delimiter" payload field.
fn bracket_mirror(kind: &TokenKind) -> Option<char> {
    match kind {
        TokenKind::OpenParen => Some(')'),
        TokenKind::CloseParen => Some('('),
        TokenKind::OpenSquare => Some(']'),
        TokenKind::CloseSquare => Some('['),
        TokenKind::OpenCurly => Some('}'),
        TokenKind::CloseCurly => Some('{'),
        _ => None,
    }
}

/// Projects a token to its §6 JSON shape: `{token: <tokenType>, ...payload}`.
#[must_use]
pub fn token_to_json(token: &Token) -> Value {
    match &token.kind {
        TokenKind::Whitespace => json!({"token": "whitespace"}),
        TokenKind::String(value) => json!({"token": "string", "value": value}),
        TokenKind::BadString => json!({"token": "bad-string"}),
        TokenKind::Hash { value, flag } => json!({"token": "hash", "value": value, "flag": hash_flag_name(*flag)}),
        TokenKind::SuffixMatch => json!({"token": "suffix-match"}),
        TokenKind::SubstringMatch => json!({"token": "substring-match"}),
        TokenKind::PrefixMatch => json!({"token": "prefix-match"}),
        TokenKind::DashMatch => json!({"token": "dash-match"}),
        TokenKind::IncludeMatch => json!({"token": "include-match"}),
        TokenKind::Column => json!({"token": "column"}),
        TokenKind::OpenParen => json!({"token": "open-paren", "mirror": bracket_mirror(&token.kind).map(String::from)}),
        TokenKind::CloseParen => json!({"token": "close-paren", "mirror": bracket_mirror(&token.kind).map(String::from)}),
        TokenKind::OpenSquare => json!({"token": "open-square", "mirror": bracket_mirror(&token.kind).map(String::from)}),
        TokenKind::CloseSquare => json!({"token": "close-square", "mirror": bracket_mirror(&token.kind).map(String::from)}),
        TokenKind::OpenCurly => json!({"token": "open-curly", "mirror": bracket_mirror(&token.kind).map(String::from)}),
        TokenKind::CloseCurly => json!({"token": "close-curly", "mirror": bracket_mirror(&token.kind).map(String::from)}),
        TokenKind::Comma => json!({"token": "comma"}),
        TokenKind::Colon => json!({"token": "colon"}),
        TokenKind::Semicolon => json!({"token": "semicolon"}),
        TokenKind::Cdo => json!({"token": "cdo"}),
        TokenKind::Cdc => json!({"token": "cdc"}),
        TokenKind::AtKeyword(name) => json!({"token": "at-keyword", "value": name}),
        TokenKind::Delim(c) => json!({"token": "delim", "value": c.to_string()}),
        TokenKind::Ident(name) => json!({"token": "ident", "value": name}),
        TokenKind::Function(name) => json!({"token": "function", "value": name, "mirror": ")"}),
        TokenKind::Number { repr, value, flag } => json!({"token": "number", "repr": repr, "value": value, "type": number_flag_name(*flag)}),
        TokenKind::Percentage { repr, value } => json!({"token": "percentage", "repr": repr, "value": value}),
        TokenKind::Dimension { repr, value, flag, unit } => {
            json!({"token": "dimension", "repr": repr, "value": value, "type": number_flag_name(*flag), "unit": unit})
        }
        TokenKind::Url(value) => json!({"token": "url", "value": value}),
        TokenKind::BadUrl => json!({"token": "bad-url"}),
        TokenKind::Eof => json!({"token": "eof"}),
    }
}

#[must_use]
pub fn component_value_to_json(value: &ComponentValue) -> Value {
    match value {
        ComponentValue::Token(token) => token_to_json(token),
        ComponentValue::Block(block) => simple_block_to_json(block),
        ComponentValue::Function(function) => function_to_json(function),
    }
}

#[must_use]
pub fn simple_block_to_json(block: &SimpleBlock) -> Value {
    json!({
        "type": "SimpleBlock",
        "opener": block.opener.to_string(),
        "mirror": mirror_char(block.opener).map(String::from),
        "value": block.value.iter().map(component_value_to_json).collect::<Vec<_>>(),
    })
}

#[must_use]
pub fn function_to_json(function: &Function) -> Value {
    json!({
        "type": "Function",
        "name": function.name,
        "value": function.value.iter().map(component_value_to_json).collect::<Vec<_>>(),
    })
}

#[must_use]
pub fn declaration_to_json(declaration: &Declaration) -> Value {
    json!({
        "type": "Declaration",
        "name": declaration.name,
        "important": declaration.important,
        "value": declaration.value.iter().map(component_value_to_json).collect::<Vec<_>>(),
    })
}

#[must_use]
pub fn at_rule_to_json(at_rule: &AtRule) -> Value {
    json!({
        "type": "AtRule",
        "name": at_rule.name,
        "prelude": at_rule.prelude.iter().map(component_value_to_json).collect::<Vec<_>>(),
        "block": at_rule.block.as_ref().map(simple_block_to_json),
    })
}

#[must_use]
pub fn qualified_rule_to_json(qualified_rule: &QualifiedRule) -> Value {
    json!({
        "type": "QualifiedRule",
        "prelude": qualified_rule.prelude.iter().map(component_value_to_json).collect::<Vec<_>>(),
        "block": simple_block_to_json(&qualified_rule.block),
    })
}

#[must_use]
pub fn rule_to_json(rule: &Rule) -> Value {
    match rule {
        Rule::At(at_rule) => at_rule_to_json(at_rule),
        Rule::Qualified(qualified_rule) => qualified_rule_to_json(qualified_rule),
    }
}

#[must_use]
pub fn stylesheet_to_json(stylesheet: &Stylesheet) -> Value {
    json!({
        "type": "Stylesheet",
        "rules": stylesheet.rules.iter().map(rule_to_json).collect::<Vec<_>>(),
    })
}

#[must_use]
pub fn canonical_record_to_json(record: &CanonicalRecord) -> Value {
    json!({
        "kind": record.kind,
        "name": record.name,
        "declarations": record.declarations.as_ref().map(|declarations| {
            declarations.iter().map(|(name, decl)| (name.clone(), declaration_to_json(decl))).collect::<serde_json::Map<String, Value>>()
        }),
        "rules": record.rules.as_ref().map(|rules| rules.iter().map(canonical_record_to_json).collect::<Vec<_>>()),
        "errors": record.errors,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::stream::Location;

    #[test]
    fn ident_token_projects_with_value() {
        let token = Token::new(TokenKind::Ident("foo".into()), Location::default());
        assert_eq!(token_to_json(&token), json!({"token": "ident", "value": "foo"}));
    }

    #[test]
    fn dimension_token_projects_with_type_field() {
        let token = Token::new(TokenKind::Dimension { repr: "12".into(), value: 12.0, flag: NumberFlag::Integer, unit: "px".into() }, Location::default());
        assert_eq!(token_to_json(&token), json!({"token": "dimension", "repr": "12", "value": 12.0, "type": "integer", "unit": "px"}));
    }

    #[test]
    fn open_paren_carries_mirror() {
        let token = Token::new(TokenKind::OpenParen, Location::default());
        assert_eq!(token_to_json(&token), json!({"token": "open-paren", "mirror": ")"}));
    }

    #[test]
    fn stylesheet_projects_nested_rules() {
        let sheet = crate::parser::parse_a_stylesheet("a { color: red; }");
        let value = stylesheet_to_json(&sheet);
        assert_eq!(value["type"], "Stylesheet");
        assert_eq!(value["rules"].as_array().unwrap().len(), 1);
    }
}

//! §4.5: an optional post-pass that walks a parse tree against a declarative
//! grammar keyed by at-rule name, producing plain canonical records plus any
//! errors found along the way.

pub mod grammar;

use std::collections::HashMap;

use crate::tree::{AtRule, ComponentValue, Declaration, DeclarationListItem, QualifiedRule, Rule, SimpleBlock, Stylesheet};
use grammar::{Qualified, RuleGrammar};

/// One node of the canonicalized output: a plain record with a lowercased
/// `kind`, an optional name (at-rule name), an optional declarations map, an
/// optional list of nested rule records, and any errors discovered while
/// canonicalizing this node's own body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalRecord {
    pub kind: String,
    pub name: Option<String>,
    pub declarations: Option<HashMap<String, Declaration>>,
    pub rules: Option<Vec<CanonicalRecord>>,
    pub errors: Vec<String>,
}

impl CanonicalRecord {
    fn recognized(kind: &str, name: Option<String>) -> Self {
        Self { kind: kind.to_string(), name, ..Default::default() }
    }
}

/// Canonicalizes a stylesheet against the default grammar table of §6.
#[must_use]
pub fn canonicalize(stylesheet: &Stylesheet) -> CanonicalRecord {
    let top = grammar::default_grammar();
    canonicalize_with(stylesheet, &top, &top)
}

/// Canonicalizes a stylesheet against a caller-supplied grammar, with a
/// separate (possibly different) grammar used whenever a `stylesheet: true`
/// entry says to recurse using "the top grammar".
#[must_use]
pub fn canonicalize_with(stylesheet: &Stylesheet, grammar: &RuleGrammar, top: &RuleGrammar) -> CanonicalRecord {
    let (rules, errors) = canonicalize_rule_list(&stylesheet.rules, grammar, top);
    CanonicalRecord { kind: "stylesheet".to_string(), rules: Some(rules), errors, ..Default::default() }
}

fn canonicalize_rule_list(rules: &[Rule], container: &RuleGrammar, top: &RuleGrammar) -> (Vec<CanonicalRecord>, Vec<String>) {
    let mut records = Vec::new();
    let mut errors = Vec::new();

    for rule in rules {
        match rule {
            Rule::At(at_rule) => {
                let key = at_rule.name.to_ascii_lowercase();
                match lookup_child(container, &key) {
                    Some(Some(sub)) => records.push(canonicalize_at_rule(at_rule, &sub, top)),
                    Some(None) => records.push(CanonicalRecord::recognized("at-rule", Some(at_rule.name.clone()))),
                    None => {
                        errors.push(format!("unknown at-rule: @{}", at_rule.name));
                        records.push(CanonicalRecord::recognized("at-rule", Some(at_rule.name.clone())));
                    }
                }
            }
            Rule::Qualified(qualified) => match &container.qualified {
                Qualified::Nested(sub) => records.push(canonicalize_qualified(qualified, sub, top)),
                Qualified::Yes | Qualified::No => records.push(CanonicalRecord::recognized("qualified", None)),
            },
        }
    }

    (records, errors)
}

fn lookup_child(container: &RuleGrammar, key: &str) -> Option<Option<RuleGrammar>> {
    if let Some(entry) = container.children.get(key) {
        return Some(entry.clone());
    }
    if container.margin_box_fallback && grammar::is_margin_box_name(key) {
        return Some(Some(grammar::declarations_only()));
    }
    None
}

fn canonicalize_at_rule(at_rule: &AtRule, sub: &RuleGrammar, top: &RuleGrammar) -> CanonicalRecord {
    let (declarations, rules, errors) = canonicalize_block_against(at_rule.block.as_ref(), sub, top);
    CanonicalRecord { kind: "at-rule".to_string(), name: Some(at_rule.name.clone()), declarations, rules, errors }
}

fn canonicalize_qualified(qualified_rule: &QualifiedRule, sub: &RuleGrammar, top: &RuleGrammar) -> CanonicalRecord {
    let (declarations, rules, errors) = canonicalize_block_against(Some(&qualified_rule.block), sub, top);
    CanonicalRecord { kind: "qualified".to_string(), name: None, declarations, rules, errors }
}

fn canonicalize_block_against(block: Option<&SimpleBlock>, sub: &RuleGrammar, top: &RuleGrammar) -> (Option<HashMap<String, Declaration>>, Option<Vec<CanonicalRecord>>, Vec<String>) {
    if sub.declarations {
        return canonicalize_declarations_body(block, sub, top);
    }
    if sub.stylesheet {
        let rules = parse_block_as_rules(block);
        let (records, errors) = canonicalize_rule_list(&rules, top, top);
        return (None, Some(records), errors);
    }
    if matches!(sub.qualified, Qualified::Nested(_)) || !sub.children.is_empty() {
        let rules = parse_block_as_rules(block);
        let (records, errors) = canonicalize_rule_list(&rules, sub, top);
        return (None, Some(records), errors);
    }
    (None, None, Vec::new())
}

fn canonicalize_declarations_body(block: Option<&SimpleBlock>, sub: &RuleGrammar, top: &RuleGrammar) -> (Option<HashMap<String, Declaration>>, Option<Vec<CanonicalRecord>>, Vec<String>) {
    let Some(block) = block else {
        return (Some(HashMap::new()), None, Vec::new());
    };

    let inner_source: String = block.value.iter().map(ComponentValue::to_source).collect();
    let items = crate::parser::parse_a_list_of_declarations(inner_source.as_str());

    let mut declarations = HashMap::new();
    let mut nested = Vec::new();
    let mut errors = Vec::new();

    for item in items {
        match item {
            DeclarationListItem::Declaration(declaration) => {
                declarations.insert(declaration.name.clone(), declaration);
            }
            DeclarationListItem::AtRule(at_rule) => {
                let key = at_rule.name.to_ascii_lowercase();
                match lookup_child(sub, &key) {
                    Some(Some(child)) => nested.push(canonicalize_at_rule(&at_rule, &child, top)),
                    Some(None) => nested.push(CanonicalRecord::recognized("at-rule", Some(at_rule.name.clone()))),
                    None => {
                        errors.push(format!("unknown at-rule: @{}", at_rule.name));
                        nested.push(CanonicalRecord::recognized("at-rule", Some(at_rule.name.clone())));
                    }
                }
            }
        }
    }

    (Some(declarations), if nested.is_empty() { None } else { Some(nested) }, errors)
}

fn parse_block_as_rules(block: Option<&SimpleBlock>) -> Vec<Rule> {
    match block {
        Some(block) => {
            let inner_source: String = block.value.iter().map(ComponentValue::to_source).collect();
            crate::parser::parse_a_list_of_rules(inner_source.as_str())
        }
        None => Vec::new(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parser::parse_a_stylesheet;

    #[test]
    fn plain_rule_extracts_declarations() {
        let sheet = parse_a_stylesheet("a { color: red; }");
        let record = canonicalize(&sheet);
        let rules = record.rules.unwrap();
        assert_eq!(rules.len(), 1);
        let declarations = rules[0].declarations.as_ref().unwrap();
        assert!(declarations.contains_key("color"));
    }

    #[test]
    fn unknown_at_rule_is_reported() {
        let sheet = parse_a_stylesheet("@made-up-rule foo;");
        let record = canonicalize(&sheet);
        assert_eq!(record.errors.len(), 1);
    }

    #[test]
    fn media_recurses_with_top_grammar() {
        let sheet = parse_a_stylesheet("@media screen { a { color: red; } }");
        let record = canonicalize(&sheet);
        let top_rules = record.rules.unwrap();
        let media_rules = top_rules[0].rules.as_ref().unwrap();
        let declarations = media_rules[0].declarations.as_ref().unwrap();
        assert!(declarations.contains_key("color"));
    }

    #[test]
    fn page_margin_box_is_recognized() {
        let sheet = parse_a_stylesheet("@page { size: a4; @top-center { content: \"x\"; } }");
        let record = canonicalize(&sheet);
        let page = &record.rules.unwrap()[0];
        assert!(page.declarations.as_ref().unwrap().contains_key("size"));
        let margin_box = &page.rules.as_ref().unwrap()[0];
        assert!(margin_box.declarations.as_ref().unwrap().contains_key("content"));
        assert!(page.errors.is_empty());
    }
}

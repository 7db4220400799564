//! Grammar tables: a closed record of `{declarations, qualified, stylesheet,
//! children}` per at-rule name, matching §6's default grammar table.

use std::collections::HashMap;

/// How a qualified rule's block is interpreted under some grammar.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Qualified {
    /// Not recognized as structured content.
    #[default]
    No,
    /// Recognized, but its block isn't interpreted further.
    Yes,
    /// Recognized, and its block is walked under the nested grammar.
    Nested(Box<RuleGrammar>),
}

/// A grammar entry: what a rule's block is allowed to contain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleGrammar {
    pub declarations: bool,
    pub qualified: Qualified,
    pub stylesheet: bool,
    /// True only for `@page`: an unmatched child name starting with
    /// `top-`/`bottom-`/`left-`/`right-` is treated as a margin box with a
    /// declarations-only grammar, rather than reported unknown.
    pub margin_box_fallback: bool,
    pub children: HashMap<String, Option<RuleGrammar>>,
}

pub fn declarations_only() -> RuleGrammar {
    RuleGrammar { declarations: true, ..Default::default() }
}

fn stylesheet_grammar() -> RuleGrammar {
    RuleGrammar { stylesheet: true, ..Default::default() }
}

fn font_feature_values_children() -> HashMap<String, Option<RuleGrammar>> {
    ["stylistic", "styleset", "character-variants", "swash", "ornaments", "annotation"]
        .into_iter()
        .map(|name| (name.to_string(), Some(declarations_only())))
        .collect()
}

fn default_children() -> HashMap<String, Option<RuleGrammar>> {
    let mut children = HashMap::new();
    children.insert("media".to_string(), Some(stylesheet_grammar()));
    children.insert("keyframes".to_string(), Some(RuleGrammar { qualified: Qualified::Nested(Box::new(declarations_only())), ..Default::default() }));
    children.insert("font-face".to_string(), Some(declarations_only()));
    children.insert("supports".to_string(), Some(stylesheet_grammar()));
    children.insert("scope".to_string(), Some(stylesheet_grammar()));
    children.insert("counter-style".to_string(), Some(declarations_only()));
    children.insert("import".to_string(), None);
    children.insert(
        "font-feature-values".to_string(),
        Some(RuleGrammar { qualified: Qualified::Yes, children: font_feature_values_children(), ..Default::default() }),
    );
    children.insert("viewport".to_string(), Some(declarations_only()));
    children.insert("page".to_string(), Some(RuleGrammar { declarations: true, margin_box_fallback: true, ..Default::default() }));
    children.insert("custom-selector".to_string(), None);
    children.insert("custom-media".to_string(), None);
    children
}

/// The grammar used at the top level of a stylesheet (and, recursively, for
/// any at-rule whose own grammar says `stylesheet: true`).
#[must_use]
pub fn default_grammar() -> RuleGrammar {
    RuleGrammar { qualified: Qualified::Nested(Box::new(declarations_only())), children: default_children(), ..Default::default() }
}

/// True if `name` (without the leading `@`) starts with one of `@page`'s
/// margin box prefixes.
#[must_use]
pub fn is_margin_box_name(name: &str) -> bool {
    ["top-", "bottom-", "left-", "right-"].iter().any(|prefix| name.starts_with(prefix))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_grammar_recognizes_media() {
        let grammar = default_grammar();
        assert!(matches!(grammar.children.get("media"), Some(Some(g)) if g.stylesheet));
    }

    #[test]
    fn margin_box_prefix_matches() {
        assert!(is_margin_box_name("top-left-corner"));
        assert!(is_margin_box_name("right-middle"));
        assert!(!is_margin_box_name("footnote"));
    }
}

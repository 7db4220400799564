//! §3's parse-tree node shapes, plus the `toSource` serialization that
//! reproduces their exact source text (§4.6, §8 property #2/#3). This crate
//! never interprets a prelude or a declaration's value, so the tree carries
//! no selector/media-query/calc variants — only Stylesheet, AtRule,
//! QualifiedRule, Declaration, SimpleBlock, Function, ComponentValue.

use std::fmt;

use crate::stream::Location;
use crate::token::{mirror_char, Token, TokenKind};

/// `Token ∪ SimpleBlock ∪ Function`, per §3.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentValue {
    Token(Token),
    Block(SimpleBlock),
    Function(Function),
}

impl ComponentValue {
    #[must_use]
    pub fn location(&self) -> Location {
        match self {
            ComponentValue::Token(t) => t.location,
            ComponentValue::Block(b) => b.location,
            ComponentValue::Function(f) => f.location,
        }
    }

    #[must_use]
    pub fn to_source(&self) -> String {
        match self {
            ComponentValue::Token(t) => t.to_source(),
            ComponentValue::Block(b) => b.to_source(),
            ComponentValue::Function(f) => f.to_source(),
        }
    }
}

impl fmt::Display for ComponentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_source())
    }
}

/// A `{ ... }`, `[ ... ]`, or `( ... )` block of component values.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleBlock {
    pub opener: char,
    pub value: Vec<ComponentValue>,
    pub location: Location,
}

impl SimpleBlock {
    #[must_use]
    pub fn new(opener: char, value: Vec<ComponentValue>, location: Location) -> Self {
        Self { opener, value, location }
    }

    #[must_use]
    pub fn closer(&self) -> char {
        mirror_char(self.opener).unwrap_or(self.opener)
    }

    #[must_use]
    pub fn to_source(&self) -> String {
        let inner: String = self.value.iter().map(ComponentValue::to_source).collect();
        format!("{}{}{}", self.opener, inner, self.closer())
    }
}

/// A `name(...)` function call as a component value.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub value: Vec<ComponentValue>,
    pub location: Location,
}

impl Function {
    #[must_use]
    pub fn new(name: String, value: Vec<ComponentValue>, location: Location) -> Self {
        Self { name, value, location }
    }

    #[must_use]
    pub fn to_source(&self) -> String {
        let inner: String = self.value.iter().map(ComponentValue::to_source).collect();
        let name = crate::escape::escape_ident(&self.name).unwrap_or_else(|_| self.name.clone());
        format!("{name}({inner})")
    }
}

/// `name: value[!important];`
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub name: String,
    pub value: Vec<ComponentValue>,
    pub important: bool,
    pub location: Location,
}

impl Declaration {
    #[must_use]
    pub fn to_source(&self) -> String {
        let name = crate::escape::escape_ident(&self.name).unwrap_or_else(|_| self.name.clone());
        let value: String = self.value.iter().map(ComponentValue::to_source).collect();
        if self.important {
            format!("{name}:{value}!important;")
        } else {
            format!("{name}:{value};")
        }
    }
}

/// `@name prelude { block }` or `@name prelude;`
#[derive(Debug, Clone, PartialEq)]
pub struct AtRule {
    pub name: String,
    pub prelude: Vec<ComponentValue>,
    pub block: Option<SimpleBlock>,
    pub location: Location,
}

impl AtRule {
    #[must_use]
    pub fn to_source(&self) -> String {
        let name = crate::escape::escape_ident(&self.name).unwrap_or_else(|_| self.name.clone());
        let prelude: String = self.prelude.iter().map(ComponentValue::to_source).collect();
        match &self.block {
            Some(block) => format!("@{name}{prelude}{}", block.to_source()),
            None => format!("@{name}{prelude};"),
        }
    }
}

/// `prelude { block }`
#[derive(Debug, Clone, PartialEq)]
pub struct QualifiedRule {
    pub prelude: Vec<ComponentValue>,
    pub block: SimpleBlock,
    pub location: Location,
}

impl QualifiedRule {
    #[must_use]
    pub fn to_source(&self) -> String {
        let prelude: String = self.prelude.iter().map(ComponentValue::to_source).collect();
        format!("{prelude}{}", self.block.to_source())
    }
}

/// `AtRule | QualifiedRule`.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    At(AtRule),
    Qualified(QualifiedRule),
}

impl Rule {
    #[must_use]
    pub fn to_source(&self) -> String {
        match self {
            Rule::At(r) => r.to_source(),
            Rule::Qualified(r) => r.to_source(),
        }
    }

    #[must_use]
    pub fn location(&self) -> Location {
        match self {
            Rule::At(r) => r.location,
            Rule::Qualified(r) => r.location,
        }
    }
}

/// The result of `parse-a-declaration-list`: an interleaved list of
/// declarations and nested at-rules, in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum DeclarationListItem {
    Declaration(Declaration),
    AtRule(AtRule),
}

/// A whole stylesheet: `rules: Rule[]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    #[must_use]
    pub fn to_source(&self) -> String {
        self.rules.iter().map(Rule::to_source).collect()
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_source())
    }
}

/// Wraps a bare token as a component value, for parser code that builds
/// `ComponentValue` sequences directly from the token stream.
impl From<Token> for ComponentValue {
    fn from(token: Token) -> Self {
        ComponentValue::Token(token)
    }
}

/// Whether a token opens a simple block (`{`, `[`, `(`).
#[must_use]
pub fn opens_block(kind: &TokenKind) -> Option<char> {
    match kind {
        TokenKind::OpenCurly => Some('{'),
        TokenKind::OpenSquare => Some('['),
        TokenKind::OpenParen => Some('('),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::token::NumberFlag;

    #[test]
    fn declaration_to_source_round_trips() {
        let decl = Declaration {
            name: "color".into(),
            value: vec![ComponentValue::Token(Token::new(TokenKind::Whitespace, Location::default())), ComponentValue::Token(Token::new(TokenKind::Ident("lime".into()), Location::default()))],
            important: false,
            location: Location::default(),
        };
        assert_eq!(decl.to_source(), "color: lime;");
    }

    #[test]
    fn simple_block_wraps_with_mirrored_delimiters() {
        let block = SimpleBlock::new(
            '{',
            vec![ComponentValue::Token(Token::new(TokenKind::Number { repr: "1".into(), value: 1.0, flag: NumberFlag::Integer }, Location::default()))],
            Location::default(),
        );
        assert_eq!(block.to_source(), "{1}");
    }
}

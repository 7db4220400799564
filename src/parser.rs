//! §4.4: the parser. Operates on a [`TokenStream`] and produces parse-tree
//! nodes (§3), plus the five-plus public entry points of §6. An owned parser
//! struct holds the token source and a `ParserConfig`; one `consume_*`
//! method per recursive production, split across one file per production
//! (`parser::rule`, `parser::block`, `parser::function`,
//! `parser::declaration`, `parser::stylesheet`, `parser::component_value`).

mod block;
mod component_value;
mod declaration;
mod function;
mod rule;
mod stylesheet;

use crate::error::{Error, ErrorSink, LoggingSink, ParseError, ParseErrorKind};
use crate::parser_config::{Context, ParserConfig};
use crate::stream::Location;
use crate::token::Token;
use crate::token_stream::TokenStream;
use crate::tree::{ComponentValue, Declaration, DeclarationListItem, Rule, Stylesheet};

/// What a parser entry point accepts: either source text (tokenized
/// internally) or an already-built token list (reused verbatim), per §6.
pub enum ParserInput {
    Text(String),
    Tokens(Vec<Token>),
}

impl ParserInput {
    fn into_stream(self) -> TokenStream {
        match self {
            ParserInput::Text(text) => TokenStream::from_str(&text),
            ParserInput::Tokens(tokens) => TokenStream::new(tokens),
        }
    }
}

impl From<&str> for ParserInput {
    fn from(value: &str) -> Self {
        ParserInput::Text(value.to_string())
    }
}

impl From<String> for ParserInput {
    fn from(value: String) -> Self {
        ParserInput::Text(value)
    }
}

impl From<Vec<Token>> for ParserInput {
    fn from(value: Vec<Token>) -> Self {
        ParserInput::Tokens(value)
    }
}

impl From<TokenStream> for ParserInput {
    fn from(value: TokenStream) -> Self {
        ParserInput::Tokens(value.into_remaining())
    }
}

/// The parser: owns a token cursor, a pluggable error sink, and the config
/// selecting which entry point produced it.
pub struct Parser<'a> {
    pub(crate) stream: TokenStream,
    pub(crate) sink: &'a mut dyn ErrorSink,
    pub(crate) config: ParserConfig,
}

impl<'a> Parser<'a> {
    pub fn new(input: impl Into<ParserInput>, sink: &'a mut dyn ErrorSink, config: ParserConfig) -> Self {
        log::trace!("parsing as {} (source: {})", config.context, config.source.as_deref().unwrap_or("<none>"));
        Self { stream: input.into().into_stream(), sink, config }
    }

    pub(crate) fn error(&mut self, kind: ParseErrorKind, location: Location) {
        self.sink.report(&ParseError::new(kind, location));
    }
}

macro_rules! entry_point {
    ($name:ident, $with_name:ident, $context:expr, $ret:ty, $method:ident) => {
        #[must_use]
        pub fn $name(input: impl Into<ParserInput>) -> $ret {
            let mut sink = LoggingSink;
            Parser::new(input, &mut sink, ParserConfig::new($context)).$method()
        }

        pub fn $with_name(input: impl Into<ParserInput>, sink: &mut dyn ErrorSink, config: ParserConfig) -> $ret {
            Parser::new(input, sink, config).$method()
        }
    };
}

entry_point!(parse_a_stylesheet, parse_a_stylesheet_with, Context::Stylesheet, Stylesheet, parse_a_stylesheet);
entry_point!(parse_a_list_of_rules, parse_a_list_of_rules_with, Context::ListOfRules, Vec<Rule>, parse_a_list_of_rules);
entry_point!(
    parse_a_list_of_declarations,
    parse_a_list_of_declarations_with,
    Context::ListOfDeclarations,
    Vec<DeclarationListItem>,
    parse_a_list_of_declarations
);
entry_point!(
    parse_a_list_of_component_values,
    parse_a_list_of_component_values_with,
    Context::ListOfComponentValues,
    Vec<ComponentValue>,
    parse_a_list_of_component_values
);
entry_point!(
    parse_a_comma_separated_list_of_component_values,
    parse_a_comma_separated_list_of_component_values_with,
    Context::ListOfComponentValues,
    Vec<Vec<ComponentValue>>,
    parse_a_comma_separated_list_of_component_values
);

/// `parse-a-rule`: fails if the stream holds anything but whitespace once a
/// single rule has been extracted.
pub fn parse_a_rule(input: impl Into<ParserInput>) -> Result<Rule, Error> {
    let mut sink = LoggingSink;
    Parser::new(input, &mut sink, ParserConfig::new(Context::Rule)).parse_a_rule()
}

pub fn parse_a_rule_with(input: impl Into<ParserInput>, sink: &mut dyn ErrorSink, config: ParserConfig) -> Result<Rule, Error> {
    Parser::new(input, sink, config).parse_a_rule()
}

/// `parse-a-declaration`: fails if the stream's first non-whitespace token
/// is not an Ident.
pub fn parse_a_declaration(input: impl Into<ParserInput>) -> Result<Declaration, Error> {
    let mut sink = LoggingSink;
    Parser::new(input, &mut sink, ParserConfig::new(Context::Declaration)).parse_a_declaration()
}

pub fn parse_a_declaration_with(input: impl Into<ParserInput>, sink: &mut dyn ErrorSink, config: ParserConfig) -> Result<Declaration, Error> {
    Parser::new(input, sink, config).parse_a_declaration()
}

/// `parse-a-component-value`: fails if the stream is empty or holds extra
/// non-whitespace content after the single component value.
pub fn parse_a_component_value(input: impl Into<ParserInput>) -> Result<ComponentValue, Error> {
    let mut sink = LoggingSink;
    Parser::new(input, &mut sink, ParserConfig::new(Context::ComponentValue)).parse_a_component_value()
}

pub fn parse_a_component_value_with(input: impl Into<ParserInput>, sink: &mut dyn ErrorSink, config: ParserConfig) -> Result<ComponentValue, Error> {
    Parser::new(input, sink, config).parse_a_component_value()
}

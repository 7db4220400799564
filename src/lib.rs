//! A standards-compliant CSS Syntax Level 3 tokenizer, parser, serializer
//! and canonicalizer.
//!
//! `tokenize` turns source text into a flat token sequence; the `parse_a_*`
//! family turns it into a parse tree (stylesheet, rule, declaration, or bare
//! component values); `to_source`/`Display` turn a tree back into text that
//! re-tokenizes to the same sequence; `canonicalize` walks a tree against a
//! declarative grammar of known at-rules.

pub mod canonicalize;
pub mod error;
pub mod escape;
pub mod json;
pub mod number;
pub mod parser;
pub mod parser_config;
pub mod preprocessor;
pub mod stream;
pub mod token;
pub mod token_stream;
pub mod tokenizer;
pub mod tree;

pub use canonicalize::{canonicalize, canonicalize_with, CanonicalRecord};
pub use error::{CollectingSink, Error, ErrorSink, LoggingSink, ParseError, ParseErrorKind};
pub use parser::{
    parse_a_component_value, parse_a_component_value_with, parse_a_declaration, parse_a_declaration_with, parse_a_list_of_component_values,
    parse_a_list_of_component_values_with, parse_a_list_of_declarations, parse_a_list_of_declarations_with, parse_a_list_of_rules,
    parse_a_list_of_rules_with, parse_a_rule, parse_a_rule_with, parse_a_stylesheet, parse_a_stylesheet_with,
    parse_a_comma_separated_list_of_component_values, parse_a_comma_separated_list_of_component_values_with, Parser, ParserInput,
};
pub use parser_config::{Context, ParserConfig};
pub use stream::Location;
pub use token::{HashFlag, NumberFlag, Token, TokenKind};
pub use tokenizer::{tokenize, tokenize_with_sink, Tokenizer};
pub use tree::{AtRule, ComponentValue, Declaration, DeclarationListItem, Function, QualifiedRule, Rule, SimpleBlock, Stylesheet};

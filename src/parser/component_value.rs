//! `consume-a-component-value` and the component-value-flavored public entry
//! points: `parse-a-component-value`, `parse-a-list-of-component-values`,
//! `parse-a-comma-separated-list-of-component-values`.

use crate::error::Error;
use crate::token::{Token, TokenKind};
use crate::tree::{opens_block, ComponentValue};

use crate::parser::Parser;

impl Parser<'_> {
    pub(crate) fn consume_component_value(&mut self) -> ComponentValue {
        if opens_block(&self.stream.next().kind).is_some() {
            return ComponentValue::Block(self.consume_simple_block());
        }

        let token = self.stream.consume();
        let location = token.location;
        match token.kind {
            TokenKind::Function(name) => ComponentValue::Function(self.consume_function_body(name, location)),
            kind => Token::new(kind, location).into(),
        }
    }

    pub(crate) fn parse_a_component_value(&mut self) -> Result<ComponentValue, Error> {
        self.stream.skip_whitespace();
        if matches!(self.stream.next().kind, TokenKind::Eof) {
            return Err(Error::SyntaxError("no component value to parse".into()));
        }

        let value = self.consume_component_value();
        if !self.stream.only_whitespace_remains() {
            return Err(Error::SyntaxError("extra content after component value".into()));
        }

        Ok(value)
    }

    pub(crate) fn parse_a_list_of_component_values(&mut self) -> Vec<ComponentValue> {
        let mut values = Vec::new();
        while !matches!(self.stream.next().kind, TokenKind::Eof) {
            values.push(self.consume_component_value());
        }
        values
    }

    pub(crate) fn parse_a_comma_separated_list_of_component_values(&mut self) -> Vec<Vec<ComponentValue>> {
        let mut groups = vec![Vec::new()];
        loop {
            match self.stream.next().kind {
                TokenKind::Eof => break,
                TokenKind::Comma => {
                    self.stream.consume();
                    groups.push(Vec::new());
                }
                _ => {
                    let value = self.consume_component_value();
                    if let Some(group) = groups.last_mut() {
                        group.push(value);
                    }
                }
            }
        }
        groups
    }
}

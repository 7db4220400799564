//! `consume-a-function`.

use crate::parser::Parser;
use crate::stream::Location;
use crate::token::TokenKind;
use crate::tree::Function;

impl Parser<'_> {
    /// Assumes the Function token itself has already been consumed by the
    /// caller; `name` is its value and `location` where it started.
    pub(crate) fn consume_function_body(&mut self, name: String, location: Location) -> Function {
        let mut value = Vec::new();
        loop {
            match self.stream.next().kind {
                TokenKind::CloseParen => {
                    self.stream.consume();
                    break;
                }
                TokenKind::Eof => break,
                _ => value.push(self.consume_component_value()),
            }
        }
        Function::new(name, value, location)
    }
}

//! `consume-a-simple-block`.

use crate::error::ParseErrorKind;
use crate::parser::Parser;
use crate::token::{mirror_char, TokenKind};
use crate::tree::SimpleBlock;

impl Parser<'_> {
    /// Assumes `self.stream.next()` is an opener token (`{`, `[`, `(`);
    /// consumes it and everything up to the matching closer (or EOF).
    pub(crate) fn consume_simple_block(&mut self) -> SimpleBlock {
        let open = self.stream.consume();
        let (opener, closer) = match open.kind {
            TokenKind::OpenCurly => ('{', TokenKind::CloseCurly),
            TokenKind::OpenSquare => ('[', TokenKind::CloseSquare),
            TokenKind::OpenParen => ('(', TokenKind::CloseParen),
            _ => ('{', TokenKind::CloseCurly),
        };
        let location = open.location;

        let mut value = Vec::new();
        loop {
            let next = self.stream.next();
            if next.kind == closer {
                self.stream.consume();
                break;
            }
            if matches!(next.kind, TokenKind::Eof) {
                let expected = mirror_char(opener).unwrap_or(opener);
                self.error(ParseErrorKind::UnterminatedBlock(expected), location);
                break;
            }
            value.push(self.consume_component_value());
        }

        SimpleBlock::new(opener, value, location)
    }
}

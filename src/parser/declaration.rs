//! `consume-a-list-of-declarations` and `consume-a-declaration`, plus
//! `parse-a-declaration`.

use crate::error::{Error, ErrorSink, ParseErrorKind};
use crate::parser::{Parser, ParserInput};
use crate::parser_config::{Context, ParserConfig};
use crate::token::{Token, TokenKind};
use crate::tree::{Declaration, DeclarationListItem};

impl Parser<'_> {
    pub(crate) fn consume_list_of_declarations(&mut self) -> Vec<DeclarationListItem> {
        let mut items = Vec::new();

        loop {
            match self.stream.next().kind {
                TokenKind::Whitespace | TokenKind::Semicolon => {
                    self.stream.consume();
                }
                TokenKind::Eof => break,
                TokenKind::AtKeyword(_) => {
                    items.push(DeclarationListItem::AtRule(self.consume_at_rule()));
                }
                TokenKind::Ident(_) => {
                    let tokens = self.collect_declaration_tokens();
                    if let Some(decl) = consume_declaration_from_tokens(tokens, &mut *self.sink) {
                        items.push(DeclarationListItem::Declaration(decl));
                    }
                }
                _ => {
                    let next = self.stream.next();
                    self.error(ParseErrorKind::UnexpectedToken(format!("{:?}", next.kind)), next.location);
                    self.skip_to_next_declaration();
                    if !self.config.ignore_errors {
                        break;
                    }
                }
            }
        }

        items
    }

    /// Collects the raw tokens of one declaration, from the leading Ident up
    /// to (but not including) the terminating Semicolon or EOF.
    fn collect_declaration_tokens(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            match self.stream.next().kind {
                TokenKind::Semicolon | TokenKind::Eof => break,
                _ => tokens.push(self.stream.consume()),
            }
        }
        tokens
    }

    /// After a malformed declaration-list item, discard tokens up to the
    /// next Semicolon or EOF so the list can resync.
    fn skip_to_next_declaration(&mut self) {
        loop {
            match self.stream.next().kind {
                TokenKind::Semicolon => {
                    self.stream.consume();
                    break;
                }
                TokenKind::Eof => break,
                _ => {
                    self.stream.consume();
                }
            }
        }
    }

    pub(crate) fn parse_a_list_of_declarations(&mut self) -> Vec<DeclarationListItem> {
        self.consume_list_of_declarations()
    }

    pub(crate) fn parse_a_declaration(&mut self) -> Result<Declaration, Error> {
        self.stream.skip_whitespace();
        if !matches!(self.stream.next().kind, TokenKind::Ident(_)) {
            return Err(Error::SyntaxError("declaration must start with an identifier".into()));
        }

        let tokens = self.collect_declaration_tokens();
        consume_declaration_from_tokens(tokens, &mut *self.sink).ok_or_else(|| Error::SyntaxError("missing ':' in declaration".into()))
    }
}

/// `consume-a-declaration`, given the flat token run from the leading Ident
/// up to (excluding) its terminator. Returns `None` (after reporting) if
/// there's no colon.
pub(crate) fn consume_declaration_from_tokens(mut tokens: Vec<Token>, sink: &mut dyn ErrorSink) -> Option<Declaration> {
    if tokens.is_empty() {
        return None;
    }

    let name_token = tokens.remove(0);
    let location = name_token.location;
    let name = match name_token.kind {
        TokenKind::Ident(name) => name,
        _ => return None,
    };

    let mut rest = tokens.into_iter().peekable();
    while matches!(rest.peek().map(|t| &t.kind), Some(TokenKind::Whitespace)) {
        rest.next();
    }
    match rest.peek().map(|t| &t.kind) {
        Some(TokenKind::Colon) => {
            rest.next();
        }
        _ => {
            sink.report(&crate::error::ParseError::new(ParseErrorKind::InvalidDeclaration(name), location));
            return None;
        }
    }

    let mut value: Vec<Token> = rest.collect();
    while matches!(value.last().map(|t| &t.kind), Some(TokenKind::Whitespace)) {
        value.pop();
    }

    let important = strip_important_suffix(&mut value);

    let mut sub_sink = crate::error::CollectingSink::default();
    let component_values = {
        let mut parser = Parser::new(ParserInput::Tokens(value), &mut sub_sink, ParserConfig::new(Context::ListOfComponentValues));
        parser.parse_a_list_of_component_values()
    };
    for error in sub_sink.errors {
        sink.report(&error);
    }

    Some(Declaration { name, value: component_values, important, location })
}

/// Strips a trailing `! important` (whitespace-tolerant, case-insensitive)
/// from a declaration's already whitespace-trimmed value tokens. Returns
/// whether it was present.
fn strip_important_suffix(tokens: &mut Vec<Token>) -> bool {
    let mut i = tokens.len();

    let mut j = i;
    while j > 0 && matches!(tokens[j - 1].kind, TokenKind::Whitespace) {
        j -= 1;
    }
    if j == 0 || !tokens[j - 1].is_ident_ci("important") {
        return false;
    }
    i = j - 1;

    while i > 0 && matches!(tokens[i - 1].kind, TokenKind::Whitespace) {
        i -= 1;
    }
    if i == 0 || !matches!(tokens[i - 1].kind, TokenKind::Delim('!')) {
        return false;
    }
    i -= 1;

    tokens.truncate(i);
    while matches!(tokens.last().map(|t| &t.kind), Some(TokenKind::Whitespace)) {
        tokens.pop();
    }
    true
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::LoggingSink;
    use crate::tokenizer::tokenize;

    fn declaration_tokens(src: &str) -> Vec<Token> {
        tokenize(src).into_iter().filter(|t| !t.is_eof()).collect()
    }

    #[test]
    fn strips_important_with_whitespace() {
        let mut tokens = declaration_tokens("red ! important");
        let stripped = strip_important_suffix(&mut tokens);
        assert!(stripped);
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn important_is_case_insensitive() {
        let mut tokens = declaration_tokens("red !ImPoRtAnT");
        assert!(strip_important_suffix(&mut tokens));
    }

    #[test]
    fn no_important_suffix_left_alone() {
        let mut tokens = declaration_tokens("red");
        assert!(!strip_important_suffix(&mut tokens));
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn consumes_simple_declaration() {
        let mut sink = LoggingSink;
        let tokens = declaration_tokens("color: red");
        let decl = consume_declaration_from_tokens(tokens, &mut sink).unwrap();
        assert_eq!(decl.name, "color");
        assert!(!decl.important);
        assert_eq!(decl.value.len(), 1);
    }

    #[test]
    fn missing_colon_reports_and_returns_none() {
        let mut sink = LoggingSink;
        let tokens = declaration_tokens("color red");
        assert!(consume_declaration_from_tokens(tokens, &mut sink).is_none());
    }
}

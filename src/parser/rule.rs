//! `consume-a-list-of-rules`, `consume-an-at-rule`, `consume-a-qualified-rule`
//! and `parse-a-rule`.

use crate::error::Error;
use crate::parser::Parser;
use crate::token::TokenKind;
use crate::tree::{AtRule, QualifiedRule, Rule};

impl Parser<'_> {
    pub(crate) fn consume_list_of_rules(&mut self, top_level: bool) -> Vec<Rule> {
        let mut rules = Vec::new();

        loop {
            match self.stream.next().kind {
                TokenKind::Whitespace => {
                    self.stream.consume();
                }
                TokenKind::Eof => break,
                TokenKind::Cdo | TokenKind::Cdc if top_level => {
                    self.stream.consume();
                }
                TokenKind::Cdo | TokenKind::Cdc => {
                    let tok = self.stream.next();
                    self.error(crate::error::ParseErrorKind::StrayCdoCdc, tok.location);
                    match self.consume_qualified_rule() {
                        Some(rule) => rules.push(Rule::Qualified(rule)),
                        None if !self.config.ignore_errors => break,
                        None => {}
                    }
                }
                TokenKind::AtKeyword(_) => {
                    rules.push(Rule::At(self.consume_at_rule()));
                }
                _ => match self.consume_qualified_rule() {
                    Some(rule) => rules.push(Rule::Qualified(rule)),
                    None if !self.config.ignore_errors => break,
                    None => {}
                },
            }
        }

        rules
    }

    pub(crate) fn consume_at_rule(&mut self) -> AtRule {
        let start = self.stream.consume();
        let location = start.location;
        let name = match start.kind {
            TokenKind::AtKeyword(name) => name,
            _ => String::new(),
        };

        let mut prelude = Vec::new();
        loop {
            match self.stream.next().kind {
                TokenKind::Semicolon => {
                    self.stream.consume();
                    return AtRule { name, prelude, block: None, location };
                }
                TokenKind::Eof => {
                    return AtRule { name, prelude, block: None, location };
                }
                TokenKind::OpenCurly => {
                    let block = self.consume_simple_block();
                    return AtRule { name, prelude, block: Some(block), location };
                }
                _ => prelude.push(self.consume_component_value()),
            }
        }
    }

    pub(crate) fn consume_qualified_rule(&mut self) -> Option<QualifiedRule> {
        let location = self.stream.next().location;
        let mut prelude = Vec::new();

        loop {
            match self.stream.next().kind {
                TokenKind::Eof => {
                    self.error(crate::error::ParseErrorKind::QualifiedRuleMissingBlock, location);
                    return None;
                }
                TokenKind::OpenCurly => {
                    let block = self.consume_simple_block();
                    return Some(QualifiedRule { prelude, block, location });
                }
                _ => prelude.push(self.consume_component_value()),
            }
        }
    }

    pub(crate) fn parse_a_rule(&mut self) -> Result<Rule, Error> {
        self.stream.skip_whitespace();

        let rule = match self.stream.next().kind {
            TokenKind::Eof => return Err(Error::SyntaxError("no rule to parse".into())),
            TokenKind::AtKeyword(_) => Rule::At(self.consume_at_rule()),
            _ => self
                .consume_qualified_rule()
                .map(Rule::Qualified)
                .ok_or_else(|| Error::SyntaxError("qualified rule never reached a block".into()))?,
        };

        if !self.stream.only_whitespace_remains() {
            return Err(Error::SyntaxError("extra content after rule".into()));
        }

        Ok(rule)
    }
}

#[cfg(test)]
mod test {
    use crate::error::{CollectingSink, ParseErrorKind};
    use crate::parser::parse_a_list_of_rules_with;
    use crate::parser_config::{Context, ParserConfig};

    #[test]
    fn stray_cdo_cdc_in_nested_rule_list_is_reported() {
        let mut sink = CollectingSink::default();
        let config = ParserConfig::new(Context::ListOfRules);
        let rules = parse_a_list_of_rules_with("--> a {}", &mut sink, config);
        assert_eq!(rules.len(), 1);
        assert_eq!(sink.errors.len(), 1);
        assert_eq!(sink.errors[0].kind, ParseErrorKind::StrayCdoCdc);
    }
}

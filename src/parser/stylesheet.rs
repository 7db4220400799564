//! `parse-a-stylesheet` / `parse-a-list-of-rules`.

use crate::parser::Parser;
use crate::tree::{Rule, Stylesheet};

impl Parser<'_> {
    pub(crate) fn parse_a_stylesheet(&mut self) -> Stylesheet {
        let rules = self.consume_list_of_rules(true);
        Stylesheet { rules }
    }

    pub(crate) fn parse_a_list_of_rules(&mut self) -> Vec<Rule> {
        self.consume_list_of_rules(false)
    }
}

//! §4.3: a random-access view over a finite, already-materialized token
//! vector (§4.3 specifies random access rather than a forward-only cursor).

use crate::stream::Location;
use crate::token::{Token, TokenKind};
use crate::tokenizer::tokenize;

/// A random-access cursor over a finite token sequence. Reading past the
/// end always yields a fresh EOF token located just past the last real one.
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
    eof_location: Location,
}

impl TokenStream {
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        let eof_location = tokens.last().map_or_else(Location::default, |t| t.location);
        Self { tokens, pos: 0, eof_location }
    }

    #[must_use]
    pub fn from_str(input: &str) -> Self {
        Self::new(tokenize(input))
    }

    fn eof_token(&self) -> Token {
        Token::eof(self.eof_location)
    }

    /// Peeks the next token without consuming it.
    #[must_use]
    pub fn next(&self) -> Token {
        self.peek_at(0)
    }

    /// Peeks `n` tokens ahead of the cursor without consuming.
    #[must_use]
    pub fn peek_at(&self, n: usize) -> Token {
        self.tokens.get(self.pos + n).cloned().unwrap_or_else(|| self.eof_token())
    }

    /// Consumes and returns the next token, advancing the cursor by one.
    pub fn consume(&mut self) -> Token {
        let token = self.next();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Backs the cursor up by one token.
    pub fn reconsume(&mut self) {
        if self.pos > 0 {
            self.pos -= 1;
        }
    }

    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Skips any run of Whitespace tokens starting at the cursor.
    pub fn skip_whitespace(&mut self) {
        while matches!(self.next().kind, TokenKind::Whitespace) {
            self.consume();
        }
    }

    /// Consumes and returns every token from the cursor to the end, in
    /// order, leaving the stream at EOF.
    pub fn into_remaining(mut self) -> Vec<Token> {
        let mut out = Vec::new();
        while !self.is_eof() {
            out.push(self.consume());
        }
        out
    }

    /// True if everything remaining in the stream is Whitespace followed by
    /// EOF — the "extra content" check used by `parse-a-rule` and friends.
    #[must_use]
    pub fn only_whitespace_remains(&self) -> bool {
        let mut i = self.pos;
        while let Some(t) = self.tokens.get(i) {
            if !matches!(t.kind, TokenKind::Whitespace) {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reading_past_end_yields_eof() {
        let mut s = TokenStream::from_str("a");
        assert_eq!(s.consume().kind, TokenKind::Ident("a".into()));
        assert_eq!(s.consume().kind, TokenKind::Eof);
        assert_eq!(s.consume().kind, TokenKind::Eof);
        assert!(s.is_eof());
    }

    #[test]
    fn reconsume_backs_up_one() {
        let mut s = TokenStream::from_str("a b");
        let first = s.consume();
        s.reconsume();
        assert_eq!(s.consume(), first);
    }

    #[test]
    fn only_whitespace_remains_detects_extra_content() {
        let s = TokenStream::from_str("  ");
        assert!(s.only_whitespace_remains());
        let s = TokenStream::from_str("  x");
        assert!(!s.only_whitespace_remains());
    }
}

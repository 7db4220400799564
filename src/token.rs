//! §3's closed token variant set, its payloads, and `toSource` round-trip
//! serialization. No `Comment` variant — comments are discarded during
//! tokenization and never become tokens. `BadString`/`BadUrl` carry no
//! payload.

use std::fmt;

use crate::escape::{escape_delim, escape_dimension_unit, escape_hash, escape_ident, escape_string};
use crate::stream::Location;

/// Whether a Hash token's value would itself start an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HashFlag {
    Id,
    Unrestricted,
}

/// Whether a numeric token's `repr` contained a fractional or exponent part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberFlag {
    Integer,
    Number,
}

/// The closed set of token kinds from §3's payload table.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Whitespace,
    String(String),
    BadString,
    Hash { value: String, flag: HashFlag },
    SuffixMatch,
    SubstringMatch,
    PrefixMatch,
    DashMatch,
    IncludeMatch,
    Column,
    OpenParen,
    CloseParen,
    OpenSquare,
    CloseSquare,
    OpenCurly,
    CloseCurly,
    Comma,
    Colon,
    Semicolon,
    Cdo,
    Cdc,
    AtKeyword(String),
    Delim(char),
    Ident(String),
    Function(String),
    Number { repr: String, value: f64, flag: NumberFlag },
    Percentage { repr: String, value: f64 },
    Dimension { repr: String, value: f64, flag: NumberFlag, unit: String },
    Url(String),
    BadUrl,
    Eof,
}

/// A token plus the location at which it started.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub location: Location,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, location: Location) -> Self {
        Self { kind, location }
    }

    #[must_use]
    pub fn eof(location: Location) -> Self {
        Self::new(TokenKind::Eof, location)
    }

    #[must_use]
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    #[must_use]
    pub fn is_whitespace(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace)
    }

    #[must_use]
    pub fn ident_value(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Ident(v) => Some(v),
            _ => None,
        }
    }

    /// Case-insensitive match against an ASCII identifier value (used for
    /// `!important`, `url(`, and at-rule-name dispatch).
    #[must_use]
    pub fn is_ident_ci(&self, want: &str) -> bool {
        matches!(&self.kind, TokenKind::Ident(v) if v.eq_ignore_ascii_case(want))
    }

    /// The exact source text this token serializes back to, per §4.6.
    #[must_use]
    pub fn to_source(&self) -> String {
        match &self.kind {
            TokenKind::Whitespace => " ".to_string(),
            TokenKind::String(s) => escape_string(s).unwrap_or_else(|_| format!("\"{s}\"")),
            TokenKind::BadString => "\"".to_string(),
            TokenKind::Hash { value, .. } => {
                format!("#{}", escape_hash(value).unwrap_or_else(|_| value.clone()))
            }
            TokenKind::SuffixMatch => "$=".to_string(),
            TokenKind::SubstringMatch => "*=".to_string(),
            TokenKind::PrefixMatch => "^=".to_string(),
            TokenKind::DashMatch => "|=".to_string(),
            TokenKind::IncludeMatch => "~=".to_string(),
            TokenKind::Column => "||".to_string(),
            TokenKind::OpenParen => "(".to_string(),
            TokenKind::CloseParen => ")".to_string(),
            TokenKind::OpenSquare => "[".to_string(),
            TokenKind::CloseSquare => "]".to_string(),
            TokenKind::OpenCurly => "{".to_string(),
            TokenKind::CloseCurly => "}".to_string(),
            TokenKind::Comma => ",".to_string(),
            TokenKind::Colon => ":".to_string(),
            TokenKind::Semicolon => ";".to_string(),
            TokenKind::Cdo => "<!--".to_string(),
            TokenKind::Cdc => "-->".to_string(),
            TokenKind::AtKeyword(name) => {
                format!("@{}", escape_ident(name).unwrap_or_else(|_| name.clone()))
            }
            TokenKind::Delim(c) => escape_delim(*c),
            TokenKind::Ident(name) => escape_ident(name).unwrap_or_else(|_| name.clone()),
            TokenKind::Function(name) => {
                format!("{}(", escape_ident(name).unwrap_or_else(|_| name.clone()))
            }
            TokenKind::Number { repr, .. } => repr.clone(),
            TokenKind::Percentage { repr, .. } => format!("{repr}%"),
            TokenKind::Dimension { repr, unit, .. } => {
                format!("{repr}{}", escape_dimension_unit(unit))
            }
            TokenKind::Url(value) => format!("url({value})"),
            TokenKind::BadUrl => "url(".to_string(),
            TokenKind::Eof => String::new(),
        }
    }

    /// The mirrored closing delimiter for an opener token, if any.
    #[must_use]
    pub fn mirror(&self) -> Option<TokenKind> {
        match self.kind {
            TokenKind::OpenParen => Some(TokenKind::CloseParen),
            TokenKind::OpenSquare => Some(TokenKind::CloseSquare),
            TokenKind::OpenCurly => Some(TokenKind::CloseCurly),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_source())
    }
}

/// Returns the matching closing delimiter character for `(`, `[`, `{`.
#[must_use]
pub fn mirror_char(opener: char) -> Option<char> {
    match opener {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn delim_round_trips() {
        let t = Token::new(TokenKind::Delim('#'), Location::default());
        assert_eq!(t.to_source(), "#");
    }

    #[test]
    fn dimension_round_trips() {
        let t = Token::new(
            TokenKind::Dimension { repr: "12".into(), value: 12.0, flag: NumberFlag::Integer, unit: "px".into() },
            Location::default(),
        );
        assert_eq!(t.to_source(), "12px");
    }

    #[test]
    fn ident_ci_matches() {
        let t = Token::new(TokenKind::Ident("IMPORTANT".into()), Location::default());
        assert!(t.is_ident_ci("important"));
    }
}

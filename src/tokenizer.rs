//! §4.2: the tokenizer state machine. An owned mutable code-point stream,
//! a `consume_token` dispatch on the current code point, and one
//! `consume_*` helper per CSS Syntax sub-algorithm. No `Comment` token —
//! comments are discarded, never emitted, per §4.2.

use crate::error::{ErrorSink, LoggingSink, ParseError, ParseErrorKind};
use crate::number::convert_string_to_number;
use crate::preprocessor::preprocess_str;
use crate::stream::{Character, CodePointStream, Location};
use crate::token::{HashFlag, NumberFlag, Token, TokenKind};

fn is_whitespace(c: char) -> bool {
    matches!(c, '\u{000A}' | '\u{0009}' | '\u{0020}')
}

fn is_non_printable(c: char) -> bool {
    matches!(c, '\u{0000}'..='\u{0008}' | '\u{000B}' | '\u{000E}'..='\u{001F}' | '\u{007F}')
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic() || (c as u32) >= 0x80
}

fn is_ident_char(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit() || c == '-'
}

/// The tokenizer: owns the code-point stream and a pluggable error sink for
/// recoverable parse errors.
pub struct Tokenizer<'a> {
    stream: CodePointStream,
    sink: &'a mut dyn ErrorSink,
}

impl<'a> Tokenizer<'a> {
    #[must_use]
    pub fn new(input: &str, sink: &'a mut dyn ErrorSink) -> Self {
        Self { stream: CodePointStream::new(preprocess_str(input)), sink }
    }

    #[must_use]
    pub fn from_codepoints(codepoints: Vec<char>, sink: &'a mut dyn ErrorSink) -> Self {
        Self { stream: CodePointStream::new(codepoints), sink }
    }

    fn error(&mut self, kind: ParseErrorKind, location: Location) {
        self.sink.report(&ParseError::new(kind, location));
    }

    /// Bounded lookahead: `n` is always 0..=3 from call sites in this file,
    /// so the stream's own invariant check never trips.
    fn la(&self, n: usize) -> Character {
        self.stream.peek(n).unwrap_or(Character::Eof)
    }

    fn current(&self) -> Character {
        self.stream.current()
    }

    /// Runs the tokenizer to completion, returning every token including a
    /// trailing EOF token. Enforces the bounded-work guard of §4.2.
    pub fn run(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        let max_iterations = self.stream.len() * 2 + 16;
        let mut iterations = 0_usize;

        loop {
            iterations += 1;
            debug_assert!(
                iterations <= max_iterations,
                "tokenizer exceeded its bounded-work guard of 2x input length"
            );

            let before = self.stream.tell();
            let token = self.consume_token();
            log::trace!("{:?}", token);
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
            if self.stream.tell() == before {
                // Defensive: every branch below makes positive progress: this
                // only fires if a future edit breaks that invariant.
                self.stream.advance();
            }
        }

        tokens
    }

    fn consume_comments(&mut self) {
        loop {
            if matches!(self.current(), Character::Ch('/')) && matches!(self.la(1), Character::Ch('*')) {
                let start = self.stream.location();
                self.stream.advance();
                self.stream.advance();
                loop {
                    match self.current() {
                        Character::Eof => {
                            self.error(ParseErrorKind::UnterminatedComment, start);
                            return;
                        }
                        Character::Ch('*') if matches!(self.la(1), Character::Ch('/')) => {
                            self.stream.advance();
                            self.stream.advance();
                            break;
                        }
                        _ => {
                            self.stream.advance();
                        }
                    }
                }
            } else {
                return;
            }
        }
    }

    /// The top-level dispatch: consumes any leading comments, then produces
    /// exactly one token.
    pub fn consume_token(&mut self) -> Token {
        self.consume_comments();
        let location = self.stream.location();

        let kind = match self.current() {
            Character::Ch(c) if is_whitespace(c) => {
                while matches!(self.current(), Character::Ch(c) if is_whitespace(c)) {
                    self.stream.advance();
                }
                TokenKind::Whitespace
            }
            Character::Ch('"') => {
                self.stream.advance();
                self.consume_string_token('"', location)
            }
            Character::Ch('\'') => {
                self.stream.advance();
                self.consume_string_token('\'', location)
            }
            Character::Ch('#') => {
                self.stream.advance();
                self.consume_hash()
            }
            Character::Ch('(') => {
                self.stream.advance();
                TokenKind::OpenParen
            }
            Character::Ch(')') => {
                self.stream.advance();
                TokenKind::CloseParen
            }
            Character::Ch('[') => {
                self.stream.advance();
                TokenKind::OpenSquare
            }
            Character::Ch(']') => {
                self.stream.advance();
                TokenKind::CloseSquare
            }
            Character::Ch('{') => {
                self.stream.advance();
                TokenKind::OpenCurly
            }
            Character::Ch('}') => {
                self.stream.advance();
                TokenKind::CloseCurly
            }
            Character::Ch(',') => {
                self.stream.advance();
                TokenKind::Comma
            }
            Character::Ch(':') => {
                self.stream.advance();
                TokenKind::Colon
            }
            Character::Ch(';') => {
                self.stream.advance();
                TokenKind::Semicolon
            }
            Character::Ch('$') if matches!(self.la(1), Character::Ch('=')) => {
                self.stream.advance();
                self.stream.advance();
                TokenKind::SuffixMatch
            }
            Character::Ch('*') if matches!(self.la(1), Character::Ch('=')) => {
                self.stream.advance();
                self.stream.advance();
                TokenKind::SubstringMatch
            }
            Character::Ch('^') if matches!(self.la(1), Character::Ch('=')) => {
                self.stream.advance();
                self.stream.advance();
                TokenKind::PrefixMatch
            }
            Character::Ch('~') if matches!(self.la(1), Character::Ch('=')) => {
                self.stream.advance();
                self.stream.advance();
                TokenKind::IncludeMatch
            }
            Character::Ch('|') if matches!(self.la(1), Character::Ch('=')) => {
                self.stream.advance();
                self.stream.advance();
                TokenKind::DashMatch
            }
            Character::Ch('|') if matches!(self.la(1), Character::Ch('|')) => {
                self.stream.advance();
                self.stream.advance();
                TokenKind::Column
            }
            Character::Ch('<') if self.starts_cdo() => {
                self.stream.advance();
                self.stream.advance();
                self.stream.advance();
                self.stream.advance();
                TokenKind::Cdo
            }
            Character::Ch('-') if self.starts_cdc() => {
                self.stream.advance();
                self.stream.advance();
                self.stream.advance();
                TokenKind::Cdc
            }
            Character::Ch('@') => {
                self.stream.advance();
                if self.would_start_ident_seq(0) {
                    TokenKind::AtKeyword(self.consume_name())
                } else {
                    TokenKind::Delim('@')
                }
            }
            Character::Ch('\\') if self.is_valid_escape_start(0) => self.consume_ident_like(),
            Character::Ch('\\') => {
                self.error(ParseErrorKind::InvalidEscape, location);
                self.stream.advance();
                TokenKind::Delim('\\')
            }
            Character::Ch(c) if c.is_ascii_digit() => self.consume_numeric_token(),
            Character::Ch(c) if c == '+' || c == '.' => {
                if self.would_start_number(0) {
                    self.consume_numeric_token()
                } else {
                    self.stream.advance();
                    TokenKind::Delim(c)
                }
            }
            Character::Ch('-') => {
                if self.would_start_number(0) {
                    self.consume_numeric_token()
                } else if self.would_start_ident_seq(0) {
                    self.consume_ident_like()
                } else {
                    self.stream.advance();
                    TokenKind::Delim('-')
                }
            }
            Character::Ch(c) if is_ident_start(c) => self.consume_ident_like(),
            Character::Ch(c) => {
                self.stream.advance();
                TokenKind::Delim(c)
            }
            Character::Eof => TokenKind::Eof,
        };

        Token::new(kind, location)
    }

    fn starts_cdo(&self) -> bool {
        matches!(self.current(), Character::Ch('<'))
            && matches!(self.la(1), Character::Ch('!'))
            && matches!(self.la(2), Character::Ch('-'))
            && matches!(self.la(3), Character::Ch('-'))
    }

    fn starts_cdc(&self) -> bool {
        matches!(self.current(), Character::Ch('-'))
            && matches!(self.la(1), Character::Ch('-'))
            && matches!(self.la(2), Character::Ch('>'))
    }

    fn is_valid_escape_start(&self, offset: usize) -> bool {
        matches!(self.la(offset), Character::Ch('\\')) && !matches!(self.la(offset + 1), Character::Ch('\u{000A}') | Character::Eof)
    }

    /// Whether the three code points at `offset..offset+3` would start an
    /// identifier (§4.2's "would-start-an-identifier" check).
    fn would_start_ident_seq(&self, offset: usize) -> bool {
        match self.la(offset) {
            Character::Ch('-') => match self.la(offset + 1) {
                Character::Ch(c) if is_ident_start(c) || c == '-' => true,
                Character::Ch('\\') => self.is_valid_escape_start(offset + 1),
                _ => false,
            },
            Character::Ch(c) if is_ident_start(c) => true,
            Character::Ch('\\') => self.is_valid_escape_start(offset),
            _ => false,
        }
    }

    /// Whether the code points at `offset..` would start a number.
    fn would_start_number(&self, offset: usize) -> bool {
        match self.la(offset) {
            Character::Ch('+' | '-') => match self.la(offset + 1) {
                Character::Ch(c) if c.is_ascii_digit() => true,
                Character::Ch('.') => matches!(self.la(offset + 2), Character::Ch(c) if c.is_ascii_digit()),
                _ => false,
            },
            Character::Ch('.') => matches!(self.la(offset + 1), Character::Ch(c) if c.is_ascii_digit()),
            Character::Ch(c) => c.is_ascii_digit(),
            Character::Eof => false,
        }
    }

    fn consume_name(&mut self) -> String {
        let mut name = String::new();
        loop {
            match self.current() {
                Character::Ch(c) if is_ident_char(c) => {
                    name.push(c);
                    self.stream.advance();
                }
                Character::Ch('\\') if self.is_valid_escape_start(0) => {
                    self.stream.advance();
                    name.push(self.consume_escaped_code_point());
                }
                _ => return name,
            }
        }
    }

    /// Consumes one escaped code point, assuming the leading `\` has already
    /// been consumed by the caller. Always returns a well-defined `char`,
    /// including at EOF (Open Question E1).
    fn consume_escaped_code_point(&mut self) -> char {
        if !matches!(self.current(), Character::Ch(c) if c.is_ascii_hexdigit()) {
            return match self.current() {
                Character::Eof => '\u{FFFD}',
                Character::Ch(c) => {
                    self.stream.advance();
                    c
                }
            };
        }

        let mut hex = String::new();
        while hex.len() < 6 {
            match self.current() {
                Character::Ch(h) if h.is_ascii_hexdigit() => {
                    hex.push(h);
                    self.stream.advance();
                }
                _ => break,
            }
        }
        if matches!(self.current(), Character::Ch(c) if is_whitespace(c)) {
            self.stream.advance();
        }
        let value = u32::from_str_radix(&hex, 16).unwrap_or(0);
        if value == 0 || value > 0x10FFFF || (0xD800..=0xDFFF).contains(&value) {
            '\u{FFFD}'
        } else {
            char::from_u32(value).unwrap_or('\u{FFFD}')
        }
    }

    fn consume_string_token(&mut self, quote: char, start: Location) -> TokenKind {
        let mut value = String::new();
        loop {
            match self.current() {
                Character::Eof => {
                    self.error(ParseErrorKind::UnterminatedString, start);
                    return TokenKind::String(value);
                }
                Character::Ch(c) if c == quote => {
                    self.stream.advance();
                    return TokenKind::String(value);
                }
                Character::Ch('\u{000A}') => {
                    self.error(ParseErrorKind::BadString, start);
                    return TokenKind::BadString;
                }
                Character::Ch('\\') => {
                    if matches!(self.la(1), Character::Eof) {
                        self.stream.advance();
                        continue;
                    }
                    if matches!(self.la(1), Character::Ch('\u{000A}')) {
                        self.stream.advance();
                        self.stream.advance();
                        continue;
                    }
                    self.stream.advance();
                    value.push(self.consume_escaped_code_point());
                }
                Character::Ch(c) => {
                    value.push(c);
                    self.stream.advance();
                }
            }
        }
    }

    fn consume_hash(&mut self) -> TokenKind {
        let is_name_char = matches!(self.current(), Character::Ch(c) if is_ident_char(c));
        let is_escape = self.is_valid_escape_start(0);
        if !is_name_char && !is_escape {
            return TokenKind::Delim('#');
        }
        let flag = if self.would_start_ident_seq(0) { HashFlag::Id } else { HashFlag::Unrestricted };
        let name = self.consume_name();
        TokenKind::Hash { value: name, flag }
    }

    fn consume_numeric_token(&mut self) -> TokenKind {
        let (repr, value, flag) = self.consume_number();
        if self.would_start_ident_seq(0) {
            let unit = self.consume_name();
            TokenKind::Dimension { repr, value, flag, unit }
        } else if matches!(self.current(), Character::Ch('%')) {
            self.stream.advance();
            TokenKind::Percentage { repr, value }
        } else {
            TokenKind::Number { repr, value, flag }
        }
    }

    fn consume_number(&mut self) -> (String, f64, NumberFlag) {
        let mut repr = String::new();
        let mut flag = NumberFlag::Integer;

        if matches!(self.current(), Character::Ch('+' | '-')) {
            if let Character::Ch(c) = self.current() {
                repr.push(c);
            }
            self.stream.advance();
        }

        while let Character::Ch(c) = self.current() {
            if !c.is_ascii_digit() {
                break;
            }
            repr.push(c);
            self.stream.advance();
        }

        if matches!(self.current(), Character::Ch('.')) && matches!(self.la(1), Character::Ch(c) if c.is_ascii_digit()) {
            flag = NumberFlag::Number;
            repr.push('.');
            self.stream.advance();
            while let Character::Ch(c) = self.current() {
                if !c.is_ascii_digit() {
                    break;
                }
                repr.push(c);
                self.stream.advance();
            }
        }

        if matches!(self.current(), Character::Ch('e' | 'E')) {
            let has_sign = matches!(self.la(1), Character::Ch('+' | '-'));
            let digit_offset = if has_sign { 2 } else { 1 };
            if matches!(self.la(digit_offset), Character::Ch(c) if c.is_ascii_digit()) {
                flag = NumberFlag::Number;
                if let Character::Ch(e) = self.current() {
                    repr.push(e);
                }
                self.stream.advance();
                if has_sign {
                    if let Character::Ch(s) = self.current() {
                        repr.push(s);
                    }
                    self.stream.advance();
                }
                while let Character::Ch(c) = self.current() {
                    if !c.is_ascii_digit() {
                        break;
                    }
                    repr.push(c);
                    self.stream.advance();
                }
            }
        }

        let value = convert_string_to_number(&repr);
        (repr, value, flag)
    }

    fn consume_ident_like(&mut self) -> TokenKind {
        let name = self.consume_name();

        if name.eq_ignore_ascii_case("url") && matches!(self.current(), Character::Ch('(')) {
            self.stream.advance();
            while matches!(self.current(), Character::Ch(c) if is_whitespace(c)) {
                self.stream.advance();
            }
            if matches!(self.current(), Character::Ch('"' | '\'')) {
                return TokenKind::Function(name);
            }
            return self.consume_url_token();
        }

        if matches!(self.current(), Character::Ch('(')) {
            self.stream.advance();
            return TokenKind::Function(name);
        }

        TokenKind::Ident(name)
    }

    fn consume_url_token(&mut self) -> TokenKind {
        let start = self.stream.location();
        while matches!(self.current(), Character::Ch(c) if is_whitespace(c)) {
            self.stream.advance();
        }

        let mut value = String::new();
        loop {
            match self.current() {
                Character::Ch(')') => {
                    self.stream.advance();
                    return TokenKind::Url(value);
                }
                Character::Eof => {
                    self.error(ParseErrorKind::UnterminatedUrl, start);
                    return TokenKind::Url(value);
                }
                Character::Ch(c) if is_whitespace(c) => {
                    while matches!(self.current(), Character::Ch(c) if is_whitespace(c)) {
                        self.stream.advance();
                    }
                    match self.current() {
                        Character::Ch(')') => {
                            self.stream.advance();
                            return TokenKind::Url(value);
                        }
                        Character::Eof => {
                            self.error(ParseErrorKind::UnterminatedUrl, start);
                            return TokenKind::Url(value);
                        }
                        _ => {
                            self.error(ParseErrorKind::BadUrl, start);
                            self.consume_remnants_of_bad_url();
                            return TokenKind::BadUrl;
                        }
                    }
                }
                Character::Ch('"' | '\'' | '(') => {
                    self.error(ParseErrorKind::BadUrl, start);
                    self.consume_remnants_of_bad_url();
                    return TokenKind::BadUrl;
                }
                Character::Ch(c) if is_non_printable(c) => {
                    self.error(ParseErrorKind::BadUrl, start);
                    self.consume_remnants_of_bad_url();
                    return TokenKind::BadUrl;
                }
                Character::Ch('\\') if self.is_valid_escape_start(0) => {
                    self.stream.advance();
                    value.push(self.consume_escaped_code_point());
                }
                Character::Ch('\\') => {
                    self.error(ParseErrorKind::BadUrl, start);
                    self.consume_remnants_of_bad_url();
                    return TokenKind::BadUrl;
                }
                Character::Ch(c) => {
                    value.push(c);
                    self.stream.advance();
                }
            }
        }
    }

    fn consume_remnants_of_bad_url(&mut self) {
        loop {
            match self.current() {
                Character::Ch(')') => {
                    self.stream.advance();
                    return;
                }
                Character::Eof => return,
                Character::Ch('\\') if self.is_valid_escape_start(0) => {
                    self.stream.advance();
                    self.consume_escaped_code_point();
                }
                _ => {
                    self.stream.advance();
                }
            }
        }
    }
}

/// Tokenizes `text`, reporting recoverable parse errors through the `log`
/// crate via the default [`LoggingSink`].
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut sink = LoggingSink;
    let mut tokenizer = Tokenizer::new(text, &mut sink);
    tokenizer.run()
}

/// Tokenizes `text`, reporting recoverable parse errors through `sink`.
pub fn tokenize_with_sink(text: &str, sink: &mut dyn ErrorSink) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(text, sink);
    tokenizer.run()
}

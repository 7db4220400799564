//! Error model: a two-tier split between recoverable parse errors, which a
//! production is allowed to shrug off and keep going, and hard errors, which
//! abort whatever public entry point was called.

use crate::stream::Location;

/// The kind of recoverable parse error encountered while running one of the
/// `consume-a-*` productions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("unterminated comment")]
    UnterminatedComment,
    #[error("unterminated string")]
    UnterminatedString,
    #[error("bad string")]
    BadString,
    #[error("bad url")]
    BadUrl,
    #[error("unterminated url")]
    UnterminatedUrl,
    #[error("invalid escape sequence")]
    InvalidEscape,
    #[error("unterminated block, expected '{0}'")]
    UnterminatedBlock(char),
    #[error("qualified rule prelude never reached a block")]
    QualifiedRuleMissingBlock,
    #[error("declaration dropped: {0}")]
    InvalidDeclaration(String),
    #[error("unexpected token while recovering: {0}")]
    UnexpectedToken(String),
    #[error("stray CDO/CDC outside a top-level rule list")]
    StrayCdoCdc,
}

/// A recoverable parse error: recorded, logged, and (unless the caller set
/// `ignore_errors: false`) otherwise ignored by the production that raised
/// it. Always carries the location at which it was detected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at {location:?}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub location: Location,
}

impl ParseError {
    #[must_use]
    pub fn new(kind: ParseErrorKind, location: Location) -> Self {
        Self { kind, location }
    }
}

/// A sink for recoverable parse errors. The default implementation forwards
/// every error to the `log` crate at `Warn`. Hosts that want structured
/// collection instead of (or in addition to) logging can supply their own.
pub trait ErrorSink {
    fn report(&mut self, error: &ParseError);
}

/// Logs every error at `Warn` via the `log` facade. This is the default sink
/// wired into `ParserConfig`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSink;

impl ErrorSink for LoggingSink {
    fn report(&mut self, error: &ParseError) {
        log::warn!("{error}");
    }
}

/// Collects every error into a `Vec` instead of (or in addition to) logging
/// it; useful in tests and for hosts that want the full list.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    pub errors: Vec<ParseError>,
}

impl ErrorSink for CollectingSink {
    fn report(&mut self, error: &ParseError) {
        log::trace!("{error}");
        self.errors.push(error.clone());
    }
}

/// Hard errors returned directly from a public entry point: these are not
/// recoverable, and abort the call that produced them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("syntax error: {0}")]
    SyntaxError(String),
    #[error("invalid character: {0:?}")]
    InvalidCharacter(char),
    #[error("internal invariant violated: {0}")]
    SpecError(String),
}

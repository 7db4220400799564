//! Configuration passed into a [`crate::parser::Parser`]. `Context` names
//! which of the five `parse-a-*` entry points of §6 is driving the parse.

use std::fmt;

/// Which of the §6 public entry points is driving a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Context {
    #[default]
    Stylesheet,
    ListOfRules,
    Rule,
    Declaration,
    ListOfDeclarations,
    ComponentValue,
    ListOfComponentValues,
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Context::Stylesheet => "stylesheet",
            Context::ListOfRules => "list-of-rules",
            Context::Rule => "rule",
            Context::Declaration => "declaration",
            Context::ListOfDeclarations => "list-of-declarations",
            Context::ComponentValue => "component-value",
            Context::ListOfComponentValues => "list-of-component-values",
        };
        write!(f, "{name}")
    }
}

/// Parser-wide configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    pub context: Context,
    /// An optional label (file name, `<style>` id, …) surfaced in
    /// diagnostics; purely informational.
    pub source: Option<String>,
    /// Whether `consume-a-list-of-rules`/`consume-a-list-of-declarations`
    /// skip a malformed item and keep going (the spec-mandated default) or
    /// stop at the first recoverable error, truncating the list.
    pub ignore_errors: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { context: Context::Stylesheet, source: None, ignore_errors: true }
    }
}

impl ParserConfig {
    #[must_use]
    pub fn new(context: Context) -> Self {
        Self { context, ..Self::default() }
    }
}

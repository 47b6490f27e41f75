//! Position-aware diagnostics for the expression pipeline.
//!
//! Every pipeline stage records problems here instead of aborting, so a
//! single input can surface multiple independent problems in one pass.
//! A non-empty collector is the authoritative validity signal; the
//! numeric result is zero or partial whenever diagnostics exist.

use thiserror::Error;

use crate::token::Token;

/// A non-fatal, token-tagged record of a problem found during any stage.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// The token the problem is localized to.
    pub token: Token,
    /// What went wrong; its `Display` is the user-visible message.
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub fn new(token: Token, kind: DiagnosticKind) -> Self {
        Self { token, kind }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.token.text.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} at '{}'", self.kind, self.token.text)
        }
    }
}

/// Categorized diagnostic kinds.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DiagnosticKind {
    /// A character the scanner could not classify survived to reduction.
    #[error("unknown character")]
    UnknownCharacter,

    /// Two operators back to back.
    #[error("unexpected operator")]
    UnexpectedOperator,

    /// Two numbers back to back.
    #[error("unexpected number")]
    UnexpectedNumber,

    /// Two function calls back to back.
    #[error("unexpected function")]
    UnexpectedFunction,

    /// An identifier that resolves to nothing.
    #[error("unknown identifier: {0}")]
    UnknownIdentifier(String),

    /// A known function name used without parentheses.
    #[error("missing function body: {0}")]
    MissingFunctionBody(String),

    /// A comma outside any function argument list.
    #[error("unexpected comma")]
    UnexpectedComma,

    /// Unbalanced parentheses.
    #[error("mismatched parentheses")]
    MismatchedParentheses,

    /// The expression did not reduce to exactly one value.
    #[error("incomplete expression")]
    IncompleteExpression,

    /// A function received more arguments than its arity.
    #[error("too many parameters: {name} takes {arity}, got {got}")]
    TooManyParameters {
        /// The function name.
        name: String,
        /// Its declared arity.
        arity: usize,
        /// Arguments actually supplied.
        got: usize,
    },

    /// A function received fewer arguments than its arity.
    #[error("too few parameters: {name} takes {arity}, got {got}")]
    TooFewParameters {
        /// The function name.
        name: String,
        /// Its declared arity.
        arity: usize,
        /// Arguments actually supplied.
        got: usize,
    },

    /// An empty function argument, as in `max(1,)`.
    #[error("empty parameter")]
    EmptyParameter,

    /// Division (or truncating modulo) by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A numeric literal that fails to parse.
    #[error("invalid number: {0}")]
    InvalidNumber(String),

    /// An operator the evaluator does not support.
    #[error("invalid operator: {0}")]
    InvalidOperator(String),

    /// An operator with fewer than two operands available.
    #[error("invalid expression: '{0}' requires 2 operands")]
    MissingOperands(String),

    /// Expression nesting exceeded the recursion guard.
    #[error("expression nesting too deep")]
    NestingTooDeep,
}

/// Append-only diagnostic collector, owned by one evaluation context and
/// cleared at the start of each top-level call.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic against the given token.
    pub fn report(&mut self, token: Token, kind: DiagnosticKind) {
        self.entries.push(Diagnostic::new(token, kind));
    }

    /// Removes all recorded diagnostics.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of recorded diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the recorded diagnostics as a read-only view.
    #[must_use]
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Iterates over the recorded diagnostics.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

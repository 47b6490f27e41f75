//! Error types for the Reckon system.
//!
//! Uses `thiserror` for ergonomic error definition.
//!
//! Hard errors cover conditions that cannot be localized to a source
//! token: VM stack faults, bad assignment targets, terminal I/O. Anything
//! the user typed wrong surfaces as a `Diagnostic` in `reckon_language`.

use thiserror::Error;

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Reckon operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a division-by-zero error.
    #[must_use]
    pub fn division_by_zero() -> Self {
        Self::new(ErrorKind::DivisionByZero)
    }

    /// Creates a stack underflow error.
    #[must_use]
    pub fn stack_underflow(needed: usize, depth: usize) -> Self {
        Self::new(ErrorKind::StackUnderflow { needed, depth })
    }

    /// Creates an unknown function error.
    #[must_use]
    pub fn unknown_function(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownFunction(name.into()))
    }

    /// Creates an unknown operator error.
    #[must_use]
    pub fn unknown_operator(symbol: char) -> Self {
        Self::new(ErrorKind::UnknownOperator(symbol))
    }

    /// Creates an invalid assignment target error.
    #[must_use]
    pub fn invalid_assignment() -> Self {
        Self::new(ErrorKind::InvalidAssignment)
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Division (or truncating modulo) by zero during VM execution.
    #[error("division by zero")]
    DivisionByZero,

    /// The VM operand stack held fewer operands than an instruction needs.
    #[error("stack underflow: needed {needed} operands, had {depth}")]
    StackUnderflow {
        /// Operands the instruction requires.
        needed: usize,
        /// Operands actually on the stack.
        depth: usize,
    },

    /// A CALL instruction named a function that is not registered.
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    /// An OPERATE instruction carried an unsupported operator symbol.
    #[error("unknown operator: {0}")]
    UnknownOperator(char),

    /// The left operand of `=` was not a variable reference.
    #[error("invalid assignment target")]
    InvalidAssignment,

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

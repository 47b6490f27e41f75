//! Integration tests for Error types
//!
//! Tests error construction and display.

use reckon_foundation::{Error, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_division_by_zero() {
    let err = Error::division_by_zero();
    assert!(matches!(err.kind, ErrorKind::DivisionByZero));
}

#[test]
fn error_stack_underflow() {
    let err = Error::stack_underflow(2, 0);
    assert!(matches!(
        err.kind,
        ErrorKind::StackUnderflow {
            needed: 2,
            depth: 0
        }
    ));
}

#[test]
fn error_unknown_function() {
    let err = Error::unknown_function("mystery");
    assert!(matches!(err.kind, ErrorKind::UnknownFunction(_)));
}

#[test]
fn error_invalid_assignment() {
    let err = Error::invalid_assignment();
    assert!(matches!(err.kind, ErrorKind::InvalidAssignment));
}

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn display_division_by_zero() {
    assert_eq!(format!("{}", Error::division_by_zero()), "division by zero");
}

#[test]
fn display_stack_underflow_includes_counts() {
    let msg = format!("{}", Error::stack_underflow(2, 1));
    assert!(msg.contains('2'));
    assert!(msg.contains('1'));
}

#[test]
fn display_unknown_function_includes_name() {
    let msg = format!("{}", Error::unknown_function("mystery"));
    assert!(msg.contains("mystery"));
}

#[test]
fn display_unknown_operator_includes_symbol() {
    let msg = format!("{}", Error::unknown_operator('?'));
    assert!(msg.contains('?'));
}

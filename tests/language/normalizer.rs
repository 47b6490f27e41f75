//! Integration tests for the normalizer
//!
//! Tests whitespace removal, function capture, sign fusion, and
//! constant substitution through the public pipeline API.

use reckon_language::{Diagnostics, Scanner, TokenKind, normalize};

fn normalized(input: &str) -> (Vec<(TokenKind, String)>, Diagnostics) {
    let tokens = Scanner::scan(input);
    let mut diagnostics = Diagnostics::new();
    let result = normalize(&tokens, &mut diagnostics);
    let pairs = result.into_iter().map(|t| (t.kind, t.text)).collect();
    (pairs, diagnostics)
}

fn texts(input: &str) -> Vec<String> {
    let (pairs, diagnostics) = normalized(input);
    assert!(diagnostics.is_empty(), "unexpected diagnostics for {input:?}");
    pairs.into_iter().map(|(_, text)| text).collect()
}

// =============================================================================
// Whitespace and Basic Shape
// =============================================================================

#[test]
fn whitespace_is_dropped() {
    assert_eq!(texts("1 + 2"), vec!["1", "+", "2"]);
}

#[test]
fn plain_expression_passes_through() {
    assert_eq!(texts("1+2*3"), vec!["1", "+", "2", "*", "3"]);
}

// =============================================================================
// Unary Sign Fusion
// =============================================================================

#[test]
fn leading_sign_fuses_into_number() {
    assert_eq!(texts("-5"), vec!["-5"]);
    assert_eq!(texts("+5"), vec!["+5"]);
}

#[test]
fn sign_after_operator_fuses() {
    assert_eq!(texts("1.5 + -1.5"), vec!["1.5", "+", "-1.5"]);
}

#[test]
fn sign_after_open_paren_fuses() {
    assert_eq!(texts("(-1)"), vec!["(", "-1", ")"]);
}

#[test]
fn binary_minus_stays_an_operator() {
    assert_eq!(texts("3-1"), vec!["3", "-", "1"]);
}

// =============================================================================
// Function Capture
// =============================================================================

#[test]
fn function_call_captures_to_one_token() {
    let (pairs, diagnostics) = normalized("max(1,2)");
    assert!(diagnostics.is_empty());
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].0, TokenKind::Function);
    assert_eq!(pairs[0].1, "max(1,2)");
}

#[test]
fn nested_call_captures_whole_span() {
    let (pairs, _) = normalized("max(1, min(2, 3))");
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].0, TokenKind::Function);
    assert_eq!(pairs[0].1, "max(1, min(2, 3))");
}

#[test]
fn function_inside_expression() {
    let (pairs, _) = normalized("1+max(1,2)");
    let kinds: Vec<TokenKind> = pairs.iter().map(|(kind, _)| *kind).collect();
    assert_eq!(kinds, vec![
        TokenKind::Number,
        TokenKind::Operator,
        TokenKind::Function,
    ]);
}

// =============================================================================
// Constant Substitution
// =============================================================================

#[test]
fn constants_substitute_case_insensitively() {
    let pi = std::f64::consts::PI.to_string();
    assert_eq!(texts("PI"), vec![pi.clone()]);
    assert_eq!(texts("pi"), vec![pi]);
}

#[test]
fn signed_constant_keeps_sign() {
    let expected = (-std::f64::consts::PI).to_string();
    assert_eq!(texts("-pi"), vec![expected]);
}

#[test]
fn unknown_identifier_is_left_alone() {
    let (pairs, diagnostics) = normalized("banana");
    assert!(diagnostics.is_empty());
    assert_eq!(pairs[0].0, TokenKind::Identifier);
}

// =============================================================================
// Adjacency Diagnostics
// =============================================================================

#[test]
fn repeated_sign_reads_as_unary() {
    assert_eq!(texts("1 + + 2"), vec!["1", "+", "+2"]);
}

#[test]
fn adjacent_numbers_are_reported() {
    let tokens = Scanner::scan("1 2");
    let mut diagnostics = Diagnostics::new();
    normalize(&tokens, &mut diagnostics);
    assert!(!diagnostics.is_empty());
}

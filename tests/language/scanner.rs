//! Integration tests for the scanner
//!
//! Tests single-pass run merging, hex continuation, and paren handling.

use reckon_language::{Scanner, TokenKind};

fn kinds(input: &str) -> Vec<TokenKind> {
    Scanner::scan(input).iter().map(|t| t.kind).collect()
}

fn texts(input: &str) -> Vec<String> {
    Scanner::scan(input).iter().map(|t| t.text.clone()).collect()
}

// =============================================================================
// Run Merging
// =============================================================================

#[test]
fn scan_number_runs() {
    assert_eq!(texts("123"), vec!["123"]);
    assert_eq!(texts("1.5"), vec!["1.5"]);
}

#[test]
fn scan_operator_runs_merge() {
    // Consecutive operator characters form one token; the normalizer
    // decides later whether the combination is legal.
    assert_eq!(texts("1+-2"), vec!["1", "+-", "2"]);
    assert_eq!(kinds("1+-2"), vec![
        TokenKind::Number,
        TokenKind::Operator,
        TokenKind::Number,
    ]);
}

#[test]
fn scan_parens_never_merge() {
    assert_eq!(texts("(("), vec!["(", "("]);
    assert_eq!(kinds("(("), vec![TokenKind::OpenParen, TokenKind::OpenParen]);
}

#[test]
fn scan_whitespace_is_retained() {
    assert_eq!(kinds("1 + 2"), vec![
        TokenKind::Number,
        TokenKind::Whitespace,
        TokenKind::Operator,
        TokenKind::Whitespace,
        TokenKind::Number,
    ]);
}

#[test]
fn scan_whitespace_runs_merge() {
    assert_eq!(texts("1   2"), vec!["1", "   ", "2"]);
}

// =============================================================================
// Hex Literals
// =============================================================================

#[test]
fn scan_hex_literal_is_one_number() {
    assert_eq!(texts("0x1F"), vec!["0x1F"]);
    assert_eq!(kinds("0x1F"), vec![TokenKind::Number]);
}

#[test]
fn scan_hex_uppercase_marker() {
    assert_eq!(texts("0XFF"), vec!["0XFF"]);
    assert_eq!(kinds("0XFF"), vec![TokenKind::Number]);
}

#[test]
fn scan_hex_in_expression() {
    assert_eq!(texts("0xFF+1"), vec!["0xFF", "+", "1"]);
}

// =============================================================================
// Identifiers and Mixed Input
// =============================================================================

#[test]
fn scan_identifiers() {
    assert_eq!(kinds("max"), vec![TokenKind::Identifier]);
    assert_eq!(kinds("x2"), vec![TokenKind::Identifier]);
}

#[test]
fn scan_function_call_shape() {
    assert_eq!(kinds("max(1,2)"), vec![
        TokenKind::Identifier,
        TokenKind::OpenParen,
        TokenKind::Number,
        TokenKind::Comma,
        TokenKind::Number,
        TokenKind::CloseParen,
    ]);
}

#[test]
fn scan_semicolons() {
    assert_eq!(kinds("1;2"), vec![
        TokenKind::Number,
        TokenKind::Semicolon,
        TokenKind::Number,
    ]);
}

#[test]
fn scan_unknown_characters() {
    assert_eq!(kinds("1 # 2"), vec![
        TokenKind::Number,
        TokenKind::Whitespace,
        TokenKind::Unknown,
        TokenKind::Whitespace,
        TokenKind::Number,
    ]);
}

#[test]
fn scan_empty_input() {
    assert!(Scanner::scan("").is_empty());
}

//! Scanner for Reckon source text.
//!
//! The scanner converts a character string into a flat ordered token
//! sequence in a single left-to-right pass. It classifies each character,
//! merges runs of the same kind, and never raises an error: characters it
//! cannot classify become [`TokenKind::Unknown`] tokens and surface as
//! diagnostics only if a later stage cannot resolve them.

use crate::token::{Token, TokenKind, TokenList};

/// Operator characters and their precedence levels.
///
/// Assignment binds loosest so `x = x + 1` reduces its whole right-hand
/// side before the assignment under the `>=` pop rule.
pub const OPERATORS: &[(char, u8)] = &[
    ('=', 0),
    ('+', 1),
    ('-', 1),
    ('*', 2),
    ('/', 2),
    ('%', 2),
    ('^', 3),
];

/// Returns true if `c` is a recognized operator character.
#[must_use]
pub fn is_operator_char(c: char) -> bool {
    OPERATORS.iter().any(|&(symbol, _)| symbol == c)
}

/// Returns the precedence of the operator starting the given text,
/// or zero for anything unrecognized.
#[must_use]
pub fn precedence(text: &str) -> u8 {
    text.chars()
        .next()
        .and_then(|c| {
            OPERATORS
                .iter()
                .find(|&&(symbol, _)| symbol == c)
                .map(|&(_, level)| level)
        })
        .unwrap_or(0)
}

/// Returns true if `c` can extend a number run: hex digits and the `x`
/// radix marker, enabling `0x1F` literals.
fn is_hex_char(c: char) -> bool {
    c.is_ascii_hexdigit() || c == 'x' || c == 'X'
}

/// Classifies a single character into a token kind.
fn classify(c: char) -> TokenKind {
    match c {
        ' ' => TokenKind::Whitespace,
        '(' => TokenKind::OpenParen,
        ')' => TokenKind::CloseParen,
        ',' => TokenKind::Comma,
        ';' => TokenKind::Semicolon,
        c if c.is_ascii_digit() || c == '.' => TokenKind::Number,
        c if is_operator_char(c) => TokenKind::Operator,
        c if c.is_alphabetic() => TokenKind::Identifier,
        _ => TokenKind::Unknown,
    }
}

/// Scanner for Reckon source text.
pub struct Scanner;

impl Scanner {
    /// Scans the input into a token list.
    ///
    /// Runs of the same kind merge into one token, with two exceptions:
    /// once inside a number, hex digits and `x` extend it; once inside an
    /// identifier, any alphanumeric extends it. A parenthesis always
    /// closes the current run, so `"(("` yields two separate tokens.
    /// Whitespace tokens are retained; the normalizer removes them.
    #[must_use]
    pub fn scan(input: &str) -> TokenList {
        let mut tokens = TokenList::new();
        let mut run_kind = TokenKind::Null;
        let mut buf = String::new();

        for c in input.chars() {
            let mut kind = classify(c);

            if run_kind == TokenKind::Number && is_hex_char(c) {
                kind = TokenKind::Number;
            }
            if run_kind == TokenKind::Identifier && c.is_ascii_alphanumeric() {
                kind = TokenKind::Identifier;
            }

            let is_paren = matches!(kind, TokenKind::OpenParen | TokenKind::CloseParen);
            if kind != run_kind || is_paren {
                if run_kind != TokenKind::Null {
                    tokens.push(Token::new(run_kind, std::mem::take(&mut buf)));
                }
                run_kind = kind;
            }
            buf.push(c);
        }

        if run_kind != TokenKind::Null && !buf.is_empty() {
            tokens.push(Token::new(run_kind, buf));
        }

        tokens
    }
}

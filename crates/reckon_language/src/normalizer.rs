//! Token-stream normalization.
//!
//! The normalizer consumes the scanner's raw token sequence and produces
//! a semantically cleaner one: whitespace removed, unary signs fused into
//! the following token, function calls captured into single tokens,
//! constants substituted, and illegal adjacencies flagged as diagnostics
//! without halting. Tokens are merged, rewritten, or dropped, never
//! reordered.

use reckon_foundation::format_precise;

use crate::constants;
use crate::diagnostic::{DiagnosticKind, Diagnostics};
use crate::scanner::is_operator_char;
use crate::token::{Token, TokenKind, TokenList};

/// Normalizes a raw token sequence.
///
/// Problems found along the way are recorded in `diagnostics`;
/// normalization itself never fails.
#[must_use]
pub fn normalize(tokens: &[Token], diagnostics: &mut Diagnostics) -> TokenList {
    let mut out = TokenList::new();
    let mut last = Token::null();
    let mut join = false;
    let mut buf = String::new();
    let mut capturing_function = false;
    let mut capturing_identifier = false;
    let mut paren_depth = 0i32;

    for token in tokens {
        if token.is_kind(TokenKind::Whitespace) && !capturing_function {
            continue;
        }

        if capturing_function {
            // Accumulate raw text, tracking nesting; internal whitespace
            // stays verbatim so the capture can be re-scanned later.
            match token.kind {
                TokenKind::OpenParen => paren_depth += 1,
                TokenKind::CloseParen => {
                    paren_depth -= 1;
                    if paren_depth == 0 {
                        capturing_function = false;
                        capturing_identifier = false;
                    }
                }
                _ => {}
            }
            buf.push_str(&token.text);
            if !capturing_function {
                let func = Token::new(TokenKind::Function, std::mem::take(&mut buf));
                last = func.clone();
                out.push(func);
            }
            continue;
        }

        // An identifier immediately followed by `(` begins a function
        // capture; the buffered identifier text becomes the call's name.
        if token.is_kind(TokenKind::OpenParen) && last.is_kind(TokenKind::Identifier) {
            capturing_function = true;
            paren_depth += 1;
            buf.push_str(&token.text);
            continue;
        }

        // Any other token after an identifier flushes the buffered name.
        if !token.is_kind(TokenKind::OpenParen) && last.is_kind(TokenKind::Identifier) {
            capturing_identifier = false;
            let ident = Token::new(TokenKind::Identifier, std::mem::take(&mut buf));
            if !ident.text.is_empty() {
                out.push(ident.clone());
            }
            last = ident;
        }

        // An operator after nothing, `(`, `,`, or another operator is
        // unary: glue it onto the next token's text.
        if token.is_kind(TokenKind::Operator)
            && matches!(
                last.kind,
                TokenKind::Null | TokenKind::OpenParen | TokenKind::Comma | TokenKind::Operator
            )
        {
            join = true;
            last = token.clone();
            continue;
        }

        if join {
            join = false;
            out.push(Token::new(
                token.kind,
                format!("{}{}", last.text, token.text),
            ));
        } else if token.is_kind(TokenKind::Identifier) {
            buf = token.text.clone();
            capturing_identifier = true;
        } else {
            out.push(token.clone());
        }
        last = token.clone();
    }

    if capturing_identifier {
        out.push(Token::new(TokenKind::Identifier, buf));
    }

    substitute_constants(&mut out);
    validate_adjacency(&out, diagnostics);

    out
}

/// Rewrites identifier tokens that name constants into number tokens,
/// case-insensitively and honoring a fused leading sign.
fn substitute_constants(tokens: &mut TokenList) {
    for token in tokens.iter_mut() {
        if !token.is_kind(TokenKind::Identifier) || token.text.is_empty() {
            continue;
        }

        let mut name = token.text.to_uppercase();
        let mut multiplier = 1.0;
        if let Some(first) = name.chars().next() {
            if is_operator_char(first) {
                if first == '-' {
                    multiplier = -1.0;
                }
                name.remove(0);
            }
        }

        if let Some(value) = constants::get(&name) {
            token.kind = TokenKind::Number;
            token.text = format_precise(value * multiplier);
        }
    }
}

/// Flags adjacent token pairs the reducer would silently misparse.
fn validate_adjacency(tokens: &TokenList, diagnostics: &mut Diagnostics) {
    let mut last = Token::null();
    for token in tokens {
        let kind = match (last.kind, token.kind) {
            (TokenKind::Operator, TokenKind::Operator) => Some(DiagnosticKind::UnexpectedOperator),
            (TokenKind::Number, TokenKind::Number) => Some(DiagnosticKind::UnexpectedNumber),
            (TokenKind::Function, TokenKind::Function) => Some(DiagnosticKind::UnexpectedFunction),
            _ => None,
        };
        if let Some(kind) = kind {
            diagnostics.report(token.clone(), kind);
        }
        last = token.clone();
    }
}

//! Infix-to-postfix reduction (shunting-yard).
//!
//! Reorders a normalized infix token sequence into postfix order using an
//! operator stack and output queue. This stage never evaluates arithmetic;
//! it only reorders, validating parentheses and flagging tokens that have
//! no business surviving normalization.

use crate::diagnostic::{DiagnosticKind, Diagnostics};
use crate::functions;
use crate::scanner::precedence;
use crate::token::{Token, TokenKind, TokenList};

/// Reduces a normalized token sequence to postfix order.
///
/// On mismatched parentheses the reduction aborts after recording the
/// diagnostic; the partial output is still returned for display, and the
/// non-empty diagnostics mark it invalid.
#[must_use]
pub fn reduce(tokens: &[Token], diagnostics: &mut Diagnostics) -> TokenList {
    let mut output = TokenList::new();
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Number | TokenKind::Function | TokenKind::Variable => {
                output.push(token.clone());
            }

            TokenKind::Comma => {
                // Commas are consumed during function capture; one at this
                // level sits outside any argument list.
                diagnostics.report(token.clone(), DiagnosticKind::UnexpectedComma);
            }

            TokenKind::Identifier => {
                let name = token.text.trim_start_matches(['+', '-']);
                let kind = if functions::exists(name) {
                    DiagnosticKind::MissingFunctionBody(name.to_string())
                } else {
                    DiagnosticKind::UnknownIdentifier(token.text.clone())
                };
                diagnostics.report(token.clone(), kind);
            }

            TokenKind::Unknown => {
                diagnostics.report(token.clone(), DiagnosticKind::UnknownCharacter);
            }

            TokenKind::Operator => {
                while stack
                    .last()
                    .is_some_and(|top| {
                        top.is_kind(TokenKind::Operator)
                            && precedence(&top.text) >= precedence(&token.text)
                    })
                {
                    output.push(stack.pop().expect("stack top checked"));
                }
                stack.push(token.clone());
            }

            TokenKind::OpenParen => {
                stack.push(token.clone());
            }

            TokenKind::CloseParen => {
                loop {
                    match stack.pop() {
                        Some(top) if top.is_kind(TokenKind::OpenParen) => break,
                        Some(top) => output.push(top),
                        None => {
                            diagnostics
                                .report(token.clone(), DiagnosticKind::MismatchedParentheses);
                            return output;
                        }
                    }
                }
            }

            // Statement splitting happens before reduction; whitespace and
            // null never survive normalization.
            TokenKind::Semicolon
            | TokenKind::Whitespace
            | TokenKind::Null
            | TokenKind::Expression => {}
        }
    }

    while let Some(top) = stack.pop() {
        if top.is_kind(TokenKind::OpenParen) || top.is_kind(TokenKind::CloseParen) {
            diagnostics.report(top, DiagnosticKind::MismatchedParentheses);
            return output;
        }
        output.push(top);
    }

    output
}

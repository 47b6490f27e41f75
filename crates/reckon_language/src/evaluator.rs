//! Direct postfix evaluation.
//!
//! [`Calculator`] owns one evaluation context: the diagnostics collector
//! and the retained, hint-annotated token list of the most recent parse.
//! Each top-level `evaluate` call clears both, runs the full
//! scan → normalize → reduce → evaluate pipeline, and walks the postfix
//! sequence with a numeric stack. Function tokens recursively re-invoke
//! the whole pipeline per argument.

use reckon_foundation::parse_number;

use crate::diagnostic::{DiagnosticKind, Diagnostics};
use crate::functions;
use crate::hint;
use crate::normalizer::normalize;
use crate::reducer::reduce;
use crate::scanner::Scanner;
use crate::token::{Token, TokenKind, TokenList};

/// Maximum function-argument nesting depth before evaluation bails out
/// with a diagnostic instead of recursing further.
pub const MAX_DEPTH: usize = 32;

/// The supported binary operators of the direct evaluator.
const SUPPORTED: &[char] = &['+', '-', '*', '/', '%', '^'];

/// Direct expression evaluator.
///
/// One instance is one evaluation context; it must not be shared across
/// threads evaluating different expressions.
#[derive(Debug, Default)]
pub struct Calculator {
    diagnostics: Diagnostics,
    last_tokens: TokenList,
}

impl Calculator {
    /// Creates a new calculator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates an expression string.
    ///
    /// Semicolons separate statements; statements evaluate left to right
    /// and the last value is returned. The result is only meaningful when
    /// [`Calculator::is_valid`] reports true afterwards; on any diagnostic
    /// it is zero or partial.
    pub fn evaluate(&mut self, input: &str) -> f64 {
        self.diagnostics.clear();

        let mut scanned = Scanner::scan(input);
        hint::annotate(&mut scanned);
        self.last_tokens = scanned.clone();

        let mut result = 0.0;
        let mut evaluated = false;
        for statement in split_statements(&scanned) {
            result = self.process(statement, 0);
            evaluated = true;
        }
        if !evaluated {
            self.diagnostics.report(
                Token::new(TokenKind::Expression, input.to_string()),
                DiagnosticKind::IncompleteExpression,
            );
        }
        result
    }

    /// Returns true if the last evaluation produced no diagnostics.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns the diagnostics of the last evaluation.
    #[must_use]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Returns the retained, hint-annotated token list of the last parse.
    #[must_use]
    pub fn last_tokens(&self) -> &TokenList {
        &self.last_tokens
    }

    /// Runs normalize → reduce → evaluate over one statement's raw tokens.
    fn process(&mut self, tokens: &[Token], depth: usize) -> f64 {
        let normalized = normalize(tokens, &mut self.diagnostics);
        let postfix = reduce(&normalized, &mut self.diagnostics);
        self.evaluate_postfix(&postfix, depth)
    }

    /// Walks a postfix sequence with a numeric operand stack.
    fn evaluate_postfix(&mut self, postfix: &[Token], depth: usize) -> f64 {
        let mut stack: Vec<f64> = Vec::new();

        for token in postfix {
            match token.kind {
                TokenKind::Number => match parse_number(&token.text) {
                    Some(value) => stack.push(value),
                    None => {
                        self.diagnostics
                            .report(token.clone(), DiagnosticKind::InvalidNumber(token.text.clone()));
                        return 0.0;
                    }
                },

                // The reducer should have caught these.
                TokenKind::Identifier => {
                    self.diagnostics.report(
                        token.clone(),
                        DiagnosticKind::UnknownIdentifier(token.text.clone()),
                    );
                }

                TokenKind::Function => {
                    let value = self.evaluate_function(token, depth);
                    stack.push(value);
                }

                TokenKind::Operator => {
                    let Some(symbol) = token.operator_symbol().filter(|c| SUPPORTED.contains(c))
                    else {
                        self.diagnostics.report(
                            token.clone(),
                            DiagnosticKind::InvalidOperator(token.text.clone()),
                        );
                        return 0.0;
                    };

                    if stack.len() < 2 {
                        self.diagnostics.report(
                            token.clone(),
                            DiagnosticKind::MissingOperands(token.text.clone()),
                        );
                        return 0.0;
                    }
                    let b = stack.pop().expect("stack length checked");
                    let a = stack.pop().expect("stack length checked");

                    let value = match symbol {
                        '+' => a + b,
                        '-' => a - b,
                        '*' => a * b,
                        '^' => a.powf(b),
                        // Legacy semantics: modulo truncates both operands.
                        '%' => {
                            if b as i64 == 0 {
                                self.diagnostics
                                    .report(token.clone(), DiagnosticKind::DivisionByZero);
                                return 0.0;
                            }
                            (a as i64 % b as i64) as f64
                        }
                        '/' => {
                            if b == 0.0 {
                                self.diagnostics
                                    .report(token.clone(), DiagnosticKind::DivisionByZero);
                                return 0.0;
                            }
                            a / b
                        }
                        _ => unreachable!("symbol membership checked"),
                    };
                    stack.push(value);
                }

                _ => {}
            }
        }

        if stack.len() == 1 {
            stack[0]
        } else {
            let reconstructed: Vec<&str> = postfix.iter().map(|t| t.text.as_str()).collect();
            self.diagnostics.report(
                Token::new(TokenKind::Expression, reconstructed.join(" ")),
                DiagnosticKind::IncompleteExpression,
            );
            0.0
        }
    }

    /// Evaluates a captured `name(args...)` function token by re-scanning
    /// the captured text and recursing per argument.
    fn evaluate_function(&mut self, token: &Token, depth: usize) -> f64 {
        if depth >= MAX_DEPTH {
            self.diagnostics
                .report(token.clone(), DiagnosticKind::NestingTooDeep);
            return 0.0;
        }

        let tokens = Scanner::scan(&token.text);
        if tokens.len() < 3 || !tokens[0].is_kind(TokenKind::Identifier) {
            self.diagnostics
                .report(token.clone(), DiagnosticKind::IncompleteExpression);
            return 0.0;
        }
        let name = tokens[0].text.clone();

        let arguments = split_arguments(&tokens[1..]);

        let Some(def) = functions::get(&name) else {
            self.diagnostics
                .report(token.clone(), DiagnosticKind::UnknownIdentifier(name));
            return 0.0;
        };

        if arguments.iter().any(|arg| is_blank(arg)) {
            self.diagnostics
                .report(token.clone(), DiagnosticKind::EmptyParameter);
            return 0.0;
        }

        if arguments.len() != def.arity {
            let kind = if arguments.len() >= def.arity {
                DiagnosticKind::TooManyParameters {
                    name,
                    arity: def.arity,
                    got: arguments.len(),
                }
            } else {
                DiagnosticKind::TooFewParameters {
                    name,
                    arity: def.arity,
                    got: arguments.len(),
                }
            };
            self.diagnostics.report(token.clone(), kind);
            return 0.0;
        }

        let values: Vec<f64> = arguments
            .iter()
            .map(|arg| self.process(arg, depth + 1))
            .collect();
        (def.eval)(&values)
    }
}

/// Splits a scanned token list on semicolons, skipping blank statements.
pub(crate) fn split_statements(tokens: &[Token]) -> impl Iterator<Item = &[Token]> {
    tokens
        .split(|t| t.is_kind(TokenKind::Semicolon))
        .filter(|statement| !is_blank(statement))
}

/// Splits a captured argument window (everything after the function name)
/// into top-level comma-separated argument token lists, tracking
/// parenthesis depth so nested calls keep their commas.
pub(crate) fn split_arguments(tokens: &[Token]) -> Vec<TokenList> {
    let mut arguments: Vec<TokenList> = vec![TokenList::new()];
    let mut paren_depth = 0i32;

    for token in tokens {
        match token.kind {
            TokenKind::OpenParen => {
                paren_depth += 1;
                if paren_depth == 1 {
                    continue;
                }
            }
            TokenKind::CloseParen => {
                paren_depth -= 1;
                if paren_depth == 0 {
                    continue;
                }
            }
            TokenKind::Comma if paren_depth == 1 => {
                arguments.push(TokenList::new());
                continue;
            }
            _ => {}
        }
        arguments
            .last_mut()
            .expect("arguments starts non-empty")
            .push(token.clone());
    }

    arguments
}

/// Returns true if a token slice holds nothing but whitespace.
pub(crate) fn is_blank(tokens: &[Token]) -> bool {
    tokens.iter().all(|t| t.is_kind(TokenKind::Whitespace))
}

//! Bytecode compiler.
//!
//! The compiler shares the whole front end with the direct evaluator and
//! mirrors its recursive structure, but emits instructions instead of
//! computing: numbers become pushes, operators become `OPERATE`, and each
//! function argument compiles to its own instruction run followed by one
//! `CALL`. Unresolved identifiers become variable references, which is
//! what gives the bytecode path its persistent-variable support.

use reckon_foundation::parse_number;

use crate::diagnostic::{DiagnosticKind, Diagnostics};
use crate::evaluator::{MAX_DEPTH, is_blank, split_arguments, split_statements};
use crate::functions;
use crate::instruction::{Instruction, Operand};
use crate::normalizer::normalize;
use crate::reducer::reduce;
use crate::scanner::Scanner;
use crate::token::{Token, TokenKind, TokenList};

/// Operators the VM can execute; assignment only exists on this path.
const SUPPORTED: &[char] = &['+', '-', '*', '/', '%', '^', '='];

/// Compiler from expression text to VM instructions.
///
/// Like [`crate::Calculator`], one instance is one evaluation context
/// with its own diagnostics collector.
#[derive(Debug, Default)]
pub struct Compiler {
    diagnostics: Diagnostics,
}

impl Compiler {
    /// Creates a new compiler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles an expression string into a flat instruction list.
    ///
    /// Semicolon-separated statements compile in order into one list;
    /// executing it leaves the last statement's value on top of the
    /// stack. The output is only meaningful when [`Compiler::is_valid`]
    /// reports true afterwards.
    pub fn compile(&mut self, input: &str) -> Vec<Instruction> {
        self.diagnostics.clear();

        let scanned = Scanner::scan(input);
        let mut instructions = Vec::new();
        let mut compiled = false;
        for statement in split_statements(&scanned) {
            self.compile_statement(statement, 0, &mut instructions);
            compiled = true;
        }
        if !compiled {
            self.diagnostics.report(
                Token::new(TokenKind::Expression, input.to_string()),
                DiagnosticKind::IncompleteExpression,
            );
        }
        instructions
    }

    /// Returns true if the last compilation produced no diagnostics.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns the diagnostics of the last compilation.
    #[must_use]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Runs normalize → resolve → reduce → emit over one statement.
    fn compile_statement(&mut self, tokens: &[Token], depth: usize, out: &mut Vec<Instruction>) {
        let mut normalized = normalize(tokens, &mut self.diagnostics);
        resolve_variables(&mut normalized);
        let postfix = reduce(&normalized, &mut self.diagnostics);
        self.compile_postfix(&postfix, depth, out);
    }

    /// Emits instructions for a postfix sequence.
    fn compile_postfix(&mut self, postfix: &[Token], depth: usize, out: &mut Vec<Instruction>) {
        for token in postfix {
            match token.kind {
                TokenKind::Number => match parse_number(&token.text) {
                    Some(value) => out.push(Instruction::Push(Operand::Number(value))),
                    None => {
                        self.diagnostics.report(
                            token.clone(),
                            DiagnosticKind::InvalidNumber(token.text.clone()),
                        );
                        return;
                    }
                },

                TokenKind::Variable => self.compile_variable(token, out),

                TokenKind::Operator => {
                    let Some(symbol) = token.operator_symbol().filter(|c| SUPPORTED.contains(c))
                    else {
                        self.diagnostics.report(
                            token.clone(),
                            DiagnosticKind::InvalidOperator(token.text.clone()),
                        );
                        return;
                    };
                    out.push(Instruction::Operate(symbol));
                }

                TokenKind::Function => self.compile_function(token, depth, out),

                // The reducer should have caught these.
                TokenKind::Identifier => {
                    self.diagnostics.report(
                        token.clone(),
                        DiagnosticKind::UnknownIdentifier(token.text.clone()),
                    );
                }

                _ => {}
            }
        }
    }

    /// Emits a variable reference, expanding a fused sign into an
    /// explicit multiplication.
    fn compile_variable(&mut self, token: &Token, out: &mut Vec<Instruction>) {
        let (negative, name) = match token.text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, token.text.trim_start_matches('+')),
        };

        if negative {
            out.push(Instruction::Push(Operand::Number(-1.0)));
        }
        out.push(Instruction::Push(Operand::Variable(name.to_string())));
        if negative {
            out.push(Instruction::Operate('*'));
        }
    }

    /// Compiles a captured `name(args...)` token: each argument compiles
    /// through the full pipeline in order, then one CALL.
    fn compile_function(&mut self, token: &Token, depth: usize, out: &mut Vec<Instruction>) {
        if depth >= MAX_DEPTH {
            self.diagnostics
                .report(token.clone(), DiagnosticKind::NestingTooDeep);
            return;
        }

        let tokens = Scanner::scan(&token.text);
        if tokens.len() < 3 || !tokens[0].is_kind(TokenKind::Identifier) {
            self.diagnostics
                .report(token.clone(), DiagnosticKind::IncompleteExpression);
            return;
        }
        let name = tokens[0].text.clone();

        let arguments = split_arguments(&tokens[1..]);

        let Some(def) = functions::get(&name) else {
            self.diagnostics
                .report(token.clone(), DiagnosticKind::UnknownIdentifier(name));
            return;
        };

        if arguments.iter().any(|arg| is_blank(arg)) {
            self.diagnostics
                .report(token.clone(), DiagnosticKind::EmptyParameter);
            return;
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
            return;
        }

        for argument in &arguments {
            self.compile_statement(argument, depth + 1, out);
        }
        out.push(Instruction::Call(name));
    }
}

/// Rewrites leftover identifiers into variable references, except
/// function names used without a body, which stay identifiers so the
/// reducer reports them.
fn resolve_variables(tokens: &mut TokenList) {
    for token in tokens.iter_mut() {
        if token.is_kind(TokenKind::Identifier)
            && !functions::exists(token.text.trim_start_matches(['+', '-']))
        {
            token.kind = TokenKind::Variable;
        }
    }
}

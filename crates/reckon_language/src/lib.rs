//! Scanner, normalizer, reducer, evaluator, compiler, and bytecode VM
//! for Reckon expressions.
//!
//! This crate provides the whole expression pipeline:
//! - [`Scanner`] - Single-pass tokenization of expression text
//! - [`normalize`] - Whitespace removal, function capture, sign fusion,
//!   constant substitution
//! - [`reduce`] - Shunting-yard infix to postfix conversion
//! - [`Calculator`] - Direct postfix evaluation with accumulated
//!   [`Diagnostics`]
//! - [`Compiler`] / [`Vm`] - Bytecode compilation and stack execution
//!   with a persistent variable store
//! - [`annotate`] / [`suggest`] - UI support: bracket-pair hints and
//!   prefix completion

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod compiler;
mod diagnostic;
mod evaluator;
mod hint;
mod instruction;
mod normalizer;
mod reducer;
mod scanner;
mod suggest;
mod token;
mod vm;

pub mod constants;
pub mod functions;

pub use compiler::Compiler;
pub use diagnostic::{Diagnostic, DiagnosticKind, Diagnostics};
pub use evaluator::{Calculator, MAX_DEPTH};
pub use hint::annotate;
pub use instruction::{Instruction, Operand};
pub use normalizer::normalize;
pub use reducer::reduce;
pub use scanner::{OPERATORS, Scanner, is_operator_char, precedence};
pub use suggest::suggest;
pub use token::{Token, TokenKind, TokenList};
pub use vm::Vm;

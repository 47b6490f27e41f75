//! REPL and CLI for Reckon.
//!
//! This crate provides:
//! - [`Repl`] - Interactive read-eval-print loop over the bytecode VM
//! - [`LineEditor`] - Trait-based line editing abstraction (rustyline)
//! - Syntax highlighting and prefix completion for the editor

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod editor;
mod highlight;
mod repl;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use highlight::ReckonHighlighter;
pub use repl::Repl;

//! Reckon - Arithmetic expression language
//!
//! This crate re-exports all layers of the Reckon system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: reckon_runtime    — REPL, CLI, syntax highlighting
//! Layer 1: reckon_language   — Scanner, normalizer, reducer, evaluator,
//!                              compiler, bytecode VM
//! Layer 0: reckon_foundation — Hard errors, numeric text helpers
//! ```

pub use reckon_foundation as foundation;
pub use reckon_language as language;
pub use reckon_runtime as runtime;

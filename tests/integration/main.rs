//! Cross-layer integration tests for Reckon
//!
//! Tests that verify correct interaction between the foundation,
//! language, and runtime crates.

mod pipeline;

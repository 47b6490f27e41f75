//! Integration tests for Layer 1: Language
//!
//! Tests for scanner, normalizer, evaluator, compiler, and VM.

mod normalizer;
mod scanner;
mod vm;

//! Integration tests for Layer 0: Foundation
//!
//! Tests for hard errors and numeric text helpers.

mod errors;
mod number;

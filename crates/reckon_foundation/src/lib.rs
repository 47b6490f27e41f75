//! Hard-error types and numeric text helpers for Reckon.
//!
//! This crate provides:
//! - [`Error`] - The hard-failure error type (VM faults, editor I/O)
//! - [`Result`] - Result alias used across the workspace
//! - Numeric text helpers ([`parse_number`], [`format_precise`])
//!
//! User-facing problems in the expression pipeline are *not* represented
//! here; those are `Diagnostic`s in `reckon_language`, accumulated per
//! evaluation instead of thrown.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod number;

pub use error::{Error, ErrorKind, Result};
pub use number::{format_precise, parse_number};

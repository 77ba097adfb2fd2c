//! Error types and error handling for the compiler.
//!
//! This module defines the error types used throughout the compilation
//! process. It includes:
//!
//! - One error enum per stage: lexing, parsing, semantic analysis
//! - A crate-level `Error` that wraps them without losing the original kind
//! - Error names, positions and suggestions used by the diagnostics printer

pub mod errors;

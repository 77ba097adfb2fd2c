//! Semantic analysis module.
//!
//! This module checks a parsed program in a single pass. Because the
//! language has no control flow, checking and running coincide: every
//! expression is evaluated as it is checked. It covers:
//!
//! - Declaration tracking in one flat symbol table
//! - Type checking of initializers and assignments
//! - Detection of undeclared and uninitialized reads
//! - Division by zero

pub mod analyzer;
pub mod symbols;

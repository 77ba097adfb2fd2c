//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that pulls tokens from the scanner and
//! builds a `Program`. It handles:
//!
//! - Statement parsing (declarations, print calls, expression statements)
//! - Expression parsing by precedence climbing (binary ops, assignment, grouping)
//! - `!` statement separators
//! - Error reporting with expected-vs-found context
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

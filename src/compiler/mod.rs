//! Code generation module for the compiler.
//!
//! This module renders a checked AST as Java source text. It handles:
//!
//! - The surrounding class and `main` method
//! - Declarations, print calls and expression statements
//! - Mapping `inteiro`/`real` to `int`/`double`
//! - Stripping diacritics from identifiers
//! - Naming the generated class and output file after the source file

pub mod compiler;
pub mod expr;
pub mod stmt;

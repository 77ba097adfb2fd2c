//! Lexical analysis module for the compiler.
//!
//! This module contains the scanner that turns source text into tokens
//! on demand for the parser. It handles:
//!
//! - Character-level reading with line/column tracking (`Cursor`)
//! - Recognition of keywords, identifiers, literals, operators and punctuation
//! - Single-token lookahead with caching
//! - Whitespace and `#` line comments

pub mod cursor;
pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;

#![allow(clippy::module_inception)]

use std::fmt::Display;

use tracing::debug;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod compiler;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod semantic;

extern crate regex;

/// A location in the source text. `line` is 1-based, `column` is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn start() -> Self {
        Position { line: 1, column: 0 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Runs the whole pipeline over `source` and returns the generated Java class.
pub fn compile_source(source: &str, class_name: &str) -> Result<String, Error> {
    let program = parser::parser::parse(source)?;
    debug!("parsed {} statements", program.statements.len());

    semantic::analyzer::analyze(&program)?;
    debug!("semantic analysis passed");

    Ok(compiler::compiler::compile(&program, class_name))
}

/// Returns the text of the 1-based `line`, without its line terminator.
pub fn get_line_at_position(source: &str, line: usize) -> Option<&str> {
    source
        .split('\n')
        .nth(line.checked_sub(1)?)
        .map(|text| text.trim_end_matches('\r'))
}

/// Renders a diagnostic for `error` against the source it came from.
///
/// ```text
/// Error: UnexpectedToken (tip)
/// -> main.tcc
///   |
/// 2 | inteiro b = @!
///   | ------------^
/// ```
pub fn display_error(error: &Error, source: &str, file: &str) -> String {
    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        output.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    output.push_str(&format!("-> {}\n", file));

    let Some(position) = error.get_position() else {
        return output;
    };
    let Some(line_text) = get_line_at_position(source, position.line) else {
        return output;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    output.push_str(&format!("{:>padding$}\n", "|"));
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = position.column.saturating_sub(removed_whitespace) + 1;
    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    output
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}

use std::fmt::Display;

use thiserror::Error;

use crate::{
    ast::types::DataType,
    lexer::tokens::{Token, TokenKind},
    semantic::symbols::Value,
    Position,
};

/// Any failure of the pipeline. Each stage's error is carried unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Semantic(#[from] SemanticError),
}

impl Error {
    /// Where the error was detected. Semantic errors have no position since the
    /// AST does not carry one.
    pub fn get_position(&self) -> Option<Position> {
        match self {
            Error::Lex(LexError::UnrecognisedCharacter { line, column, .. })
            | Error::Lex(LexError::InvalidNumber { line, column, .. }) => Some(Position {
                line: *line,
                column: *column,
            }),
            Error::Parse(ParseError::UnexpectedToken { position, .. })
            | Error::Parse(ParseError::UnexpectedEof { position, .. })
            | Error::Parse(ParseError::InvalidAssignee { position }) => Some(*position),
            Error::Semantic(_) => None,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match self {
            Error::Lex(LexError::UnrecognisedCharacter { .. }) => "UnrecognisedCharacter",
            Error::Lex(LexError::InvalidNumber { .. }) => "InvalidNumber",
            Error::Parse(ParseError::UnexpectedToken { .. }) => "UnexpectedToken",
            Error::Parse(ParseError::UnexpectedEof { .. }) => "UnexpectedEof",
            Error::Parse(ParseError::InvalidAssignee { .. }) => "InvalidAssignee",
            Error::Semantic(SemanticError::Redeclaration(_)) => "Redeclaration",
            Error::Semantic(SemanticError::UndeclaredIdentifier(_)) => "UndeclaredIdentifier",
            Error::Semantic(SemanticError::UninitializedIdentifier(_)) => {
                "UninitializedIdentifier"
            }
            Error::Semantic(SemanticError::TypeMismatch { .. }) => "TypeMismatch",
            Error::Semantic(SemanticError::DivisionByZero) => "DivisionByZero",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            Error::Lex(LexError::UnrecognisedCharacter { .. }) => ErrorTip::None,
            Error::Lex(LexError::InvalidNumber { lexeme, .. }) => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                lexeme
            )),
            Error::Parse(ParseError::UnexpectedToken {
                expected: Expected::Token(Token::Punctuation(_)),
                found,
                ..
            }) if matches!(found, Token::Keyword(_) | Token::Identifier(_)) => {
                ErrorTip::Suggestion(format!(
                    "Unexpected token: `{}`, did you miss a `!`?",
                    found
                ))
            }
            Error::Parse(ParseError::UnexpectedToken {
                expected, found, ..
            }) => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected {}",
                found, expected
            )),
            Error::Parse(ParseError::UnexpectedEof { expected, .. }) => {
                ErrorTip::Suggestion(format!("Input ended early, expected {}", expected))
            }
            Error::Parse(ParseError::InvalidAssignee { .. }) => ErrorTip::Suggestion(
                String::from("Only a variable name can appear on the left of `=`"),
            ),
            Error::Semantic(SemanticError::Redeclaration(name)) => {
                ErrorTip::Suggestion(format!("Variable `{}` already declared", name))
            }
            Error::Semantic(SemanticError::UndeclaredIdentifier(name)) => ErrorTip::Suggestion(
                format!("Variable `{}` must be declared with `inteiro` or `real` first", name),
            ),
            Error::Semantic(SemanticError::UninitializedIdentifier(name)) => {
                ErrorTip::Suggestion(format!("Variable `{}` is read before any assignment", name))
            }
            Error::Semantic(SemanticError::TypeMismatch { value, expected }) => {
                ErrorTip::Suggestion(format!(
                    "Expected type `{}`, received `{}` ({})",
                    expected,
                    value.data_type(),
                    value
                ))
            }
            Error::Semantic(SemanticError::DivisionByZero) => {
                ErrorTip::Suggestion(String::from("the divisor evaluated to zero"))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    #[error("invalid character {character:?} at {line}:{column}")]
    UnrecognisedCharacter {
        character: char,
        line: usize,
        column: usize,
    },
    #[error("error parsing number {lexeme:?} at {line}:{column}")]
    InvalidNumber {
        lexeme: String,
        line: usize,
        column: usize,
    },
}

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, PartialEq)]
pub enum Expected {
    Token(Token),
    Kind(TokenKind),
    Description(&'static str),
}

impl Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expected::Token(token) => write!(f, "`{}`", token),
            Expected::Kind(kind) => write!(f, "{}", kind),
            Expected::Description(description) => write!(f, "{}", description),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("unexpected token `{found}` at {position}, expected {expected}")]
    UnexpectedToken {
        expected: Expected,
        found: Token,
        position: Position,
    },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        expected: Expected,
        position: Position,
    },
    #[error("invalid assignment target at {position}")]
    InvalidAssignee { position: Position },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SemanticError {
    #[error("variable {0:?} has already been declared")]
    Redeclaration(String),
    #[error("variable {0:?} has not been declared")]
    UndeclaredIdentifier(String),
    #[error("variable {0:?} has not been initialized")]
    UninitializedIdentifier(String),
    #[error("Type mismatch for value {value}, expected {expected}")]
    TypeMismatch { value: Value, expected: DataType },
    #[error("Division by zero")]
    DivisionByZero,
}

//! Unit tests for the lexer module.
//!
//! Covers keywords and identifiers (accented ones included), numeric literals,
//! comments, lookahead and the lexical error cases.

use crate::errors::errors::{Error, LexError};

use super::{
    lexer::{tokenize, Scanner},
    tokens::{Keyword, Operator, Punctuation, Token, TokenKind},
};

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("inteiro real imprimir").unwrap();

    assert_eq!(
        tokens,
        vec![
            Token::Keyword(Keyword::Int),
            Token::Keyword(Keyword::Double),
            Token::Keyword(Keyword::Print),
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("x número inteiros a1 Real").unwrap();

    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[0], Token::Identifier("x".to_string()));
    assert_eq!(tokens[1], Token::Identifier("número".to_string()));
    // A keyword prefix does not make a keyword.
    assert_eq!(tokens[2], Token::Identifier("inteiros".to_string()));
    assert_eq!(tokens[3], Token::Identifier("a1".to_string()));
    // Keywords are case sensitive.
    assert_eq!(tokens[4], Token::Identifier("Real".to_string()));
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 2.75 0 100.5 7.").unwrap();

    assert_eq!(tokens[0], Token::IntLiteral(42));
    assert_eq!(tokens[1], Token::DoubleLiteral(2.75));
    assert_eq!(tokens[2], Token::IntLiteral(0));
    assert_eq!(tokens[3], Token::DoubleLiteral(100.5));
    assert_eq!(tokens[4], Token::DoubleLiteral(7.0));
    assert_eq!(tokens[4].kind(), TokenKind::DoubleLiteral);
}

#[test]
fn test_tokenize_operators_and_punctuation() {
    let tokens = tokenize("+ - * / = ( ) !").unwrap();

    assert_eq!(
        tokens,
        vec![
            Token::Operator(Operator::Add),
            Token::Operator(Operator::Sub),
            Token::Operator(Operator::Mul),
            Token::Operator(Operator::Div),
            Token::Operator(Operator::Assign),
            Token::Punctuation(Punctuation::OpenParen),
            Token::Punctuation(Punctuation::CloseParen),
            Token::Punctuation(Punctuation::ExclamationMark),
        ]
    );
}

#[test]
fn test_tokenize_without_whitespace() {
    let tokens = tokenize("a=b*(2+x1)!").unwrap();

    assert_eq!(tokens.len(), 10);
    assert_eq!(tokens[0], Token::Identifier("a".to_string()));
    assert_eq!(tokens[1], Token::Operator(Operator::Assign));
    assert_eq!(tokens[3], Token::Operator(Operator::Mul));
    assert_eq!(tokens[5], Token::IntLiteral(2));
    assert_eq!(tokens[7], Token::Identifier("x1".to_string()));
    assert_eq!(tokens[9], Token::Punctuation(Punctuation::ExclamationMark));
}

#[test]
fn test_tokenize_comments() {
    let source = "inteiro x = 1! # oi \n real y = 2.0 + 3.0!";
    let tokens = tokenize(source).unwrap();

    assert_eq!(
        tokens,
        vec![
            Token::Keyword(Keyword::Int),
            Token::Identifier("x".to_string()),
            Token::Operator(Operator::Assign),
            Token::IntLiteral(1),
            Token::Punctuation(Punctuation::ExclamationMark),
            Token::Keyword(Keyword::Double),
            Token::Identifier("y".to_string()),
            Token::Operator(Operator::Assign),
            Token::DoubleLiteral(2.0),
            Token::Operator(Operator::Add),
            Token::DoubleLiteral(3.0),
            Token::Punctuation(Punctuation::ExclamationMark),
        ]
    );
}

#[test]
fn test_tokenize_comment_at_end_of_input() {
    let tokens = tokenize("imprimir(x) # sem quebra de linha").unwrap();
    assert_eq!(tokens.len(), 4);
}

#[test]
fn test_tokenize_empty_and_trivia_only() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize("  \n\t # nada\n").unwrap().is_empty());
}

#[test]
fn test_peek_does_not_consume() {
    let mut scanner = Scanner::new("inteiro x");

    let peeked = scanner.peek().unwrap();
    assert_eq!(peeked, Some(Token::Keyword(Keyword::Int)));
    assert_eq!(scanner.peek().unwrap(), peeked);
    assert_eq!(scanner.next_token().unwrap(), peeked);

    assert_eq!(scanner.next_token().unwrap(), Some(Token::Identifier("x".to_string())));
    assert_eq!(scanner.peek().unwrap(), None);
    assert_eq!(scanner.next_token().unwrap(), None);
    // End of input is sticky.
    assert_eq!(scanner.next_token().unwrap(), None);
}

#[test]
fn test_token_position() {
    let mut scanner = Scanner::new("a\n  bc");

    scanner.next_token().unwrap();
    assert_eq!(scanner.token_position().line, 1);
    assert_eq!(scanner.token_position().column, 0);

    scanner.next_token().unwrap();
    assert_eq!(scanner.token_position().line, 2);
    assert_eq!(scanner.token_position().column, 2);
}

#[test]
fn test_tokenize_unrecognised_character() {
    let result = tokenize("inteiro x = @");

    assert_eq!(
        result,
        Err(Error::Lex(LexError::UnrecognisedCharacter {
            character: '@',
            line: 1,
            column: 12,
        }))
    );
}

#[test]
fn test_unrecognised_character_on_later_line() {
    let mut scanner = Scanner::new("inteiro a = 1!\n  real b = 2;");

    let error = scanner.find_map(Result::err).unwrap();
    assert_eq!(
        error,
        LexError::UnrecognisedCharacter {
            character: ';',
            line: 2,
            column: 12,
        }
    );
}

#[test]
fn test_second_decimal_point_is_an_error() {
    let mut scanner = Scanner::new("1.2.3");

    assert_eq!(scanner.next_token().unwrap(), Some(Token::DoubleLiteral(1.2)));
    assert_eq!(
        scanner.next_token(),
        Err(LexError::UnrecognisedCharacter {
            character: '.',
            line: 1,
            column: 3,
        })
    );
}

#[test]
fn test_integer_overflow_is_invalid_number() {
    let result = tokenize("inteiro a = 99999999999!");

    assert_eq!(
        result,
        Err(Error::Lex(LexError::InvalidNumber {
            lexeme: "99999999999".to_string(),
            line: 1,
            column: 12,
        }))
    );
}

#[test]
fn test_underscore_is_not_an_identifier_character() {
    assert!(tokenize("minha_variavel").is_err());
}

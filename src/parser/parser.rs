//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and parsing functions.
//! Statements are parsed by recursive descent, dispatched on their leading
//! keyword; expressions are parsed by precedence climbing with NUD/LED
//! handlers.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for atoms
//! - LED (left denotation) handlers for infix operators
//! - Binding powers for operator precedence

use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, Expected, ParseError},
    lexer::{
        lexer::Scanner,
        tokens::{Keyword, Operator, Punctuation, Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// This struct owns the scanner it pulls tokens from and the lookup
/// tables used to dispatch statements and expressions.
pub struct Parser {
    /// Token source; every lookahead triggers at most one scan
    scanner: Scanner,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (atom) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for operator binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser with empty lookup tables.
    ///
    /// Use [`parse`] unless the tables are going to be filled by hand.
    pub fn new(scanner: Scanner) -> Self {
        Parser {
            scanner,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Returns the upcoming token without consuming it, `None` at end of input.
    pub fn current_token(&mut self) -> Result<Option<Token>, Error> {
        Ok(self.scanner.peek()?)
    }

    /// Consumes the upcoming token. Reaching the end of input is an error
    /// naming what was `expected` instead.
    pub fn advance(&mut self, expected: Expected) -> Result<Token, Error> {
        match self.scanner.next_token()? {
            Some(token) => Ok(token),
            None => Err(self.unexpected_eof(expected)),
        }
    }

    /// Returns whether the upcoming token equals `token`.
    pub fn is_current(&mut self, token: &Token) -> Result<bool, Error> {
        Ok(self.current_token()?.as_ref() == Some(token))
    }

    /// Expects the upcoming token to equal `expected_token`, with a custom
    /// description of what was expected for the error.
    pub fn expect_error(&mut self, expected_token: Token, expected: Expected) -> Result<Token, Error> {
        match self.current_token()? {
            Some(token) if token == expected_token => self.advance(expected),
            Some(token) => Err(self.unexpected_token(expected, token)),
            None => Err(self.unexpected_eof(expected)),
        }
    }

    /// Expects the upcoming token to equal `expected_token`.
    pub fn expect(&mut self, expected_token: Token) -> Result<Token, Error> {
        let expected = Expected::Token(expected_token.clone());
        self.expect_error(expected_token, expected)
    }

    pub fn expect_punctuation(&mut self, punctuation: Punctuation) -> Result<Token, Error> {
        self.expect(Token::Punctuation(punctuation))
    }

    pub fn expect_operator(&mut self, operator: Operator) -> Result<Token, Error> {
        self.expect(Token::Operator(operator))
    }

    pub fn expect_keyword(&mut self, keyword: Keyword) -> Result<Token, Error> {
        self.expect(Token::Keyword(keyword))
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&mut self) -> Result<bool, Error> {
        Ok(self.current_token()?.is_some())
    }

    /// Builds an `UnexpectedToken` error pointing at the most recently scanned token.
    pub fn unexpected_token(&self, expected: Expected, found: Token) -> Error {
        ParseError::UnexpectedToken {
            expected,
            found,
            position: self.get_position(),
        }
        .into()
    }

    pub fn unexpected_eof(&self, expected: Expected) -> Error {
        ParseError::UnexpectedEof {
            expected,
            position: self.get_position(),
        }
        .into()
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for an operator.
    ///
    /// # Arguments
    ///
    /// * `operator` - The operator to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, operator: Operator, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(operator, binding_power);
        self.led_lookup.insert(operator, led_fn);
    }

    /// Registers a null denotation handler for a token class.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a leading keyword.
    pub fn stmt(&mut self, keyword: Keyword, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(keyword, stmt_fn);
    }

    /// Returns the current position in the source file.
    pub fn get_position(&self) -> Position {
        self.scanner.token_position()
    }

    /// Parses statements until the token stream is exhausted.
    ///
    /// Consecutive statements must be separated by `!`; the last one may
    /// omit it when it is immediately followed by end of input.
    pub fn parse_program(&mut self) -> Result<Program, Error> {
        let mut statements = vec![];

        while self.has_tokens()? {
            statements.push(parse_stmt(self)?);

            if self.has_tokens()? {
                self.expect_punctuation(Punctuation::ExclamationMark)?;
            }
        }

        debug!("parsed program with {} statements", statements.len());
        Ok(Program { statements })
    }
}

/// Parses source text into a [`Program`].
///
/// This is the main entry point for parsing. It creates a scanner and a
/// parser, initializes all lookup tables, and parses until end of input.
pub fn parse(source: &str) -> Result<Program, Error> {
    let mut parser = Parser::new(Scanner::new(source));
    create_token_lookups(&mut parser);

    parser.parse_program()
}

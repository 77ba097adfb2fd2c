use std::collections::HashMap;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::tokens::{Keyword, Operator, TokenKind},
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, weakest first. `Default` is the floor an expression
/// starts parsing from.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Assignment,
    Additive,
    Multiplicative,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    parser.led(Operator::Assign, BindingPower::Assignment, parse_assignment_expr);

    // Additive and multiplicative
    parser.led(Operator::Add, BindingPower::Additive, parse_binary_expr);
    parser.led(Operator::Sub, BindingPower::Additive, parse_binary_expr);
    parser.led(Operator::Mul, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(Operator::Div, BindingPower::Multiplicative, parse_binary_expr);

    // Literals and symbols
    parser.nud(TokenKind::IntLiteral, parse_primary_expr);
    parser.nud(TokenKind::DoubleLiteral, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::Punctuation, parse_grouping_expr);

    // Statements
    parser.stmt(Keyword::Int, parse_declaration_stmt);
    parser.stmt(Keyword::Double, parse_declaration_stmt);
    parser.stmt(Keyword::Print, parse_print_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<Keyword, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<Operator, LEDHandler>;
pub type BPLookup = HashMap<Operator, BindingPower>;

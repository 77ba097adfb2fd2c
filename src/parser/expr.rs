use crate::{
    ast::{ast::Expr, expressions::BinaryOperator},
    errors::errors::{Error, Expected, ParseError},
    lexer::tokens::{Associativity, Operator, Punctuation, Token, TokenKind},
    MK_ASSIGNMENT, MK_BINARY,
};

use super::{lookups::BindingPower, parser::Parser};

const ATOM: &str = "number, identifier or `(`";

/// Precedence climbing: parses one atom, then folds in every operator that
/// binds tighter than `bp`. Left-associative operators need strictly greater
/// power; right-associative ones (`=`) bind at equal power too.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token = match parser.current_token()? {
        Some(token) => token,
        None => return Err(parser.unexpected_eof(Expected::Description(ATOM))),
    };

    let mut left = match parser.get_nud_lookup().get(&token.kind()).copied() {
        Some(nud_fn) => nud_fn(parser)?,
        None => return Err(parser.unexpected_token(Expected::Description(ATOM), token)),
    };

    while let Some(Token::Operator(operator)) = parser.current_token()? {
        let Some(operator_bp) = parser.get_bp_lookup().get(&operator).copied() else {
            break;
        };

        let binds = match operator.associativity() {
            Associativity::Left => operator_bp > bp,
            Associativity::Right => operator_bp >= bp,
        };
        if !binds {
            break;
        }

        let Some(led_fn) = parser.get_led_lookup().get(&operator).copied() else {
            break;
        };
        left = led_fn(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.advance(Expected::Description(ATOM))? {
        Token::IntLiteral(value) => Ok(Expr::IntLiteral(value)),
        Token::DoubleLiteral(value) => Ok(Expr::DoubleLiteral(value)),
        Token::Identifier(name) => Ok(Expr::Identifier(name)),
        other => Err(parser.unexpected_token(Expected::Description(ATOM), other)),
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect_error(
        Token::Punctuation(Punctuation::OpenParen),
        Expected::Description(ATOM),
    )?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_punctuation(Punctuation::CloseParen)?;

    Ok(expr)
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance(Expected::Kind(TokenKind::Operator))?;

    let operator = match &operator_token {
        Token::Operator(operator) => BinaryOperator::try_from(*operator).ok(),
        _ => None,
    };
    let Some(operator) = operator else {
        return Err(parser.unexpected_token(
            Expected::Description("arithmetic operator"),
            operator_token,
        ));
    };

    let right = parse_expr(parser, bp)?;

    Ok(MK_BINARY!(@op operator, left, right))
}

pub fn parse_assignment_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let position = parser.get_position();
    parser.expect_operator(Operator::Assign)?;

    let value = parse_expr(parser, bp)?;

    match left {
        Expr::Identifier(assignee) => Ok(MK_ASSIGNMENT!(assignee, value)),
        _ => Err(ParseError::InvalidAssignee { position }.into()),
    }
}

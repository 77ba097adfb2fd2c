use crate::{
    ast::{
        ast::Stmt,
        statements::{Declaration, PrintCall},
    },
    errors::errors::{Error, Expected},
    lexer::tokens::{Keyword, Operator, Punctuation, Token, TokenKind},
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(Token::Keyword(keyword)) = parser.current_token()? {
        if let Some(stmt_fn) = parser.get_stmt_lookup().get(&keyword).copied() {
            return stmt_fn(parser);
        }
    }

    let expr = parse_expr(parser, BindingPower::Default)?;

    Ok(Stmt::Expression(expr))
}

pub fn parse_declaration_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expected_type = Expected::Description("`inteiro` or `real`");
    let type_token = parser.advance(expected_type.clone())?;
    let data_type = match &type_token {
        Token::Keyword(keyword) => keyword.data_type(),
        _ => None,
    };
    let Some(data_type) = data_type else {
        return Err(parser.unexpected_token(expected_type, type_token));
    };

    let identifier = match parser.advance(Expected::Kind(TokenKind::Identifier))? {
        Token::Identifier(name) => name,
        other => return Err(parser.unexpected_token(Expected::Kind(TokenKind::Identifier), other)),
    };

    // Without an initializer the declaration must be followed by `!` right away.
    let assigned_value = if parser.is_current(&Token::Punctuation(Punctuation::ExclamationMark))? {
        None
    } else {
        parser.expect_operator(Operator::Assign)?;
        Some(parse_expr(parser, BindingPower::Default)?)
    };

    Ok(Stmt::Declaration(Declaration {
        data_type,
        identifier,
        assigned_value,
    }))
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect_keyword(Keyword::Print)?;
    parser.expect_punctuation(Punctuation::OpenParen)?;
    let argument = parse_expr(parser, BindingPower::Default)?;
    parser.expect_punctuation(Punctuation::CloseParen)?;

    Ok(Stmt::Print(PrintCall { argument }))
}

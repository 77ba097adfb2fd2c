use crate::lexer::tokens::Operator;

use super::ast::Expr;

/// The arithmetic subset of [`Operator`]. Assignment has its own node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOperator {
    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Sub => '-',
            BinaryOperator::Mul => '*',
            BinaryOperator::Div => '/',
        }
    }

    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
        }
    }
}

impl TryFrom<Operator> for BinaryOperator {
    type Error = Operator;

    fn try_from(operator: Operator) -> Result<Self, Self::Error> {
        match operator {
            Operator::Add => Ok(BinaryOperator::Add),
            Operator::Sub => Ok(BinaryOperator::Sub),
            Operator::Mul => Ok(BinaryOperator::Mul),
            Operator::Div => Ok(BinaryOperator::Div),
            Operator::Assign => Err(operator),
        }
    }
}

/// Binary Expression
/// `left operator right`, e.g. `a + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: BinaryOperator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// Assignment Expression
/// `assignee = value`. Evaluates to the assigned value, which makes `a = b = 2` legal.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub assignee: String,
    pub value: Box<Expr>,
}

use super::{
    expressions::{AssignmentExpr, BinaryExpr},
    statements::{Declaration, PrintCall},
};

/// Root of the tree: statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

/// Statement
///
/// Any expression may stand on its own as a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Declaration(Declaration),
    Print(PrintCall),
    Expression(Expr),
}

/// Expression
///
/// Each node owns its children; there is no sharing between subtrees.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    IntLiteral(i32),
    DoubleLiteral(f64),
    Identifier(String),
    Binary(BinaryExpr),
    Assignment(AssignmentExpr),
}

impl Expr {
    pub fn is_assignment(&self) -> bool {
        matches!(self, Expr::Assignment(_))
    }
}

impl From<Declaration> for Stmt {
    fn from(declaration: Declaration) -> Self {
        Stmt::Declaration(declaration)
    }
}

impl From<PrintCall> for Stmt {
    fn from(print: PrintCall) -> Self {
        Stmt::Print(print)
    }
}

impl From<Expr> for Stmt {
    fn from(expression: Expr) -> Self {
        Stmt::Expression(expression)
    }
}

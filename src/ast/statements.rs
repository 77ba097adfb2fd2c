use super::{ast::Expr, types::DataType};

/// Variable Declaration
/// `inteiro a = 1` or `real b`. The initializer is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub data_type: DataType,
    pub identifier: String,
    pub assigned_value: Option<Expr>,
}

/// Print Call
/// `imprimir(expr)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintCall {
    pub argument: Expr,
}

//! Utility macros for the compiler.
//!
//! This module defines helper macros used throughout the compiler:
//!
//! - `MK_BINARY!` - Creates a binary expression node
//! - `MK_ASSIGNMENT!` - Creates an assignment expression node
//!
//! These macros hide the boxing of child nodes, which keeps the parser and
//! hand-written expected trees in tests readable.

/// Creates an `Expr::Binary`.
///
/// # Arguments
///
/// * `$operator` - A `BinaryOperator` variant name (`Add`, `Sub`, `Mul`, `Div`)
/// * `$left` - The left operand (`Expr`)
/// * `$right` - The right operand (`Expr`)
///
/// # Example
///
/// ```ignore
/// let sum = MK_BINARY!(Add, Expr::IntLiteral(1), Expr::IntLiteral(2));
/// ```
#[macro_export]
macro_rules! MK_BINARY {
    (@op $operator:expr, $left:expr, $right:expr) => {
        $crate::ast::ast::Expr::Binary($crate::ast::expressions::BinaryExpr {
            operator: $operator,
            left: Box::new($left),
            right: Box::new($right),
        })
    };
    ($operator:ident, $left:expr, $right:expr) => {
        $crate::MK_BINARY!(
            @op $crate::ast::expressions::BinaryOperator::$operator,
            $left,
            $right
        )
    };
}

/// Creates an `Expr::Assignment`.
///
/// # Arguments
///
/// * `$assignee` - The target variable name (anything `Into<String>`)
/// * `$value` - The assigned expression (`Expr`)
///
/// # Example
///
/// ```ignore
/// let assignment = MK_ASSIGNMENT!("a", Expr::IntLiteral(2));
/// ```
#[macro_export]
macro_rules! MK_ASSIGNMENT {
    ($assignee:expr, $value:expr) => {
        $crate::ast::ast::Expr::Assignment($crate::ast::expressions::AssignmentExpr {
            assignee: ::std::string::String::from($assignee),
            value: Box::new($value),
        })
    };
}

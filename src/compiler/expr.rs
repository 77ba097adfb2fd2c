use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::ast::{
    ast::Expr,
    expressions::{AssignmentExpr, BinaryExpr},
};

lazy_static! {
    static ref NON_ASCII: Regex = Regex::new(r"[^\x00-\x7F]").unwrap();
}

/// Generates Java source for the given expression.
pub fn gen_expression(expression: &Expr) -> String {
    match expression {
        Expr::IntLiteral(value) => value.to_string(),
        Expr::DoubleLiteral(value) => gen_double(*value),
        Expr::Identifier(name) => gen_identifier(name),
        Expr::Binary(binary) => gen_binary(binary),
        Expr::Assignment(assignment) => gen_assignment(assignment),
    }
}

fn gen_binary(binary: &BinaryExpr) -> String {
    format!(
        "({} {} {})",
        gen_operand(&binary.left),
        binary.operator.symbol(),
        gen_operand(&binary.right)
    )
}

// `a + b = 2` would not compile in Java, `a + (b = 2)` does.
fn gen_operand(operand: &Expr) -> String {
    if operand.is_assignment() {
        format!("({})", gen_expression(operand))
    } else {
        gen_expression(operand)
    }
}

fn gen_assignment(assignment: &AssignmentExpr) -> String {
    format!(
        "{} = {}",
        gen_identifier(&assignment.assignee),
        gen_expression(&assignment.value)
    )
}

fn gen_double(value: f64) -> String {
    if value.is_infinite() {
        String::from("Double.POSITIVE_INFINITY")
    } else {
        // Debug keeps a fractional part (`1.0`), which Java needs to read a double.
        format!("{:?}", value)
    }
}

/// Identifiers may contain accented letters; Java output gets them stripped.
pub fn gen_identifier(name: &str) -> String {
    remove_accents(name)
}

/// Decomposes to NFD and drops everything outside ASCII, so `ação` becomes `acao`.
pub fn remove_accents(text: &str) -> String {
    let decomposed: String = text.nfd().collect();
    NON_ASCII.replace_all(&decomposed, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MK_ASSIGNMENT, MK_BINARY};

    #[test]
    fn test_remove_accents() {
        assert_eq!(remove_accents("número"), "numero");
        assert_eq!(remove_accents("ação"), "acao");
        assert_eq!(remove_accents("plain"), "plain");
    }

    #[test]
    fn test_gen_double_keeps_fraction() {
        assert_eq!(gen_expression(&Expr::DoubleLiteral(1.0)), "1.0");
        assert_eq!(gen_expression(&Expr::DoubleLiteral(2.5)), "2.5");
    }

    #[test]
    fn test_gen_binary_parenthesizes() {
        let expr = MK_BINARY!(
            Add,
            Expr::IntLiteral(1),
            MK_BINARY!(Mul, Expr::IntLiteral(2), Expr::Identifier("x".to_string()))
        );
        assert_eq!(gen_expression(&expr), "(1 + (2 * x))");
    }

    #[test]
    fn test_gen_assignment_operand() {
        let expr = MK_BINARY!(
            Add,
            Expr::Identifier("a".to_string()),
            MK_ASSIGNMENT!("b", Expr::IntLiteral(2))
        );
        assert_eq!(gen_expression(&expr), "(a + (b = 2))");

        let chained = MK_ASSIGNMENT!("a", MK_ASSIGNMENT!("b", Expr::IntLiteral(2)));
        assert_eq!(gen_expression(&chained), "a = b = 2");
    }
}

use crate::ast::statements::{Declaration, PrintCall};

use super::expr::{gen_expression, gen_identifier};

/// `int a = 1`, or `int a` without an initializer.
pub fn gen_declaration(declaration: &Declaration) -> String {
    let variable_name = gen_identifier(&declaration.identifier);
    let java_type = declaration.data_type.java_name();

    match &declaration.assigned_value {
        Some(expr) => format!("{} {} = {}", java_type, variable_name, gen_expression(expr)),
        None => format!("{} {}", java_type, variable_name),
    }
}

pub fn gen_print(print: &PrintCall) -> String {
    format!("System.out.println({})", gen_expression(&print.argument))
}

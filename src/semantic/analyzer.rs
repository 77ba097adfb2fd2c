use tracing::{debug, trace};

use crate::{
    ast::{
        ast::{Expr, Program, Stmt},
        expressions::{AssignmentExpr, BinaryExpr, BinaryOperator},
        statements::Declaration,
    },
    errors::errors::SemanticError,
};

use super::symbols::{SymbolTable, Value};

/// Checks a program by running it.
///
/// Every expression is evaluated to a concrete [`Value`] while it is checked,
/// so type errors, reads of unset variables and division by zero are all
/// caught in one pass over the statements.
#[derive(Debug, Default)]
pub struct Analyzer {
    symbols: SymbolTable,
}

impl Analyzer {
    pub fn new() -> Self {
        Analyzer::default()
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn analyze(&mut self, program: &Program) -> Result<(), SemanticError> {
        for stmt in &program.statements {
            self.analyze_stmt(stmt)?;
        }

        debug!("analysis finished with {} variables", self.symbols.len());
        Ok(())
    }

    fn analyze_stmt(&mut self, stmt: &Stmt) -> Result<(), SemanticError> {
        match stmt {
            Stmt::Declaration(declaration) => self.analyze_declaration(declaration),
            // Printing itself is left to the generated program.
            Stmt::Print(print) => self.evaluate(&print.argument).map(|_| ()),
            Stmt::Expression(expr) => self.evaluate(expr).map(|_| ()),
        }
    }

    fn analyze_declaration(&mut self, declaration: &Declaration) -> Result<(), SemanticError> {
        let value = match &declaration.assigned_value {
            Some(expr) => Some(self.evaluate(expr)?),
            None => None,
        };

        if self.symbols.contains(&declaration.identifier) {
            return Err(SemanticError::Redeclaration(declaration.identifier.clone()));
        }

        if let Some(value) = value {
            if value.data_type() != declaration.data_type {
                return Err(SemanticError::TypeMismatch {
                    value,
                    expected: declaration.data_type,
                });
            }
        }

        trace!("declared {} {} = {:?}", declaration.data_type, declaration.identifier, value);
        self.symbols
            .declare_variable(&declaration.identifier, declaration.data_type, value)
    }

    /// Evaluates `expr` against the current symbol table.
    pub fn evaluate(&mut self, expr: &Expr) -> Result<Value, SemanticError> {
        match expr {
            Expr::IntLiteral(value) => Ok(Value::Int(*value)),
            Expr::DoubleLiteral(value) => Ok(Value::Double(*value)),
            Expr::Identifier(name) => self.symbols.read_variable(name),
            Expr::Binary(binary) => self.evaluate_binary(binary),
            Expr::Assignment(assignment) => self.evaluate_assignment(assignment),
        }
    }

    fn evaluate_binary(&mut self, binary: &BinaryExpr) -> Result<Value, SemanticError> {
        let left = self.evaluate(&binary.left)?;
        let right = self.evaluate(&binary.right)?;

        if binary.operator == BinaryOperator::Div && right.as_f64() == 0.0 {
            return Err(SemanticError::DivisionByZero);
        }

        let result = binary.operator.apply(left.as_f64(), right.as_f64());

        match (left, right) {
            // Truncates toward zero, saturating at the i32 bounds.
            (Value::Int(_), Value::Int(_)) => Ok(Value::Int(result as i32)),
            _ => Ok(Value::Double(result)),
        }
    }

    fn evaluate_assignment(&mut self, assignment: &AssignmentExpr) -> Result<Value, SemanticError> {
        if !self.symbols.contains(&assignment.assignee) {
            return Err(SemanticError::UndeclaredIdentifier(
                assignment.assignee.clone(),
            ));
        }

        let value = self.evaluate(&assignment.value)?;
        self.symbols.assign_variable(&assignment.assignee, value)?;

        Ok(value)
    }
}

/// Analyzes `program` with a fresh symbol table.
pub fn analyze(program: &Program) -> Result<(), SemanticError> {
    Analyzer::new().analyze(program)
}

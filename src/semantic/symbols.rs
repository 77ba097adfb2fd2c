use std::{collections::HashMap, fmt::Display};

use crate::{ast::types::DataType, errors::errors::SemanticError};

/// A concrete, typed value produced by evaluating an expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i32),
    Double(f64),
}

impl Value {
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Int(_) => DataType::Int,
            Value::Double(_) => DataType::Double,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Value::Int(value) => f64::from(*value),
            Value::Double(value) => *value,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{}", value),
            Value::Double(value) => write!(f, "{:?}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub data_type: DataType,
    /// `None` until the variable is first assigned.
    pub value: Option<Value>,
}

/// The single, flat scope of a program. Entries are only ever added or
/// updated, never removed.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    variable_lookup: HashMap<String, Variable>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    pub fn declare_variable(
        &mut self,
        variable_name: &str,
        data_type: DataType,
        value: Option<Value>,
    ) -> Result<(), SemanticError> {
        if self.variable_lookup.contains_key(variable_name) {
            return Err(SemanticError::Redeclaration(variable_name.to_string()));
        }

        self.variable_lookup
            .insert(variable_name.to_string(), Variable { data_type, value });
        Ok(())
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<&Variable> {
        self.variable_lookup.get(variable_name)
    }

    pub fn contains(&self, variable_name: &str) -> bool {
        self.variable_lookup.contains_key(variable_name)
    }

    /// Reads the current value, failing for unknown or never-assigned names.
    pub fn read_variable(&self, variable_name: &str) -> Result<Value, SemanticError> {
        let variable = self
            .get_variable(variable_name)
            .ok_or_else(|| SemanticError::UndeclaredIdentifier(variable_name.to_string()))?;

        variable
            .value
            .ok_or_else(|| SemanticError::UninitializedIdentifier(variable_name.to_string()))
    }

    /// Overwrites the value of a declared variable after checking its type.
    pub fn assign_variable(&mut self, variable_name: &str, value: Value) -> Result<(), SemanticError> {
        let variable = self
            .variable_lookup
            .get_mut(variable_name)
            .ok_or_else(|| SemanticError::UndeclaredIdentifier(variable_name.to_string()))?;

        if value.data_type() != variable.data_type {
            return Err(SemanticError::TypeMismatch {
                value,
                expected: variable.data_type,
            });
        }

        variable.value = Some(value);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.variable_lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variable_lookup.is_empty()
    }
}

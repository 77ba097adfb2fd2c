use std::fmt::Display;

/// The two value types of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Int,
    Double,
}

impl DataType {
    /// Spelling of the type in generated Java.
    pub fn java_name(&self) -> &'static str {
        match self {
            DataType::Int => "int",
            DataType::Double => "double",
        }
    }
}

/// Displays as the source keyword.
impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataType::Int => write!(f, "inteiro"),
            DataType::Double => write!(f, "real"),
        }
    }
}

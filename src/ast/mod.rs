/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The program root and the statement/expression sum types
/// - expressions: Binary and assignment expression nodes
/// - statements: Declaration and print statement nodes
/// - types: The language's data types
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;

/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the syntax tree
///
/// Submodules:
/// - ast: The closed `Node` enum and its JSON rendering
/// - builder: One constructor per node kind
/// - operators: Operator enums and their symbol tables
pub mod ast;
pub mod builder;
pub mod operators;

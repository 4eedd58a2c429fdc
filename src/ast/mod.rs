/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Node` sum type tying everything together
/// - declarations: Variables, constants, functions and the `Identifier` type
/// - expressions: Literals, unary and binary operators
/// - operators: The fixed operator table
/// - statements: Scopes and control-flow statements
/// - types: Primitive data types
pub mod ast;
pub mod declarations;
pub mod expressions;
pub mod operators;
pub mod statements;
pub mod types;

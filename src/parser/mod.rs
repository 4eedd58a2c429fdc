//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. Blocks follow the scope levels of the
//! tokens and expressions use a shunting-yard operator precedence engine.
//! It handles:
//!
//! - Declarations of variables, constants and functions
//! - Control flow statements (`if`/`else`, `while`, both `for` forms)
//! - Expressions with unary/binary disambiguation
//! - Name resolution against nested scopes
//!
//! Every expression is type checked and constant folded as it is built.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;

//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Indentation, which sets the scope level of every token on a line
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking for error reporting
//! - Nested comments and whitespace handling

pub mod cursor;
pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;

//! Error types for the compiler front end.
//!
//! Every stage (lexer, parser, type checker, folder) fails with the same
//! `CompileError`, which pairs an `ErrorImpl` variant with the source
//! location it was detected at. The first error aborts compilation.

pub mod errors;

#[cfg(test)]
mod tests;

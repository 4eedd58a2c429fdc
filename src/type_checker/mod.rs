//! Type checking and constant folding.
//!
//! Both run while the parser builds each expression:
//!
//! - `type_check` infers the type of an expression and rejects binary
//!   operations on mismatched types
//! - `type_check_vs_data_type` matches an initializer against a declared type
//! - `simplify_expression` folds literal-only arithmetic into a single literal

pub mod folding;
pub mod type_checker;

//! Primitive data types of the language.
//!
//! The set is closed: every literal, declaration and expression resolves to
//! exactly one of these. `Auto` only ever appears on a declaration before its
//! initializer has been type-checked, and `Void` only as a function return type.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Boolean,
    Int,
    Float,
    Double,
    Char,
    String,
    Void,
    Auto,
}

impl DataType {
    pub const ALL: [DataType; 8] = [
        DataType::Boolean,
        DataType::Int,
        DataType::Float,
        DataType::Double,
        DataType::Char,
        DataType::String,
        DataType::Void,
        DataType::Auto,
    ];

    /// The lowercase name used in source code, e.g. `int`.
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Boolean => "boolean",
            DataType::Int => "int",
            DataType::Float => "float",
            DataType::Double => "double",
            DataType::Char => "char",
            DataType::String => "string",
            DataType::Void => "void",
            DataType::Auto => "auto",
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

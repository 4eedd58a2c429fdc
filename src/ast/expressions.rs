use crate::Location;

use super::{ast::Node, operators::OperatorKind, types::DataType};

/// The value a literal holds, already parsed from its source text.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Boolean(bool),
    Int(i32),
    Float(f32),
    Double(f64),
    Char(char),
    String(String),
}

impl LiteralValue {
    pub fn data_type(&self) -> DataType {
        match self {
            LiteralValue::Boolean(_) => DataType::Boolean,
            LiteralValue::Int(_) => DataType::Int,
            LiteralValue::Float(_) => DataType::Float,
            LiteralValue::Double(_) => DataType::Double,
            LiteralValue::Char(_) => DataType::Char,
            LiteralValue::String(_) => DataType::String,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: LiteralValue,
    pub location: Location,
}

impl Literal {
    pub fn new(value: LiteralValue, location: Location) -> Self {
        Literal { value, location }
    }

    pub fn data_type(&self) -> DataType {
        self.value.data_type()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOperator {
    pub operator: OperatorKind,
    pub operand: Box<Node>,
    pub location: Location,
}

/// A binary, relational or assignment operation. `left` and `right` are in
/// source order.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOperator {
    pub operator: OperatorKind,
    pub left: Box<Node>,
    pub right: Box<Node>,
    pub location: Location,
}

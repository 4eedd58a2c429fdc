use std::fmt::Display;

use thiserror::Error;

use crate::{ast::types::DataType, Location};

/// A fatal compile error: what went wrong and where.
///
/// Compilation stops at the first one of these; nothing is aggregated.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileError {
    internal_error: ErrorImpl,
    location: Location,
}

impl CompileError {
    pub fn new(error_impl: ErrorImpl, location: Location) -> Self {
        CompileError {
            internal_error: error_impl,
            location,
        }
    }

    pub fn get_location(&self) -> &Location {
        &self.location
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::SyntaxError { .. } => "SyntaxError",
            ErrorImpl::MixedIndentation => "MixedIndentation",
            ErrorImpl::BadIndentation { .. } => "BadIndentation",
            ErrorImpl::UnclosedComment => "UnclosedComment",
            ErrorImpl::BadNumberSyntax => "BadNumberSyntax",
            ErrorImpl::ExpectedDigit => "ExpectedDigit",
            ErrorImpl::ExpectedHexDigit => "ExpectedHexDigit",
            ErrorImpl::BadHexadecimal { .. } => "BadHexadecimal",
            ErrorImpl::IllegalLineEnd { .. } => "IllegalLineEnd",
            ErrorImpl::IllegalEscapeCode => "IllegalEscapeCode",
            ErrorImpl::IllegalCharLength => "IllegalCharLength",
            ErrorImpl::IllegalScopeChange => "IllegalScopeChange",
            ErrorImpl::UnexpectedEndOfFile => "UnexpectedEndOfFile",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::Expected { .. } => "Expected",
            ErrorImpl::InvalidDataType { .. } => "InvalidDataType",
            ErrorImpl::AutoWithoutExpression => "AutoWithoutExpression",
            ErrorImpl::AutoReturnType => "AutoReturnType",
            ErrorImpl::AlreadyDeclared { .. } => "AlreadyDeclared",
            ErrorImpl::UnknownIdentifier { .. } => "UnknownIdentifier",
            ErrorImpl::NotAnOperand { .. } => "NotAnOperand",
            ErrorImpl::InvalidOperator { .. } => "InvalidOperator",
            ErrorImpl::UnexpectedOperator { .. } => "UnexpectedOperator",
            ErrorImpl::UnexpectedParenthesis => "UnexpectedParenthesis",
            ErrorImpl::UnexpectedLiteral => "UnexpectedLiteral",
            ErrorImpl::UnexpectedIdentifier { .. } => "UnexpectedIdentifier",
            ErrorImpl::IncrementNeedsVariable { .. } => "IncrementNeedsVariable",
            ErrorImpl::ExpectedOperand => "ExpectedOperand",
            ErrorImpl::ExpectedExpression => "ExpectedExpression",
            ErrorImpl::InvalidLiteral { .. } => "InvalidLiteral",
            ErrorImpl::InvalidAssignmentTarget => "InvalidAssignmentTarget",
            ErrorImpl::AssignmentToConstant { .. } => "AssignmentToConstant",
            ErrorImpl::ExpectedBoolean => "ExpectedBoolean",
            ErrorImpl::ExpectedScope { .. } => "ExpectedScope",
            ErrorImpl::ExpectedVariableDeclaration => "ExpectedVariableDeclaration",
            ErrorImpl::TypeMismatch => "TypeMismatch",
            ErrorImpl::ExpectedType { .. } => "ExpectedType",
            ErrorImpl::VoidDataType => "VoidDataType",
            ErrorImpl::IllegalOperand { .. } => "IllegalOperand",
            ErrorImpl::DivisionByZero => "DivisionByZero",
        }
    }
}

impl Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.location, self.internal_error)
    }
}

impl std::error::Error for CompileError {}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Lexer
    #[error("syntax error, unexpected character {character:?}")]
    SyntaxError { character: char },
    #[error("mixed tabs and spaces")]
    MixedIndentation,
    #[error("indentation spaces must be in multiples of 4, found {spaces}")]
    BadIndentation { spaces: usize },
    #[error("unclosed comment")]
    UnclosedComment,
    #[error("bad number syntax")]
    BadNumberSyntax,
    #[error("expected digit")]
    ExpectedDigit,
    #[error("expected hexadecimal digit")]
    ExpectedHexDigit,
    #[error("bad hexadecimal syntax: {literal:?}")]
    BadHexadecimal { literal: String },
    #[error("illegal line end in {literal} literal")]
    IllegalLineEnd { literal: &'static str },
    #[error("illegal escape code")]
    IllegalEscapeCode,
    #[error("illegal literal character length")]
    IllegalCharLength,

    // Parser
    #[error("illegal scope change")]
    IllegalScopeChange,
    #[error("unexpected end of file")]
    UnexpectedEndOfFile,
    #[error("unexpected token {token:?}")]
    UnexpectedToken { token: String },
    #[error("expected {expected}")]
    Expected { expected: String },
    #[error("invalid data type {name:?}")]
    InvalidDataType { name: String },
    #[error("data type auto with no expression")]
    AutoWithoutExpression,
    #[error("return data type for function can not be auto")]
    AutoReturnType,
    #[error("'{name}' is already declared in this scope")]
    AlreadyDeclared { name: String },
    #[error("unknown identifier '{name}'")]
    UnknownIdentifier { name: String },
    #[error("'{name}' can not be used as an operand")]
    NotAnOperand { name: String },
    #[error("not a valid operator {symbol:?}")]
    InvalidOperator { symbol: String },
    #[error("did not expect operator {symbol:?}")]
    UnexpectedOperator { symbol: String },
    #[error("did not expect '('")]
    UnexpectedParenthesis,
    #[error("did not expect literal")]
    UnexpectedLiteral,
    #[error("did not expect identifier '{name}'")]
    UnexpectedIdentifier { name: String },
    #[error("unary {operation} can only be used with variables")]
    IncrementNeedsVariable { operation: &'static str },
    #[error("expected operand")]
    ExpectedOperand,
    #[error("expected expression")]
    ExpectedExpression,
    #[error("literal is not a valid {data_type}")]
    InvalidLiteral { data_type: DataType },
    #[error("left side of an assignment must be a variable")]
    InvalidAssignmentTarget,
    #[error("can not assign to constant '{name}'")]
    AssignmentToConstant { name: String },

    // Semantic analysis
    #[error("expected boolean expression")]
    ExpectedBoolean,
    #[error("{construct} scope expected")]
    ExpectedScope { construct: &'static str },
    #[error("expected variable declaration")]
    ExpectedVariableDeclaration,
    #[error("type mismatch")]
    TypeMismatch,
    #[error("expected expression of type '{data_type}'")]
    ExpectedType { data_type: DataType },
    #[error("data type can not be void")]
    VoidDataType,
    #[error("binary {operation} not allowed with {data_type} type")]
    IllegalOperand {
        operation: &'static str,
        data_type: DataType,
    },
    #[error("division by zero")]
    DivisionByZero,
}

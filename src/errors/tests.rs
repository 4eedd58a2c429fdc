//! Unit tests for error handling.

use std::rc::Rc;

use crate::{
    ast::types::DataType,
    errors::errors::{CompileError, ErrorImpl},
    Location,
};

fn location(line: u32, column: u32) -> Location {
    Location::new(Rc::new("test.ic".to_string()), line, column)
}

#[test]
fn test_error_creation() {
    let error = CompileError::new(ErrorImpl::SyntaxError { character: '$' }, location(1, 1));

    assert_eq!(error.get_error_name(), "SyntaxError");
    assert_eq!(error.get_error(), &ErrorImpl::SyntaxError { character: '$' });
}

#[test]
fn test_error_location() {
    let error = CompileError::new(ErrorImpl::MixedIndentation, location(4, 2));

    assert_eq!(error.get_location().line, 4);
    assert_eq!(error.get_location().column, 2);
    assert_eq!(error.get_location().file.as_str(), "test.ic");
}

#[test]
fn test_error_display_format() {
    let error = CompileError::new(ErrorImpl::TypeMismatch, location(3, 7));

    assert_eq!(error.to_string(), "test.ic:3:7 type mismatch");
}

#[test]
fn test_error_message_with_fields() {
    let error = CompileError::new(
        ErrorImpl::AlreadyDeclared {
            name: "x".to_string(),
        },
        location(2, 1),
    );
    assert_eq!(error.get_message(), "'x' is already declared in this scope");

    let error = CompileError::new(
        ErrorImpl::ExpectedType {
            data_type: DataType::Int,
        },
        location(1, 1),
    );
    assert_eq!(error.get_message(), "expected expression of type 'int'");

    let error = CompileError::new(
        ErrorImpl::IllegalOperand {
            operation: "addition",
            data_type: DataType::Boolean,
        },
        location(1, 1),
    );
    assert_eq!(error.get_message(), "binary addition not allowed with boolean type");
}

#[test]
fn test_error_names_are_distinct() {
    let scope = CompileError::new(ErrorImpl::IllegalScopeChange, location(1, 1));
    let comment = CompileError::new(ErrorImpl::UnclosedComment, location(1, 1));

    assert_eq!(scope.get_error_name(), "IllegalScopeChange");
    assert_eq!(comment.get_error_name(), "UnclosedComment");
    assert_ne!(scope, comment);
}

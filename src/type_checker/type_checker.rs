use crate::{
    ast::{ast::Node, operators::OperatorGroup, types::DataType},
    errors::errors::{CompileError, ErrorImpl},
    Location, MK_ERROR,
};

/// Infers the data type of an expression.
///
/// Operands of a binary operator must have the same type. Relational
/// operators always produce a boolean, every other operator produces the
/// type of its operands.
pub fn type_check(node: &Node) -> Result<DataType, CompileError> {
    match node {
        Node::Literal(literal) => Ok(literal.data_type()),
        Node::Variable(variable) => Ok(variable.data_type),
        Node::Constant(constant) => Ok(constant.data_type),
        Node::Function(function) => Ok(function.return_type),
        Node::FunctionReference(reference) => Ok(reference.return_type),
        Node::UnaryOperator(unary) => type_check(&unary.operand),
        Node::BinaryOperator(binary) => {
            let left = type_check(&binary.left)?;
            let right = type_check(&binary.right)?;
            if left != right {
                return MK_ERROR!(ErrorImpl::TypeMismatch, binary.location.clone());
            }

            if binary.operator.group() == OperatorGroup::Relational {
                Ok(DataType::Boolean)
            } else {
                Ok(left)
            }
        }
        Node::Scope(_)
        | Node::IfStatement(_)
        | Node::WhileStatement(_)
        | Node::ForStatement(_)
        | Node::ForRangeStatement(_) => Ok(DataType::Void),
    }
}

/// Checks `node` against a declared type and returns the type the
/// declaration ends up with.
///
/// `Auto` adopts the inferred type. `Void` is never a valid declared type;
/// the error points at `type_location`, where the type name was written.
pub fn type_check_vs_data_type(
    node: &Node,
    data_type: DataType,
    type_location: &Location,
) -> Result<DataType, CompileError> {
    let expression_type = type_check(node)?;

    match data_type {
        DataType::Auto => {
            if expression_type == DataType::Void {
                return MK_ERROR!(ErrorImpl::VoidDataType, node_location(node, type_location));
            }
            Ok(expression_type)
        }
        DataType::Void => MK_ERROR!(ErrorImpl::VoidDataType, type_location.clone()),
        _ if data_type != expression_type => MK_ERROR!(
            ErrorImpl::ExpectedType { data_type },
            node_location(node, type_location)
        ),
        _ => Ok(data_type),
    }
}

/// Requires `node` to be a boolean expression, e.g. a loop condition.
pub fn expect_boolean(node: &Node, fallback: &Location) -> Result<(), CompileError> {
    if type_check(node)? != DataType::Boolean {
        return MK_ERROR!(ErrorImpl::ExpectedBoolean, node_location(node, fallback));
    }
    Ok(())
}

fn node_location(node: &Node, fallback: &Location) -> Location {
    node.location().unwrap_or(fallback).clone()
}

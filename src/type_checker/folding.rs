//! Constant folding of literal-only expressions.

use crate::{
    ast::{
        ast::Node,
        expressions::{BinaryOperator, Literal, LiteralValue},
        operators::OperatorKind,
    },
    errors::errors::{CompileError, ErrorImpl},
    MK_ERROR,
};

type IntOperation = fn(i32, i32) -> Option<i32>;
type FloatOperation = fn(f32, f32) -> f32;
type DoubleOperation = fn(f64, f64) -> f64;

/// Replaces `node` with a single literal if it is built from literals and
/// arithmetic operators only. Anything else is returned unchanged, so
/// folding is idempotent.
pub fn simplify_expression(node: Node) -> Result<Node, CompileError> {
    match fold(&node)? {
        Some(literal) => Ok(Node::Literal(literal)),
        None => Ok(node),
    }
}

fn fold(node: &Node) -> Result<Option<Literal>, CompileError> {
    match node {
        Node::Literal(literal) => Ok(Some(literal.clone())),
        Node::BinaryOperator(binary) => {
            let Some(left) = fold(&binary.left)? else {
                return Ok(None);
            };
            let Some(right) = fold(&binary.right)? else {
                return Ok(None);
            };
            solve(binary, &left, &right)
        }
        // Variables, constants and functions have no value at compile time.
        _ => Ok(None),
    }
}

fn solve(
    binary: &BinaryOperator,
    left: &Literal,
    right: &Literal,
) -> Result<Option<Literal>, CompileError> {
    if left.data_type() != right.data_type() {
        return MK_ERROR!(ErrorImpl::TypeMismatch, binary.location.clone());
    }

    let value = match binary.operator {
        OperatorKind::Add => {
            if let (LiteralValue::String(l), LiteralValue::String(r)) = (&left.value, &right.value)
            {
                LiteralValue::String(format!("{}{}", l, r))
            } else {
                arithmetic(
                    "addition",
                    binary,
                    left,
                    right,
                    |l, r| Some(l.wrapping_add(r)),
                    |l, r| l + r,
                    |l, r| l + r,
                )?
            }
        }
        OperatorKind::Sub => arithmetic(
            "subtraction",
            binary,
            left,
            right,
            |l, r| Some(l.wrapping_sub(r)),
            |l, r| l - r,
            |l, r| l - r,
        )?,
        OperatorKind::Mul => arithmetic(
            "multiplication",
            binary,
            left,
            right,
            |l, r| Some(l.wrapping_mul(r)),
            |l, r| l * r,
            |l, r| l * r,
        )?,
        OperatorKind::Div => arithmetic(
            "division",
            binary,
            left,
            right,
            |l, r| (r != 0).then(|| l.wrapping_div(r)),
            |l, r| l / r,
            |l, r| l / r,
        )?,
        OperatorKind::Mod => arithmetic(
            "modulus",
            binary,
            left,
            right,
            |l, r| (r != 0).then(|| l.wrapping_rem(r)),
            |l, r| l % r,
            |l, r| l % r,
        )?,
        OperatorKind::Pow => arithmetic(
            "exponent",
            binary,
            left,
            right,
            |l, r| Some(f64::from(l).powf(f64::from(r)) as i32),
            |l, r| l.powf(r),
            |l, r| l.powf(r),
        )?,
        // Relational, logical and assignment operators are left alone.
        _ => return Ok(None),
    };

    Ok(Some(Literal::new(value, left.location.clone())))
}

fn arithmetic(
    operation: &'static str,
    binary: &BinaryOperator,
    left: &Literal,
    right: &Literal,
    int: IntOperation,
    float: FloatOperation,
    double: DoubleOperation,
) -> Result<LiteralValue, CompileError> {
    match (&left.value, &right.value) {
        (LiteralValue::Int(l), LiteralValue::Int(r)) => match int(*l, *r) {
            Some(value) => Ok(LiteralValue::Int(value)),
            None => MK_ERROR!(ErrorImpl::DivisionByZero, binary.location.clone()),
        },
        (LiteralValue::Float(l), LiteralValue::Float(r)) => Ok(LiteralValue::Float(float(*l, *r))),
        (LiteralValue::Double(l), LiteralValue::Double(r)) => {
            Ok(LiteralValue::Double(double(*l, *r)))
        }
        _ => MK_ERROR!(
            ErrorImpl::IllegalOperand {
                operation,
                data_type: left.data_type()
            },
            left.location.clone()
        ),
    }
}

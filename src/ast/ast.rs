use std::rc::Rc;

use crate::Location;

use super::{
    declarations::{Constant, Function, FunctionReference, Variable},
    expressions::{BinaryOperator, Literal, UnaryOperator},
    statements::{ForRangeStatement, ForStatement, IfStatement, Scope, WhileStatement},
};

/// A node of the abstract syntax tree.
///
/// The tree is built once by the parser and never mutated afterwards.
/// Variables and constants are shared through `Rc` between the declaring
/// scope and the expressions that refer to them. A function is owned by its
/// declaration statement and referred to weakly. Everything else is owned by
/// its parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Literal(Literal),
    Variable(Rc<Variable>),
    Constant(Rc<Constant>),
    Function(Rc<Function>),
    FunctionReference(FunctionReference),
    UnaryOperator(UnaryOperator),
    BinaryOperator(BinaryOperator),
    Scope(Scope),
    IfStatement(IfStatement),
    WhileStatement(WhileStatement),
    ForStatement(ForStatement),
    ForRangeStatement(ForRangeStatement),
}

impl Node {
    /// Source location of the node. Scopes have none of their own.
    pub fn location(&self) -> Option<&Location> {
        match self {
            Node::Literal(literal) => Some(&literal.location),
            Node::Variable(variable) => Some(&variable.location),
            Node::Constant(constant) => Some(&constant.location),
            Node::Function(function) => Some(&function.location),
            Node::FunctionReference(reference) => Some(&reference.location),
            Node::UnaryOperator(unary) => Some(&unary.location),
            Node::BinaryOperator(binary) => Some(&binary.location),
            Node::Scope(_) => None,
            Node::IfStatement(statement) => Some(&statement.location),
            Node::WhileStatement(statement) => Some(&statement.location),
            Node::ForStatement(statement) => Some(&statement.location),
            Node::ForRangeStatement(statement) => Some(&statement.location),
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<&BinaryOperator> {
        match self {
            Node::BinaryOperator(binary) => Some(binary),
            _ => None,
        }
    }

    pub fn as_scope(&self) -> Option<&Scope> {
        match self {
            Node::Scope(scope) => Some(scope),
            _ => None,
        }
    }
}

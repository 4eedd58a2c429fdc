use std::collections::HashMap;

use crate::Location;

use super::{ast::Node, declarations::Identifier};

/// A block of statements at one indentation level, together with the symbol
/// table frame that was open while it was parsed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scope {
    pub statements: Vec<Node>,
    pub identifiers: HashMap<String, Identifier>,
}

impl Scope {
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn lookup(&self, name: &str) -> Option<&Identifier> {
        self.identifiers.get(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub condition: Box<Node>,
    pub then_scope: Scope,
    pub else_scope: Option<Scope>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub condition: Box<Node>,
    pub body: Scope,
    pub location: Location,
}

/// `for init, condition, increment` — every part is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStatement {
    pub init: Option<Box<Node>>,
    pub condition: Option<Box<Node>>,
    pub increment: Option<Box<Node>>,
    pub body: Scope,
    pub location: Location,
}

/// `for [name :] range` — `range` is the assignment of the range expression
/// to the loop variable.
#[derive(Debug, Clone, PartialEq)]
pub struct ForRangeStatement {
    pub range: Box<Node>,
    pub body: Scope,
    pub location: Location,
}

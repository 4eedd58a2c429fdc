//! Declared entities: variables, constants and functions.
//!
//! Declarations are reference counted so that the scope that declares them,
//! the symbol table frame that names them and the expressions that refer to
//! them can all point at the same entity without copying it. Functions are
//! referred to through weak handles since their bodies may name them.

use std::{
    cell::OnceCell,
    rc::{Rc, Weak},
};

use crate::Location;

use super::{ast::Node, statements::Scope, types::DataType};

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub data_type: DataType,
    pub is_constant: bool,
    pub location: Location,
}

impl Variable {
    pub fn new(name: String, data_type: DataType, location: Location) -> Self {
        Variable {
            name,
            data_type,
            is_constant: false,
            location,
        }
    }
}

/// A named constant. Its value is not stored here but in the assignment node
/// that initializes it.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    pub name: String,
    pub data_type: DataType,
    pub location: Location,
}

#[derive(Clone)]
pub struct Function {
    pub name: String,
    /// Each parameter is either a `Variable` node or the assignment of a
    /// default value to one.
    pub parameters: Vec<Node>,
    pub return_type: DataType,
    pub location: Location,
    /// Filled exactly once, after the function has been declared and its
    /// body parsed.
    pub body: OnceCell<Scope>,
}

impl Function {
    pub fn body(&self) -> Option<&Scope> {
        self.body.get()
    }
}

// The body is left out of comparison and debug output.
impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.parameters == other.parameters
            && self.return_type == other.return_type
            && self.location == other.location
    }
}

impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .field("return_type", &self.return_type)
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

/// A function named inside an expression.
///
/// Only the declaration statement owns the function; a reference holds a
/// weak handle, so a body that names its own function does not keep it
/// alive.
#[derive(Debug, Clone)]
pub struct FunctionReference {
    pub function: Weak<Function>,
    pub name: String,
    pub return_type: DataType,
    pub location: Location,
}

impl FunctionReference {
    pub fn new(function: &Rc<Function>) -> Self {
        FunctionReference {
            function: Rc::downgrade(function),
            name: function.name.clone(),
            return_type: function.return_type,
            location: function.location.clone(),
        }
    }

    /// The referenced function, while the tree that declares it is alive.
    pub fn upgrade(&self) -> Option<Rc<Function>> {
        self.function.upgrade()
    }
}

impl PartialEq for FunctionReference {
    fn eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.function, &other.function)
            && self.name == other.name
            && self.return_type == other.return_type
            && self.location == other.location
    }
}

/// Anything a name can be bound to in a symbol table frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Identifier {
    Variable(Rc<Variable>),
    Constant(Rc<Constant>),
    Function(Rc<Function>),
}

impl Identifier {
    pub fn name(&self) -> &str {
        match self {
            Identifier::Variable(variable) => &variable.name,
            Identifier::Constant(constant) => &constant.name,
            Identifier::Function(function) => &function.name,
        }
    }

    /// The declared type; for functions this is the return type.
    pub fn data_type(&self) -> DataType {
        match self {
            Identifier::Variable(variable) => variable.data_type,
            Identifier::Constant(constant) => constant.data_type,
            Identifier::Function(function) => function.return_type,
        }
    }

    pub fn location(&self) -> &Location {
        match self {
            Identifier::Variable(variable) => &variable.location,
            Identifier::Constant(constant) => &constant.location,
            Identifier::Function(function) => &function.location,
        }
    }

    /// The node for a use of this name in an expression.
    pub fn to_node(&self) -> Node {
        match self {
            Identifier::Variable(variable) => Node::Variable(Rc::clone(variable)),
            Identifier::Constant(constant) => Node::Constant(Rc::clone(constant)),
            Identifier::Function(function) => {
                Node::FunctionReference(FunctionReference::new(function))
            }
        }
    }
}

use std::rc::Rc;

use crate::{
    ast::{
        declarations::{Constant, Identifier, Variable},
        types::DataType,
    },
    Location,
};

use super::symbol_table::SymbolTable;

fn variable(name: &str, data_type: DataType) -> Identifier {
    Identifier::Variable(Rc::new(Variable::new(
        name.to_string(),
        data_type,
        Location::null(),
    )))
}

#[test]
fn test_declare_and_lookup() {
    let mut table = SymbolTable::new();
    table.new_scope();

    assert!(table.declare(variable("x", DataType::Int)));
    let found = table.lookup("x").unwrap();
    assert_eq!(found.name(), "x");
    assert_eq!(found.data_type(), DataType::Int);
    assert!(table.lookup("y").is_none());
}

#[test]
fn test_redeclare_in_same_scope_fails() {
    let mut table = SymbolTable::new();
    table.new_scope();

    assert!(table.declare(variable("x", DataType::Int)));
    assert!(!table.declare(variable("x", DataType::String)));
    assert_eq!(table.lookup("x").unwrap().data_type(), DataType::Int);
}

#[test]
fn test_shadowing_prefers_innermost() {
    let mut table = SymbolTable::new();
    table.new_scope();
    assert!(table.declare(variable("x", DataType::Int)));

    table.new_scope();
    assert!(table.declare(variable("x", DataType::Double)));
    assert_eq!(table.lookup("x").unwrap().data_type(), DataType::Double);

    let frame = table.pop_scope().unwrap();
    assert!(frame.contains_key("x"));
    assert_eq!(table.lookup("x").unwrap().data_type(), DataType::Int);
}

#[test]
fn test_lookup_finds_nearest_enclosing_frame() {
    let mut table = SymbolTable::new();
    table.new_scope();
    assert!(table.declare(variable("x", DataType::Int)));
    table.new_scope();
    assert!(table.declare(variable("x", DataType::Float)));
    table.new_scope();
    table.new_scope();

    // Two empty frames above the Float declaration.
    assert_eq!(table.lookup("x").unwrap().data_type(), DataType::Float);
    assert_eq!(table.depth(), 4);
}

#[test]
fn test_pop_scope_restores_previous() {
    let mut table = SymbolTable::new();
    assert!(table.pop_scope().is_none());

    table.new_scope();
    table.new_scope();
    assert!(table.declare(variable("inner", DataType::Char)));
    table.pop_scope();

    assert!(table.lookup("inner").is_none());
    assert!(table.pop_scope().is_some());
    assert!(table.pop_scope().is_none());
    assert_eq!(table.depth(), 0);
}

#[test]
fn test_declare_without_open_scope_fails() {
    let mut table = SymbolTable::new();
    assert!(!table.declare(variable("x", DataType::Int)));
    assert!(table.lookup("x").is_none());
}

#[test]
fn test_stores_any_identifier_kind() {
    let mut table = SymbolTable::new();
    table.new_scope();
    let constant = Identifier::Constant(Rc::new(Constant {
        name: "PI".to_string(),
        data_type: DataType::Double,
        location: Location::null(),
    }));

    assert!(table.declare(constant));
    assert!(matches!(table.lookup("PI"), Some(Identifier::Constant(_))));
}

#[test]
fn test_reopen_popped_frame() {
    let mut table = SymbolTable::new();
    table.new_scope();
    table.new_scope();
    assert!(table.declare(variable("a", DataType::Int)));
    let frame = table.pop_scope().unwrap();

    assert!(table.declare(variable("f", DataType::Void)));
    table.new_scope_from(frame);
    assert!(table.lookup("a").is_some());
    assert!(table.lookup("f").is_some());
    assert!(!table.declare(variable("a", DataType::Int)));
    assert_eq!(table.depth(), 2);
}

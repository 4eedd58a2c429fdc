//! Resolution of primitive type names in declarations.
//!
//! Type names are matched case-insensitively, so `int`, `Int` and `INT` all
//! name the same type.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::types::DataType,
    errors::errors::{CompileError, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Location, MK_ERROR,
};

use super::parser::Parser;

lazy_static! {
    static ref DATA_TYPE_LOOKUP: HashMap<&'static str, DataType> = {
        let mut map = HashMap::new();
        for data_type in DataType::ALL {
            map.insert(data_type.name(), data_type);
        }
        map
    };
}

pub fn data_type_for_name(name: &str) -> Option<DataType> {
    DATA_TYPE_LOOKUP.get(name.to_lowercase().as_str()).copied()
}

/// Resolves an already consumed type name token.
pub fn resolve_data_type(token: &Token) -> Result<DataType, CompileError> {
    match data_type_for_name(&token.value) {
        Some(data_type) if token.kind == TokenKind::Identifier => Ok(data_type),
        _ => MK_ERROR!(
            ErrorImpl::InvalidDataType {
                name: token.value.clone()
            },
            token.location.clone()
        ),
    }
}

/// Parses a type name and returns it with the location it was written at.
pub fn parse_data_type(parser: &mut Parser) -> Result<(DataType, Location), CompileError> {
    let token = parser.expect(TokenKind::Identifier, "data type")?;
    Ok((resolve_data_type(&token)?, token.location))
}

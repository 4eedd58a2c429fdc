use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::{ast::Node, operators::OperatorKind},
    errors::errors::CompileError,
    lexer::tokens::Keyword,
};

use super::{parser::Parser, stmt::*};

lazy_static! {
    /// Operator symbols to operator kinds. Where several kinds share a
    /// symbol (`+`, `-`, `++`, `--`) the first one in table order is stored;
    /// the expression parser picks the right reading from context.
    pub static ref OPERATOR_LOOKUP: HashMap<&'static str, OperatorKind> = {
        let mut map = HashMap::new();
        for kind in OperatorKind::ALL {
            map.entry(kind.symbol()).or_insert(kind);
        }
        map
    };
}

pub type StmtHandler = fn(&mut Parser) -> Result<Node, CompileError>;
pub type StmtLookup = HashMap<Keyword, StmtHandler>;

pub fn create_stmt_lookups(parser: &mut Parser) {
    parser.stmt(Keyword::If, parse_if_stmt);
    parser.stmt(Keyword::While, parse_while_stmt);
    parser.stmt(Keyword::For, parse_for_stmt);
}

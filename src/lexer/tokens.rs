use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{ast::types::DataType, Location};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Keyword> = {
        let mut map = HashMap::new();
        map.insert("if", Keyword::If);
        map.insert("else", Keyword::Else);
        map.insert("while", Keyword::While);
        map.insert("for", Keyword::For);
        map
    };
    pub static ref BOOLEAN_LOOKUP: HashMap<&'static str, bool> = {
        let mut map = HashMap::new();
        map.insert("true", true);
        map.insert("false", false);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Literal,
    Identifier,
    Keyword,
    Operator,
    Delimiter,
    EndOfStatement,
    EOF,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Literal => "LITERAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Delimiter => "DELIMITER",
            TokenKind::EndOfStatement => "END_OF_STATEMENT",
            TokenKind::EOF => "EOF",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    If,
    Else,
    While,
    For,
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::While => "while",
            Keyword::For => "for",
        };
        write!(f, "{}", name)
    }
}

/// A lexical token.
///
/// `value` is the source text of the token, with two exceptions: string and
/// char literals hold the raw text between their delimiters, and hexadecimal
/// literals hold their decimal rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub location: Location,
    /// Indentation depth of the line the token is on.
    pub scope_level: usize,
    /// Set for literals only.
    pub data_type: Option<DataType>,
    /// Set for keywords only.
    pub keyword: Option<Keyword>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = if self.kind == TokenKind::EndOfStatement {
            "\\n"
        } else {
            &self.value
        };
        write!(
            f,
            "({}:{}) [{}] {} '{}'",
            self.location.line, self.location.column, self.scope_level, self.kind, value
        )
    }
}

impl Token {
    pub fn is(&self, kind: TokenKind, value: &str) -> bool {
        self.kind == kind && self.value == value
    }

    pub fn is_delimiter(&self, value: &str) -> bool {
        self.is(TokenKind::Delimiter, value)
    }

    pub fn is_operator(&self, value: &str) -> bool {
        self.is(TokenKind::Operator, value)
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.keyword == Some(keyword)
    }

    pub fn ends_statement(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfStatement | TokenKind::EOF)
    }
}

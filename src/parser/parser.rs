//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct, its token navigation
//! helpers and the scope parser. Blocks have no delimiters: the scope level
//! the lexer attached to every token decides which block a statement
//! belongs to.
//!
//! The parser owns:
//! - The symbol table, one frame per open scope
//! - The operand and operator stacks of the expression engine
//! - A statement lookup keyed by keyword

use std::collections::HashMap;

use crate::{
    ast::{ast::Node, operators::OperatorKind, statements::Scope},
    errors::errors::{CompileError, ErrorImpl},
    lexer::tokens::{Keyword, Token, TokenKind},
    symbols::symbol_table::SymbolTable,
    Location, MK_ERROR, MK_TOKEN,
};

use super::{
    lookups::{create_stmt_lookups, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// An operator waiting on the operator stack, with the location of the
/// token it was read from.
#[derive(Debug, Clone)]
pub struct PendingOperator {
    pub kind: OperatorKind,
    pub location: Location,
}

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream, the symbol table and the two stacks
/// used while building an expression. One parser handles one token stream.
pub struct Parser {
    /// The list of tokens to parse, always ending with `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Scope level of the block being parsed
    pub scope_level: usize,
    /// Declarations visible from the current position
    pub symbols: SymbolTable,
    /// Operands of the expression being built
    pub operand_stack: Vec<Node>,
    /// Operators of the expression being built
    pub operator_stack: Vec<PendingOperator>,
    /// Lookup table for keyword statement handlers
    stmt_lookup: StmtLookup,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse. An `EOF` token is appended if
    ///   the stream does not end with one.
    ///
    /// # Returns
    ///
    /// A new Parser instance ready to parse the token stream.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let location = tokens
                .last()
                .map(|token| token.location.clone())
                .unwrap_or_else(Location::null);
            tokens.push(MK_TOKEN!(TokenKind::EOF, String::new(), location, 0));
        }

        Parser {
            tokens,
            pos: 0,
            scope_level: 0,
            symbols: SymbolTable::new(),
            operand_stack: vec![],
            operator_stack: vec![],
            stmt_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the location of the current token.
    pub fn location(&self) -> Location {
        self.current_token().location.clone()
    }

    /// Advances to the next token and returns the previous token. The
    /// position never moves past `EOF`.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if token.kind != TokenKind::EOF {
            self.pos += 1;
        }
        token
    }

    /// Returns the current position, to be restored with `return_to`.
    pub fn bookmark(&self) -> usize {
        self.pos
    }

    pub fn return_to(&mut self, bookmark: usize) {
        self.pos = bookmark;
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == kind
    }

    pub fn check_delimiter(&self, value: &str) -> bool {
        self.current_token().is_delimiter(value)
    }

    pub fn check_operator(&self, value: &str) -> bool {
        self.current_token().is_operator(value)
    }

    pub fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current_token().is_keyword(keyword)
    }

    /// Consumes the current token if it is of `kind`.
    pub fn accept(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    pub fn accept_delimiter(&mut self, value: &str) -> bool {
        if self.check_delimiter(value) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn accept_operator(&mut self, value: &str) -> bool {
        if self.check_operator(value) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expects a token of the specified kind.
    ///
    /// # Arguments
    ///
    /// * `kind` - The expected TokenKind
    /// * `expected` - What to call the missing token in the error message
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// `Expected` error at the current token.
    pub fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token, CompileError> {
        match self.accept(kind) {
            Some(token) => Ok(token),
            None => self.error(ErrorImpl::Expected {
                expected: expected.to_string(),
            }),
        }
    }

    pub fn expect_delimiter(&mut self, value: &str) -> Result<(), CompileError> {
        if self.accept_delimiter(value) {
            Ok(())
        } else {
            self.error(ErrorImpl::Expected {
                expected: format!("'{}'", value),
            })
        }
    }

    pub fn expect_end_of_statement(&mut self) -> Result<(), CompileError> {
        self.expect(TokenKind::EndOfStatement, "end of statement")?;
        Ok(())
    }

    /// Fails if the input ends where a block has to follow.
    pub fn eof_not_expected(&self) -> Result<(), CompileError> {
        if self.check(TokenKind::EOF) {
            return self.error(ErrorImpl::UnexpectedEndOfFile);
        }
        Ok(())
    }

    /// Checks for `identifier :` without consuming anything.
    pub fn check_declaration(&self) -> bool {
        self.check(TokenKind::Identifier)
            && self
                .tokens
                .get(self.pos + 1)
                .is_some_and(|token| token.is_delimiter(":"))
    }

    /// Creates an error located at the current token.
    pub fn error<T>(&self, error: ErrorImpl) -> Result<T, CompileError> {
        MK_ERROR!(error, self.location())
    }

    /// Returns the handler registered for a statement keyword.
    pub fn get_stmt_handler(&self, keyword: Keyword) -> Option<StmtHandler> {
        self.stmt_lookup.get(&keyword).copied()
    }

    /// Registers a statement handler for a keyword.
    ///
    /// # Arguments
    ///
    /// * `keyword` - The keyword that starts the statement
    /// * `stmt_fn` - The handler function for this statement type
    pub fn stmt(&mut self, keyword: Keyword, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(keyword, stmt_fn);
    }
}

/// Parses the block at `level`, starting at the current token.
///
/// The caller opens the symbol table frame for the block; it is closed here
/// and handed to the returned `Scope`. A line one level deeper than `level`
/// opens a nested block after a statement, a line one level shallower ends
/// this one, and any larger jump is an error. `EOF` closes every open block.
pub fn parse_scope(parser: &mut Parser, level: usize) -> Result<Scope, CompileError> {
    let enclosing_level = parser.scope_level;
    parser.scope_level = level;
    let mut statements = vec![];

    loop {
        let token = parser.current_token();
        if token.kind == TokenKind::EOF {
            break;
        }

        if token.scope_level == level {
            statements.push(parse_stmt(parser)?);
        } else if token.scope_level == level + 1 && !statements.is_empty() {
            parser.symbols.new_scope();
            statements.push(Node::Scope(parse_scope(parser, level + 1)?));
        } else if token.scope_level + 1 == level {
            break;
        } else {
            return parser.error(ErrorImpl::IllegalScopeChange);
        }
    }

    parser.scope_level = enclosing_level;
    Ok(Scope {
        statements,
        identifiers: parser.symbols.pop_scope().unwrap_or_default(),
    })
}

/// Parses the body of a block statement: a non-empty block exactly one level
/// deeper than the current one. The caller opens the body's frame.
pub fn parse_body(parser: &mut Parser, construct: &'static str) -> Result<Scope, CompileError> {
    let token = parser.current_token();
    if token.kind == TokenKind::EOF || token.scope_level <= parser.scope_level {
        return parser.error(ErrorImpl::ExpectedScope { construct });
    }

    let level = parser.scope_level + 1;
    parse_scope(parser, level)
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// registers the statement handlers and parses the top level block until
/// EOF.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse
///
/// # Returns
///
/// The top level scope, or the first error found.
pub fn parse(tokens: Vec<Token>) -> Result<Scope, CompileError> {
    let mut parser = Parser::new(tokens);
    create_stmt_lookups(&mut parser);

    parser.symbols.new_scope();
    parse_scope(&mut parser, 0)
}

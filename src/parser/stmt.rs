use std::{cell::OnceCell, rc::Rc};

use crate::{
    ast::{
        ast::Node,
        declarations::{Constant, Function, Identifier, Variable},
        expressions::BinaryOperator,
        operators::OperatorKind,
        statements::{ForRangeStatement, ForStatement, IfStatement, WhileStatement},
        types::DataType,
    },
    errors::errors::{CompileError, ErrorImpl},
    lexer::tokens::{Keyword, Token, TokenKind},
    type_checker::type_checker::{expect_boolean, type_check, type_check_vs_data_type},
    Location, MK_ERROR,
};

use super::{
    expr::parse_expression,
    parser::{parse_body, Parser},
    types::{parse_data_type, resolve_data_type},
};

/// Name of the loop variable of a range loop that does not name one.
pub const IMPLICIT_LOOP_VARIABLE: &str = "it";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Declared {
    Variable,
    Constant,
    ConstantParameter,
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Node, CompileError> {
    if parser.check_declaration() {
        return parse_declaration_stmt(parser);
    }

    if let Some(keyword) = parser.current_token().keyword {
        return match parser.get_stmt_handler(keyword) {
            Some(handler) => handler(parser),
            None => parser.error(ErrorImpl::UnexpectedToken {
                token: keyword.to_string(),
            }),
        };
    }

    let expression = parse_expression(parser)?;
    type_check(&expression)?;
    parser.expect_end_of_statement()?;
    Ok(expression)
}

pub fn parse_declaration_stmt(parser: &mut Parser) -> Result<Node, CompileError> {
    let declaration = parse_declaration(parser, false)?;
    // A function declaration ends with its body.
    if !matches!(declaration, Node::Function(_)) {
        parser.expect_end_of_statement()?;
    }
    Ok(declaration)
}

/// Parses `name : [type] ...` and declares `name` in the current frame.
///
/// - `name : [type] = expression` declares a variable
/// - `name : [type] : expression` declares a constant, or a constant
///   variable when parsing a parameter list
/// - `name : [type] : (parameters) [-> type]` declares a function
/// - `name : type` declares a variable without initializer
///
/// The terminating token is left for the caller.
fn parse_declaration(parser: &mut Parser, is_parameter: bool) -> Result<Node, CompileError> {
    let name_token = parser.expect(TokenKind::Identifier, "identifier")?;
    parser.expect_delimiter(":")?;

    let mut data_type = DataType::Auto;
    let mut type_location = None;
    if let Some(type_token) = parser.accept(TokenKind::Identifier) {
        data_type = resolve_data_type(&type_token)?;
        type_location = Some(type_token.location);
    }
    let type_location = type_location.unwrap_or_else(|| name_token.location.clone());

    if parser.accept_delimiter(":") {
        if is_parameter {
            let expression = parse_expression(parser)?;
            return assign_to_declaration(
                parser,
                &name_token,
                data_type,
                &type_location,
                expression,
                Declared::ConstantParameter,
            );
        }

        if check_function(parser) {
            return parse_function(parser, name_token, data_type);
        }

        let expression = parse_expression(parser)?;
        return assign_to_declaration(
            parser,
            &name_token,
            data_type,
            &type_location,
            expression,
            Declared::Constant,
        );
    }

    if parser.accept_operator("=") {
        let expression = parse_expression(parser)?;
        return assign_to_declaration(
            parser,
            &name_token,
            data_type,
            &type_location,
            expression,
            Declared::Variable,
        );
    }

    match data_type {
        DataType::Auto => parser.error(ErrorImpl::AutoWithoutExpression),
        DataType::Void => MK_ERROR!(ErrorImpl::VoidDataType, type_location),
        _ => {
            let variable = Identifier::Variable(Rc::new(Variable::new(
                name_token.value.clone(),
                data_type,
                name_token.location.clone(),
            )));
            declare(parser, &variable)?;
            Ok(variable.to_node())
        }
    }
}

/// Looks ahead for `(identifier :` or `()` after `name ::`.
fn check_function(parser: &mut Parser) -> bool {
    let bookmark = parser.bookmark();
    let is_function = parser.accept_delimiter("(")
        && (parser.accept_delimiter(")")
            || (parser.accept(TokenKind::Identifier).is_some() && parser.accept_delimiter(":")));
    parser.return_to(bookmark);
    is_function
}

/// Parses `(parameters) [-> type]` and the function body.
///
/// A type written before `::` is the return type unless `->` gives one. The
/// function is declared in the enclosing frame before its body is parsed, so
/// the body can refer to it. Parameters live in the body's frame.
fn parse_function(
    parser: &mut Parser,
    name_token: Token,
    declared_type: DataType,
) -> Result<Node, CompileError> {
    parser.expect_delimiter("(")?;
    parser.symbols.new_scope();

    let mut parameters = vec![];
    if !parser.check_delimiter(")") {
        loop {
            if !parser.check_declaration() {
                return parser.error(ErrorImpl::Expected {
                    expected: "parameter declaration".to_string(),
                });
            }
            parameters.push(parse_declaration(parser, true)?);
            if !parser.accept_delimiter(",") {
                break;
            }
        }
    }
    parser.expect_delimiter(")")?;

    let mut return_type = match declared_type {
        DataType::Auto => DataType::Void,
        data_type => data_type,
    };
    if parser.accept_operator("->") {
        let (data_type, location) = parse_data_type(parser)?;
        if data_type == DataType::Auto {
            return MK_ERROR!(ErrorImpl::AutoReturnType, location);
        }
        return_type = data_type;
    }
    parser.expect_end_of_statement()?;
    parser.eof_not_expected()?;

    let body_frame = parser.symbols.pop_scope().unwrap_or_default();
    let function = Rc::new(Function {
        name: name_token.value.clone(),
        parameters,
        return_type,
        location: name_token.location.clone(),
        body: OnceCell::new(),
    });
    declare(parser, &Identifier::Function(Rc::clone(&function)))?;

    parser.symbols.new_scope_from(body_frame);
    let body = parse_body(parser, "function")?;
    let _ = function.body.set(body);

    Ok(Node::Function(function))
}

/// Type checks `expression` against the declared type, declares the entity
/// and returns the assignment of `expression` to it.
fn assign_to_declaration(
    parser: &mut Parser,
    name_token: &Token,
    data_type: DataType,
    type_location: &Location,
    expression: Node,
    declared: Declared,
) -> Result<Node, CompileError> {
    let data_type = type_check_vs_data_type(&expression, data_type, type_location)?;
    let name = name_token.value.clone();
    let location = name_token.location.clone();

    let identifier = match declared {
        Declared::Variable => {
            Identifier::Variable(Rc::new(Variable::new(name, data_type, location.clone())))
        }
        Declared::ConstantParameter => Identifier::Variable(Rc::new(Variable {
            name,
            data_type,
            is_constant: true,
            location: location.clone(),
        })),
        Declared::Constant => Identifier::Constant(Rc::new(Constant {
            name,
            data_type,
            location: location.clone(),
        })),
    };
    declare(parser, &identifier)?;

    Ok(Node::BinaryOperator(BinaryOperator {
        operator: OperatorKind::Assignment,
        left: Box::new(identifier.to_node()),
        right: Box::new(expression),
        location,
    }))
}

fn declare(parser: &mut Parser, identifier: &Identifier) -> Result<(), CompileError> {
    if !parser.symbols.declare(identifier.clone()) {
        return MK_ERROR!(
            ErrorImpl::AlreadyDeclared {
                name: identifier.name().to_string()
            },
            identifier.location().clone()
        );
    }
    Ok(())
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Node, CompileError> {
    let if_token = parser.advance();
    let condition = parse_expression(parser)?;
    expect_boolean(&condition, &if_token.location)?;
    parser.expect_end_of_statement()?;
    parser.eof_not_expected()?;

    parser.symbols.new_scope();
    let then_scope = parse_body(parser, "if")?;

    let mut else_scope = None;
    if parser.check_keyword(Keyword::Else)
        && parser.current_token().scope_level == parser.scope_level
    {
        parser.advance();
        parser.expect_end_of_statement()?;
        parser.eof_not_expected()?;

        parser.symbols.new_scope();
        else_scope = Some(parse_body(parser, "else")?);
    }

    Ok(Node::IfStatement(IfStatement {
        condition: Box::new(condition),
        then_scope,
        else_scope,
        location: if_token.location,
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Node, CompileError> {
    let while_token = parser.advance();
    let condition = parse_expression(parser)?;
    expect_boolean(&condition, &while_token.location)?;
    parser.expect_end_of_statement()?;
    parser.eof_not_expected()?;

    parser.symbols.new_scope();
    let body = parse_body(parser, "while")?;

    Ok(Node::WhileStatement(WhileStatement {
        condition: Box::new(condition),
        body,
        location: while_token.location,
    }))
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<Node, CompileError> {
    if check_standard_for(parser) {
        parse_standard_for_stmt(parser)
    } else {
        parse_range_for_stmt(parser)
    }
}

/// A C-style loop has a `,` right after `for`, or starts with a declaration
/// and has a top level `,` on the same line. Nothing is consumed.
fn check_standard_for(parser: &mut Parser) -> bool {
    let bookmark = parser.bookmark();
    parser.advance();

    let mut is_standard = parser.check_delimiter(",");
    if !is_standard && parser.check_declaration() {
        let mut depth = 0usize;
        while !parser.current_token().ends_statement() {
            let token = parser.advance();
            if token.is_delimiter("(") {
                depth += 1;
            } else if token.is_delimiter(")") {
                depth = depth.saturating_sub(1);
            } else if token.is_delimiter(",") && depth == 0 {
                is_standard = true;
                break;
            }
        }
    }

    parser.return_to(bookmark);
    is_standard
}

/// `for [init], [condition], [increment]`. The init declaration shares the
/// body's frame.
fn parse_standard_for_stmt(parser: &mut Parser) -> Result<Node, CompileError> {
    let for_token = parser.advance();
    parser.symbols.new_scope();

    let mut init = None;
    if parser.check_declaration() {
        let declaration = parse_declaration(parser, false)?;
        let is_variable_assignment = matches!(
            &declaration,
            Node::BinaryOperator(binary) if matches!(*binary.left, Node::Variable(_))
        );
        if !is_variable_assignment {
            return MK_ERROR!(
                ErrorImpl::ExpectedVariableDeclaration,
                declaration.location().cloned().unwrap_or(for_token.location)
            );
        }
        init = Some(Box::new(declaration));
    } else if !parser.check_delimiter(",") {
        return parser.error(ErrorImpl::ExpectedVariableDeclaration);
    }
    parser.expect_delimiter(",")?;

    let mut condition = None;
    if !parser.check_delimiter(",") {
        let expression = parse_expression(parser)?;
        expect_boolean(&expression, &for_token.location)?;
        condition = Some(Box::new(expression));
    }
    parser.expect_delimiter(",")?;

    let mut increment = None;
    if !parser.check(TokenKind::EndOfStatement) {
        let expression = parse_expression(parser)?;
        type_check(&expression)?;
        increment = Some(Box::new(expression));
    }
    parser.expect_end_of_statement()?;
    parser.eof_not_expected()?;

    let body = parse_body(parser, "for")?;

    Ok(Node::ForStatement(ForStatement {
        init,
        condition,
        increment,
        body,
        location: for_token.location,
    }))
}

/// `for [name :] range`. The loop variable takes the type of the range
/// expression and is named `it` unless a name is given.
fn parse_range_for_stmt(parser: &mut Parser) -> Result<Node, CompileError> {
    let for_token = parser.advance();

    let mut name_token = None;
    if parser.check_declaration() {
        name_token = Some(parser.advance());
        parser.advance();
    }

    let range = parse_expression(parser)?;
    let data_type = type_check(&range)?;
    parser.expect_end_of_statement()?;
    parser.eof_not_expected()?;

    let (name, location) = match name_token {
        Some(token) => (token.value, token.location),
        None => (
            IMPLICIT_LOOP_VARIABLE.to_string(),
            for_token.location.clone(),
        ),
    };
    let variable = Identifier::Variable(Rc::new(Variable::new(name, data_type, location.clone())));

    parser.symbols.new_scope();
    declare(parser, &variable)?;
    let range = Node::BinaryOperator(BinaryOperator {
        operator: OperatorKind::Assignment,
        left: Box::new(variable.to_node()),
        right: Box::new(range),
        location,
    });
    let body = parse_body(parser, "for")?;

    Ok(Node::ForRangeStatement(ForRangeStatement {
        range: Box::new(range),
        body,
        location: for_token.location,
    }))
}

//! The operator precedence expression engine.
//!
//! A shunting-yard pass over the tokens of one expression. Operands go on
//! the parser's operand stack, pending operators on its operator stack, and
//! an operator is reduced into a node as soon as an incoming operator does
//! not bind tighter than it.

use crate::{
    ast::{
        ast::Node,
        declarations::Identifier,
        expressions::{BinaryOperator, Literal, LiteralValue, UnaryOperator},
        operators::{Associativity, OperatorGroup, OperatorKind},
        types::DataType,
    },
    errors::errors::{CompileError, ErrorImpl},
    lexer::{
        lexer::resolve_escapes,
        tokens::{Token, TokenKind},
    },
    type_checker::folding::simplify_expression,
    MK_ERROR,
};

use super::{
    lookups::OPERATOR_LOOKUP,
    parser::{Parser, PendingOperator},
};

/// Parses one expression and folds it.
///
/// The expression ends at the end of the statement, at a `,`, or at a `)`
/// that closes a parenthesis opened outside of it. The terminating token is
/// not consumed.
pub fn parse_expression(parser: &mut Parser) -> Result<Node, CompileError> {
    parser.operand_stack.clear();
    parser.operator_stack.clear();

    let mut expect_operand = true;
    let mut previous_was_variable = false;
    let mut parentheses = 0usize;

    loop {
        let token = parser.current_token().clone();
        match token.kind {
            TokenKind::EndOfStatement | TokenKind::EOF => break,
            TokenKind::Delimiter if token.value == "," => break,
            TokenKind::Delimiter if token.value == "(" => {
                if !expect_operand {
                    return parser.error(ErrorImpl::UnexpectedParenthesis);
                }
                parser.advance();
                parentheses += 1;
                parser.operator_stack.push(PendingOperator {
                    kind: OperatorKind::OpenParenthesis,
                    location: token.location,
                });
                previous_was_variable = false;
            }
            TokenKind::Delimiter if token.value == ")" => {
                if parentheses == 0 {
                    break;
                }
                if expect_operand {
                    return parser.error(ErrorImpl::ExpectedOperand);
                }
                parser.advance();
                parentheses -= 1;
                while parser
                    .operator_stack
                    .last()
                    .is_some_and(|top| top.kind != OperatorKind::OpenParenthesis)
                {
                    reduce(parser)?;
                }
                parser.operator_stack.pop();
                previous_was_variable = false;
            }
            TokenKind::Literal => {
                if !expect_operand {
                    return parser.error(ErrorImpl::UnexpectedLiteral);
                }
                parser.advance();
                let literal = make_literal(&token)?;
                parser.operand_stack.push(Node::Literal(literal));
                expect_operand = false;
                previous_was_variable = false;
            }
            TokenKind::Identifier => {
                if !expect_operand {
                    return parser.error(ErrorImpl::UnexpectedIdentifier { name: token.value });
                }
                let operand = match parser.symbols.lookup(&token.value) {
                    Some(identifier @ (Identifier::Variable(_) | Identifier::Function(_))) => {
                        identifier.to_node()
                    }
                    Some(Identifier::Constant(_)) => {
                        return parser.error(ErrorImpl::NotAnOperand { name: token.value })
                    }
                    None => {
                        return parser.error(ErrorImpl::UnknownIdentifier { name: token.value })
                    }
                };
                parser.advance();
                previous_was_variable = matches!(operand, Node::Variable(_));
                parser.operand_stack.push(operand);
                expect_operand = false;
            }
            TokenKind::Operator => {
                let Some(symbol_kind) = OPERATOR_LOOKUP.get(token.value.as_str()).copied() else {
                    return parser.error(ErrorImpl::InvalidOperator {
                        symbol: token.value,
                    });
                };
                parser.advance();
                let kind = resolve_operator(
                    parser,
                    symbol_kind,
                    &token,
                    expect_operand,
                    previous_was_variable,
                )?;
                push_operator(parser, kind, &token)?;

                expect_operand = !matches!(
                    kind,
                    OperatorKind::PostIncrement | OperatorKind::PostDecrement
                );
                previous_was_variable = false;
            }
            TokenKind::Keyword | TokenKind::Delimiter => {
                return parser.error(ErrorImpl::UnexpectedToken { token: token.value });
            }
        }
    }

    if parentheses > 0 {
        return parser.error(ErrorImpl::Expected {
            expected: "')'".to_string(),
        });
    }
    while !parser.operator_stack.is_empty() {
        reduce(parser)?;
    }

    let Some(node) = parser.operand_stack.pop() else {
        return parser.error(ErrorImpl::ExpectedExpression);
    };
    if !parser.operand_stack.is_empty() {
        return parser.error(ErrorImpl::ExpectedExpression);
    }

    simplify_expression(node)
}

/// Picks the operator a symbol stands for at this point of the expression.
///
/// - `+` and `-` where an operand is expected are unary plus and minus
/// - `++` and `--` right after a variable are postfix; otherwise they are
///   prefix and must be followed by a variable
/// - any other operator where an operand is expected is an error
fn resolve_operator(
    parser: &Parser,
    kind: OperatorKind,
    token: &Token,
    expect_operand: bool,
    previous_was_variable: bool,
) -> Result<OperatorKind, CompileError> {
    let unexpected = || {
        MK_ERROR!(
            ErrorImpl::UnexpectedOperator {
                symbol: token.value.clone()
            },
            token.location.clone()
        )
    };

    match kind {
        OperatorKind::PreIncrement | OperatorKind::PreDecrement => {
            let (postfix, operation) = if kind == OperatorKind::PreIncrement {
                (OperatorKind::PostIncrement, "increment")
            } else {
                (OperatorKind::PostDecrement, "decrement")
            };

            if previous_was_variable {
                return Ok(postfix);
            }
            let next_is_variable = parser.check(TokenKind::Identifier)
                && matches!(
                    parser.symbols.lookup(&parser.current_token().value),
                    Some(Identifier::Variable(_))
                );
            if !next_is_variable {
                return MK_ERROR!(
                    ErrorImpl::IncrementNeedsVariable { operation },
                    token.location.clone()
                );
            }
            if !expect_operand {
                return unexpected();
            }
            Ok(kind)
        }
        OperatorKind::Add if expect_operand => Ok(OperatorKind::UnaryPlus),
        OperatorKind::Sub if expect_operand => Ok(OperatorKind::UnaryMinus),
        _ if kind.is_unary() => {
            if expect_operand {
                Ok(kind)
            } else {
                unexpected()
            }
        }
        _ if expect_operand => unexpected(),
        _ => Ok(kind),
    }
}

/// Reduces every pending operator that binds at least as tight as `kind`
/// (strictly tighter for right-to-left operators), then pushes `kind`.
fn push_operator(parser: &mut Parser, kind: OperatorKind, token: &Token) -> Result<(), CompileError> {
    let precedence = kind.precedence();
    let right_to_left = kind.associativity() == Associativity::RightToLeft;

    while let Some(top) = parser.operator_stack.last() {
        let top_precedence = top.kind.precedence();
        let reduces = if right_to_left {
            top_precedence > precedence
        } else {
            top_precedence >= precedence
        };
        if !reduces {
            break;
        }
        reduce(parser)?;
    }

    parser.operator_stack.push(PendingOperator {
        kind,
        location: token.location.clone(),
    });
    Ok(())
}

/// Pops the top operator and its operands and pushes the resulting node.
fn reduce(parser: &mut Parser) -> Result<(), CompileError> {
    let Some(operator) = parser.operator_stack.pop() else {
        return Ok(());
    };

    if operator.kind.is_unary() {
        let Some(operand) = parser.operand_stack.pop() else {
            return MK_ERROR!(ErrorImpl::ExpectedOperand, operator.location);
        };
        parser.operand_stack.push(Node::UnaryOperator(UnaryOperator {
            operator: operator.kind,
            operand: Box::new(operand),
            location: operator.location,
        }));
        return Ok(());
    }

    if parser.operand_stack.len() < 2 {
        return MK_ERROR!(ErrorImpl::ExpectedOperand, operator.location);
    }
    // The right operand is on top.
    let (Some(right), Some(left)) = (parser.operand_stack.pop(), parser.operand_stack.pop()) else {
        return MK_ERROR!(ErrorImpl::ExpectedOperand, operator.location);
    };

    if operator.kind.group() == OperatorGroup::Assignment {
        match &left {
            Node::Variable(variable) if variable.is_constant => {
                return MK_ERROR!(
                    ErrorImpl::AssignmentToConstant {
                        name: variable.name.clone()
                    },
                    operator.location
                );
            }
            Node::Variable(_) => {}
            _ => return MK_ERROR!(ErrorImpl::InvalidAssignmentTarget, operator.location),
        }
    }

    parser.operand_stack.push(Node::BinaryOperator(BinaryOperator {
        operator: operator.kind,
        left: Box::new(left),
        right: Box::new(right),
        location: operator.location,
    }));
    Ok(())
}

/// Builds a literal node from a literal token's text.
pub fn make_literal(token: &Token) -> Result<Literal, CompileError> {
    let Some(data_type) = token.data_type else {
        return MK_ERROR!(
            ErrorImpl::UnexpectedToken {
                token: token.value.clone()
            },
            token.location.clone()
        );
    };

    let text = token.value.as_str();
    let value = match data_type {
        DataType::Boolean => Some(LiteralValue::Boolean(text == "true")),
        DataType::Int => text.parse().ok().map(LiteralValue::Int),
        DataType::Float => text
            .trim_end_matches(['f', 'F'])
            .parse()
            .ok()
            .map(LiteralValue::Float),
        DataType::Double => text.parse().ok().map(LiteralValue::Double),
        DataType::Char => {
            let resolved = resolve_escapes(text, true);
            let mut chars = resolved.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(LiteralValue::Char(c)),
                _ => None,
            }
        }
        DataType::String => Some(LiteralValue::String(resolve_escapes(text, false))),
        DataType::Void | DataType::Auto => None,
    };

    match value {
        Some(value) => Ok(Literal::new(value, token.location.clone())),
        None => MK_ERROR!(
            ErrorImpl::InvalidLiteral { data_type },
            token.location.clone()
        ),
    }
}

use crate::{
    ast::{
        ast::Node,
        operators::{AssignOp, BinaryOp, LogicalOp, UnaryOp},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::TokenSource, tokens::TokenKind},
};

use super::{
    lookups::{is_assign_op, is_literal, is_unary_op, ExprHandler},
    parser::Parser,
};

/// Comma separated expressions. A single expression is returned as is.
pub fn parse_seq_expr<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    let mut body = vec![parse_assign_expr(parser)?];

    while parser.current_token_kind() == TokenKind::Comma {
        parser.consume(TokenKind::Comma)?;
        body.push(parse_assign_expr(parser)?);
    }

    if body.len() == 1 {
        if let Some(expr) = body.pop() {
            return Ok(expr);
        }
    }

    Ok(parser.builder().seq_expr(body))
}

/// Right associative: `x = y = 2` assigns `y = 2` to `x`.
pub fn parse_assign_expr<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    let left = parse_logical_or_expr(parser)?;

    if !is_assign_op(parser.current_token_kind()) {
        return Ok(left);
    }

    let position = parser.get_position();
    let operator_token = parser.advance()?;

    let Some(op) = AssignOp::from_symbol(&operator_token.value) else {
        return Err(Error::new(
            ErrorImpl::UnknownAssignOp {
                op: operator_token.value,
            },
            position,
        ));
    };

    // Checked before the right hand side is parsed
    if !left.is_lvalue() {
        return Err(Error::new(
            ErrorImpl::InvalidLvalue {
                node: Box::new(left),
            },
            position,
        ));
    }

    let right = parse_assign_expr(parser)?;

    Ok(parser.builder().assign_expr(op, left, right))
}

pub fn parse_logical_or_expr<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    parse_logical_expr(parser, parse_logical_and_expr, TokenKind::Or)
}

pub fn parse_logical_and_expr<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    parse_logical_expr(parser, parse_equality_expr, TokenKind::And)
}

pub fn parse_equality_expr<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    parse_binary_expr(parser, parse_relational_expr, TokenKind::EqualityOp)
}

pub fn parse_relational_expr<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    parse_binary_expr(parser, parse_additive_expr, TokenKind::RelationalOp)
}

pub fn parse_additive_expr<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    parse_binary_expr(parser, parse_multiplicative_expr, TokenKind::AdditiveOp)
}

pub fn parse_multiplicative_expr<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    parse_binary_expr(parser, parse_unary_expr, TokenKind::MultiplicativeOp)
}

/// One left associative level of `BinaryExpr` nodes.
///
/// # Arguments
///
/// * `next` - Parser for the operands, the next tighter level
/// * `kind` - Operator token accepted at this level
pub fn parse_binary_expr<T: TokenSource>(
    parser: &mut Parser<T>,
    next: ExprHandler<T>,
    kind: TokenKind,
) -> Result<Node, Error> {
    let mut left = next(parser)?;

    while parser.current_token_kind() == kind {
        let position = parser.get_position();
        let operator_token = parser.consume(kind)?;

        let Some(op) = BinaryOp::from_symbol(&operator_token.value) else {
            return Err(Error::new(
                ErrorImpl::UnknownBinaryOp {
                    op: operator_token.value,
                },
                position,
            ));
        };

        let right = next(parser)?;
        left = parser.builder().binary_expr(op, left, right);
    }

    Ok(left)
}

/// Same as `parse_binary_expr`, building `LogicalExpr` nodes.
pub fn parse_logical_expr<T: TokenSource>(
    parser: &mut Parser<T>,
    next: ExprHandler<T>,
    kind: TokenKind,
) -> Result<Node, Error> {
    let mut left = next(parser)?;

    while parser.current_token_kind() == kind {
        let position = parser.get_position();
        let operator_token = parser.consume(kind)?;

        let Some(op) = LogicalOp::from_symbol(&operator_token.value) else {
            return Err(Error::new(
                ErrorImpl::UnknownLogicalOp {
                    op: operator_token.value,
                },
                position,
            ));
        };

        let right = next(parser)?;
        left = parser.builder().logical_expr(op, left, right);
    }

    Ok(left)
}

pub fn parse_unary_expr<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    if !is_unary_op(parser.current_token_kind()) {
        return parse_lhs_expr(parser);
    }

    let position = parser.get_position();
    let operator_token = parser.advance()?;

    // The additive token also lexes `+`, which has no unary form
    let Some(op) = UnaryOp::from_symbol(&operator_token.value) else {
        return Err(Error::new(
            ErrorImpl::UnknownUnaryOp {
                op: operator_token.value,
            },
            position,
        ));
    };

    let arg = parse_unary_expr(parser)?;

    Ok(parser.builder().unary_expr(op, arg))
}

/// Member accesses and calls, plus `super(...)`.
pub fn parse_lhs_expr<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    if parser.current_token_kind() == TokenKind::Super {
        parser.consume(TokenKind::Super)?;
        let callee = parser.builder().super_call();
        return parse_call_expr(parser, callee);
    }

    let starts_with_new = parser.current_token_kind() == TokenKind::New;
    let member = parse_member_expr(parser)?;

    // `new X(...)` already took its arguments and cannot be called again
    let is_bare_new = starts_with_new && matches!(member, Node::NewExpr { .. });

    if parser.current_token_kind() == TokenKind::OpenParen && !is_bare_new {
        return parse_call_expr(parser, member);
    }

    Ok(member)
}

/// Wraps `callee` in calls for as long as argument lists follow.
pub fn parse_call_expr<T: TokenSource>(parser: &mut Parser<T>, callee: Node) -> Result<Node, Error> {
    let mut call = callee;

    loop {
        let args = parse_call_args(parser)?;
        call = parser.builder().call_expr(call, args);

        if parser.current_token_kind() != TokenKind::OpenParen {
            return Ok(call);
        }
    }
}

/// `'(' (AssignExpr (',' AssignExpr)*)? ')'`
pub fn parse_call_args<T: TokenSource>(parser: &mut Parser<T>) -> Result<Vec<Node>, Error> {
    parser.consume(TokenKind::OpenParen)?;

    let mut args = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        args.push(parse_assign_expr(parser)?);

        while parser.current_token_kind() == TokenKind::Comma {
            parser.consume(TokenKind::Comma)?;
            args.push(parse_assign_expr(parser)?);
        }
    }

    parser.consume(TokenKind::CloseParen)?;

    Ok(args)
}

pub fn parse_member_expr<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    let mut obj = parse_primary_expr(parser)?;

    loop {
        match parser.current_token_kind() {
            TokenKind::Dot => {
                parser.consume(TokenKind::Dot)?;
                let prop = parse_identifier(parser)?;
                obj = parser.builder().member_expr(false, obj, prop);
            }
            TokenKind::OpenBracket => {
                parser.consume(TokenKind::OpenBracket)?;
                let prop = parse_seq_expr(parser)?;
                parser.consume(TokenKind::CloseBracket)?;
                obj = parser.builder().member_expr(true, obj, prop);
            }
            _ => return Ok(obj),
        }
    }
}

pub fn parse_primary_expr<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    match parser.current_token_kind() {
        kind if is_literal(kind) => parse_literal(parser),
        TokenKind::OpenParen => parse_grouping_expr(parser),
        TokenKind::Identifier => parse_identifier(parser),
        TokenKind::This => {
            parser.consume(TokenKind::This)?;
            Ok(parser.builder().this_expr())
        }
        TokenKind::New => parse_new_expr(parser),
        // Anything else cannot start an expression, the literal fallback reports it
        _ => parse_literal(parser),
    }
}

pub fn parse_grouping_expr<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    parser.consume(TokenKind::OpenParen)?;
    let expr = parse_seq_expr(parser)?;
    parser.consume(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_new_expr<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    parser.consume(TokenKind::New)?;

    let callee = parse_member_expr(parser)?;
    let args = parse_call_args(parser)?;

    Ok(parser.builder().new_expr(callee, args))
}

pub fn parse_identifier<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    let token = parser.consume(TokenKind::Identifier)?;

    Ok(parser.builder().identifier(token.value))
}

pub fn parse_literal<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    let builder = parser.builder();

    match parser.current_token_kind() {
        TokenKind::Number => {
            let position = parser.get_position();
            let token = parser.consume(TokenKind::Number)?;

            match token.value.parse::<i64>() {
                Ok(value) => Ok(builder.numeric_lit(value)),
                Err(_) => Err(Error::new(
                    ErrorImpl::InvalidNumber { value: token.value },
                    position,
                )),
            }
        }
        TokenKind::String => {
            let token = parser.consume(TokenKind::String)?;
            Ok(builder.string_lit(strip_quotes(&token.value)))
        }
        TokenKind::True => {
            parser.consume(TokenKind::True)?;
            Ok(builder.bool_lit(true))
        }
        TokenKind::False => {
            parser.consume(TokenKind::False)?;
            Ok(builder.bool_lit(false))
        }
        TokenKind::Null => {
            parser.consume(TokenKind::Null)?;
            Ok(builder.null_lit())
        }
        kind => Err(Error::new(
            ErrorImpl::UnknownLiteral {
                kind,
                value: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

/// Drops the opening and closing quote, the contents are kept verbatim.
fn strip_quotes(value: &str) -> &str {
    let mut chars = value.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

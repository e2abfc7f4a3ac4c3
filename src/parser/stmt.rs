use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::TokenSource, tokens::TokenKind},
};

use super::{
    expr::{parse_assign_expr, parse_identifier, parse_seq_expr},
    parser::Parser,
};

pub fn parse_stmt<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();

    match handler {
        Some(handler) => handler(parser),
        None => parse_expr_stmt(parser),
    }
}

/// Parses statements until `stop` (or the end of input) is the lookahead.
///
/// The stop token itself is left for the caller to consume.
pub fn parse_stmt_list<T: TokenSource>(
    parser: &mut Parser<T>,
    stop: TokenKind,
) -> Result<Vec<Node>, Error> {
    let mut statements = Vec::new();

    while parser.current_token_kind() != stop && parser.current_token_kind() != TokenKind::EOF {
        statements.push(parse_stmt(parser)?);
    }

    Ok(statements)
}

pub fn parse_expr_stmt<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    let expr = parse_seq_expr(parser)?;

    parser.consume(TokenKind::Semicolon)?;

    Ok(parser.builder().expr_stmt(expr))
}

pub fn parse_empty_stmt<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    parser.consume(TokenKind::Semicolon)?;

    Ok(parser.builder().empty_stmt())
}

pub fn parse_block_stmt<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    parser.consume(TokenKind::OpenCurly)?;

    let body = parse_stmt_list(parser, TokenKind::CloseCurly)?;

    parser.consume(TokenKind::CloseCurly)?;

    Ok(parser.builder().block_stmt(body))
}

pub fn parse_var_stmt<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    let stmt = parse_var_stmt_init(parser)?;

    parser.consume(TokenKind::Semicolon)?;

    Ok(stmt)
}

/// `let` followed by declarations, without the closing semicolon.
///
/// Shared between variable statements and `for` initializers.
pub fn parse_var_stmt_init<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    parser.consume(TokenKind::Let)?;

    let mut decls = vec![parse_var_decl(parser)?];
    while parser.current_token_kind() == TokenKind::Comma {
        parser.consume(TokenKind::Comma)?;
        decls.push(parse_var_decl(parser)?);
    }

    Ok(parser.builder().var_stmt(decls))
}

pub fn parse_var_decl<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    let id = parse_identifier(parser)?;

    let init = if !parser
        .current_token()
        .is_one_of_many(&[TokenKind::Comma, TokenKind::Semicolon])
    {
        parser.consume(TokenKind::SimpleAssign)?;
        Some(parse_assign_expr(parser)?)
    } else {
        None
    };

    Ok(parser.builder().var_decl(id, init))
}

pub fn parse_if_stmt<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    parser.consume(TokenKind::If)?;

    let cond = parse_paren_condition(parser)?;
    let cons = parse_stmt(parser)?;

    let alt = if parser.current_token_kind() == TokenKind::Else {
        parser.consume(TokenKind::Else)?;
        Some(parse_stmt(parser)?)
    } else {
        None
    };

    Ok(parser.builder().if_stmt(cond, cons, alt))
}

pub fn parse_iteration_stmt<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    match parser.current_token_kind() {
        TokenKind::While => parse_while_stmt(parser),
        TokenKind::Do => parse_do_while_stmt(parser),
        TokenKind::For => parse_for_stmt(parser),
        actual => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                actual,
                value: parser.current_token().value.clone(),
                expected: TokenKind::While,
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_while_stmt<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    parser.consume(TokenKind::While)?;

    let cond = parse_paren_condition(parser)?;
    let body = parse_stmt(parser)?;

    Ok(parser.builder().while_stmt(cond, body))
}

pub fn parse_do_while_stmt<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    parser.consume(TokenKind::Do)?;

    let body = parse_stmt(parser)?;

    parser.consume(TokenKind::While)?;
    let cond = parse_paren_condition(parser)?;
    parser.consume(TokenKind::Semicolon)?;

    Ok(parser.builder().do_while_stmt(cond, body))
}

pub fn parse_for_stmt<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    parser.consume(TokenKind::For)?;
    parser.consume(TokenKind::OpenParen)?;

    let init = if parser.current_token_kind() != TokenKind::Semicolon {
        if parser.current_token_kind() == TokenKind::Let {
            Some(parse_var_stmt_init(parser)?)
        } else {
            Some(parse_seq_expr(parser)?)
        }
    } else {
        None
    };
    parser.consume(TokenKind::Semicolon)?;

    let cond = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_seq_expr(parser)?)
    } else {
        None
    };
    parser.consume(TokenKind::Semicolon)?;

    let step = if parser.current_token_kind() != TokenKind::CloseParen {
        Some(parse_seq_expr(parser)?)
    } else {
        None
    };
    parser.consume(TokenKind::CloseParen)?;

    let body = parse_stmt(parser)?;

    Ok(parser.builder().for_stmt(init, cond, step, body))
}

pub fn parse_func_decl<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    parser.consume(TokenKind::Def)?;

    let name = parse_identifier(parser)?;

    parser.consume(TokenKind::OpenParen)?;

    // An empty parameter list stays absent rather than becoming `[]`
    let params = if parser.current_token_kind() != TokenKind::CloseParen {
        let mut params = vec![parse_identifier(parser)?];
        while parser.current_token_kind() == TokenKind::Comma {
            parser.consume(TokenKind::Comma)?;
            params.push(parse_identifier(parser)?);
        }
        Some(params)
    } else {
        None
    };

    parser.consume(TokenKind::CloseParen)?;

    let body = parse_block_stmt(parser)?;

    Ok(parser.builder().func_decl(name, params, body))
}

pub fn parse_return_stmt<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    parser.consume(TokenKind::Return)?;

    let arg = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_seq_expr(parser)?)
    } else {
        None
    };

    parser.consume(TokenKind::Semicolon)?;

    Ok(parser.builder().return_stmt(arg))
}

pub fn parse_class_decl<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    parser.consume(TokenKind::Class)?;

    let id = parse_identifier(parser)?;

    let superclass = if parser.current_token_kind() == TokenKind::Extends {
        parser.consume(TokenKind::Extends)?;
        Some(parse_identifier(parser)?)
    } else {
        None
    };

    let body = parse_block_stmt(parser)?;

    Ok(parser.builder().class_decl(id, superclass, body))
}

/// `'(' SeqExpr ')'`, the condition of `if`, `while` and `do ... while`.
fn parse_paren_condition<T: TokenSource>(parser: &mut Parser<T>) -> Result<Node, Error> {
    parser.consume(TokenKind::OpenParen)?;
    let cond = parse_seq_expr(parser)?;
    parser.consume(TokenKind::CloseParen)?;

    Ok(cond)
}

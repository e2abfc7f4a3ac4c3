use std::collections::HashMap;

use crate::{ast::ast::Node, errors::errors::Error, lexer::{lexer::TokenSource, tokens::TokenKind}};

use super::{parser::Parser, stmt::*};

pub type StmtHandler<T> = fn(&mut Parser<T>) -> Result<Node, Error>;
/// One level of the expression precedence chain.
pub type ExprHandler<T> = fn(&mut Parser<T>) -> Result<Node, Error>;

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup<T> = HashMap<TokenKind, StmtHandler<T>>;

pub fn create_token_lookups<T: TokenSource>(parser: &mut Parser<T>) {
    parser.stmt(TokenKind::Semicolon, parse_empty_stmt);
    parser.stmt(TokenKind::OpenCurly, parse_block_stmt);
    parser.stmt(TokenKind::Let, parse_var_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::Def, parse_func_decl);
    parser.stmt(TokenKind::Class, parse_class_decl);
    parser.stmt(TokenKind::Return, parse_return_stmt);

    // Iteration
    parser.stmt(TokenKind::While, parse_iteration_stmt);
    parser.stmt(TokenKind::Do, parse_iteration_stmt);
    parser.stmt(TokenKind::For, parse_iteration_stmt);
}

pub fn is_literal(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Number
            | TokenKind::String
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Null
    )
}

pub fn is_assign_op(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::SimpleAssign | TokenKind::ComplexAssign)
}

pub fn is_unary_op(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::AdditiveOp | TokenKind::Not)
}

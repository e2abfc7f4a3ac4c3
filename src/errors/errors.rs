use std::fmt::Display;

use thiserror::Error;

use crate::{ast::ast::Node, lexer::tokens::TokenKind, Position};

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} (at byte {})", .position.0)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::LexicalError { .. } => "LexicalError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::UnknownLiteral { .. } => "UnknownLiteral",
            ErrorImpl::UnknownBinaryOp { .. } => "UnknownBinaryOp",
            ErrorImpl::UnknownLogicalOp { .. } => "UnknownLogicalOp",
            ErrorImpl::UnknownUnaryOp { .. } => "UnknownUnaryOp",
            ErrorImpl::UnknownAssignOp { .. } => "UnknownAssignOp",
            ErrorImpl::InvalidLvalue { .. } => "InvalidLvalue",
            ErrorImpl::InvalidNumber { .. } => "InvalidNumber",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::LexicalError { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken {
                actual,
                value,
                expected,
            } => {
                if *expected == TokenKind::Semicolon {
                    ErrorTip::Suggestion(format!(
                        "Unexpected token: `{}`, did you miss a semicolon?",
                        value
                    ))
                } else {
                    ErrorTip::Suggestion(format!(
                        "Expected `{}`, found {} `{}`",
                        expected, actual, value
                    ))
                }
            }
            ErrorImpl::UnexpectedEndOfInput { expected } => ErrorTip::Suggestion(format!(
                "Input ended while `{}` was still expected",
                expected
            )),
            ErrorImpl::UnknownLiteral { kind, .. } => ErrorTip::Suggestion(format!(
                "An expression cannot start with {}",
                kind
            )),
            ErrorImpl::UnknownUnaryOp { op } => ErrorTip::Suggestion(format!(
                "`{}` is not a prefix operator, only `!` and `-` are",
                op
            )),
            ErrorImpl::UnknownBinaryOp { .. }
            | ErrorImpl::UnknownLogicalOp { .. }
            | ErrorImpl::UnknownAssignOp { .. } => ErrorTip::None,
            ErrorImpl::InvalidLvalue { .. } => ErrorTip::Suggestion(String::from(
                "Only identifiers and member expressions can be assigned to",
            )),
            ErrorImpl::InvalidNumber { value } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                value
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unexpected input: {remaining:?}")]
    LexicalError { remaining: String },
    #[error("unexpected token {actual}({value:?}), expected {expected}")]
    UnexpectedToken {
        actual: TokenKind,
        value: String,
        expected: TokenKind,
    },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: TokenKind },
    #[error("unknown literal type {kind}: {value:?}")]
    UnknownLiteral { kind: TokenKind, value: String },
    #[error("unknown binary operator: {op:?}")]
    UnknownBinaryOp { op: String },
    #[error("unknown logical operator: {op:?}")]
    UnknownLogicalOp { op: String },
    #[error("unknown unary operator: {op:?}")]
    UnknownUnaryOp { op: String },
    #[error("unknown assign operator: {op:?}")]
    UnknownAssignOp { op: String },
    #[error("invalid lvalue in assignment: {}", .node.get_type_name())]
    InvalidLvalue { node: Box<Node> },
    #[error("error parsing number: {value:?}")]
    InvalidNumber { value: String },
}

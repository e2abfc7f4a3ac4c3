//! Parser implementation for building the syntax tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! The parser keeps exactly one token of lookahead and pulls the next token
//! from its `TokenSource` only when the current one is consumed.
//!
//! Statements are dispatched through a lookup table keyed by the lookahead
//! kind, expressions go through the precedence chain in `expr`.

use std::collections::HashMap;

use log::debug;

use crate::{
    ast::{ast::Node, builder::Builder},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::{Lexer, TokenSource},
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{create_token_lookups, StmtHandler, StmtLookup},
    stmt::{parse_stmt, parse_stmt_list},
};

/// The main parser structure that maintains parsing state.
pub struct Parser<T: TokenSource> {
    /// Where tokens come from
    tokens: T,
    /// The single token fetched but not yet consumed
    lookahead: Token,
    /// Node constructors
    builder: Builder,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup<T>,
}

impl<T: TokenSource> Parser<T> {
    /// Creates a new Parser and fetches the first lookahead token.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Source of tokens, usually a `Lexer`
    ///
    /// # Returns
    ///
    /// The parser, or the lexical error hit while reading the first token.
    pub fn new(mut tokens: T) -> Result<Self, Error> {
        let lookahead = tokens.next_token()?;

        let mut parser = Parser {
            tokens,
            lookahead,
            builder: Builder,
            stmt_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        Ok(parser)
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.lookahead
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.lookahead.kind
    }

    /// Consumes the current token if it has the expected kind.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    ///
    /// # Returns
    ///
    /// The consumed token. Fails with `UnexpectedEndOfInput` when the input
    /// is exhausted, `UnexpectedToken` on any other mismatch, or with the
    /// lexer's error while fetching the next lookahead.
    pub fn consume(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let kind = self.current_token_kind();

        if kind == TokenKind::EOF && expected_kind != TokenKind::EOF {
            return Err(Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    expected: expected_kind,
                },
                self.get_position(),
            ));
        }

        if kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    actual: kind,
                    value: self.lookahead.value.clone(),
                    expected: expected_kind,
                },
                self.get_position(),
            ));
        }

        let next = self.tokens.next_token()?;
        Ok(std::mem::replace(&mut self.lookahead, next))
    }

    /// Consumes whatever the current token is.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let kind = self.current_token_kind();
        self.consume(kind)
    }

    pub fn builder(&self) -> Builder {
        self.builder
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup<T> {
        &self.stmt_lookup
    }

    /// Registers a statement handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind that starts the statement
    /// * `stmt_fn` - The handler function for this statement type
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler<T>) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.lookahead.span.start
    }
}

/// Parses a whole program from any token source.
///
/// A program is one or more statements followed by the end of input. The
/// first error aborts the parse and nothing of the tree is returned.
pub fn parse_tokens<T: TokenSource>(tokens: T) -> Result<Node, Error> {
    let mut parser = Parser::new(tokens)?;

    let mut body = vec![parse_stmt(&mut parser)?];
    body.extend(parse_stmt_list(&mut parser, TokenKind::EOF)?);

    debug!("parsed program with {} statements", body.len());
    Ok(parser.builder().program(body))
}

/// Parses source text into a `Program` node.
///
/// This is the main entry point for parsing: it wires a `Lexer` over the
/// source to a parser and runs the program production.
pub fn parse(source: &str) -> Result<Node, Error> {
    debug!("parsing {} bytes of source", source.len());
    parse_tokens(Lexer::new(source))
}

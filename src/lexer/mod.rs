//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that turns source code into
//! tokens for the parser. It handles:
//!
//! - An ordered, first-match rule table built from regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking for error reporting
//! - Skipping of whitespace and comments

pub mod lexer;
pub mod rules;
pub mod tokens;

#[cfg(test)]
mod tests;

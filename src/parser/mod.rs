//! Parser module for building the syntax tree.
//!
//! This module contains the LL(1) recursive-descent parser that turns the
//! token stream into a tree of `Node`s. It handles:
//!
//! - Statement parsing through a lookup table keyed by the lookahead token
//! - Expression parsing through a chain of precedence levels, each one
//!   delegating its operands to the next tighter level
//! - Member access, calls, `new` and `super` chains
//!
//! The first error stops the parse; there is no recovery.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

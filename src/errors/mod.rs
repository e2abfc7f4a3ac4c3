//! Error types and error handling for the front end.
//!
//! This module defines the errors the lexer and the parser can produce.
//! It includes:
//!
//! - Error structures with source position information
//! - One variant per lexical or syntax failure
//! - Error names and suggestions used by the command line diagnostics

pub mod errors;

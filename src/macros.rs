//! Utility macros for the front end.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RULE!` - Creates a lexical rule anchored at the start of the input
//! - `MK_OPERATOR!` - Declares an operator enum with its string tables
//!
//! These macros reduce boilerplate in the lexer and the node model.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a lexical rule for the given token kind.
///
/// The pattern is anchored with `^`, so the rule only ever matches at the
/// lexer's cursor. Patterns are compile-time literals, a bad one is a bug.
///
/// # Example
///
/// ```ignore
/// MK_RULE!(TokenKind::Semicolon, ";")
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($kind:expr, $pattern:literal) => {
        Rule {
            kind: $kind,
            regex: Regex::new(concat!("^", $pattern)).expect(concat!("invalid lexical rule: ", $pattern)),
        }
    };
}

/// Declares an operator enumeration together with its two lookup tables.
///
/// Every variant is paired with its canonical symbol. The generated type gets:
///
/// * `as_str()` - enum to symbol, indexed into a static array
/// * `from_symbol()` - symbol to enum through a static map, `None` if unknown
/// * `Display` and `Serialize` implementations that emit the symbol
///
/// # Example
///
/// ```ignore
/// MK_OPERATOR!(UnaryOp, UNARY_OP_LOOKUP {
///     Not => "!",
///     Neg => "-",
/// });
/// ```
#[macro_export]
macro_rules! MK_OPERATOR {
    ($(#[$meta:meta])* $name:ident, $lookup:ident { $($variant:ident => $symbol:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every operator, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            const SYMBOLS: &'static [&'static str] = &[$($symbol),+];

            pub fn as_str(&self) -> &'static str {
                Self::SYMBOLS[*self as usize]
            }

            pub fn from_symbol(symbol: &str) -> Option<$name> {
                $lookup.get(symbol).copied()
            }
        }

        lazy_static::lazy_static! {
            static ref $lookup: std::collections::HashMap<&'static str, $name> =
                $name::ALL.iter().map(|op| (op.as_str(), *op)).collect();
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}
